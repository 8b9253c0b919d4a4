// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal, quiet (CI), and JSON output modes.

use crate::runtime::ImageSummary;
use serde::Serialize;
use std::io::{self, Write};
use std::time::Instant;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly output
    Normal,
    /// Minimal output for CI (only final result)
    Quiet,
    /// JSON lines for scripting
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    /// Start timing an operation.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get elapsed time since timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    /// Print a success message with optional timing.
    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Normal => {
                let elapsed = self.elapsed_secs();
                if elapsed > 0.0 {
                    println!("{message} ({:.1}s)", elapsed);
                } else {
                    println!("{message}");
                }
            }
            OutputMode::Quiet => {
                // Print only the essential result
                println!("{message}");
            }
            OutputMode::Json => self.emit_event("success", message, false),
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                eprintln!("Error: {message}");
            }
            OutputMode::Json => self.emit_event("error", message, true),
        }
    }

    /// Print a list of images.
    ///
    /// A closed stdout (e.g. piping into `head`) ends output quietly; any
    /// other write failure is returned.
    pub fn images(&self, images: &[ImageSummary]) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        ignore_broken_pipe(write_images(&mut out, self.mode, images))
    }

    fn emit_event(&self, event: &str, message: &str, to_stderr: bool) {
        let event = JsonEvent {
            event,
            message,
            duration_secs: if self.start_time.is_some() {
                Some(self.elapsed_secs())
            } else {
                None
            },
        };
        if let Ok(json) = serde_json::to_string(&event) {
            if to_stderr {
                eprintln!("{json}");
            } else {
                println!("{json}");
            }
        }
    }
}

/// Render `images` for `mode` into `out`.
pub fn write_images(
    out: &mut impl Write,
    mode: OutputMode,
    images: &[ImageSummary],
) -> io::Result<()> {
    match mode {
        OutputMode::Json => {
            for image in images {
                let line = serde_json::to_string(image).map_err(io::Error::other)?;
                writeln!(out, "{line}")?;
            }
        }
        OutputMode::Quiet => {
            for image in images {
                for tag in &image.repo_tags {
                    writeln!(out, "{tag}")?;
                }
            }
        }
        OutputMode::Normal => {
            if images.is_empty() {
                writeln!(out, "No images found")?;
                return Ok(());
            }
            writeln!(out, "{:<48} {:<14} {:>10}", "REFERENCE", "IMAGE ID", "SIZE")?;
            for image in images {
                let reference = image
                    .repo_tags
                    .first()
                    .map(String::as_str)
                    .unwrap_or("<none>");
                writeln!(
                    out,
                    "{:<48} {:<14} {:>10}",
                    reference,
                    short_id(&image.id),
                    human_size(image.size)
                )?;
            }
        }
    }
    Ok(())
}

fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn short_id(id: &str) -> &str {
    let id = id.strip_prefix("sha256:").unwrap_or(id);
    id.get(..12).unwrap_or(id)
}

fn human_size(bytes: i64) -> String {
    const UNITS: [&str; 4] = ["B", "kB", "MB", "GB"];
    let mut size = bytes.max(0) as f64;
    let mut unit = 0;
    while size >= 1000.0 && unit < UNITS.len() - 1 {
        size /= 1000.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{}{}", bytes.max(0), UNITS[0])
    } else {
        format!("{:.1}{}", size, UNITS[unit])
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}
