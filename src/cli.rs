// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines the images subcommands, their arguments and global flags.

use clap::{Args, Parser, Subcommand};
use envd_images::output::OutputMode;
use envd_images::runtime::{RuntimeConfig, RuntimeType};
use envd_images::types::DEFAULT_TAG;

#[derive(Parser)]
#[command(name = "envd")]
#[command(about = "Manage envd development images on Docker and Podman")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print the essential result
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Print results as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Container runtime to use (docker or podman) [env: ENVD_RUNTIME]
    #[arg(long, global = true)]
    pub runtime: Option<RuntimeType>,

    /// Runtime socket path [env: ENVD_RUNTIME_SOCKET]
    #[arg(long, global = true)]
    pub socket: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }

    /// Runtime overrides from flags, layered over the environment.
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig::from_env().merge(RuntimeConfig {
            runtime: self.runtime,
            socket: self.socket.clone(),
        })
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage envd images
    #[command(visible_alias = "image")]
    Images(ImagesArgs),
}

#[derive(Args)]
pub struct ImagesArgs {
    #[command(subcommand)]
    pub command: ImagesCommand,
}

#[derive(Subcommand)]
pub enum ImagesCommand {
    /// Remove an envd image
    #[command(visible_aliases = ["r", "rm"])]
    Remove {
        /// Specify the image name to be removed
        #[arg(short, long)]
        image: Option<String>,

        /// Remove the image with a specific tag
        #[arg(short, long, default_value = DEFAULT_TAG)]
        tag: String,
    },

    /// List envd images
    #[command(visible_alias = "ls")]
    List {
        /// Only show tags of this image name
        #[arg(short, long)]
        image: Option<String>,
    },
}
