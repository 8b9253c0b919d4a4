// ABOUTME: Runtime type definitions for Docker and Podman.
// ABOUTME: Includes RuntimeType enum, RuntimeInfo struct and env-driven RuntimeConfig.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Environment variable selecting the runtime type.
pub const RUNTIME_ENV: &str = "ENVD_RUNTIME";
/// Environment variable selecting the runtime socket path.
pub const SOCKET_ENV: &str = "ENVD_RUNTIME_SOCKET";

/// The container runtime type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeType {
    Docker,
    Podman,
}

impl std::fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeType::Docker => write!(f, "docker"),
            RuntimeType::Podman => write!(f, "podman"),
        }
    }
}

impl FromStr for RuntimeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "docker" => Ok(RuntimeType::Docker),
            "podman" => Ok(RuntimeType::Podman),
            other => Err(format!(
                "unknown runtime `{}` (expected docker or podman)",
                other
            )),
        }
    }
}

/// Detected runtime information.
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    /// The type of runtime detected.
    pub runtime_type: RuntimeType,
    /// Path to the runtime socket.
    pub socket_path: String,
}

/// Configuration for explicit runtime override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Explicit runtime type (overrides auto-detection).
    pub runtime: Option<RuntimeType>,
    /// Explicit socket path (overrides default).
    pub socket: Option<String>,
}

impl RuntimeConfig {
    /// Read overrides from `ENVD_RUNTIME` and `ENVD_RUNTIME_SOCKET`.
    ///
    /// Unparseable runtime values are ignored with a warning; empty values
    /// count as unset.
    pub fn from_env() -> Self {
        let runtime = std::env::var(RUNTIME_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .and_then(|v| match v.parse() {
                Ok(rt) => Some(rt),
                Err(e) => {
                    tracing::warn!("ignoring {}: {}", RUNTIME_ENV, e);
                    None
                }
            });
        let socket = std::env::var(SOCKET_ENV).ok().filter(|v| !v.is_empty());

        Self { runtime, socket }
    }

    /// Layer `other` on top of `self`; values set in `other` win.
    pub fn merge(self, other: RuntimeConfig) -> Self {
        Self {
            runtime: other.runtime.or(self.runtime),
            socket: other.socket.or(self.socket),
        }
    }
}
