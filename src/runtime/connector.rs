// ABOUTME: Acquisition of runtime handles for a single operation.
// ABOUTME: RuntimeConnector is the injection seam; LocalConnector talks to a local socket.

use super::bollard::BollardRuntime;
use super::detection::resolve_runtime;
use super::error::RuntimeError;
use super::traits::{ImageOps, RuntimeHealth};
use super::types::RuntimeConfig;
use async_trait::async_trait;

/// Produces a fresh runtime handle each time it is asked.
///
/// The returned handle is owned by the caller and released when dropped.
#[async_trait]
pub trait RuntimeConnector: Send + Sync {
    type Runtime: ImageOps;

    async fn connect(&self) -> Result<Self::Runtime, RuntimeError>;
}

/// Connects to a Docker or Podman socket on this machine.
#[derive(Debug, Clone, Default)]
pub struct LocalConnector {
    config: RuntimeConfig,
}

impl LocalConnector {
    pub fn new(config: RuntimeConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl RuntimeConnector for LocalConnector {
    type Runtime = BollardRuntime;

    async fn connect(&self) -> Result<BollardRuntime, RuntimeError> {
        let info = resolve_runtime(&self.config)?;
        tracing::debug!(
            "connecting to {} at {}",
            info.runtime_type,
            info.socket_path
        );

        let runtime = BollardRuntime::connect(&info)?;
        // connect_with_unix is lazy; surface an unreachable backend here
        runtime.ping().await?;

        Ok(runtime)
    }
}
