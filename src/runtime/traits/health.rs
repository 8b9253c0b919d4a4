// ABOUTME: Reachability check for container runtimes.
// ABOUTME: Used to turn a lazily opened socket into an early connection failure.

use async_trait::async_trait;

#[async_trait]
pub trait RuntimeHealth: Send + Sync {
    /// Round-trip a request to prove the runtime answers.
    async fn ping(&self) -> Result<(), ConnectionError>;
}

/// The runtime socket could not be opened or did not answer.
#[derive(Debug, thiserror::Error)]
#[error("connection failed: {0}")]
pub struct ConnectionError(pub String);
