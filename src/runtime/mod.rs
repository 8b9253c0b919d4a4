// ABOUTME: Container runtime access for Docker and Podman.
// ABOUTME: Detection, connection and the capability traits image commands rely on.

mod bollard;
mod connector;
mod detection;
mod error;
pub mod traits;
mod types;

pub use self::bollard::BollardRuntime;
pub use connector::{LocalConnector, RuntimeConnector};
pub use detection::{DetectionError, detect_local, resolve_runtime};
pub use error::RuntimeError;
pub use traits::{ConnectionError, ImageError, ImageOps, ImageSummary, RuntimeHealth};
pub use types::{RUNTIME_ENV, RuntimeConfig, RuntimeInfo, RuntimeType, SOCKET_ENV};
