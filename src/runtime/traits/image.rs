// ABOUTME: Image operations trait for container runtimes.
// ABOUTME: List and remove locally stored container images.

use super::shared_types::ImageSummary;
use crate::types::ImageRef;
use async_trait::async_trait;

/// Image operations: list, remove.
#[async_trait]
pub trait ImageOps: Send + Sync {
    /// Remove an image by its canonical reference.
    async fn remove_image(&self, reference: &ImageRef) -> Result<(), ImageError>;

    /// List local images, optionally restricted to one image name.
    async fn list_images(&self, name: Option<&str>) -> Result<Vec<ImageSummary>, ImageError>;
}

/// Errors from image operations.
///
/// Each variant carries the runtime's own message and displays it verbatim,
/// so callers adding context do not stack a second description on top.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InUse(String),

    #[error("{0}")]
    Runtime(String),
}
