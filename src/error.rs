// ABOUTME: Application-wide error types for envd image commands.
// ABOUTME: Uses thiserror to wrap the per-command error enums.

use crate::images::{ListImagesError, RemoveImageError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    RemoveImage(#[from] RemoveImageError),

    #[error(transparent)]
    ListImages(#[from] ListImagesError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
