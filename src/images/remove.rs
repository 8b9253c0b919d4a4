// ABOUTME: Removal of one tagged image through a runtime connector.
// ABOUTME: Validates the reference before any runtime is contacted.

use crate::runtime::{ImageError, ImageOps, RuntimeConnector, RuntimeError};
use crate::types::{ImageRef, ImageRefError};
use snafu::{ResultExt, Snafu};

/// Failure modes of [`remove_image`].
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RemoveImageError {
    /// Input was rejected before touching the runtime.
    #[snafu(display("{source}"))]
    Validation { source: ImageRefError },

    /// The runtime handle could not be acquired.
    #[snafu(display("{source}"))]
    DriverInit { source: RuntimeError },

    /// The runtime refused or failed the removal.
    #[snafu(display("remove image {reference} failed: {source}"))]
    Removal {
        reference: String,
        source: ImageError,
    },
}

/// Confirmation of a completed removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedImage {
    reference: ImageRef,
}

impl RemovedImage {
    pub fn reference(&self) -> &ImageRef {
        &self.reference
    }

    /// Human-readable confirmation line.
    pub fn message(&self) -> String {
        format!("image({}) has removed", self.reference)
    }
}

/// Remove `name:tag` from the runtime's image store.
///
/// An empty tag means [`crate::types::DEFAULT_TAG`]. The connector is only
/// asked for a handle once the reference is valid, and the runtime sees
/// exactly one remove request. Whatever the runtime reports, including a
/// missing image, is returned as [`RemoveImageError::Removal`] without retry.
pub async fn remove_image<C>(
    connector: &C,
    name: &str,
    tag: Option<&str>,
) -> Result<RemovedImage, RemoveImageError>
where
    C: RuntimeConnector,
{
    let reference = ImageRef::new(name, tag).context(ValidationSnafu)?;

    let runtime = connector.connect().await.context(DriverInitSnafu)?;

    runtime
        .remove_image(&reference)
        .await
        .context(RemovalSnafu {
            reference: reference.to_string(),
        })?;

    tracing::info!("image({}) has removed", reference);

    Ok(RemovedImage { reference })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removal_error_names_reference_and_cause() {
        let err = RemoveImageError::Removal {
            reference: "myimg:v2".to_string(),
            source: ImageError::Runtime("not found".to_string()),
        };
        assert_eq!(err.to_string(), "remove image myimg:v2 failed: not found");
    }

    #[test]
    fn confirmation_mentions_reference() {
        let removed = RemovedImage {
            reference: ImageRef::new("myimg", None).unwrap(),
        };
        assert_eq!(removed.message(), "image(myimg:dev) has removed");
    }
}
