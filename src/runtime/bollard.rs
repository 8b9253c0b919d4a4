// ABOUTME: Bollard-based container runtime implementation.
// ABOUTME: Supports both Docker and Podman via Docker-compatible API.

use crate::runtime::traits::{ConnectionError, ImageError, ImageOps, ImageSummary, RuntimeHealth};
use crate::runtime::types::RuntimeType;
use crate::types::ImageRef;
use async_trait::async_trait;
use bollard::Docker;
use bollard::query_parameters::{ListImagesOptions, RemoveImageOptions};
use std::collections::HashMap;

/// Seconds before a request to the runtime socket times out.
const CLIENT_TIMEOUT_SECS: u64 = 120;

// =============================================================================
// Error Mapping Helpers
// =============================================================================

/// Keep the engine's own message; the caller adds the reference.
fn map_image_remove_error(e: bollard::errors::Error) -> ImageError {
    match e {
        bollard::errors::Error::DockerResponseServerError {
            status_code: 404,
            message,
        } => ImageError::NotFound(message),
        bollard::errors::Error::DockerResponseServerError {
            status_code: 409,
            message,
        } => ImageError::InUse(message),
        bollard::errors::Error::DockerResponseServerError { message, .. } => {
            ImageError::Runtime(message)
        }
        other => ImageError::Runtime(other.to_string()),
    }
}

fn map_image_list_error(e: bollard::errors::Error) -> ImageError {
    ImageError::Runtime(format!("failed to list images: {}", e))
}

// =============================================================================
// BollardRuntime
// =============================================================================

/// Container runtime implementation using bollard.
///
/// Supports both Docker and Podman via Docker-compatible API.
pub struct BollardRuntime {
    client: Docker,
    runtime_type: RuntimeType,
}

impl BollardRuntime {
    /// Create a new BollardRuntime from a Docker client.
    pub fn new(client: Docker, runtime_type: RuntimeType) -> Self {
        Self {
            client,
            runtime_type,
        }
    }

    /// Connect to a container runtime using detected runtime info.
    ///
    /// Use with `detect_local()` or `resolve_runtime()` to connect to a runtime.
    /// The socket is not contacted until the first request; call
    /// [`RuntimeHealth::ping`] to verify reachability.
    pub fn connect(info: &super::types::RuntimeInfo) -> Result<Self, ConnectionError> {
        let client = Docker::connect_with_unix(
            &info.socket_path,
            CLIENT_TIMEOUT_SECS,
            bollard::API_DEFAULT_VERSION,
        )
        .map_err(|e| ConnectionError(e.to_string()))?;
        Ok(Self::new(client, info.runtime_type))
    }
}

#[async_trait]
impl RuntimeHealth for BollardRuntime {
    async fn ping(&self) -> Result<(), ConnectionError> {
        self.client
            .ping()
            .await
            .map_err(|e| ConnectionError(e.to_string()))?;
        tracing::debug!("{} runtime answered ping", self.runtime_type);
        Ok(())
    }
}

#[async_trait]
impl ImageOps for BollardRuntime {
    async fn remove_image(&self, reference: &ImageRef) -> Result<(), ImageError> {
        let image_name = reference.to_string();

        let opts = RemoveImageOptions {
            force: false,
            ..Default::default()
        };

        let deleted = self
            .client
            .remove_image(&image_name, Some(opts), None)
            .await
            .map_err(map_image_remove_error)?;

        tracing::debug!(
            "runtime reported {} untagged/deleted entries for {}",
            deleted.len(),
            image_name
        );

        Ok(())
    }

    async fn list_images(&self, name: Option<&str>) -> Result<Vec<ImageSummary>, ImageError> {
        let mut filter_map: HashMap<String, Vec<String>> = HashMap::new();

        // Match both the bare name and any tag of it
        if let Some(name) = name {
            filter_map.insert(
                "reference".to_string(),
                vec![name.to_string(), format!("{}:*", name)],
            );
        }

        let opts = ListImagesOptions {
            all: false,
            filters: Some(filter_map),
            ..Default::default()
        };

        let images = self
            .client
            .list_images(Some(opts))
            .await
            .map_err(map_image_list_error)?;

        Ok(images
            .into_iter()
            .map(|img| ImageSummary {
                id: img.id,
                repo_tags: img.repo_tags,
                size: img.size,
                created: img.created,
            })
            .collect())
    }
}
