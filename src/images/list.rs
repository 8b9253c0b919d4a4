// ABOUTME: Listing of locally stored images through a runtime connector.
// ABOUTME: Backs `envd images list`, the command users are pointed at to find names.

use crate::runtime::{ImageError, ImageOps, ImageSummary, RuntimeConnector, RuntimeError};
use snafu::{ResultExt, Snafu};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ListImagesError {
    #[snafu(display("{source}"))]
    DriverInit { source: RuntimeError },

    #[snafu(display("list images failed: {source}"))]
    List { source: ImageError },
}

/// List local images, restricted to `name` (any tag) when given.
///
/// Results are sorted by their first reference so output is stable.
pub async fn list_images<C>(
    connector: &C,
    name: Option<&str>,
) -> Result<Vec<ImageSummary>, ListImagesError>
where
    C: RuntimeConnector,
{
    let name = name.filter(|n| !n.is_empty());
    let runtime = connector.connect().await.context(DriverInitSnafu)?;

    let mut images = runtime.list_images(name).await.context(ListSnafu)?;
    images.sort_by(|a, b| a.repo_tags.first().cmp(&b.repo_tags.first()));

    tracing::debug!("found {} image(s)", images.len());
    Ok(images)
}
