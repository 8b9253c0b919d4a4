// ABOUTME: Image command implementations.
// ABOUTME: Bridges parsed CLI arguments to the image operations and renders results.

use envd_images::error::Result;
use envd_images::images;
use envd_images::output::Output;
use envd_images::runtime::RuntimeConnector;

/// Remove one image and report the confirmation.
pub async fn remove_image<C: RuntimeConnector>(
    connector: &C,
    image: Option<&str>,
    tag: &str,
    mut output: Output,
) -> Result<()> {
    output.start_timer();

    let removed = images::remove_image(connector, image.unwrap_or_default(), Some(tag)).await?;

    output.success(&removed.message());
    Ok(())
}

/// List local images, optionally only the tags of one name.
pub async fn list_images<C: RuntimeConnector>(
    connector: &C,
    image: Option<&str>,
    output: Output,
) -> Result<()> {
    let found = images::list_images(connector, image).await?;
    output.images(&found)?;
    Ok(())
}
