// ABOUTME: Image commands backed by an injected runtime connector.
// ABOUTME: Removal of a single tagged image and listing of local images.

mod list;
mod remove;

pub use list::{ListImagesError, list_images};
pub use remove::{RemoveImageError, RemovedImage, remove_image};
