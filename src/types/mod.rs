// ABOUTME: Validated domain types.
// ABOUTME: Image references used by every image command.

mod image_ref;

pub use image_ref::{DEFAULT_TAG, ImageRef, ImageRefError};
