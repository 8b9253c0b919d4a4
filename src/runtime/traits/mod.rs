// ABOUTME: Composable capability traits for container runtimes.
// ABOUTME: Defines ImageOps and RuntimeHealth.

mod health;
mod image;
mod shared_types;

pub use health::{ConnectionError, RuntimeHealth};
pub use image::{ImageError, ImageOps};
pub use shared_types::ImageSummary;
