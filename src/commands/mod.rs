// ABOUTME: Command module aggregator for the envd CLI.
// ABOUTME: Re-exports image command handlers.

mod images;

pub use images::{list_images, remove_image};
