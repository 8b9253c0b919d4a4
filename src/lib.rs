// ABOUTME: Library root for envd image management - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod error;
pub mod images;
pub mod output;
pub mod runtime;
pub mod types;
