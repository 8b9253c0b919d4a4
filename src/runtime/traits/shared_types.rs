// ABOUTME: Shared types used across runtime trait definitions.
// ABOUTME: ImageSummary as reported by image listing.

use serde::Serialize;

/// A locally stored image as reported by the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageSummary {
    /// Image ID (content digest).
    pub id: String,
    /// `name:tag` references pointing at this image.
    pub repo_tags: Vec<String>,
    /// Size in bytes.
    pub size: i64,
    /// Creation time as a Unix timestamp.
    pub created: i64,
}
