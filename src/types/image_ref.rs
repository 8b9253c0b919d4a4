// ABOUTME: Validated image reference composed of a name and a tag.
// ABOUTME: Empty tags fall back to the `dev` tag used for envd images.

use std::fmt;
use thiserror::Error;

/// Tag used when none is given.
pub const DEFAULT_TAG: &str = "dev";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageRefError {
    #[error("image name is required, find images by `envd images list`")]
    EmptyName,
}

/// An image reference in its canonical `name:tag` form.
///
/// The name is kept exactly as given; no trimming or case folding happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    name: String,
    tag: String,
}

impl ImageRef {
    /// Build a reference, substituting [`DEFAULT_TAG`] for a missing or empty tag.
    pub fn new(name: &str, tag: Option<&str>) -> Result<Self, ImageRefError> {
        if name.is_empty() {
            return Err(ImageRefError::EmptyName);
        }

        let tag = match tag {
            Some(tag) if !tag.is_empty() => tag.to_string(),
            _ => {
                tracing::debug!("tag not specified, using default tag: `{}`", DEFAULT_TAG);
                DEFAULT_TAG.to_string()
            }
        };

        Ok(Self {
            name: name.to_string(),
            tag,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.tag)
    }
}
