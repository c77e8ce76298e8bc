//! Resource descriptor model for manifest entries.

use serde::{Deserialize, Serialize};

/// MIME type assumed when a manifest entry does not declare one.
pub const DEFAULT_MIME_TYPE: &str = "text/markdown";

fn default_mime_type() -> String {
    DEFAULT_MIME_TYPE.into()
}

/// Metadata record identifying one servable resource.
///
/// `category` and `content_key` are internal addressing fields: together
/// they name the content unit behind the resource and are never exposed
/// in protocol listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ResourceDescriptor {
    /// Stable, globally unique resource URI.
    pub uri: String,
    /// Advisory content type of the payload.
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
    /// Human-readable display name.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Group the resource belongs to; also locates its content.
    pub category: String,
    /// Logical name of the content unit within its category.
    pub content_key: String,
}

impl ResourceDescriptor {
    /// Construct a descriptor with the default MIME type and no description.
    #[must_use]
    pub fn new(
        uri: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        content_key: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            mime_type: default_mime_type(),
            name: name.into(),
            description: String::new(),
            category: category.into(),
            content_key: content_key.into(),
        }
    }

    /// Replace the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replace the MIME type.
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }
}
