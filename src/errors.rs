//! Error types shared across the application.

use std::fmt::{Display, Formatter};

/// Shared application result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error enumeration covering all registry failure modes.
#[derive(Debug)]
pub enum AppError {
    /// Configuration parsing or validation failure.
    Config(String),
    /// Requested resource URI or prompt name does not exist.
    NotFound(String),
    /// A manifest entry references content that cannot be retrieved.
    Load {
        /// Category of the content unit.
        category: String,
        /// Logical content key within the category.
        content_key: String,
        /// Underlying cause reported by the content source.
        cause: String,
    },
    /// Two manifest entries share the same URI.
    DuplicateUri(String),
    /// Two prompt descriptors share the same name.
    DuplicatePrompt(String),
    /// MCP protocol or transport failure.
    Mcp(String),
    /// File-system or I/O operation failure.
    Io(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::NotFound(msg) => write!(f, "not found: {msg}"),
            Self::Load {
                category,
                content_key,
                cause,
            } => write!(f, "load: {category}/{content_key}: {cause}"),
            Self::DuplicateUri(uri) => write!(f, "duplicate uri: {uri}"),
            Self::DuplicatePrompt(name) => write!(f, "duplicate prompt: {name}"),
            Self::Mcp(msg) => write!(f, "mcp: {msg}"),
            Self::Io(msg) => write!(f, "io: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("invalid config: {err}"))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
