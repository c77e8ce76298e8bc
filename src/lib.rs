#![forbid(unsafe_code)]

//! Manifest-driven MCP registry serving categorized pattern snippets and
//! parametrized prompt templates by URI.

pub mod config;
pub mod errors;
pub mod mcp;
pub mod models;
pub mod registry;

pub use config::RegistryConfig;
pub use errors::{AppError, Result};
pub use registry::Registry;
