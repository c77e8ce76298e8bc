//! Resource and prompt registry.
//!
//! Maps stable URIs to lazily loaded content units and prompt names to
//! renderers. [`Registry`] is the entry point used by the MCP handler.

pub mod dispatcher;
pub mod loader;
pub mod manifest;
pub mod prompts;
pub mod template;

pub use dispatcher::{LoadReport, Registry};
pub use loader::{ContentLoader, ContentSource, DirectorySource, StaticSource};
pub use manifest::ManifestStore;
pub use prompts::PromptTable;
pub use template::PromptTemplate;
