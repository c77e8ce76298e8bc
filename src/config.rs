//! Registry configuration parsing and validation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::models::prompt::{MessageRole, PromptArgumentSpec, PromptDescriptor};
use crate::models::resource::ResourceDescriptor;
use crate::registry::loader::DEFAULT_EXTENSION;
use crate::registry::template::PromptTemplate;
use crate::{AppError, Result};

/// Server identity advertised during the MCP handshake.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    /// Server name reported to clients.
    #[serde(default = "default_server_name")]
    pub name: String,
    /// Server version; defaults to the crate version when absent.
    #[serde(default)]
    pub version: Option<String>,
    /// Usage instructions surfaced to clients.
    #[serde(default)]
    pub instructions: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            version: None,
            instructions: None,
        }
    }
}

fn default_server_name() -> String {
    "pattern-registry".into()
}

fn default_content_root() -> PathBuf {
    PathBuf::from("content")
}

fn default_content_extension() -> String {
    DEFAULT_EXTENSION.into()
}

fn default_true() -> bool {
    true
}

/// One message of a configured prompt template.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct MessageConfig {
    /// Message author.
    pub role: MessageRole,
    /// Template text with `{{argument}}` placeholders.
    pub text: String,
}

/// A prompt declared in configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct PromptConfig {
    /// Unique prompt name.
    pub name: String,
    /// Description shown in prompt listings.
    #[serde(default)]
    pub description: String,
    /// Template for the rendered description; falls back to `description`.
    #[serde(default)]
    pub description_template: Option<String>,
    /// Declared arguments.
    #[serde(default)]
    pub arguments: Vec<PromptArgumentSpec>,
    /// Message templates in order.
    #[serde(default)]
    pub messages: Vec<MessageConfig>,
}

impl PromptConfig {
    /// Compile this entry into a descriptor backed by a [`PromptTemplate`].
    #[must_use]
    pub fn to_descriptor(&self) -> PromptDescriptor {
        PromptDescriptor::new(
            self.name.clone(),
            self.description.clone(),
            self.arguments.clone(),
            self.template(),
        )
    }

    fn template(&self) -> PromptTemplate {
        let description = self
            .description_template
            .as_deref()
            .unwrap_or(&self.description);
        self.messages.iter().fold(
            PromptTemplate::new(description, self.arguments.clone()),
            |template, message| template.message(message.role, &message.text),
        )
    }
}

/// Registry configuration parsed from a TOML file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct RegistryConfig {
    /// Server identity.
    #[serde(default)]
    pub server: ServerConfig,
    /// Directory holding `{category}/{content_key}.{extension}` files.
    #[serde(default = "default_content_root")]
    pub content_root: PathBuf,
    /// File extension of content files, without the leading dot.
    #[serde(default = "default_content_extension")]
    pub content_extension: String,
    /// Load every manifest entry at startup to detect dangling references.
    #[serde(default = "default_true")]
    pub verify_content: bool,
    /// Refuse to start when verification finds dangling references.
    #[serde(default)]
    pub strict_content: bool,
    /// Resource manifest in listing order.
    #[serde(default)]
    pub resources: Vec<ResourceDescriptor>,
    /// Prompt templates in listing order.
    #[serde(default)]
    pub prompts: Vec<PromptConfig>,
}

impl RegistryConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// A relative `content_root` is resolved against the directory that
    /// contains the configuration file.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| {
            AppError::Config(format!("failed to read config {}: {err}", path.display()))
        })?;
        let mut config = Self::from_toml_str(&raw)?;
        if config.content_root.is_relative() {
            if let Some(base) = path.parent() {
                config.content_root = base.join(&config.content_root);
            }
        }
        Ok(config)
    }

    /// Parse configuration from a TOML string and validate it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Server version to advertise.
    #[must_use]
    pub fn server_version(&self) -> &str {
        self.server
            .version
            .as_deref()
            .unwrap_or(env!("CARGO_PKG_VERSION"))
    }

    fn validate(&mut self) -> Result<()> {
        if self.server.name.trim().is_empty() {
            return Err(AppError::Config("server.name must not be empty".into()));
        }

        self.content_extension = self.content_extension.trim_start_matches('.').to_owned();
        if self.content_extension.is_empty() {
            return Err(AppError::Config(
                "content_extension must not be empty".into(),
            ));
        }

        for prompt in &self.prompts {
            if prompt.messages.is_empty() {
                return Err(AppError::Config(format!(
                    "prompt '{}' must declare at least one message",
                    prompt.name
                )));
            }
            let undeclared = prompt.template().undeclared_placeholders();
            if !undeclared.is_empty() {
                warn!(
                    prompt = %prompt.name,
                    placeholders = ?undeclared,
                    "prompt template references undeclared arguments; they render verbatim"
                );
            }
        }

        Ok(())
    }
}
