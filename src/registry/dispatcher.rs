//! Registry façade dispatching the four list/get operations.

use std::sync::Arc;

use rmcp::model::{GetPromptResult, ListPromptsResult, ListResourcesResult, ReadResourceResult};
use tracing::{debug, info, warn};

use super::loader::{ContentLoader, ContentSource, DirectorySource};
use super::manifest::ManifestStore;
use super::prompts::PromptTable;
use crate::config::{PromptConfig, RegistryConfig};
use crate::mcp::response;
use crate::models::prompt::PromptArgs;
use crate::{AppError, Result};

/// Outcome of reifying the whole manifest at once.
///
/// Every entry is attempted; failures are collected rather than aborting
/// the pass.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Successfully loaded `(uri, content)` pairs in manifest order.
    pub loaded: Vec<(String, Arc<str>)>,
    /// One `AppError::Load` per entry that could not be loaded.
    pub failures: Vec<AppError>,
}

impl LoadReport {
    /// Whether every manifest entry loaded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Manifest store, prompt table and content loader behind one entry point.
pub struct Registry {
    manifest: ManifestStore,
    prompts: PromptTable,
    loader: ContentLoader,
}

impl Registry {
    /// Assemble a registry from its parts.
    #[must_use]
    pub fn new(manifest: ManifestStore, prompts: PromptTable, loader: ContentLoader) -> Self {
        Self {
            manifest,
            prompts,
            loader,
        }
    }

    /// Build a registry whose content lives under the configured content root.
    ///
    /// # Errors
    ///
    /// Returns `AppError::DuplicateUri` or `AppError::DuplicatePrompt` if the
    /// configured manifest or prompts are inconsistent.
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        let source = DirectorySource::new(&config.content_root)
            .with_extension(config.content_extension.clone());
        Self::with_source(config, Arc::new(source))
    }

    /// Build a registry from configuration over an explicit content source.
    ///
    /// # Errors
    ///
    /// Returns `AppError::DuplicateUri` or `AppError::DuplicatePrompt` if the
    /// configured manifest or prompts are inconsistent.
    pub fn with_source(config: &RegistryConfig, source: Arc<dyn ContentSource>) -> Result<Self> {
        let manifest = ManifestStore::new(config.resources.clone())?;
        let prompts = PromptTable::new(
            config
                .prompts
                .iter()
                .map(PromptConfig::to_descriptor)
                .collect(),
        )?;
        info!(
            resources = manifest.len(),
            prompts = prompts.len(),
            "registry assembled"
        );
        Ok(Self::new(manifest, prompts, ContentLoader::new(source)))
    }

    /// Resource manifest.
    #[must_use]
    pub fn manifest(&self) -> &ManifestStore {
        &self.manifest
    }

    /// Prompt table.
    #[must_use]
    pub fn prompts(&self) -> &PromptTable {
        &self.prompts
    }

    /// Content loader and its cache.
    #[must_use]
    pub fn loader(&self) -> &ContentLoader {
        &self.loader
    }

    /// List every resource in manifest order.
    #[must_use]
    pub fn list_resources(&self) -> ListResourcesResult {
        debug!(resources = self.manifest.len(), "listing resources");
        response::resource_list(self.manifest.list_all())
    }

    /// Read the content behind a resource URI.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` for an unknown URI and `AppError::Load`
    /// when the manifest entry's content cannot be retrieved.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult> {
        debug!(uri, "reading resource");
        let descriptor = self.manifest.find_by_uri(uri)?;
        let content = self
            .loader
            .load(&descriptor.category, &descriptor.content_key)
            .await?;
        Ok(response::resource_content(
            &descriptor.uri,
            &content,
            &descriptor.mime_type,
        ))
    }

    /// List every prompt's metadata in table order.
    #[must_use]
    pub fn list_prompts(&self) -> ListPromptsResult {
        debug!(prompts = self.prompts.len(), "listing prompts");
        response::prompt_list(self.prompts.list_all())
    }

    /// Render a prompt with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` for an unknown prompt name.
    pub fn get_prompt(&self, name: &str, args: &PromptArgs) -> Result<GetPromptResult> {
        debug!(prompt = name, provided = args.len(), "rendering prompt");
        let rendered = self.prompts.render(name, args)?;
        Ok(response::prompt_response(
            &rendered.description,
            &rendered.messages,
        ))
    }

    /// Load every manifest entry, collecting per-entry failures.
    pub async fn load_all(&self) -> LoadReport {
        let mut report = LoadReport::default();
        for descriptor in self.manifest.list_all() {
            match self
                .loader
                .load(&descriptor.category, &descriptor.content_key)
                .await
            {
                Ok(content) => report.loaded.push((descriptor.uri.clone(), content)),
                Err(err) => {
                    warn!(uri = %descriptor.uri, %err, "manifest entry failed to load");
                    report.failures.push(err);
                }
            }
        }
        report
    }

    /// Check that every manifest entry resolves to content.
    ///
    /// Warms the content cache as a side effect.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` naming every dangling entry.
    pub async fn verify(&self) -> Result<usize> {
        let report = self.load_all().await;
        if report.is_complete() {
            info!(verified = report.loaded.len(), "all manifest entries resolve");
            return Ok(report.loaded.len());
        }

        let details: Vec<String> = report.failures.iter().map(ToString::to_string).collect();
        Err(AppError::Config(format!(
            "{} of {} manifest entries do not resolve: {}",
            report.failures.len(),
            self.manifest.len(),
            details.join("; ")
        )))
    }
}
