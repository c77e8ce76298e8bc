//! MCP server handler forwarding resource and prompt requests to the registry.

use std::future::Future;
use std::sync::Arc;

use rmcp::handler::server::ServerHandler;
use rmcp::model::{
    GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
    ListResourcesResult, PaginatedRequestParam, ProtocolVersion, ReadResourceRequestParam,
    ReadResourceResult, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::ErrorData;
use serde_json::Value;
use tracing::{error, info_span, Instrument};

use crate::config::RegistryConfig;
use crate::models::prompt::PromptArgs;
use crate::registry::Registry;
use crate::AppError;

/// MCP server exposing a [`Registry`] through `resources/*` and `prompts/*`.
#[derive(Clone)]
pub struct RegistryServer {
    registry: Arc<Registry>,
    name: String,
    version: String,
    instructions: Option<String>,
}

impl RegistryServer {
    /// Create a server for `registry`, advertising the configured identity.
    #[must_use]
    pub fn new(registry: Arc<Registry>, config: &RegistryConfig) -> Self {
        Self {
            registry,
            name: config.server.name.clone(),
            version: config.server_version().to_owned(),
            instructions: config.server.instructions.clone(),
        }
    }

    /// Access the shared registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

/// Convert a `prompts/get` argument object into prompt arguments.
///
/// Strings are taken verbatim, `null` counts as absent, and any other JSON
/// value is stringified.
#[must_use]
pub fn prompt_args(arguments: Option<&serde_json::Map<String, Value>>) -> PromptArgs {
    arguments
        .into_iter()
        .flatten()
        .filter_map(|(name, value)| match value {
            Value::Null => None,
            Value::String(text) => Some((name.clone(), text.clone())),
            other => Some((name.clone(), other.to_string())),
        })
        .collect()
}

/// Map a `resources/read` failure to a protocol error.
#[must_use]
pub fn resource_error(err: &AppError) -> ErrorData {
    match err {
        AppError::NotFound(_) => ErrorData::resource_not_found(err.to_string(), None),
        _ => ErrorData::internal_error(err.to_string(), None),
    }
}

/// Map a `prompts/get` failure to a protocol error.
#[must_use]
pub fn prompt_error(err: &AppError) -> ErrorData {
    match err {
        AppError::NotFound(_) => ErrorData::invalid_params(err.to_string(), None),
        _ => ErrorData::internal_error(err.to_string(), None),
    }
}

impl ServerHandler for RegistryServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: self.name.clone(),
                version: self.version.clone(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: self.instructions.clone(),
        }
    }

    fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListResourcesResult, ErrorData>> + Send + '_ {
        let _span = info_span!("list_resources").entered();
        std::future::ready(Ok(self.registry.list_resources()))
    }

    fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ReadResourceResult, ErrorData>> + Send + '_ {
        let span = info_span!("read_resource", uri = %request.uri);

        async move {
            self.registry
                .read_resource(&request.uri)
                .await
                .map_err(|err| {
                    if matches!(err, AppError::Load { .. }) {
                        error!(%err, "resource content could not be loaded");
                    }
                    resource_error(&err)
                })
        }
        .instrument(span)
    }

    fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListPromptsResult, ErrorData>> + Send + '_ {
        let _span = info_span!("list_prompts").entered();
        std::future::ready(Ok(self.registry.list_prompts()))
    }

    fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<GetPromptResult, ErrorData>> + Send + '_ {
        let _span = info_span!("get_prompt", prompt = %request.name).entered();
        let args = prompt_args(request.arguments.as_ref());

        std::future::ready(
            self.registry
                .get_prompt(&request.name, &args)
                .map_err(|err| prompt_error(&err)),
        )
    }
}
