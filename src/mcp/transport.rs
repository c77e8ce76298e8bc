//! Stdio transport setup.
//!
//! Wires [`RegistryServer`] to stdin/stdout for direct invocation by MCP
//! clients. Logging must stay on stderr while this transport is active.

use rmcp::service::ServiceExt;
use rmcp::transport::io::stdio;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::handler::RegistryServer;
use crate::{AppError, Result};

/// Serve the MCP server over stdio until the client disconnects or the
/// cancellation token fires.
///
/// # Errors
///
/// Returns `AppError::Mcp` if the transport fails to initialize or the
/// service terminates abnormally.
pub async fn serve_stdio(server: RegistryServer, ct: CancellationToken) -> Result<()> {
    let transport = stdio();

    info!("starting stdio MCP transport");
    let service = server
        .serve_with_ct(transport, ct)
        .await
        .map_err(|err| AppError::Mcp(format!("stdio transport failed: {err}")))?;

    service
        .waiting()
        .await
        .map_err(|err| AppError::Mcp(format!("stdio service error: {err}")))?;

    info!("stdio MCP transport shut down");
    Ok(())
}
