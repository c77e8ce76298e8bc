#![forbid(unsafe_code)]

//! `pattern-registry`: MCP content server binary.
//!
//! Loads the registry configuration, optionally verifies that every
//! manifest entry resolves, and serves resources and prompts over stdio.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use pattern_registry::mcp::handler::RegistryServer;
use pattern_registry::mcp::transport;
use pattern_registry::{AppError, Registry, RegistryConfig, Result};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "pattern-registry", about = "MCP pattern and prompt server", version, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long)]
    config: PathBuf,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Override the content root directory from the configuration.
    #[arg(long)]
    content_root: Option<PathBuf>,

    /// Verify that every manifest entry resolves, then exit.
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_format)?;
    info!("pattern-registry server bootstrap");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?
        .block_on(run(args))
}

async fn run(args: Cli) -> Result<()> {
    // ── Load configuration ──────────────────────────────
    let mut config = RegistryConfig::load_from_path(&args.config)?;
    if let Some(root) = args.content_root {
        config.content_root = root;
    }
    info!(
        content_root = %config.content_root.display(),
        "configuration loaded"
    );

    // ── Build registry ──────────────────────────────────
    let registry = Arc::new(Registry::from_config(&config)?);

    if args.check {
        let verified = registry.verify().await?;
        info!(verified, "content check passed");
        return Ok(());
    }

    if config.verify_content {
        match registry.verify().await {
            Ok(_) => {}
            Err(err) if config.strict_content => return Err(err),
            Err(err) => warn!(%err, "serving with dangling manifest entries"),
        }
    }

    // ── Serve over stdio ────────────────────────────────
    let ct = CancellationToken::new();
    let server = RegistryServer::new(Arc::clone(&registry), &config);
    let stdio_ct = ct.clone();
    let mut stdio_handle =
        tokio::spawn(async move { transport::serve_stdio(server, stdio_ct).await });

    info!("MCP server ready");

    let outcome = tokio::select! {
        joined = &mut stdio_handle => joined,
        () = shutdown_signal() => {
            info!("shutdown signal received");
            ct.cancel();
            stdio_handle.await
        }
    };
    outcome.map_err(|err| AppError::Mcp(format!("stdio task failed: {err}")))??;

    info!("pattern-registry shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(err) => {
                warn!(%err, "failed to register SIGTERM handler, using ctrl-c only");
                let _ = ctrl_c.await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(err) = ctrl_c.await {
            tracing::error!(%err, "ctrl-c signal handler failed");
        }
    }
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout carries the MCP stream.
    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
