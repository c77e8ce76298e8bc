#![forbid(unsafe_code)]

//! `pattern-registry-ctl`: offline inspector for a registry configuration.
//!
//! Runs the same list/read/get operations the MCP server answers, without
//! a client, and prints the protocol envelopes as JSON.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use pattern_registry::models::prompt::PromptArgs;
use pattern_registry::{AppError, Registry, RegistryConfig, Result};

#[derive(Debug, Parser)]
#[command(
    name = "pattern-registry-ctl",
    about = "Inspect a pattern-registry configuration",
    version,
    long_about = None
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every resource in manifest order.
    Resources,

    /// Read the content of one resource.
    Read {
        /// Resource URI.
        uri: String,
    },

    /// List every prompt with its arguments.
    Prompts,

    /// Render one prompt.
    Prompt {
        /// Prompt name.
        name: String,
        /// Argument as `name=value`; repeatable.
        #[arg(long = "arg", value_parser = parse_key_val)]
        args: Vec<(String, String)>,
    },

    /// Check that every manifest entry resolves to content.
    Verify,
}

/// Parse a `name=value` pair.
fn parse_key_val(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))
}

fn main() {
    let args = Cli::parse();

    let outcome = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))
        .and_then(|runtime| runtime.block_on(run(args)));

    if let Err(err) = outcome {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run(args: Cli) -> Result<()> {
    let config = RegistryConfig::load_from_path(&args.config)?;
    let registry = Registry::from_config(&config)?;

    match args.command {
        Command::Resources => print_json(&registry.list_resources()),
        Command::Read { uri } => print_json(&registry.read_resource(&uri).await?),
        Command::Prompts => print_json(&registry.list_prompts()),
        Command::Prompt { name, args } => {
            let args: PromptArgs = args.into_iter().collect();
            print_json(&registry.get_prompt(&name, &args)?)
        }
        Command::Verify => {
            let verified = registry.verify().await?;
            println!("OK: {verified} resource(s) resolve");
            Ok(())
        }
    }
}

fn print_json(value: &impl Serialize) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| AppError::Io(format!("failed to encode output: {err}")))?;
    println!("{text}");
    Ok(())
}
