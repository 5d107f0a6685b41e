//! CLI entrypoint for octi-lookup
//!
//! Wires the layers together: loads the connection configuration,
//! builds the tool registry, and dispatches one lookup per invocation.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use octi_domain::ToolCall;
use octi_infrastructure::{ConfigLoader, ToolRegistry};
use serde_json::{Value, json};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "octi-lookup")]
#[command(about = "Look up threat intelligence in an OpenCTI instance", long_about = None)]
struct Cli {
    /// Path to a config file (overrides discovered configs)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Skip config file discovery, use defaults and environment only
    #[arg(long, global = true)]
    no_config: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a cyber observable by value or id
    Observable {
        /// Observable value or identifier (IP, hash, URL, STIX id...)
        value: String,
    },
    /// Look up an adversary by name or alias across all adversary kinds
    Adversary {
        /// Adversary name or alias
        name: String,
    },
    /// Search reports by publication window and free text, newest first
    Reports {
        /// Only reports published on or after this date
        #[arg(long)]
        earliest: Option<String>,
        /// Only reports published on or before this date
        #[arg(long)]
        latest: Option<String>,
        /// Free-text search term
        #[arg(long)]
        search: Option<String>,
    },
    /// Look up indicators by id or by pattern content
    Indicators {
        /// Indicator identifier; overrides pattern search
        #[arg(long)]
        id: Option<String>,
        /// Substrings that must all appear in the pattern
        #[arg(long = "pattern")]
        patterns: Vec<String>,
        /// Restrict matches to these pattern languages
        #[arg(long = "pattern-type")]
        pattern_types: Vec<String>,
    },
    /// Print the tool catalog as JSON
    Tools,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    let registry = ToolRegistry::new(file_config.to_lookup_config());

    let call = match cli.command {
        Command::Tools => {
            println!("{}", serde_json::to_string_pretty(registry.list_tools())?);
            return Ok(());
        }
        Command::Observable { value } => {
            ToolCall::new("opencti_observable_lookup").with_arg("observable", value)
        }
        Command::Adversary { name } => {
            ToolCall::new("opencti_adversary_lookup").with_arg("name", name)
        }
        Command::Reports {
            earliest,
            latest,
            search,
        } => {
            let mut call = ToolCall::new("opencti_reports_lookup");
            if let Some(earliest) = earliest {
                call = call.with_arg("earliest", earliest);
            }
            if let Some(latest) = latest {
                call = call.with_arg("latest", latest);
            }
            if let Some(search) = search {
                call = call.with_arg("search", search);
            }
            call
        }
        Command::Indicators {
            id,
            patterns,
            pattern_types,
        } => {
            let mut call = ToolCall::new("opencti_indicator_lookup");
            if let Some(id) = id {
                call = call.with_arg("indicator_id", id);
            }
            if !patterns.is_empty() {
                call = call.with_arg("pattern_search_strings", json!(patterns));
            }
            if !pattern_types.is_empty() {
                call = call.with_arg("pattern_types", json!(pattern_types));
            }
            call
        }
    };

    info!(tool = %call.tool_name, "Running lookup");
    let result = registry.dispatch(&call).await;

    match (result.output(), result.error()) {
        (Some(output), _) if result.is_success() => {
            println!("{}", serde_json::to_string_pretty(output)?);
            Ok(())
        }
        (_, Some(error)) => bail!("{}", error),
        _ => {
            // A success always carries an output, but don't panic on a
            // malformed result either.
            println!("{}", Value::Null);
            Ok(())
        }
    }
}
