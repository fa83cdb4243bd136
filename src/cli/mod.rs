//! CLI module for kvtest
//!
//! Command-line interface definitions and handlers for the testing console.
//!
//! # Commands
//!
//! - `status` - Check store connectivity once
//! - `run` - Run a test (simple, performance, full, or any backend token)
//! - `watch` - Poll connectivity until interrupted
//! - `serve` - Start the web console
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Run the full suite against a remote testing app
//! kvtest run full --api-url http://redis-tester:5000
//!
//! # Serve the console on port 9000
//! kvtest serve -p 9000
//! ```

pub mod completions;
pub mod config;
pub mod output;
pub mod run;
pub mod serve;
pub mod status;
pub mod watch;

pub use completions::handle_completions;
pub use config::handle_config_init;

use crate::api::{HttpTestingApi, TestKind};
use crate::config::ConsoleConfig;
use crate::controller::Controller;
use crate::page::Page;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

/// kvtest - key-value store testing console
#[derive(Parser, Debug)]
#[command(
    name = "kvtest",
    version,
    about = "Testing console for a key-value store backend"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check store connectivity once
    Status(StatusArgs),
    /// Run a test on the backend
    Run(RunArgs),
    /// Poll store connectivity until interrupted
    Watch(WatchArgs),
    /// Start the web console
    Serve(ServeArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by every command that talks to the backend.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "kvtest.toml")]
    pub config: PathBuf,

    /// Override the testing backend base URL
    #[arg(short = 'u', long)]
    pub api_url: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "KVTEST_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Test type (simple, performance, full, or a backend-specific token)
    pub test_type: TestKind,

    /// Output the page snapshot as JSON
    #[arg(long, conflicts_with = "html")]
    pub json: bool,

    /// Output the rendered results HTML
    #[arg(long)]
    pub html: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Seconds between checks (defaults to poller.interval_seconds)
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Stop after this many checks
    #[arg(short = 'n', long)]
    pub count: Option<u64>,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Override server port
    #[arg(short, long, env = "KVTEST_PORT")]
    pub port: Option<u16>,

    /// Override server host
    #[arg(short = 'H', long, env = "KVTEST_HOST")]
    pub host: Option<String>,

    /// Disable background status polling
    #[arg(long)]
    pub no_poller: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "kvtest.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Load configuration with CLI overrides
///
/// A missing config file is not an error; defaults apply.
pub fn load_config(args: &ConnectionArgs) -> Result<ConsoleConfig, Box<dyn std::error::Error>> {
    let mut config = if args.config.exists() {
        ConsoleConfig::load(Some(&args.config))?
    } else {
        tracing::debug!("Config file not found, using defaults");
        ConsoleConfig::default()
    };

    config = config.with_env_overrides();

    if let Some(ref url) = args.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }

    Ok(config)
}

/// Build a controller over a fresh page for the configured backend.
pub fn build_controller(config: &ConsoleConfig) -> Result<Controller, Box<dyn std::error::Error>> {
    let api = HttpTestingApi::new(&config.api)?;
    Ok(Controller::new(Arc::new(api), Arc::new(Page::new())))
}
