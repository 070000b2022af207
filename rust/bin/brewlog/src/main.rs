//! `brewlog` — log and list coffee brews from the terminal.
//!
//! Drives the same request paths a graphical renderer would, then prints
//! the resulting state.

mod commands;

use clap::{Parser, Subcommand};

use brewlog::config::Backend;
use brewlog::BrewlogConfig;

/// Brew log CLI.
#[derive(Parser, Debug)]
#[command(name = "brewlog", about = "Log, rate, and list coffee brews")]
struct Cli {
    /// Path to config file (default: ~/.brewlog/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    /// Use the HTTP backend at this URL, overriding the config.
    #[arg(long = "backend-url", global = true)]
    backend_url: Option<String>,

    /// Output format: table or json.
    #[arg(long = "output", short = 'o', global = true, default_value = "table")]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List saved brews, newest first.
    Feed,

    /// Add a brew, walking basics → customization → rating.
    Add(commands::AddArgs),

    /// Show the selectable values for every option field.
    Options,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(std::path::PathBuf::from)
        .unwrap_or_else(BrewlogConfig::default_path);
    let mut config = BrewlogConfig::load(&config_path)?;
    if let Some(url) = cli.backend_url {
        config.api.backend = Backend::Http;
        config.api.base_url = url;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let json_output = cli.output == "json";

    match cli.command {
        Commands::Feed => commands::feed(&config, json_output).await?,
        Commands::Add(args) => commands::add(&config, args, json_output).await?,
        Commands::Options => commands::options(json_output)?,
    }

    Ok(())
}
