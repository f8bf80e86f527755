mod config;
mod logging;
mod server;

use std::path::{Path, PathBuf};

use address_book::AddressBook;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{AppConfig, CliOverrides};

/// Address Book Server - address records with geocoded distances
#[derive(Parser)]
#[command(name = "address-server")]
#[command(about = "Address Book Server - address records with geocoded distances")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use an in-memory database (sqlite::memory:)
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config
        && !Path::new(path).is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.to_string_lossy());
    }

    // defaults -> YAML (if provided) -> env (ADDRESS_BOOK__*) -> CLI overrides
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&CliOverrides {
        port: cli.port,
        verbose: cli.verbose,
        mock: cli.mock,
    });

    logging::init_logging(&config.logging);

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    config.validate()?;
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    config.validate()?;
    let addr = config.server.socket_addr()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        dsn = %config::redact_dsn_password(&config.database.dsn),
        "Address Book Server starting"
    );

    let conn = AddressBook::connect(&config.database.dsn, config.database.max_connections)
        .await
        .context("failed to connect to the database")?;
    AddressBook::migrate(&conn).await?;

    if config.address_book.geocoder.api_key.is_empty() {
        tracing::warn!("No geocoder API key configured; distance requests will fail");
    }
    let module = AddressBook::init(&config.address_book, conn)?;

    let router = server::with_middleware(module.router(), &config.server);
    server::serve(router, addr).await
}
