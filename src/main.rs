//! Binary entry point: configuration, tracing, and server startup.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use portfolio_api::{run_server, ServerConfig};

/// Server command-line arguments
#[derive(Parser, Debug)]
#[command(name = "portfolio-api", about = "Read-only portfolio content API")]
struct ServerArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Bind address
    #[arg(short, long, default_value = "0.0.0.0")]
    bind: String,

    /// Postgres connection string (falls back to DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before anything reads the environment; a missing file is fine.
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    init_tracing()?;
    if !dotenv_loaded {
        tracing::debug!("no .env file found, using system environment");
    }

    let args = ServerArgs::parse();

    let database_url = args
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .context("DATABASE_URL must be set (flag, environment, or .env)")?;

    let config = ServerConfig {
        host: args.bind,
        port: args.port,
        database_url,
    };

    run_server(config).await
}

/// Console tracing with RUST_LOG control, `info` by default.
fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
