use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use itemsvc::config::{Config, LogConfig};
use itemsvc::server::Server;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// In-memory item service over HTTP
#[derive(Debug, Parser)]
#[command(name = "itemsvc", version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<String>,

    /// Listening address, overrides the config file
    #[arg(short, long)]
    addr: Option<String>,
}

fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    match &log.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file '{}'", path))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.init(),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(addr) = cli.addr {
        config.server_addr = addr;
    }

    init_logging(&config.log)?;

    info!("Starting itemsvc - in-memory item service");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let server = Server::bind(&config.server_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server_addr))?;
    info!("Server listening on: http://{}", server.local_addr());

    // Serve until interrupted
    server.run().await?;

    Ok(())
}
