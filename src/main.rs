//! Ticket Practice Server
//!
//! A dummy ticket-booking site for browser automation practice.
//!
//! # Architecture Overview
//!
//! ```text
//!                          ┌──────────────────────────────────────────────────┐
//!                          │               TICKET PRACTICE SERVER              │
//!                          │                                                   │
//!     Client Request       │  ┌──────────┐   ┌──────────┐   ┌──────────────┐  │
//!     ─────────────────────┼─▶│   net    │──▶│   http   │──▶│   handlers   │  │
//!                          │  │ listener │   │  server  │   │ /api/* pages │  │
//!                          │  └──────────┘   └──────────┘   └──────┬───────┘  │
//!                          │                                       │          │
//!                          │                                       ▼          │
//!                          │                               ┌──────────────┐   │
//!                          │                               │   booking    │   │
//!                          │                               │ seats+captcha│   │
//!                          │                               │ (one mutex)  │   │
//!                          │                               └──────────────┘   │
//!                          │                                                   │
//!                          │  ┌─────────────────────────────────────────────┐ │
//!                          │  │          Cross-Cutting Concerns              │ │
//!                          │  │  config · observability · lifecycle          │ │
//!                          │  └─────────────────────────────────────────────┘ │
//!                          └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use ticket_practice::config::{read_config, validate_config, ConfigError, ServerConfig};
use ticket_practice::http::HttpServer;
use ticket_practice::lifecycle::{signals, Shutdown};
use ticket_practice::net::Listener;
use ticket_practice::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "ticket-practice")]
#[command(about = "Dummy ticket-booking server for web automation practice", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. 127.0.0.1:8080).
    #[arg(long)]
    bind: Option<String>,

    /// Override the directory holding the built UI bundle.
    #[arg(long)]
    assets: Option<String>,
}

fn load(cli: &Cli) -> Result<ServerConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => ServerConfig::default(),
    };

    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
    }
    if let Some(dir) = &cli.assets {
        config.assets.dir = dir.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load(&cli)?;

    logging::init(&config.observability);
    tracing::info!("ticket-practice v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_connections = config.listener.max_connections,
        header_read_timeout_secs = config.timeouts.header_read_secs,
        assets_dir = %config.assets.dir,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = Listener::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
