//! Lifeplan Server

use std::net::SocketAddr;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lifeplan_server::{create_router, AppState, Config};

/// Lifeplan task tracking server.
#[derive(Parser, Debug)]
#[command(name = "lifeplan-server", about = "Lifeplan task tracking HTTP server")]
struct Args {
    /// HTTP server address
    #[arg(long)]
    http_addr: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long)]
    log_filter: Option<String>,
}

impl Args {
    fn into_config(self) -> Config {
        let defaults = Config::default();
        Config {
            http_bind_addr: self.http_addr.unwrap_or(defaults.http_bind_addr),
            log_filter: self.log_filter.unwrap_or(defaults.log_filter),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Args::parse().into_config();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let http_addr: SocketAddr = config.http_bind_addr.parse()?;

    // Create shared state
    let state = AppState::new();
    let router = create_router(state);

    let listener = TcpListener::bind(http_addr).await?;
    info!(http_addr = %http_addr, "Lifeplan server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Lifeplan server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
