// ABOUTME: Server binary for the Clever OAuth integration service
// ABOUTME: Loads configuration, initializes logging, and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Clever Connect Server Binary
//!
//! Validates configuration before binding a socket: a missing Clever
//! credential terminates the process with a diagnostic naming every absent
//! variable.

use anyhow::Result;
use clap::Parser;
use clever_connect::{
    config::environment::ServerConfig,
    logging,
    routes::{self, AppState},
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "clever-connect-server")]
#[command(about = "Clever OAuth integration server")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Configuration must be valid before anything accepts connections
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Clever Connect server");
    info!("{}", config.summary());
    info!("Environment: {}", config.environment);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let state = AppState::new(config)?;
    let app = routes::router(state);

    let listener = TcpListener::bind(addr).await?;
    info!("Server running on http://{addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown signal handler: {e}");
    }
    info!("Shutdown signal received");
}
