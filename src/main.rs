//! Multi-User To-do Service
//!
//! A small multi-tenant to-do list API built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                 TODO SERVICE                  │
//!                      │                                               │
//!     Client Request   │  ┌─────────┐    ┌─────────┐    ┌──────────┐  │
//!     ─────────────────┼─▶│  http   │───▶│ guards  │───▶│ handlers │  │
//!                      │  │ server  │    │         │    │          │  │
//!                      │  └─────────┘    └─────────┘    └────┬─────┘  │
//!                      │                                      │        │
//!                      │                                      ▼        │
//!     Client Response  │  ┌─────────┐                  ┌──────────┐   │
//!     ◀────────────────┼──│  error  │◀─────────────────│  store   │   │
//!                      │  │  (JSON) │                  │ (memory) │   │
//!                      │  └─────────┘                  └──────────┘   │
//!                      │                                               │
//!                      │  ┌─────────────────────────────────────────┐ │
//!                      │  │          Cross-Cutting Concerns          │ │
//!                      │  │  ┌────────┐ ┌─────────────┐ ┌─────────┐ │ │
//!                      │  │  │ config │ │observability│ │lifecycle│ │ │
//!                      │  │  └────────┘ └─────────────┘ └─────────┘ │ │
//!                      │  └─────────────────────────────────────────┘ │
//!                      └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use tokio::net::TcpListener;

use todo_service::config::loader::load_config;
use todo_service::config::ServiceConfig;
use todo_service::http::HttpServer;
use todo_service::lifecycle::{signals, Shutdown};
use todo_service::observability::logging;

#[derive(Parser)]
#[command(name = "todo-service")]
#[command(about = "Multi-user to-do list HTTP service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    logging::init(&config.observability);

    tracing::info!("todo-service v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        free_todo_limit = config.quota.free_todo_limit,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_shutdown().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
