//! String service (v1)
//!
//! A small JSON-over-HTTP service built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌──────────────────────────────────────────────────┐
//!     ──────────────────────┼─▶ http server ─▶ transport ─▶ endpoint ─▶ service │
//!                           │   (router,       (decode /    (typed      (pure   │
//!     Client Response       │    middleware)    encode)     adapter)    logic)  │
//!     ◀─────────────────────┼──────────────────────────────────────────────────│
//!                           │                                                  │
//!                           │   config · lifecycle · observability             │
//!                           └──────────────────────────────────────────────────┘
//! ```
//!
//! # Routes
//! - `/uppercase`: `{"str": ...}` → `{"str": ..., "err": ...}`
//! - `/count`: `{"str": ...}` → `{"count": ...}`
//! - `/health`: liveness

use std::path::PathBuf;

use clap::Parser;
use stringsvc::config::ServiceConfig;
use stringsvc::http::HttpServer;
use stringsvc::lifecycle::{startup, Shutdown};
use stringsvc::observability::init_logging;

#[derive(Parser)]
#[command(name = "stringsvc")]
#[command(about = "Uppercase and count strings over JSON/HTTP", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. 127.0.0.1:9000).
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config: ServiceConfig = startup::resolve_config(cli.config.as_deref(), cli.bind.as_deref())?;

    init_logging(&config.observability)?;

    tracing::info!("stringsvc v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.limits.max_body_size,
        "Configuration loaded"
    );

    let listener = match startup::bind_listener(&config).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return Err(e.into());
        }
    };

    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_signal();

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
