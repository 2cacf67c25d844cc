//! Parlor server entry point.
//!
//! Binary name: `parlor`
//!
//! Parses CLI arguments, initializes tracing and the in-memory chat store,
//! then serves the HTTP API until ctrl-c. All state is volatile: a restart
//! starts from an empty store.

mod http;
mod state;

use clap::Parser;
use parlor_core::ChatStore;
use tracing_subscriber::EnvFilter;

use crate::http::router::build_router;
use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "parlor", about = "In-memory chat room server", version)]
struct Cli {
    /// Address to bind the HTTP listener to.
    #[arg(long, default_value = "0.0.0.0:8080", env = "PARLOR_BIND")]
    bind: String,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,parlor=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let state = AppState::new(ChatStore::new());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&cli.bind).await?;
    tracing::info!(addr = %cli.bind, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Resolve when ctrl-c is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install ctrl-c handler");
    }
}
