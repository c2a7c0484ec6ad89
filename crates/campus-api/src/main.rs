//! CampusConnect service entry point.
//!
//! Binary name: `campusd`
//!
//! Resolves the API credential (fatal if absent), loads configuration,
//! wires the services, and serves the HTTP API until shutdown.

mod http;
mod state;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use campus_infra::config::load_config;
use campus_infra::secret::{resolve_api_key, API_KEY_VAR};
use state::AppState;

#[derive(Debug, Parser)]
#[command(name = "campusd", about = "CampusConnect AI campus assistant service", version)]
struct Cli {
    /// Address to bind (overrides config file).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides config file).
    #[arg(long)]
    port: Option<u16>,

    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,campus_api=debug,campus_core=debug,campus_infra=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // The one required piece of configuration. Without it no chat
    // functionality is reachable, so halt before binding anything.
    let api_key = resolve_api_key().with_context(|| {
        format!(
            "{API_KEY_VAR} not found in the environment. \
             Set it to your Generative Language API key and restart."
        )
    })?;

    let mut config = load_config(&cli.config).await;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    let state = AppState::init(api_key, &config);
    let router = http::router::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(model = %config.model, "CampusConnect listening on http://{addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
