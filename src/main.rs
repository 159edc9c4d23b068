use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use conngate::config::Config;
use conngate::secrets::EnvSecrets;
use conngate::{AppState, app};

#[tokio::main]
async fn main() {
    let config = Config::parse();

    let log_level = if config.verbose { "debug,hyper=info" } else { "warn,conngate=info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    if config.console_logging() {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    }

    info!(
        addr = %config.addr,
        log_format = %config.log_format,
        verbose = config.verbose,
        "starting conngate"
    );

    let state = AppState {
        secrets: Arc::new(EnvSecrets::new()),
    };

    let listener = match tokio::net::TcpListener::bind(&config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, error = %e, "failed to bind listener");
            return;
        }
    };

    info!(addr = %config.addr, "conngate listening");
    if let Err(e) = axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "server error");
    }
}

/// Resolves on SIGINT or SIGTERM; `axum::serve` then drains in-flight
/// requests before returning.
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
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
