//! Serve command implementation

use crate::cli::{build_controller, load_config, ServeArgs};
use crate::config::ConsoleConfig;
use crate::controller::StatusPoller;
use crate::logging::init_tracing;
use crate::server::{create_router, ConsoleState};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Load configuration with serve-specific CLI overrides
pub fn load_config_with_overrides(
    args: &ServeArgs,
) -> Result<ConsoleConfig, Box<dyn std::error::Error>> {
    let mut config = load_config(&args.connection)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if args.no_poller {
        config.poller.enabled = false;
    }

    Ok(config)
}

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }

    cancel_token.cancel();
}

/// Main serve command handler
pub async fn run_serve(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_overrides(&args)?;
    config.validate()?;

    init_tracing(&config.logging)?;

    tracing::info!(api = %config.api.base_url, "Starting kvtest console");
    tracing::debug!(?config, "Loaded configuration");

    let controller = build_controller(&config)?;
    let state = Arc::new(ConsoleState::new(controller.clone()));
    let app = create_router(state);

    let cancel_token = CancellationToken::new();
    let poller_handle = if config.poller.enabled {
        tracing::info!("Starting status poller");
        Some(StatusPoller::new(controller, &config.poller).start(cancel_token.clone()))
    } else {
        tracing::info!("Status polling disabled");
        None
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!(addr = %addr, "kvtest console listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel_token.clone()))
        .await?;

    // The server may stop without a signal; make sure the poller follows.
    cancel_token.cancel();
    if let Some(handle) = poller_handle {
        tracing::info!("Waiting for status poller to stop");
        handle.await?;
    }

    tracing::info!("kvtest console stopped");
    Ok(())
}
