//! Watch command implementation

use crate::cli::output::format_status_line;
use crate::cli::WatchArgs;
use crate::controller::{Controller, StatusPoller};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

/// Handle `kvtest watch` command
///
/// Prints one status line per refresh until Ctrl-C, or until `--count`
/// refreshes have been printed.
pub async fn handle_watch(
    args: &WatchArgs,
    controller: Controller,
    interval: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    if interval.is_zero() {
        return Err("interval must be non-zero".into());
    }

    let (tx, mut rx) = broadcast::channel(16);
    let cancel_token = CancellationToken::new();
    let handle = StatusPoller::with_interval(controller, interval)
        .with_broadcast(tx)
        .start(cancel_token.clone());

    let mut printed = 0u64;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received SIGINT, stopping watch");
                break;
            }
            received = rx.recv() => match received {
                Ok(status) => {
                    println!("{}", format_status_line(&status));
                    printed += 1;
                    if args.count.is_some_and(|limit| printed >= limit) {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Watch output fell behind");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }

    cancel_token.cancel();
    handle.await?;
    Ok(())
}
