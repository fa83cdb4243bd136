//! Periodic status refresh.

use super::config::PollerConfig;
use super::Controller;
use crate::api::ConnectionStatus;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Background task that refreshes connection status on a fixed interval.
pub struct StatusPoller {
    controller: Controller,
    interval: Duration,
    /// Optional broadcast sender notified after every refresh
    broadcast: Option<broadcast::Sender<ConnectionStatus>>,
}

impl StatusPoller {
    pub fn new(controller: Controller, config: &PollerConfig) -> Self {
        Self::with_interval(controller, Duration::from_secs(config.interval_seconds))
    }

    pub fn with_interval(controller: Controller, interval: Duration) -> Self {
        Self {
            controller,
            interval,
            broadcast: None,
        }
    }

    /// Publish every refreshed status to `sender`.
    pub fn with_broadcast(mut self, sender: broadcast::Sender<ConnectionStatus>) -> Self {
        self.broadcast = Some(sender);
        self
    }

    /// Start polling. The first refresh happens immediately.
    /// Returns a JoinHandle that resolves when the poller stops.
    pub fn start(self, cancel_token: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            tracing::info!(
                interval_seconds = self.interval.as_secs_f64(),
                "Status poller started"
            );

            loop {
                tokio::select! {
                    _ = cancel_token.cancelled() => {
                        tracing::info!("Status poller shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let status = self.controller.refresh_status().await;
                        tracing::debug!(connected = status.connected, "Status refreshed");
                        if let Some(sender) = &self.broadcast {
                            // Ignore error if no receivers are listening
                            let _ = sender.send(status);
                        }
                    }
                }
            }
        })
    }
}
