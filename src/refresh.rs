//! Background forecast refresh
//!
//! A tokio task loads a payload from the configured source, assembles it and
//! reports the result to the main loop over a channel. The task owns its
//! payload for the duration of an update, so no other code can touch the
//! input while the assembler reads it.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::data::{FetchError, ForecastSource};
use crate::forecast::{ForecastAssembler, ForecastError, ForecastSnapshot};

/// Shortest interval the scheduler accepts
const MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Messages sent from background refresh to main app
#[derive(Debug, Clone)]
pub enum RefreshMessage {
    /// An update cycle started
    RefreshStarted,
    /// A new snapshot was assembled
    ForecastUpdated(Box<ForecastSnapshot>),
    /// The update cycle failed; the previous snapshot stays valid
    RefreshError(String),
}

/// Errors of a single update cycle
#[derive(Debug, Error)]
pub enum UpdateError {
    /// The payload could not be loaded
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The payload could not be assembled
    #[error("Forecast could not be assembled: {0}")]
    Forecast(#[from] ForecastError),
}

/// Configuration for the refresh task
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Interval between updates
    pub interval: Duration,
    /// Whether periodic updates run; manual refreshes work either way
    pub enabled: bool,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(900), // 15 minutes
            enabled: true,
        }
    }
}

/// Loads one payload and assembles it
///
/// # Arguments
/// * `source` - Where the payload comes from
/// * `assembler` - The assembler to run on it
///
/// # Returns
/// * `Ok(ForecastSnapshot)` - The new snapshot
/// * `Err(UpdateError)` - If loading or assembling fails
pub async fn run_update(
    source: &ForecastSource,
    assembler: &ForecastAssembler,
) -> Result<ForecastSnapshot, UpdateError> {
    let payload = source.load().await?;
    let snapshot = assembler.assemble_payload(payload)?;
    Ok(snapshot)
}

/// Handle for controlling the background refresh system
pub struct RefreshHandle {
    /// Channel for receiving refresh messages
    pub receiver: mpsc::Receiver<RefreshMessage>,
    trigger_tx: mpsc::Sender<()>,
    shutdown_tx: mpsc::Sender<()>,
}

impl RefreshHandle {
    /// Creates a new RefreshHandle and spawns the refresh task
    ///
    /// When enabled, the first update runs right away and then once per
    /// interval. Must be called from within a tokio runtime.
    ///
    /// # Arguments
    /// * `config` - Interval and enable flag
    /// * `source` - Where payloads are loaded from
    /// * `assembler` - Assembler applied to every payload
    pub fn spawn(config: RefreshConfig, source: ForecastSource, assembler: ForecastAssembler) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(32);
        let (trigger_tx, mut trigger_rx) = mpsc::channel::<()>(1);
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(config.interval.max(MIN_INTERVAL));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            tracing::info!(source = %source.describe(), "refresh task started");

            loop {
                tokio::select! {
                    _ = interval.tick(), if config.enabled => {}
                    Some(()) = trigger_rx.recv() => {
                        tracing::debug!("manual refresh requested");
                    }
                    _ = shutdown_rx.recv() => {
                        break;
                    }
                }

                if msg_tx.send(RefreshMessage::RefreshStarted).await.is_err() {
                    break;
                }

                let message = match run_update(&source, &assembler).await {
                    Ok(snapshot) => {
                        tracing::info!(
                            observed = %snapshot.current.update_timestamp,
                            daily_offset = snapshot.daily_offset,
                            "forecast updated"
                        );
                        RefreshMessage::ForecastUpdated(Box::new(snapshot))
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "forecast update failed");
                        RefreshMessage::RefreshError(e.to_string())
                    }
                };

                if msg_tx.send(message).await.is_err() {
                    break;
                }
            }

            tracing::info!("refresh task stopped");
        });

        Self {
            receiver: msg_rx,
            trigger_tx,
            shutdown_tx,
        }
    }

    /// Requests an immediate refresh
    ///
    /// A request made while another one is still pending is merged into it.
    pub fn request_refresh(&self) {
        let _ = self.trigger_tx.try_send(());
    }

    /// Stops the refresh task
    pub async fn shutdown(&self) {
        let _ = self.shutdown_tx.send(()).await;
    }
}

/// Checks for pending refresh messages without blocking
///
/// # Arguments
/// * `handle` - The RefreshHandle to check
///
/// # Returns
/// * `Some(RefreshMessage)` if a message was available
/// * `None` if no messages are pending
pub fn try_recv(handle: &mut RefreshHandle) -> Option<RefreshMessage> {
    handle.receiver.try_recv().ok()
}
