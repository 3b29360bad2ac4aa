//! Feed consumer
//!
//! Runs the reconciler as the single writer inside a tokio task. Events are
//! applied in channel (FIFO) order; after each one the whole collection is
//! published as an immutable `Arc<Vec<T>>` so readers never observe a
//! half-applied update and never block the writer.
//!
//! Connection management and retries belong to the feed collaborator. The
//! consumer only reacts to what it is handed: upserts update the view,
//! failures mark it stale.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::events::FeedMessage;
use crate::reconciler::{Keyed, Reconciler};

/// Freshness of the published collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedStatus {
    /// Waiting for the first event.
    Connecting,
    Live,
    /// The feed reported a failure or closed; the collection may be behind.
    Stale { reason: String },
    /// Consumer detached; the last snapshot stays readable.
    Detached,
}

/// Counters reported when the consumer stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsumerStats {
    pub events_applied: u64,
    pub inserted: u64,
    pub replaced: u64,
    pub failures: u64,
}

/// Create the bounded inbound queue the feed collaborator writes into.
pub fn feed_channel<T>(
    config: &FeedConfig,
) -> (mpsc::Sender<FeedMessage<T>>, mpsc::Receiver<FeedMessage<T>>) {
    mpsc::channel(config.buffer.max(1))
}

/// Handle held by readers of the reconciled collection.
pub struct FeedHandle<T> {
    snapshots: watch::Receiver<Arc<Vec<T>>>,
    status: watch::Receiver<FeedStatus>,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<ConsumerStats>>,
}

impl<T> FeedHandle<T> {
    /// Latest published collection.
    pub fn snapshot(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.snapshots.borrow())
    }

    pub fn status(&self) -> FeedStatus {
        self.status.borrow().clone()
    }

    /// Receiver notified on every published collection.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<T>>> {
        self.snapshots.clone()
    }

    /// Receiver notified on every status change.
    pub fn subscribe_status(&self) -> watch::Receiver<FeedStatus> {
        self.status.clone()
    }

    pub fn is_detached(&self) -> bool {
        self.task.is_none()
    }

    /// Stop consuming. Idempotent: later calls return `None`.
    ///
    /// Events still queued are not applied. The published collection is
    /// left as it was.
    pub async fn detach(&mut self) -> Option<ConsumerStats> {
        if let Some(shutdown) = self.shutdown.take() {
            // consumer may already have stopped on its own
            let _ = shutdown.send(());
        }
        let task = self.task.take()?;
        match task.await {
            Ok(stats) => Some(stats),
            Err(e) => {
                error!(error = %e, "Feed consumer task failed");
                None
            }
        }
    }
}

/// Spawn the consumer task on the current tokio runtime.
pub fn spawn_consumer<T>(
    config: &FeedConfig,
    reconciler: Reconciler<T>,
    events: mpsc::Receiver<FeedMessage<T>>,
) -> FeedHandle<T>
where
    T: Keyed + Clone + Send + Sync + 'static,
{
    let (snapshot_tx, snapshot_rx) = watch::channel(Arc::new(reconciler.snapshot()));
    let (status_tx, status_rx) = watch::channel(FeedStatus::Connecting);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    info!(
        channel = %config.channel,
        buffer = config.buffer,
        seeded = reconciler.len(),
        "Feed consumer starting"
    );

    let task = tokio::spawn(run(
        config.channel.clone(),
        reconciler,
        events,
        snapshot_tx,
        status_tx,
        shutdown_rx,
    ));

    FeedHandle {
        snapshots: snapshot_rx,
        status: status_rx,
        shutdown: Some(shutdown_tx),
        task: Some(task),
    }
}

async fn run<T>(
    channel: String,
    mut reconciler: Reconciler<T>,
    mut events: mpsc::Receiver<FeedMessage<T>>,
    snapshot_tx: watch::Sender<Arc<Vec<T>>>,
    status_tx: watch::Sender<FeedStatus>,
    mut shutdown_rx: oneshot::Receiver<()>,
) -> ConsumerStats
where
    T: Keyed + Clone + Send + Sync + 'static,
{
    let mut failures: u64 = 0;

    loop {
        tokio::select! {
            biased;

            // a dropped handle counts as a detach request
            _ = &mut shutdown_rx => {
                info!(channel = %channel, "Feed consumer detached");
                status_tx.send_replace(FeedStatus::Detached);
                break;
            }

            message = events.recv() => match message {
                Some(FeedMessage::Upsert(event)) => {
                    reconciler.apply_event(event);
                    snapshot_tx.send_replace(Arc::new(reconciler.snapshot()));
                    if *status_tx.borrow() != FeedStatus::Live {
                        info!(channel = %channel, "Feed live");
                        status_tx.send_replace(FeedStatus::Live);
                    }
                }
                Some(FeedMessage::Failure(err)) => {
                    failures += 1;
                    warn!(channel = %channel, error = %err, "Feed delivery failure");
                    status_tx.send_replace(FeedStatus::Stale { reason: err.to_string() });
                }
                None => {
                    warn!(channel = %channel, "Feed closed by source");
                    status_tx.send_replace(FeedStatus::Stale {
                        reason: FeedError::Closed.to_string(),
                    });
                    break;
                }
            },
        }
    }

    let stats = ConsumerStats {
        events_applied: reconciler.events_applied(),
        inserted: reconciler.inserted(),
        replaced: reconciler.replaced(),
        failures,
    };

    info!(
        channel = %channel,
        events_applied = stats.events_applied,
        inserted = stats.inserted,
        replaced = stats.replaced,
        failures = stats.failures,
        records = reconciler.len(),
        "Feed consumer stopped"
    );

    stats
}
