//! Snapshot broadcasting for live store subscribers.

use futures_util::{Stream, StreamExt};
use oscuro_core::{PreferenceSnapshot, RepositoryError};
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tracing::{debug, warn};

/// Broadcast channel capacity for post-write snapshots
const CHANNEL_CAPACITY: usize = 64;

/// Broadcaster for post-write store snapshots
pub struct SnapshotBroadcaster {
    sender: broadcast::Sender<PreferenceSnapshot>,
}

impl SnapshotBroadcaster {
    /// Create a new broadcaster
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Send a snapshot to all subscribers
    pub fn publish(&self, snapshot: PreferenceSnapshot) {
        // Nobody is watching; nothing to do
        if self.sender.receiver_count() > 0 {
            debug!(entries = snapshot.len(), "Broadcasting settings snapshot");
            let _ = self.sender.send(snapshot);
        }
    }

    /// Subscribe to snapshots published from now on.
    ///
    /// A subscriber that falls behind skips straight to the newest snapshots;
    /// every snapshot is complete, so nothing is lost by skipping.
    pub fn subscribe(
        &self,
    ) -> impl Stream<Item = Result<PreferenceSnapshot, RepositoryError>> + Send + 'static {
        BroadcastStream::new(self.sender.subscribe()).filter_map(|update| async move {
            match update {
                Ok(snapshot) => Some(Ok::<_, RepositoryError>(snapshot)),
                Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                    warn!(skipped, "Settings subscriber lagged behind");
                    None
                }
            }
        })
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for SnapshotBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}
