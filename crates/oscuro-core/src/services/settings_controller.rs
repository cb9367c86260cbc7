//! Settings controller - bridges control events and the preference store.
//!
//! The controller has two paths:
//!
//! - **Hydration**: subscribe to the store's live snapshot feed and push the
//!   first snapshot into the view. A one-shot latch drops every later snapshot,
//!   including echoes of the controller's own writes.
//! - **Writes**: each switch or slider event enqueues one single-key write.
//!   A single writer task drains the queue, so writes to one key reach the
//!   store in the order the user produced them.
//!
//! Neither path ever blocks the caller or propagates storage errors to it.
//! Failures are logged and the view keeps whatever it is showing.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::ports::{PreferenceStore, SettingsView};
use crate::settings::{PreferenceKey, PreferenceSnapshot, PreferenceValue, SettingsModel, ToggleKey};

/// One-shot gate that admits a single hydration per controller.
///
/// Starts armed; the first successful [`HydrationLatch::disarm`] wins and
/// every later call is refused. Only a new controller gets a new latch.
#[derive(Debug)]
pub struct HydrationLatch {
    armed: AtomicBool,
}

impl HydrationLatch {
    pub const fn new() -> Self {
        Self {
            armed: AtomicBool::new(true),
        }
    }

    /// Flip to disarmed. Returns `true` only for the call that did the flip.
    pub fn disarm(&self) -> bool {
        self.armed.swap(false, Ordering::AcqRel)
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Acquire)
    }
}

impl Default for HydrationLatch {
    fn default() -> Self {
        Self::new()
    }
}

/// A queued single-key write.
#[derive(Debug, Clone, Copy)]
struct PendingWrite {
    key: PreferenceKey,
    value: PreferenceValue,
}

/// Controller for the settings panel.
///
/// Must be created inside a Tokio runtime: construction spawns the writer task.
pub struct SettingsController {
    store: Arc<dyn PreferenceStore>,
    view: Arc<dyn SettingsView>,
    latch: Arc<HydrationLatch>,
    writes: mpsc::UnboundedSender<PendingWrite>,
    writer: JoinHandle<()>,
}

impl SettingsController {
    /// Create a controller over an injected store and view.
    pub fn new(store: Arc<dyn PreferenceStore>, view: Arc<dyn SettingsView>) -> Self {
        let (writes, queue) = mpsc::unbounded_channel();
        let writer = tokio::spawn(run_writer(Arc::clone(&store), queue));

        Self {
            store,
            view,
            latch: Arc::new(HydrationLatch::new()),
            writes,
            writer,
        }
    }

    /// Start hydrating the view from the store's live feed.
    ///
    /// The returned task keeps the subscription open and discards snapshots
    /// once the view has been hydrated. It finishes when the feed ends or a
    /// read fails; aborting it tears the subscription down. Calling this again
    /// never hydrates a second time.
    pub fn hydrate(&self) -> JoinHandle<()> {
        let mut feed = self.store.observe_all();
        let latch = Arc::clone(&self.latch);
        let view = Arc::clone(&self.view);

        tokio::spawn(async move {
            while let Some(next) = feed.next().await {
                match next {
                    Ok(snapshot) => {
                        apply_snapshot(&latch, view.as_ref(), &snapshot);
                    }
                    Err(err) if latch.is_armed() => {
                        error!(
                            error = %err,
                            "Failed to load settings; controls keep their defaults"
                        );
                        break;
                    }
                    Err(err) => {
                        warn!(error = %err, "Settings feed failed after hydration");
                        break;
                    }
                }
            }
            debug!("Settings subscription closed");
        })
    }

    /// Whether the view has already been hydrated.
    pub fn is_hydrated(&self) -> bool {
        !self.latch.is_armed()
    }

    /// Slider moved. The slider owns the value's bounds.
    pub fn on_volume_changed(&self, value: i64) {
        self.enqueue(PreferenceKey::VolumeLevel, PreferenceValue::Int(value));
    }

    /// One of the three switches was toggled.
    pub fn on_toggle_changed(&self, key: ToggleKey, value: bool) {
        self.enqueue(key.into(), PreferenceValue::Bool(value));
    }

    /// Close the write queue and wait until every queued write was attempted.
    ///
    /// Dropping the controller also drains the queue, but without waiting.
    pub async fn shutdown(self) {
        drop(self.writes);
        if let Err(err) = self.writer.await {
            error!(error = %err, "Settings writer task ended abnormally");
        }
    }

    fn enqueue(&self, key: PreferenceKey, value: PreferenceValue) {
        debug!(%key, %value, "Queueing preference write");
        if self.writes.send(PendingWrite { key, value }).is_err() {
            error!(%key, %value, "Settings writer is gone; dropping write");
        }
    }
}

/// Push `snapshot` into the view if the latch is still armed.
fn apply_snapshot(
    latch: &HydrationLatch,
    view: &dyn SettingsView,
    snapshot: &PreferenceSnapshot,
) -> bool {
    if !latch.disarm() {
        debug!(entries = snapshot.len(), "Ignoring settings snapshot after hydration");
        return false;
    }

    let model = SettingsModel::from_snapshot(snapshot);
    info!(?model, "Hydrating settings controls");
    view.on_hydrated(&model);
    true
}

async fn run_writer(
    store: Arc<dyn PreferenceStore>,
    mut queue: mpsc::UnboundedReceiver<PendingWrite>,
) {
    while let Some(PendingWrite { key, value }) = queue.recv().await {
        match store.write_one(key.as_str(), value).await {
            Ok(()) => debug!(%key, %value, "Persisted preference"),
            // The control already shows the new value; no rollback, no retry.
            Err(err) => error!(%key, %value, error = %err, "Failed to persist preference"),
        }
    }
}
