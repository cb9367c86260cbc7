//! In-memory implementation of the `PreferenceStore` trait.
//!
//! Nothing is persisted past the process. Used by tests and by sessions that
//! must not touch the user's real settings.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use futures_util::{StreamExt, stream};

use oscuro_core::{
    PreferenceSnapshot, PreferenceStore, PreferenceValue, RepositoryError, SnapshotStream,
};

use crate::broadcaster::SnapshotBroadcaster;

/// Mutex-guarded map implementing the `PreferenceStore` contract.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    entries: Mutex<PreferenceSnapshot>,
    updates: SnapshotBroadcaster,
}

impl MemoryPreferenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `snapshot`.
    pub fn with_snapshot(snapshot: PreferenceSnapshot) -> Self {
        Self {
            entries: Mutex::new(snapshot),
            updates: SnapshotBroadcaster::new(),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, PreferenceSnapshot>, RepositoryError> {
        self.entries
            .lock()
            .map_err(|_| RepositoryError::Storage("memory store lock poisoned".to_string()))
    }

    fn apply(
        &self,
        entries: impl IntoIterator<Item = (String, PreferenceValue)>,
    ) -> Result<(), RepositoryError> {
        let mut guard = self.lock()?;
        let next = entries
            .into_iter()
            .fold(guard.clone(), |acc, (key, value)| acc.with(key, value));
        *guard = next.clone();
        // Publish under the lock so concurrent writers broadcast in commit order.
        self.updates.publish(next);
        drop(guard);
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    fn observe_all(&self) -> SnapshotStream {
        let live = self.updates.subscribe();
        let current = self.lock().map(|guard| guard.clone());
        Box::pin(stream::iter([current]).chain(live))
    }

    async fn read_all(&self) -> Result<PreferenceSnapshot, RepositoryError> {
        Ok(self.lock()?.clone())
    }

    async fn write_one(&self, key: &str, value: PreferenceValue) -> Result<(), RepositoryError> {
        self.apply([(key.to_string(), value)])
    }

    async fn write_many(
        &self,
        entries: Vec<(String, PreferenceValue)>,
    ) -> Result<(), RepositoryError> {
        self.apply(entries)
    }
}
