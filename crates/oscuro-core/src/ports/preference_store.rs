//! Preference store trait definition.
//!
//! This port defines the interface for the durable key-value store that holds
//! the panel's preferences. Implementations handle all storage details
//! internally and must make single-key writes and full reads atomic.

use std::pin::Pin;

use async_trait::async_trait;
use futures_util::Stream;

use super::RepositoryError;
use crate::settings::{PreferenceSnapshot, PreferenceValue};

/// Live feed of full-store snapshots.
///
/// The first item is the state at subscription time; each later item follows
/// a write to the store. The feed does not end on its own.
pub type SnapshotStream =
    Pin<Box<dyn Stream<Item = Result<PreferenceSnapshot, RepositoryError>> + Send>>;

/// Asynchronous, durable key-value store for scalar preferences.
///
/// # Design Rules
///
/// - Keys are plain strings; the store knows nothing about the settings schema
/// - `write_one` is an atomic upsert of exactly one key
/// - Writers never compute a value from prior store state, so there are no
///   read-modify-write cycles to guard against
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Subscribe to the live snapshot feed.
    ///
    /// Each call opens an independent subscription that replays the current
    /// state first.
    fn observe_all(&self) -> SnapshotStream;

    /// Read the whole store once.
    async fn read_all(&self) -> Result<PreferenceSnapshot, RepositoryError>;

    /// Insert or replace the value stored under `key`.
    async fn write_one(&self, key: &str, value: PreferenceValue) -> Result<(), RepositoryError>;

    /// Insert or replace several keys in one atomic operation.
    async fn write_many(
        &self,
        entries: Vec<(String, PreferenceValue)>,
    ) -> Result<(), RepositoryError>;
}
