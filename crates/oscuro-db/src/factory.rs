//! Composition utilities for building preference stores.
//!
//! This module provides factory functions for wiring up the application
//! with a store backend. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use oscuro_core::PreferenceStore;

use crate::{MemoryPreferenceStore, SqlitePreferenceStore};

/// Factory for creating preference store instances.
///
/// This struct provides composition utilities only - no domain logic.
pub struct StoreFactory;

impl StoreFactory {
    /// Build the durable store from a pool prepared by `setup_database()`.
    pub fn preference_store(pool: SqlitePool) -> Arc<dyn PreferenceStore> {
        Arc::new(SqlitePreferenceStore::new(pool))
    }

    /// Build a store that lives only as long as the process.
    pub fn memory_store() -> Arc<dyn PreferenceStore> {
        Arc::new(MemoryPreferenceStore::new())
    }
}
