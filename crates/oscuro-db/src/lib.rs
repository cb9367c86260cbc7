#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod broadcaster;
pub mod factory;
pub mod memory_store;
pub mod setup;
pub mod sqlite_store;

// Re-export factory for convenient access
pub use factory::StoreFactory;

// Re-export store implementations
pub use broadcaster::SnapshotBroadcaster;
pub use memory_store::MemoryPreferenceStore;
pub use sqlite_store::SqlitePreferenceStore;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;

// Only needed to switch on the bundled SQLite build
use libsqlite3_sys as _;
