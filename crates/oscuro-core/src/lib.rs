#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use paths::{PathError, data_root, database_path};
pub use ports::{
    CoreError, NoopView, PreferenceStore, RepositoryError, SettingsView, SnapshotStream,
};
pub use services::{SettingsController, SettingsService};
pub use settings::{
    DEFAULT_VOLUME_LEVEL, PreferenceKey, PreferenceSnapshot, PreferenceValue, SettingsModel,
    ToggleKey,
};

#[cfg(test)]
use oscuro_db as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio_test as _;
