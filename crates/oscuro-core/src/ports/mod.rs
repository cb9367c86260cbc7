//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - No terminal or toolkit types in any signature
//! - The store is injected into services; nothing in core holds a global handle

pub mod preference_store;
pub mod settings_view;

use thiserror::Error;

pub use preference_store::{PreferenceStore, SnapshotStream};
pub use settings_view::{NoopView, SettingsView};

/// Domain-specific errors for preference store operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and is used for both read (hydration) and write failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters should map this to their own error types (CLI exit codes, etc.).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
