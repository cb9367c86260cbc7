//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. The preference store is constructed here and
//! injected into every service and controller; nothing else opens the
//! database or holds a process-wide store handle.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use oscuro_core::paths::{database_path, database_path_in};
use oscuro_core::{PreferenceStore, SettingsController, SettingsService, SettingsView};
use oscuro_db::{StoreFactory, setup_database};

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Data directory override (`--data-dir` / `OSCURO_DATA_DIR`).
    pub data_dir: Option<PathBuf>,
    /// Use an in-memory store that is discarded on exit.
    pub ephemeral: bool,
}

impl CliConfig {
    /// Build the config from parsed global options.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            data_dir: cli.data_dir.clone(),
            ephemeral: cli.ephemeral,
        }
    }

    /// Resolve where the settings database lives.
    pub fn database_path(&self) -> Result<PathBuf, CliError> {
        let resolved = match &self.data_dir {
            Some(dir) => database_path_in(dir),
            None => database_path(),
        };
        resolved.map_err(|e| CliError::Config(e.to_string()))
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The preference store shared by everything built from this context.
    pub store: Arc<dyn PreferenceStore>,
    /// Backing database file; `None` for an in-memory store.
    pub database_path: Option<PathBuf>,
}

impl CliContext {
    /// Access the preference store.
    pub fn store(&self) -> &Arc<dyn PreferenceStore> {
        &self.store
    }

    /// Settings operations outside the panel's event flow.
    pub fn settings(&self) -> SettingsService {
        SettingsService::new(Arc::clone(&self.store))
    }

    /// A fresh controller (with a fresh hydration latch) bound to `view`.
    pub fn controller(&self, view: Arc<dyn SettingsView>) -> SettingsController {
        SettingsController::new(Arc::clone(&self.store), view)
    }
}

/// Bootstrap the CLI application.
///
/// Opens (or creates) the settings database and builds the store, unless
/// the config asks for an ephemeral store.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    if config.ephemeral {
        tracing::info!("Using in-memory settings store");
        return Ok(bootstrap_with(StoreFactory::memory_store()));
    }

    let db_path = config.database_path()?;
    let pool = setup_database(&db_path)
        .await
        .map_err(|e| CliError::Database(format!("{}: {e}", db_path.display())))?;
    tracing::debug!(path = %db_path.display(), "Opened settings database");

    Ok(CliContext {
        store: StoreFactory::preference_store(pool),
        database_path: Some(db_path),
    })
}

/// Bootstrap with a custom store (for testing).
pub fn bootstrap_with(store: Arc<dyn PreferenceStore>) -> CliContext {
    CliContext {
        store,
        database_path: None,
    }
}
