//! Settings service - settings operations outside the panel's event flow.

use std::sync::Arc;

use crate::ports::{CoreError, PreferenceStore};
use crate::settings::SettingsModel;

/// Service for settings operations.
pub struct SettingsService {
    store: Arc<dyn PreferenceStore>,
}

impl SettingsService {
    /// Create a new settings service.
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Read a fresh snapshot and map it to the settings model.
    pub async fn current(&self) -> Result<SettingsModel, CoreError> {
        let snapshot = self.store.read_all().await?;
        Ok(SettingsModel::from_snapshot(&snapshot))
    }

    /// Write every field's default in one atomic store operation.
    pub async fn reset(&self) -> Result<SettingsModel, CoreError> {
        let defaults = SettingsModel::default();
        self.store.write_many(defaults.entries()).await?;
        tracing::info!("Settings reset to defaults");
        Ok(defaults)
    }
}
