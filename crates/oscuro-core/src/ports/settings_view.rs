//! Settings view trait for the UI collaborator.
//!
//! The view owns the four controls (three switches and a volume slider).
//! The controller only ever pushes one complete model into it.

use crate::settings::SettingsModel;

/// Control surface that displays hydrated settings.
///
/// # Implementations
///
/// - `NoopView` - For headless contexts and tests that only care about writes
/// - Adapter-specific implementations (terminal panel, etc.)
pub trait SettingsView: Send + Sync {
    /// Set all four controls from one snapshot.
    ///
    /// Called at most once per controller. Must not block.
    fn on_hydrated(&self, model: &SettingsModel);
}

/// A view that ignores hydration.
#[derive(Debug, Clone, Default)]
pub struct NoopView;

impl NoopView {
    /// Create a new no-op view.
    pub const fn new() -> Self {
        Self
    }
}

impl SettingsView for NoopView {
    fn on_hydrated(&self, _model: &SettingsModel) {}
}
