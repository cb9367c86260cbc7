//! `SettingsView` implementation backing the terminal panel.

use oscuro_core::{SettingsModel, SettingsView};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Receives the hydrated model and hands it to whoever renders the panel.
pub struct TerminalView {
    hydrated: watch::Sender<Option<SettingsModel>>,
}

impl TerminalView {
    pub fn new() -> Self {
        let (hydrated, _) = watch::channel(None);
        Self { hydrated }
    }

    /// The model the view was hydrated with, if any.
    pub fn hydrated(&self) -> Option<SettingsModel> {
        *self.hydrated.borrow()
    }

    /// Wait until the view is hydrated or the subscription gives up.
    ///
    /// Returns `None` when the subscription ended without hydrating (read
    /// failure); the caller should then show toolkit defaults.
    pub async fn wait_hydrated(&self, subscription: &mut JoinHandle<()>) -> Option<SettingsModel> {
        let mut rx = self.hydrated.subscribe();
        tokio::select! {
            _ = rx.wait_for(Option::is_some) => {}
            _ = subscription => {}
        }
        self.hydrated()
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsView for TerminalView {
    fn on_hydrated(&self, model: &SettingsModel) {
        self.hydrated.send_replace(Some(*model));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_wait_returns_hydrated_model() {
        let view = TerminalView::new();
        let model = SettingsModel {
            mode_dark: true,
            ..SettingsModel::default()
        };
        view.on_hydrated(&model);

        let mut pending = tokio::spawn(std::future::pending::<()>());
        assert_eq!(view.wait_hydrated(&mut pending).await, Some(model));
        pending.abort();
    }

    #[tokio::test]
    async fn test_wait_gives_up_when_subscription_ends() {
        let view = TerminalView::new();
        let mut finished = tokio::spawn(async {});

        assert_eq!(view.wait_hydrated(&mut finished).await, None);
    }
}
