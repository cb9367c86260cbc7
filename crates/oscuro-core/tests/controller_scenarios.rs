//! End-to-end settings panel scenarios against real store implementations.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use oscuro_core::{
    PreferenceSnapshot, PreferenceStore, PreferenceValue, SettingsController, SettingsModel,
    SettingsView, ToggleKey,
};
use oscuro_db::{MemoryPreferenceStore, SqlitePreferenceStore, setup_test_database};
use tokio::sync::Notify;

/// View that remembers every hydration and wakes waiters on each one.
#[derive(Default)]
struct PanelView {
    shown: Mutex<Vec<SettingsModel>>,
    hydrated: Notify,
}

impl PanelView {
    fn shown(&self) -> Vec<SettingsModel> {
        self.shown.lock().unwrap().clone()
    }

    async fn wait_hydrated(&self) {
        let notified = self.hydrated.notified();
        if self.shown.lock().unwrap().is_empty() {
            tokio::time::timeout(Duration::from_secs(5), notified)
                .await
                .expect("view was never hydrated");
        }
    }
}

impl SettingsView for PanelView {
    fn on_hydrated(&self, model: &SettingsModel) {
        self.shown.lock().unwrap().push(*model);
        self.hydrated.notify_waiters();
    }
}

async fn sqlite_store() -> Arc<SqlitePreferenceStore> {
    Arc::new(SqlitePreferenceStore::new(setup_test_database().await.unwrap()))
}

/// Let the hydration task drain whatever echoes are queued.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}

#[tokio::test]
async fn empty_store_hydrates_all_defaults() {
    let store = sqlite_store().await;
    let view = Arc::new(PanelView::default());
    let controller = SettingsController::new(store, view.clone());

    let subscription = controller.hydrate();
    view.wait_hydrated().await;

    assert_eq!(
        view.shown(),
        vec![SettingsModel {
            mode_dark: false,
            enabled_bluetooth: false,
            enabled_vibration_phone: false,
            volume_level: 0,
        }]
    );
    subscription.abort();
}

#[tokio::test]
async fn partial_store_defaults_missing_fields() {
    let store = sqlite_store().await;
    store
        .write_one("volume_level", PreferenceValue::Int(7))
        .await
        .unwrap();
    store
        .write_one("mode_dark", PreferenceValue::Bool(true))
        .await
        .unwrap();

    let view = Arc::new(PanelView::default());
    let controller = SettingsController::new(store, view.clone());
    let subscription = controller.hydrate();
    view.wait_hydrated().await;

    assert_eq!(
        view.shown(),
        vec![SettingsModel {
            mode_dark: true,
            enabled_bluetooth: false,
            enabled_vibration_phone: false,
            volume_level: 7,
        }]
    );
    subscription.abort();
}

#[tokio::test]
async fn own_writes_do_not_rehydrate() {
    let store = sqlite_store().await;
    let view = Arc::new(PanelView::default());
    let controller = SettingsController::new(store.clone(), view.clone());

    let subscription = controller.hydrate();
    view.wait_hydrated().await;

    controller.on_toggle_changed(ToggleKey::ModeDark, true);
    controller.on_volume_changed(12);
    controller.shutdown().await;
    settle().await;

    assert_eq!(view.shown(), vec![SettingsModel::default()]);
    assert!(!subscription.is_finished());
    subscription.abort();

    let model = SettingsModel::from_snapshot(&store.read_all().await.unwrap());
    assert!(model.mode_dark);
    assert_eq!(model.volume_level, 12);
}

#[tokio::test]
async fn bluetooth_toggle_writes_only_its_key() {
    let store = sqlite_store().await;
    let controller = SettingsController::new(store.clone(), Arc::new(PanelView::default()));

    controller.on_toggle_changed(ToggleKey::EnabledBluetooth, true);
    controller.shutdown().await;

    let snapshot = store.read_all().await.unwrap();
    assert_eq!(
        snapshot,
        PreferenceSnapshot::new().with("enabled_bluetooth", PreferenceValue::Bool(true))
    );
}

#[tokio::test]
async fn quick_volume_changes_persist_last_value() {
    let store = sqlite_store().await;
    let controller = SettingsController::new(store.clone(), Arc::new(PanelView::default()));

    controller.on_volume_changed(5);
    controller.on_volume_changed(9);
    controller.shutdown().await;

    let snapshot = store.read_all().await.unwrap();
    assert_eq!(snapshot.get("volume_level"), Some(PreferenceValue::Int(9)));
    assert_eq!(snapshot.len(), 1);
}

#[tokio::test]
async fn new_controller_hydrates_from_previous_session() {
    let store = Arc::new(MemoryPreferenceStore::new());

    let first = SettingsController::new(store.clone(), Arc::new(PanelView::default()));
    first.on_toggle_changed(ToggleKey::EnabledVibrationPhone, true);
    first.on_volume_changed(30);
    first.shutdown().await;

    let view = Arc::new(PanelView::default());
    let second = SettingsController::new(store, view.clone());
    let subscription = second.hydrate();
    view.wait_hydrated().await;

    assert_eq!(
        view.shown(),
        vec![SettingsModel {
            enabled_vibration_phone: true,
            volume_level: 30,
            ..SettingsModel::default()
        }]
    );
    subscription.abort();
}
