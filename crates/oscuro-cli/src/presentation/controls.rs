//! Panel control state and formatting.

use std::fmt::Write;

use oscuro_core::{SettingsModel, ToggleKey};

/// Lowest position of the volume slider.
pub const VOLUME_MIN: i64 = 0;
/// Highest position of the volume slider.
pub const VOLUME_MAX: i64 = 100;

const SLIDER_WIDTH: i64 = 20;

/// What the four controls currently display.
///
/// `Default` is the toolkit default: every switch off, slider at its minimum.
/// The panel updates this optimistically on every user event and never rolls
/// it back when a write fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelControls {
    pub dark_mode: bool,
    pub bluetooth: bool,
    pub vibration: bool,
    pub volume: i64,
}

impl Default for PanelControls {
    fn default() -> Self {
        Self {
            dark_mode: false,
            bluetooth: false,
            vibration: false,
            volume: VOLUME_MIN,
        }
    }
}

impl From<SettingsModel> for PanelControls {
    fn from(model: SettingsModel) -> Self {
        Self {
            dark_mode: model.mode_dark,
            bluetooth: model.enabled_bluetooth,
            vibration: model.enabled_vibration_phone,
            // A stored value outside the slider's range is pinned to the nearest end.
            volume: model.volume_level.clamp(VOLUME_MIN, VOLUME_MAX),
        }
    }
}

impl PanelControls {
    pub const fn set_switch(&mut self, key: ToggleKey, on: bool) {
        match key {
            ToggleKey::ModeDark => self.dark_mode = on,
            ToggleKey::EnabledBluetooth => self.bluetooth = on,
            ToggleKey::EnabledVibrationPhone => self.vibration = on,
        }
    }

    pub const fn set_volume(&mut self, level: i64) {
        self.volume = level;
    }
}

fn switch(on: bool) -> &'static str {
    if on { "[ on]" } else { "[off]" }
}

fn slider(level: i64) -> String {
    let filled = (level - VOLUME_MIN) * SLIDER_WIDTH / (VOLUME_MAX - VOLUME_MIN);
    let filled = usize::try_from(filled.clamp(0, SLIDER_WIDTH)).unwrap_or_default();
    let empty = usize::try_from(SLIDER_WIDTH).unwrap_or_default() - filled;
    format!("[{}{}] {level}", "#".repeat(filled), "-".repeat(empty))
}

/// Format the panel as it would appear on screen.
pub fn render_panel(controls: &PanelControls) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Dark mode   {}", switch(controls.dark_mode));
    let _ = writeln!(out, "  Bluetooth   {}", switch(controls.bluetooth));
    let _ = writeln!(out, "  Vibration   {}", switch(controls.vibration));
    let _ = write!(out, "  Volume      {}", slider(controls.volume));
    out
}
