//! Settings domain types.
//!
//! This module contains the settings panel model, the stable preference keys
//! and the snapshot type produced by a preference store. These are pure domain
//! types with no infrastructure dependencies.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Volume level used when no value has been persisted yet.
pub const DEFAULT_VOLUME_LEVEL: i64 = 0;

/// Stable identifier of one persisted preference.
///
/// The string form returned by [`PreferenceKey::as_str`] is the key written to
/// the store. It is never versioned or renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PreferenceKey {
    ModeDark,
    EnabledBluetooth,
    EnabledVibrationPhone,
    VolumeLevel,
}

impl PreferenceKey {
    /// All keys of the settings schema, in display order.
    pub const ALL: [Self; 4] = [
        Self::ModeDark,
        Self::EnabledBluetooth,
        Self::EnabledVibrationPhone,
        Self::VolumeLevel,
    ];

    /// The store identifier for this key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ModeDark => "mode_dark",
            Self::EnabledBluetooth => "enabled_bluetooth",
            Self::EnabledVibrationPhone => "enabled_vibration_phone",
            Self::VolumeLevel => "volume_level",
        }
    }

    /// The value a field takes when the store holds nothing usable for it.
    pub const fn default_value(self) -> PreferenceValue {
        match self {
            Self::ModeDark | Self::EnabledBluetooth | Self::EnabledVibrationPhone => {
                PreferenceValue::Bool(false)
            }
            Self::VolumeLevel => PreferenceValue::Int(DEFAULT_VOLUME_LEVEL),
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The boolean subset of the schema, one per switch control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleKey {
    ModeDark,
    EnabledBluetooth,
    EnabledVibrationPhone,
}

impl From<ToggleKey> for PreferenceKey {
    fn from(key: ToggleKey) -> Self {
        match key {
            ToggleKey::ModeDark => Self::ModeDark,
            ToggleKey::EnabledBluetooth => Self::EnabledBluetooth,
            ToggleKey::EnabledVibrationPhone => Self::EnabledVibrationPhone,
        }
    }
}

/// A typed scalar stored under a preference key.
///
/// Serialized untagged so a stored value reads as plain JSON (`true`, `7`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferenceValue {
    Bool(bool),
    Int(i64),
}

impl PreferenceValue {
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(value),
            Self::Int(_) => None,
        }
    }

    pub const fn as_int(self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(value),
            Self::Bool(_) => None,
        }
    }
}

impl fmt::Display for PreferenceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
        }
    }
}

/// A complete read of every entry held by a preference store at one instant.
///
/// Keys outside the settings schema are carried along untouched; the model
/// mapping ignores them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceSnapshot {
    entries: BTreeMap<String, PreferenceValue>,
}

impl PreferenceSnapshot {
    /// Create an empty snapshot (first-ever run).
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<PreferenceValue> {
        self.entries.get(key).copied()
    }

    /// Builder-style insert, mostly useful in tests and adapters.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: PreferenceValue) -> Self {
        self.entries.insert(key.into(), value);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Typed boolean read; `None` when absent or stored with another type.
    fn bool_field(&self, key: PreferenceKey) -> Option<bool> {
        let value = self.get(key.as_str())?;
        let typed = value.as_bool();
        if typed.is_none() {
            tracing::warn!(key = %key, stored = %value, "Ignoring preference with unexpected type");
        }
        typed
    }

    /// Typed integer read; `None` when absent or stored with another type.
    fn int_field(&self, key: PreferenceKey) -> Option<i64> {
        let value = self.get(key.as_str())?;
        let typed = value.as_int();
        if typed.is_none() {
            tracing::warn!(key = %key, stored = %value, "Ignoring preference with unexpected type");
        }
        typed
    }
}

impl FromIterator<(String, PreferenceValue)> for PreferenceSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, PreferenceValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// The settings shown by the panel, as one consistent snapshot.
///
/// Every field has a total default, so a model can always be built from any
/// store contents, including an empty store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsModel {
    /// Dark theme enabled.
    pub mode_dark: bool,
    /// Bluetooth feature enabled.
    pub enabled_bluetooth: bool,
    /// Haptic feedback enabled.
    pub enabled_vibration_phone: bool,
    /// Volume; its range is owned by the slider control.
    pub volume_level: i64,
}

impl SettingsModel {
    /// Build a model from a store snapshot, defaulting each field on its own.
    ///
    /// A missing key and a key stored with the wrong type both fall back to
    /// that field's default; other fields keep their stored values.
    pub fn from_snapshot(snapshot: &PreferenceSnapshot) -> Self {
        Self {
            mode_dark: snapshot
                .bool_field(PreferenceKey::ModeDark)
                .unwrap_or(false),
            enabled_bluetooth: snapshot
                .bool_field(PreferenceKey::EnabledBluetooth)
                .unwrap_or(false),
            enabled_vibration_phone: snapshot
                .bool_field(PreferenceKey::EnabledVibrationPhone)
                .unwrap_or(false),
            volume_level: snapshot
                .int_field(PreferenceKey::VolumeLevel)
                .unwrap_or(DEFAULT_VOLUME_LEVEL),
        }
    }

    /// Value of a single field.
    pub const fn value(&self, key: PreferenceKey) -> PreferenceValue {
        match key {
            PreferenceKey::ModeDark => PreferenceValue::Bool(self.mode_dark),
            PreferenceKey::EnabledBluetooth => PreferenceValue::Bool(self.enabled_bluetooth),
            PreferenceKey::EnabledVibrationPhone => {
                PreferenceValue::Bool(self.enabled_vibration_phone)
            }
            PreferenceKey::VolumeLevel => PreferenceValue::Int(self.volume_level),
        }
    }

    /// The four `(key, value)` pairs of this model.
    pub fn entries(&self) -> Vec<(String, PreferenceValue)> {
        PreferenceKey::ALL
            .into_iter()
            .map(|key| (key.as_str().to_string(), self.value(key)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_yields_defaults() {
        let model = SettingsModel::from_snapshot(&PreferenceSnapshot::new());
        assert_eq!(
            model,
            SettingsModel {
                mode_dark: false,
                enabled_bluetooth: false,
                enabled_vibration_phone: false,
                volume_level: 0,
            }
        );
    }

    #[test]
    fn test_defaults_apply_per_field() {
        let snapshot = PreferenceSnapshot::new()
            .with("volume_level", PreferenceValue::Int(7))
            .with("mode_dark", PreferenceValue::Bool(true));

        let model = SettingsModel::from_snapshot(&snapshot);
        assert!(model.mode_dark);
        assert!(!model.enabled_bluetooth);
        assert!(!model.enabled_vibration_phone);
        assert_eq!(model.volume_level, 7);
    }

    #[test]
    fn test_each_missing_key_defaults_alone() {
        let full = SettingsModel {
            mode_dark: true,
            enabled_bluetooth: true,
            enabled_vibration_phone: true,
            volume_level: 42,
        };

        for missing in PreferenceKey::ALL {
            let snapshot: PreferenceSnapshot = full
                .entries()
                .into_iter()
                .filter(|(key, _)| key != missing.as_str())
                .collect();
            let model = SettingsModel::from_snapshot(&snapshot);

            for key in PreferenceKey::ALL {
                let expected = if key == missing {
                    key.default_value()
                } else {
                    full.value(key)
                };
                assert_eq!(model.value(key), expected, "missing {missing}, checking {key}");
            }
        }
    }

    #[test]
    fn test_wrong_type_falls_back_to_default() {
        let snapshot = PreferenceSnapshot::new()
            .with("mode_dark", PreferenceValue::Int(1))
            .with("volume_level", PreferenceValue::Bool(true))
            .with("enabled_bluetooth", PreferenceValue::Bool(true));

        let model = SettingsModel::from_snapshot(&snapshot);
        assert!(!model.mode_dark);
        assert_eq!(model.volume_level, DEFAULT_VOLUME_LEVEL);
        assert!(model.enabled_bluetooth);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let snapshot = PreferenceSnapshot::new().with("legacy_theme", PreferenceValue::Int(3));
        assert_eq!(
            SettingsModel::from_snapshot(&snapshot),
            SettingsModel::default()
        );
    }

    #[test]
    fn test_key_identifiers_are_stable() {
        let names: Vec<_> = PreferenceKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            [
                "mode_dark",
                "enabled_bluetooth",
                "enabled_vibration_phone",
                "volume_level"
            ]
        );
        assert_eq!(PreferenceKey::VolumeLevel.to_string(), "volume_level");
    }

    #[test]
    fn test_toggle_keys_map_to_boolean_fields() {
        for toggle in [
            ToggleKey::ModeDark,
            ToggleKey::EnabledBluetooth,
            ToggleKey::EnabledVibrationPhone,
        ] {
            let key = PreferenceKey::from(toggle);
            assert!(matches!(key.default_value(), PreferenceValue::Bool(false)));
        }
    }

    #[test]
    fn test_value_json_encoding_is_plain() {
        assert_eq!(
            serde_json::to_string(&PreferenceValue::Bool(true)).unwrap(),
            "true"
        );
        assert_eq!(serde_json::to_string(&PreferenceValue::Int(9)).unwrap(), "9");
        assert_eq!(
            serde_json::from_str::<PreferenceValue>("false").unwrap(),
            PreferenceValue::Bool(false)
        );
        assert_eq!(
            serde_json::from_str::<PreferenceValue>("5").unwrap(),
            PreferenceValue::Int(5)
        );
    }
}
