//! Main commands enum and the switch/slider arguments.
//!
//! Each command maps to one interaction with the settings panel.

use clap::{Subcommand, ValueEnum};

use oscuro_core::ToggleKey;

use crate::presentation::{VOLUME_MAX, VOLUME_MIN};

/// Available commands for the settings panel.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the persisted settings
    Show,

    /// Flip one of the switches
    Toggle {
        /// Which switch to flip
        #[arg(value_enum)]
        switch: SwitchArg,
        /// New switch position
        #[arg(value_enum)]
        state: SwitchState,
    },

    /// Move the volume slider
    Volume {
        /// New volume level
        #[arg(
            value_parser = clap::value_parser!(i64).range(VOLUME_MIN..=VOLUME_MAX),
            allow_negative_numbers = true
        )]
        level: i64,
    },

    /// Reset all settings to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Open an interactive panel session
    Panel,

    /// Show resolved paths for the data directory and database
    Paths,
}

/// The three switches of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SwitchArg {
    DarkMode,
    Bluetooth,
    Vibration,
}

impl SwitchArg {
    /// Label shown next to the switch.
    pub const fn label(self) -> &'static str {
        match self {
            Self::DarkMode => "Dark mode",
            Self::Bluetooth => "Bluetooth",
            Self::Vibration => "Vibration",
        }
    }
}

impl From<SwitchArg> for ToggleKey {
    fn from(arg: SwitchArg) -> Self {
        match arg {
            SwitchArg::DarkMode => Self::ModeDark,
            SwitchArg::Bluetooth => Self::EnabledBluetooth,
            SwitchArg::Vibration => Self::EnabledVibrationPhone,
        }
    }
}

/// Switch position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SwitchState {
    On,
    Off,
}

impl SwitchState {
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}
