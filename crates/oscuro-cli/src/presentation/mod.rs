//! Terminal rendition of the settings panel.
//!
//! The panel owns its controls' state and bounds; the controller only pushes
//! a hydrated model in and receives change events out.

mod controls;
mod terminal_view;

pub use controls::{PanelControls, VOLUME_MAX, VOLUME_MIN, render_panel};
pub use terminal_view::TerminalView;
