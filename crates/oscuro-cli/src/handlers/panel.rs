//! Interactive panel session.
//!
//! The panel is hydrated once, then every line typed at the prompt is one
//! control event. Line editing runs on a blocking thread, which plays the
//! role of the UI thread: it updates the on-screen controls immediately and
//! hands each change to the controller without waiting for storage.

use std::sync::Arc;

use anyhow::Result;
use oscuro_core::{SettingsController, ToggleKey};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::bootstrap::CliContext;
use crate::presentation::{PanelControls, TerminalView, VOLUME_MAX, VOLUME_MIN, render_panel};

const HELP: &str = "\
Commands:
  dark on|off         flip the dark mode switch
  bluetooth on|off    flip the bluetooth switch
  vibration on|off    flip the vibration switch
  volume <0-100>      move the volume slider
  show                redraw the panel
  help                show this help
  quit                leave the panel";

/// One line of panel input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    Toggle(ToggleKey, bool),
    Volume(i64),
    Show,
    Help,
    Quit,
}

/// Parse a line typed at the panel prompt.
pub fn parse_panel_command(line: &str) -> Result<PanelCommand, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(PanelCommand::Show);
    };
    let arg = words.next();
    if words.next().is_some() {
        return Err(format!("too many arguments: {line}"));
    }

    let toggle = |key: ToggleKey| match arg {
        Some("on") => Ok(PanelCommand::Toggle(key, true)),
        Some("off") => Ok(PanelCommand::Toggle(key, false)),
        _ => Err(format!("usage: {head} on|off")),
    };

    match (head.to_lowercase().as_str(), arg) {
        ("dark" | "dark-mode", _) => toggle(ToggleKey::ModeDark),
        ("bluetooth", _) => toggle(ToggleKey::EnabledBluetooth),
        ("vibration", _) => toggle(ToggleKey::EnabledVibrationPhone),
        ("volume", Some(raw)) => match raw.parse::<i64>() {
            Ok(level) if (VOLUME_MIN..=VOLUME_MAX).contains(&level) => {
                Ok(PanelCommand::Volume(level))
            }
            _ => Err(format!("volume must be between {VOLUME_MIN} and {VOLUME_MAX}")),
        },
        ("volume", None) => Err("usage: volume <0-100>".to_string()),
        ("show", None) => Ok(PanelCommand::Show),
        ("help" | "?", None) => Ok(PanelCommand::Help),
        ("quit" | "exit", None) => Ok(PanelCommand::Quit),
        _ => Err(format!("unknown command: {line} (try 'help')")),
    }
}

/// Apply one command to the displayed controls and forward it to the controller.
///
/// Returns `false` when the session should end.
pub fn dispatch(
    command: PanelCommand,
    controls: &mut PanelControls,
    controller: &SettingsController,
) -> bool {
    match command {
        PanelCommand::Toggle(key, on) => {
            controls.set_switch(key, on);
            controller.on_toggle_changed(key, on);
            println!("{}", render_panel(controls));
        }
        PanelCommand::Volume(level) => {
            controls.set_volume(level);
            controller.on_volume_changed(level);
            println!("{}", render_panel(controls));
        }
        PanelCommand::Show => println!("{}", render_panel(controls)),
        PanelCommand::Help => println!("{HELP}"),
        PanelCommand::Quit => return false,
    }
    true
}

fn run_editor(mut controls: PanelControls, controller: &SettingsController) -> Result<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline("oscuro> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                match parse_panel_command(&line) {
                    Ok(command) => {
                        if !dispatch(command, &mut controls, controller) {
                            break;
                        }
                    }
                    Err(message) => eprintln!("{message}"),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

/// Execute the panel command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let view = Arc::new(TerminalView::new());
    let controller = ctx.controller(view.clone());

    // Stays subscribed for the whole session; later snapshots are echoes of
    // our own writes and are dropped by the controller.
    let mut subscription = controller.hydrate();
    let controls = view
        .wait_hydrated(&mut subscription)
        .await
        .map(PanelControls::from)
        .unwrap_or_default();

    println!("{}", render_panel(&controls));
    println!("Type 'help' for commands.");

    let (controller, outcome) = tokio::task::spawn_blocking(move || {
        let outcome = run_editor(controls, &controller);
        (controller, outcome)
    })
    .await?;

    subscription.abort();
    controller.shutdown().await;
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::bootstrap_with;
    use oscuro_core::{NoopView, PreferenceValue};
    use oscuro_db::StoreFactory;

    #[test]
    fn test_parse_switch_commands() {
        assert_eq!(
            parse_panel_command("dark on"),
            Ok(PanelCommand::Toggle(ToggleKey::ModeDark, true))
        );
        assert_eq!(
            parse_panel_command("  Bluetooth   off "),
            Ok(PanelCommand::Toggle(ToggleKey::EnabledBluetooth, false))
        );
        assert_eq!(
            parse_panel_command("vibration on"),
            Ok(PanelCommand::Toggle(ToggleKey::EnabledVibrationPhone, true))
        );
        assert!(parse_panel_command("dark maybe").is_err());
        assert!(parse_panel_command("dark").is_err());
    }

    #[test]
    fn test_parse_volume_respects_slider_bounds() {
        assert_eq!(parse_panel_command("volume 7"), Ok(PanelCommand::Volume(7)));
        assert_eq!(parse_panel_command("volume 0"), Ok(PanelCommand::Volume(0)));
        assert!(parse_panel_command("volume 101").is_err());
        assert!(parse_panel_command("volume loud").is_err());
        assert!(parse_panel_command("volume").is_err());
    }

    #[test]
    fn test_parse_session_commands() {
        assert_eq!(parse_panel_command(""), Ok(PanelCommand::Show));
        assert_eq!(parse_panel_command("show"), Ok(PanelCommand::Show));
        assert_eq!(parse_panel_command("?"), Ok(PanelCommand::Help));
        assert_eq!(parse_panel_command("exit"), Ok(PanelCommand::Quit));
        assert!(parse_panel_command("quit now").is_err());
        assert!(parse_panel_command("brightness 3").is_err());
    }

    #[tokio::test]
    async fn test_dispatch_updates_controls_and_store() {
        let ctx = bootstrap_with(StoreFactory::memory_store());
        let controller = ctx.controller(Arc::new(NoopView::new()));
        let mut controls = PanelControls::default();

        assert!(dispatch(
            PanelCommand::Toggle(ToggleKey::ModeDark, true),
            &mut controls,
            &controller
        ));
        assert!(dispatch(PanelCommand::Volume(40), &mut controls, &controller));
        assert!(!dispatch(PanelCommand::Quit, &mut controls, &controller));
        controller.shutdown().await;

        assert!(controls.dark_mode);
        assert_eq!(controls.volume, 40);

        let snapshot = ctx.store().read_all().await.unwrap();
        assert_eq!(snapshot.get("mode_dark"), Some(PreferenceValue::Bool(true)));
        assert_eq!(snapshot.get("volume_level"), Some(PreferenceValue::Int(40)));
    }
}
