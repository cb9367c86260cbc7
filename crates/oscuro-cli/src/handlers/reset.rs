//! Reset command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{PanelControls, render_panel};
use crate::utils::input::prompt_confirmation;

/// Execute the reset command.
///
/// Asks for confirmation unless `force` is set.
pub async fn execute(ctx: &CliContext, force: bool) -> Result<()> {
    if !force && !prompt_confirmation("Reset all settings to defaults?")? {
        println!("Reset cancelled.");
        return Ok(());
    }

    let defaults = ctx.settings().reset().await.map_err(CliError::from)?;
    println!("✓ Settings reset to defaults.");
    println!("{}", render_panel(&PanelControls::from(defaults)));
    Ok(())
}
