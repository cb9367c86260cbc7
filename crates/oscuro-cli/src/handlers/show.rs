//! Show command handler.

use std::sync::Arc;

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{PanelControls, TerminalView, render_panel};

/// Hydrate a fresh panel once and return what its controls display.
///
/// A failed read leaves the controls at toolkit defaults; the failure itself
/// has already been logged by the controller.
pub async fn hydrate_controls(ctx: &CliContext) -> PanelControls {
    let view = Arc::new(TerminalView::new());
    let controller = ctx.controller(view.clone());

    let mut subscription = controller.hydrate();
    let hydrated = view.wait_hydrated(&mut subscription).await;
    subscription.abort();
    controller.shutdown().await;

    hydrated.map(PanelControls::from).unwrap_or_default()
}

/// Execute the show command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let controls = hydrate_controls(ctx).await;
    println!("{}", render_panel(&controls));
    Ok(())
}
