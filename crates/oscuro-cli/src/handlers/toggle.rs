//! Toggle command handler.

use std::sync::Arc;

use anyhow::Result;
use oscuro_core::NoopView;

use crate::bootstrap::CliContext;
use crate::commands::{SwitchArg, SwitchState};

/// Flip one switch and wait for the write to be attempted.
///
/// A failed write is logged by the controller, not reported here.
pub async fn execute(ctx: &CliContext, switch: SwitchArg, state: SwitchState) -> Result<()> {
    let controller = ctx.controller(Arc::new(NoopView::new()));
    controller.on_toggle_changed(switch.into(), state.is_on());
    controller.shutdown().await;

    let position = if state.is_on() { "on" } else { "off" };
    println!("✓ {} switched {position}", switch.label());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::bootstrap_with;
    use oscuro_core::PreferenceValue;
    use oscuro_db::StoreFactory;

    #[tokio::test]
    async fn test_toggle_persists_only_that_switch() {
        let ctx = bootstrap_with(StoreFactory::memory_store());

        execute(&ctx, SwitchArg::Vibration, SwitchState::On)
            .await
            .unwrap();

        let snapshot = ctx.store().read_all().await.unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(
            snapshot.get("enabled_vibration_phone"),
            Some(PreferenceValue::Bool(true))
        );
    }
}
