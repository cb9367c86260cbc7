//! Volume command handler.

use std::sync::Arc;

use anyhow::Result;
use oscuro_core::NoopView;

use crate::bootstrap::CliContext;

/// Move the slider. The parser has already enforced the slider's bounds.
pub async fn execute(ctx: &CliContext, level: i64) -> Result<()> {
    let controller = ctx.controller(Arc::new(NoopView::new()));
    controller.on_volume_changed(level);
    controller.shutdown().await;

    println!("✓ Volume set to {level}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::bootstrap_with;
    use oscuro_core::PreferenceValue;
    use oscuro_db::StoreFactory;

    #[tokio::test]
    async fn test_last_volume_wins() {
        let ctx = bootstrap_with(StoreFactory::memory_store());

        execute(&ctx, 5).await.unwrap();
        execute(&ctx, 9).await.unwrap();

        let snapshot = ctx.store().read_all().await.unwrap();
        assert_eq!(snapshot.get("volume_level"), Some(PreferenceValue::Int(9)));
    }
}
