//! Paths command handler.
//!
//! Displays the resolved data directory and database path for diagnostics.

use anyhow::Result;

use crate::bootstrap::CliConfig;

/// Execute the paths command.
///
/// Prints `key = value` lines. Does not need a bootstrapped context, so it
/// works even when the database cannot be opened.
pub fn execute(config: &CliConfig) -> Result<()> {
    if config.ephemeral {
        println!("database = (in-memory)");
        return Ok(());
    }

    let db_path = config.database_path()?;
    if let Some(data_dir) = db_path.parent().and_then(|data| data.parent()) {
        println!("data_dir = {}", data_dir.display());
    }
    println!("database = {}", db_path.display());
    Ok(())
}
