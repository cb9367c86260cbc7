//! Command handlers for the settings panel.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Turn CLI input into control events
//!   2. Hand them to a controller or service built from the context
//!   3. Format output for the terminal
//!
//! Handlers should NOT:
//! - Access the store directly
//! - Open database connections

pub mod panel;
pub mod paths;
pub mod reset;
pub mod show;
pub mod toggle;
pub mod volume;
