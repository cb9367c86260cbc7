//! User input utilities for interactive command-line prompts.

use std::io::{self, Write};

use crate::error::CliError;

/// Prompts the user for a yes/no confirmation.
///
/// Only an explicit `y` or `yes` (any case) counts as confirmation.
///
/// # Errors
///
/// Returns `CliError::Io` if the terminal cannot be read or written.
pub fn prompt_confirmation(prompt: &str) -> Result<bool, CliError> {
    print!("{prompt} [y/N]: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(is_confirmation(&input))
}

fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
