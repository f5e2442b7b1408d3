//! `pwvault generate` — print a random password without touching the vault.

use crate::cli::load_settings;
use crate::crypto::generate_password;
use crate::errors::Result;

/// Execute the `generate` command.
pub fn execute(length: Option<usize>) -> Result<()> {
    let settings = load_settings()?;
    let password = generate_password(length.unwrap_or(settings.generated_length))?;
    println!("{}", password.as_str());
    Ok(())
}
