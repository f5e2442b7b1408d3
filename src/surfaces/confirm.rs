//! Confirmation surface — a blocking yes/no prompt.

use dialoguer::Confirm as DialoguerPrompt;

use crate::errors::{PwVaultError, Result};

/// Asks the user to approve a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Terminal prompt that defaults to "no".
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerConfirm;

impl Confirm for DialoguerConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        DialoguerPrompt::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| PwVaultError::CommandFailed(format!("confirm prompt: {e}")))
    }
}

/// Approves everything. Backs `--force`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}
