//! `pwvault delete` — remove an entry from the vault.

use crate::cli::output;
use crate::cli::{entry_index, load_settings, unlock_store, Cli};
use crate::errors::Result;
use crate::surfaces::{AlwaysConfirm, Confirm, DialoguerConfirm};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, number: usize, force: bool) -> Result<()> {
    let settings = load_settings()?;
    let mut store = unlock_store(cli, &settings)?;

    let index = entry_index(&store, number)?;

    // Unless --force is set, ask for confirmation before deleting.
    let confirm: &dyn Confirm = if force {
        &AlwaysConfirm
    } else {
        &DialoguerConfirm
    };

    if store.delete(index, confirm)? {
        output::success(&format!("Deleted entry #{number} ({} left)", store.len()));
    } else {
        output::info("Cancelled.");
    }

    Ok(())
}
