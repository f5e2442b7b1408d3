//! `pwvault copy` — put one entry's password on the clipboard.

use crate::cli::output;
use crate::cli::{entry_index, load_settings, unlock_store, Cli};
use crate::errors::{PwVaultError, Result};
use crate::surfaces::SystemClipboard;

/// Execute the `copy` command.
///
/// A clipboard failure is reported as a warning rather than an error;
/// decryption failures still fail the command.
pub fn execute(cli: &Cli, number: usize) -> Result<()> {
    let settings = load_settings()?;
    let store = unlock_store(cli, &settings)?;

    let index = entry_index(&store, number)?;
    let mut clipboard = SystemClipboard::new();

    match store.copy(index, &mut clipboard) {
        Ok(()) => output::success("Copied to clipboard!"),
        Err(PwVaultError::ClipboardError(msg)) => output::warning(&msg),
        Err(e) => return Err(e),
    }

    Ok(())
}
