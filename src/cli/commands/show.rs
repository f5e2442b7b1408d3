//! `pwvault show` — print one entry's password.

use crate::cli::{entry_index, load_settings, unlock_store, Cli};
use crate::errors::Result;

/// Execute the `show` command.
pub fn execute(cli: &Cli, number: usize) -> Result<()> {
    let settings = load_settings()?;
    let store = unlock_store(cli, &settings)?;

    let index = entry_index(&store, number)?;
    let secret = store.reveal(index)?;
    println!("{}", secret.as_str());

    Ok(())
}
