//! `pwvault list` — display entries in a table.

use crate::cli::output::{self, EntryRow};
use crate::cli::{load_settings, unlock_store, Cli};
use crate::errors::Result;
use crate::storage::Storage;
use crate::vault::VaultStore;

/// Execute the `list` command.
pub fn execute(cli: &Cli, search: Option<&str>, reveal: bool) -> Result<()> {
    let settings = load_settings()?;
    let store = unlock_store(cli, &settings)?;

    let rows = build_rows(&store, search.unwrap_or(""), reveal, &settings.mask)?;

    match search {
        Some(query) => output::info(&format!(
            "{} of {} entries match '{query}'",
            rows.len(),
            store.len()
        )),
        None => output::info(&format!("{} entries", store.len())),
    }
    output::print_entries_table(&rows);

    Ok(())
}

/// Filter the store and fill the password column.
///
/// A record that fails to decrypt is marked in its own row; the other
/// rows are unaffected.
pub(crate) fn build_rows<'a, S: Storage>(
    store: &'a VaultStore<S>,
    query: &str,
    reveal: bool,
    mask: &str,
) -> Result<Vec<EntryRow<'a>>> {
    let hits = store.search(query)?;
    let mut rows = Vec::with_capacity(hits.len());

    for (index, record) in hits {
        let secret = if reveal {
            match store.reveal(index) {
                Ok(plain) => plain.as_str().to_string(),
                Err(e) => {
                    output::warning(&format!("#{}: {e}", index + 1));
                    "<decryption failed>".to_string()
                }
            }
        } else {
            mask.to_string()
        };
        rows.push(EntryRow {
            index,
            record,
            secret,
        });
    }

    Ok(rows)
}
