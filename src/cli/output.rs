//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::CredentialRecord;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// One line of the entries table.
pub struct EntryRow<'a> {
    /// Index in the full record list (printed 1-based).
    pub index: usize,
    pub record: &'a CredentialRecord,
    /// Text for the password column: plaintext, a mask, or an error marker.
    pub secret: String,
}

/// Build the entries table (#, Service, Username, Password).
pub fn entries_table(rows: &[EntryRow<'_>]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Service", "Username", "Password"]);

    for row in rows {
        table.add_row(vec![
            (row.index + 1).to_string(),
            row.record.service.clone(),
            row.record.username.clone(),
            row.secret.clone(),
        ]);
    }

    table
}

/// Print the entries table, or a hint when there is nothing to show.
pub fn print_entries_table(rows: &[EntryRow<'_>]) {
    if rows.is_empty() {
        info("No saved passwords found.");
        tip("Run `pwvault add <SERVICE> <USERNAME>` to add one.");
        return;
    }

    println!("{}", entries_table(rows));
}
