//! `pwvault shell` — an interactive session over one unlocked vault.
//!
//! The vault is unlocked once at startup and stays unlocked until the
//! user types `lock` or leaves. Errors are printed and the loop goes on.

use dialoguer::Input;

use crate::cli::commands::add::prompt_secret;
use crate::cli::commands::list::build_rows;
use crate::cli::output;
use crate::cli::{entry_index, load_settings, open_store, prompt_master_password, Cli};
use crate::config::Settings;
use crate::errors::{PwVaultError, Result};
use crate::storage::Storage;
use crate::surfaces::{Clipboard, Confirm, DialoguerConfirm, SystemClipboard};
use crate::vault::{validate_labels, VaultStore};

/// A parsed shell line.
#[derive(Debug, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    List(String),
    Add,
    Show(usize),
    Copy(usize),
    Delete(usize),
    Lock,
    Unlock,
    Quit,
    Empty,
}

/// Parse one line of shell input.
pub fn parse_line(line: &str) -> Result<ShellCommand> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let number = |what: &str| -> Result<usize> {
        rest.parse::<usize>().map_err(|_| {
            PwVaultError::CommandFailed(format!("usage: {what} <NUMBER>"))
        })
    };

    Ok(match verb.to_lowercase().as_str() {
        "" => ShellCommand::Empty,
        "help" | "?" => ShellCommand::Help,
        "list" | "ls" | "search" => ShellCommand::List(rest.to_string()),
        "add" => ShellCommand::Add,
        "show" => ShellCommand::Show(number("show")?),
        "copy" => ShellCommand::Copy(number("copy")?),
        "delete" | "rm" => ShellCommand::Delete(number("delete")?),
        "lock" => ShellCommand::Lock,
        "unlock" => ShellCommand::Unlock,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => {
            return Err(PwVaultError::CommandFailed(format!(
                "unknown command '{other}' — type `help`"
            )))
        }
    })
}

/// Execute the `shell` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = load_settings()?;
    let mut store = open_store(cli, &settings)?;
    let mut clipboard = SystemClipboard::new();

    try_unlock(&mut store);
    print_help();

    loop {
        let marker = if store.is_unlocked() { "unlocked" } else { "locked" };
        let line = match Input::<String>::new()
            .with_prompt(format!("pwvault [{marker}]"))
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            // Closed terminal or Ctrl-D.
            Err(_) => break,
        };

        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(e) => {
                output::error(&e.to_string());
                continue;
            }
        };

        match command {
            ShellCommand::Quit => break,
            ShellCommand::Unlock => try_unlock(&mut store),
            other => {
                if let Err(e) = run_command(
                    &mut store,
                    other,
                    &settings,
                    &mut clipboard,
                    &DialoguerConfirm,
                ) {
                    output::error(&e.to_string());
                }
            }
        }
    }

    store.lock();
    output::info("Vault locked.");
    Ok(())
}

/// Prompt for the master password and unlock. Failures are printed and
/// leave the vault locked.
fn try_unlock<S: Storage>(store: &mut VaultStore<S>) {
    let result = prompt_master_password(store.is_empty()).and_then(|pw| store.unlock(&pw));
    match result {
        Ok(()) => output::success(&format!("Vault unlocked ({} entries)", store.len())),
        Err(e) => output::error(&e.to_string()),
    }
}

/// Run a command that needs no further terminal interaction besides
/// the surfaces passed in.
pub(crate) fn run_command<S: Storage>(
    store: &mut VaultStore<S>,
    command: ShellCommand,
    settings: &Settings,
    clipboard: &mut dyn Clipboard,
    confirm: &dyn Confirm,
) -> Result<()> {
    match command {
        ShellCommand::Help => print_help(),
        ShellCommand::Empty | ShellCommand::Quit | ShellCommand::Unlock => {}
        ShellCommand::List(query) => {
            let rows = build_rows(store, &query, false, &settings.mask)?;
            output::print_entries_table(&rows);
        }
        ShellCommand::Add => {
            // Check the lock before asking for three fields.
            if !store.is_unlocked() {
                return Err(PwVaultError::VaultLocked);
            }
            let service = prompt_field("Service")?;
            let username = prompt_field("Username")?;
            validate_labels(&service, &username)?;
            let secret = prompt_secret(&service)?;
            let index = store.add(&service, &username, &secret)?;
            output::success(&format!("Saved entry #{}", index + 1));
        }
        ShellCommand::Show(number) => {
            let index = checked_index(store, number)?;
            let secret = store.reveal(index)?;
            println!("{}", secret.as_str());
        }
        ShellCommand::Copy(number) => {
            let index = checked_index(store, number)?;
            match store.copy(index, clipboard) {
                Ok(()) => output::success("Copied to clipboard!"),
                Err(PwVaultError::ClipboardError(msg)) => output::warning(&msg),
                Err(e) => return Err(e),
            }
        }
        ShellCommand::Delete(number) => {
            let index = checked_index(store, number)?;
            if store.delete(index, confirm)? {
                output::success(&format!("Deleted entry #{number}"));
            } else {
                output::info("Cancelled.");
            }
        }
        ShellCommand::Lock => {
            store.lock();
            output::info("Vault locked.");
        }
    }
    Ok(())
}

/// Entry numbers are only meaningful while the list can be seen.
fn checked_index<S: Storage>(store: &VaultStore<S>, number: usize) -> Result<usize> {
    if !store.is_unlocked() {
        return Err(PwVaultError::VaultLocked);
    }
    entry_index(store, number)
}

fn prompt_field(label: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| PwVaultError::CommandFailed(format!("input prompt: {e}")))
}

fn print_help() {
    output::tip("Commands: list [TEXT], add, show N, copy N, delete N, lock, unlock, quit");
}
