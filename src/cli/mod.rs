//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{PwVaultError, Result};
use crate::storage::FileStorage;
use crate::vault::VaultStore;

/// Environment variable that supplies the master password non-interactively.
pub const PASSWORD_ENV: &str = "PWVAULT_PASSWORD";

/// pwvault CLI: encrypted password vault.
#[derive(Parser)]
#[command(name = "pwvault", about = "Encrypted password vault", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault directory (default: .pwvault, or `vault_dir` in .pwvault.toml)
    #[arg(long, env = "PWVAULT_DIR", global = true)]
    pub vault_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Add a new entry
    Add {
        /// Service name (e.g. GitHub)
        service: String,
        /// Username for the service
        username: String,
        /// Password (omit for interactive prompt)
        #[arg(short, long, conflicts_with = "generate")]
        password: Option<String>,
        /// Generate a random password instead of prompting
        #[arg(short, long)]
        generate: bool,
        /// Length of the generated password
        #[arg(short, long, requires = "generate")]
        length: Option<usize>,
    },

    /// List entries, optionally filtered by service
    List {
        /// Only show services containing this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
        /// Show decrypted passwords instead of a mask
        #[arg(long)]
        reveal: bool,
    },

    /// Show the password of one entry
    Show {
        /// Entry number as printed by `list`
        number: usize,
    },

    /// Copy the password of one entry to the clipboard
    Copy {
        /// Entry number as printed by `list`
        number: usize,
    },

    /// Delete an entry
    Delete {
        /// Entry number as printed by `list`
        number: usize,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Open an interactive session (unlock once, lock on exit)
    Shell,

    /// Print a random password
    Generate {
        /// Password length (default: `generated_length` in settings)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load settings from the working directory.
pub fn load_settings() -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    Settings::load(&cwd)
}

/// Resolve the vault directory: `--vault-dir` / `PWVAULT_DIR` first,
/// then the settings file, relative to the working directory.
pub fn vault_dir(cli: &Cli, settings: &Settings) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(match &cli.vault_dir {
        Some(dir) => cwd.join(dir),
        None => settings.vault_dir_in(&cwd),
    })
}

/// Load the (locked) vault for this invocation.
pub fn open_store(cli: &Cli, settings: &Settings) -> Result<VaultStore<FileStorage>> {
    let dir = vault_dir(cli, settings)?;
    VaultStore::load(FileStorage::new(dir))
}

/// Load the vault and unlock it with the master password.
pub fn unlock_store(cli: &Cli, settings: &Settings) -> Result<VaultStore<FileStorage>> {
    let mut store = open_store(cli, settings)?;
    let password = prompt_master_password(store.is_empty())?;
    store.unlock(&password)?;
    Ok(store)
}

/// Get the master password, trying in order:
/// 1. `PWVAULT_PASSWORD` env var (scripts/CI)
/// 2. Interactive prompt
///
/// An empty vault accepts any password, so in that case the prompt asks
/// for confirmation to catch typos before the first entry is sealed.
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_master_password(new_vault: bool) -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let mut prompt = dialoguer::Password::new()
        .with_prompt("Master password")
        .allow_empty_password(true);
    if new_vault {
        prompt = prompt.with_confirmation(
            "Confirm master password",
            "Passwords do not match, try again",
        );
    }

    let pw = prompt
        .interact()
        .map_err(|e| PwVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Translate a 1-based entry number from the command line into an index.
pub fn entry_index<S: crate::storage::Storage>(
    store: &VaultStore<S>,
    number: usize,
) -> Result<usize> {
    if number == 0 || number > store.len() {
        return Err(PwVaultError::CommandFailed(format!(
            "no entry #{number} — run `pwvault list` to see entry numbers"
        )));
    }
    Ok(number - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn entry_numbers_are_one_based() {
        let mut store = VaultStore::load(MemoryStorage::new()).unwrap();
        store.unlock("pw").unwrap();
        store.add("GitHub", "octocat", "hunter2").unwrap();

        assert_eq!(entry_index(&store, 1).unwrap(), 0);
        assert!(entry_index(&store, 0).is_err());
        assert!(entry_index(&store, 2).is_err());
    }

    #[test]
    fn parses_add_with_generate() {
        let cli = Cli::try_parse_from([
            "pwvault", "add", "GitHub", "octocat", "--generate", "--length", "24",
        ])
        .unwrap();
        match cli.command {
            Commands::Add {
                generate, length, ..
            } => {
                assert!(generate);
                assert_eq!(length, Some(24));
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn password_and_generate_conflict() {
        let result = Cli::try_parse_from([
            "pwvault", "add", "GitHub", "octocat", "--password", "x", "--generate",
        ]);
        assert!(result.is_err());
    }
}
