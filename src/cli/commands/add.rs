//! `pwvault add` — encrypt and store a new entry.

use std::io::{self, IsTerminal, Read};

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{load_settings, unlock_store, Cli};
use crate::crypto::generate_password;
use crate::errors::{PwVaultError, Result};
use crate::vault::validate_labels;

/// Execute the `add` command.
pub fn execute(
    cli: &Cli,
    service: &str,
    username: &str,
    password: Option<&str>,
    generate: bool,
    length: Option<usize>,
) -> Result<()> {
    // Reject an incomplete entry before asking for anything else.
    validate_labels(service, username)?;
    let settings = load_settings()?;

    // Determine the secret from one of four sources.
    let secret = if generate {
        // Source 1: Generated.
        generate_password(length.unwrap_or(settings.generated_length))?
    } else if let Some(p) = password {
        // Source 2: Inline value on the command line.
        output::warning("Password provided on command line — it may appear in shell history.");
        Zeroizing::new(p.to_string())
    } else if !io::stdin().is_terminal() {
        // Source 3: Piped input (stdin is not a terminal).
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_to_string(&mut buf)?;
        Zeroizing::new(buf.trim_end_matches(['\r', '\n']).to_string())
    } else {
        // Source 4: Interactive secure prompt (default).
        prompt_secret(service)?
    };

    let mut store = unlock_store(cli, &settings)?;
    let index = store.add(service, username, &secret)?;

    output::success(&format!(
        "Saved entry #{} for '{service}' ({} total)",
        index + 1,
        store.len()
    ));
    if generate {
        output::tip(&format!(
            "Run `pwvault show {}` or `pwvault copy {}` to use the generated password.",
            index + 1,
            index + 1
        ));
    }

    Ok(())
}

/// Prompt for a password with confirmation.
pub(crate) fn prompt_secret(service: &str) -> Result<Zeroizing<String>> {
    let value = dialoguer::Password::new()
        .with_prompt(format!("Password for {service}"))
        .with_confirmation("Confirm password", "Passwords do not match, try again")
        .interact()
        .map_err(|e| PwVaultError::CommandFailed(format!("input prompt: {e}")))?;
    Ok(Zeroizing::new(value))
}
