use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::crypto::generator::{MAX_LENGTH, MIN_LENGTH};
use crate::errors::{PwVaultError, Result};

/// User-level configuration, loaded from `.pwvault.toml`.
///
/// Every field has a sensible default so pwvault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to the working directory) holding the vault.
    #[serde(default = "default_vault_dir")]
    pub vault_dir: String,

    /// Length of passwords produced by `--generate`.
    #[serde(default = "default_generated_length")]
    pub generated_length: usize,

    /// Placeholder shown instead of a hidden password.
    #[serde(default = "default_mask")]
    pub mask: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_dir() -> String {
    ".pwvault".to_string()
}

fn default_generated_length() -> usize {
    20
}

fn default_mask() -> String {
    "••••••••".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_dir: default_vault_dir(),
            generated_length: default_generated_length(),
            mask: default_mask(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".pwvault.toml";

    /// Load settings from `<dir>/.pwvault.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed or holds out-of-range
    /// values, an error is returned.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PwVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        settings.validate()?;
        tracing::debug!(path = %config_path.display(), "loaded settings");
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.generated_length) {
            return Err(PwVaultError::ConfigError(format!(
                "generated_length must be between {MIN_LENGTH} and {MAX_LENGTH} (got {})",
                self.generated_length
            )));
        }
        if self.vault_dir.trim().is_empty() {
            return Err(PwVaultError::ConfigError(
                "vault_dir cannot be empty".into(),
            ));
        }
        Ok(())
    }

    /// Resolve the vault directory against `base`.
    ///
    /// Example: `base/.pwvault`
    pub fn vault_dir_in(&self, base: &Path) -> PathBuf {
        base.join(&self.vault_dir)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
