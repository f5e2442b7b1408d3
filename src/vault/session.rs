//! The unlocked-session state machine.
//!
//! ```text
//! Locked --unlock(password)--> [derive key, decrypt every record]
//!        all ok      --> Unlocked
//!        any failure --> Locked + DecryptionFailed
//! Unlocked --lock--> Locked
//! ```
//!
//! Verification happens once, at unlock time. A wrong master password
//! never yields an unlocked session, so nothing undecryptable is shown.

use zeroize::Zeroizing;

use super::record::CredentialRecord;
use crate::crypto::{self, MasterKey};
use crate::errors::{PwVaultError, Result};

/// Whether the vault can currently be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Locked,
    Unlocked,
}

/// In-memory session. Holds the derived key only while unlocked; the
/// master password itself is not kept once the key is derived.
#[derive(Default)]
pub struct VaultSession {
    key: Option<MasterKey>,
}

impl std::fmt::Debug for VaultSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultSession")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl VaultSession {
    /// A new session starts locked.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        if self.key.is_some() {
            SessionState::Unlocked
        } else {
            SessionState::Locked
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.state() == SessionState::Unlocked
    }

    /// Try to unlock with `password`, verifying it against `records`.
    ///
    /// An empty password is rejected without touching the current state.
    /// Otherwise the session ends up `Unlocked` only if every record
    /// decrypts; the first failure locks the session.
    pub fn unlock(&mut self, password: &str, records: &[CredentialRecord]) -> Result<()> {
        if password.is_empty() {
            return Err(PwVaultError::EmptyMasterPassword);
        }

        let key = crypto::derive_key(password)?;

        for (index, record) in records.iter().enumerate() {
            if let Err(e) = crypto::decrypt(&record.secret_ciphertext, &key).map(Zeroizing::new) {
                tracing::debug!(index, "record failed verification during unlock");
                self.lock();
                return Err(e);
            }
        }

        self.key = Some(key);
        tracing::info!(records = records.len(), "vault unlocked");
        Ok(())
    }

    /// Forget the derived key.
    pub fn lock(&mut self) {
        if self.key.take().is_some() {
            tracing::info!("vault locked");
        }
    }

    /// The key for this session, or `VaultLocked`.
    pub fn key(&self) -> Result<&MasterKey> {
        self.key.as_ref().ok_or(PwVaultError::VaultLocked)
    }
}
