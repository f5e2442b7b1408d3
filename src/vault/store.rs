//! High-level vault operations used by CLI commands.
//!
//! `VaultStore` owns the ordered record list, the persistence backend
//! and the session, so the rest of the application can work with
//! simple calls like `store.add("GitHub", "octocat", "hunter2")`.
//!
//! Every mutation builds the new list first, writes it in full, and only
//! then replaces the in-memory list. A failed write leaves the store
//! exactly as it was.

use zeroize::Zeroizing;

use crate::crypto;
use crate::errors::{PwVaultError, Result};
use crate::storage::{Storage, STORAGE_KEY};
use crate::surfaces::{Clipboard, Confirm};

use super::record::{self, CredentialRecord};
use super::session::{SessionState, VaultSession};

/// The main vault handle. Create one with `VaultStore::load`, unlock it,
/// then use its methods to manage entries.
pub struct VaultStore<S: Storage> {
    /// Backend holding the serialized record list.
    storage: S,

    /// Records in insertion order.
    records: Vec<CredentialRecord>,

    /// Lock state and derived key.
    session: VaultSession,
}

impl<S: Storage> VaultStore<S> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Read the record list from `storage`. A missing slot is an empty
    /// vault. The returned store is locked.
    pub fn load(storage: S) -> Result<Self> {
        let records = match storage.get(STORAGE_KEY)? {
            Some(raw) => record::decode_records(&raw)?,
            None => Vec::new(),
        };
        tracing::debug!(records = records.len(), "loaded vault");

        Ok(Self {
            storage,
            records,
            session: VaultSession::new(),
        })
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    /// Unlock the vault, verifying the password against every record.
    pub fn unlock(&mut self, master_password: &str) -> Result<()> {
        self.session.unlock(master_password, &self.records)
    }

    /// Lock the vault and forget the derived key.
    pub fn lock(&mut self) {
        self.session.lock();
    }

    pub fn is_unlocked(&self) -> bool {
        self.session.is_unlocked()
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    // ------------------------------------------------------------------
    // Record operations
    // ------------------------------------------------------------------

    /// Encrypt `secret` and append a new record. Returns its index.
    ///
    /// All three fields are required; service and username must contain
    /// more than whitespace.
    pub fn add(&mut self, service: &str, username: &str, secret: &str) -> Result<usize> {
        record::validate_labels(service, username)?;
        if secret.is_empty() {
            return Err(PwVaultError::IncompleteEntry("password"));
        }

        let key = self.session.key()?;
        let secret_ciphertext = crypto::encrypt(secret, key)?;

        let mut updated = self.records.clone();
        updated.push(CredentialRecord {
            service: service.to_string(),
            username: username.to_string(),
            secret_ciphertext,
        });
        self.commit(updated)?;

        tracing::info!(service, total = self.records.len(), "added entry");
        Ok(self.records.len() - 1)
    }

    /// Delete the record at `index` once `confirm` approves.
    ///
    /// Returns `Ok(false)` when the prompt is declined; nothing changes.
    pub fn delete(&mut self, index: usize, confirm: &dyn Confirm) -> Result<bool> {
        self.session.key()?;
        let target = self
            .records
            .get(index)
            .ok_or(PwVaultError::RecordNotFound(index))?;

        let prompt = format!(
            "Delete the entry for '{}' ({})?",
            target.service, target.username
        );
        if !confirm.confirm(&prompt)? {
            tracing::debug!(index, "delete declined");
            return Ok(false);
        }

        let mut updated = self.records.clone();
        let removed = updated.remove(index);
        self.commit(updated)?;

        tracing::info!(service = %removed.service, total = self.records.len(), "deleted entry");
        Ok(true)
    }

    /// All records, in insertion order. Requires an unlocked vault.
    pub fn records(&self) -> Result<&[CredentialRecord]> {
        self.session.key()?;
        Ok(&self.records)
    }

    /// Records whose service contains `query` (case-insensitive),
    /// paired with their index in the full list.
    pub fn search(&self, query: &str) -> Result<Vec<(usize, &CredentialRecord)>> {
        let records = self.records()?;
        Ok(record::filter_by_service(records, query))
    }

    /// Decrypt the secret at `index`.
    ///
    /// A failure here only affects this record; the session stays
    /// unlocked.
    pub fn reveal(&self, index: usize) -> Result<Zeroizing<String>> {
        let key = self.session.key()?;
        let target = self
            .records
            .get(index)
            .ok_or(PwVaultError::RecordNotFound(index))?;

        crypto::decrypt(&target.secret_ciphertext, key)
            .map(Zeroizing::new)
            .inspect_err(|_| tracing::debug!(index, "failed to decrypt entry"))
    }

    /// Decrypt the secret at `index` and hand it to `clipboard`.
    pub fn copy(&self, index: usize, clipboard: &mut dyn Clipboard) -> Result<()> {
        let secret = self.reveal(index)?;
        clipboard.copy(&secret)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of stored records. Available while locked.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The persistence backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Write `updated` in full, then make it the current list.
    fn commit(&mut self, updated: Vec<CredentialRecord>) -> Result<()> {
        let encoded = record::encode_records(&updated)?;
        self.storage.set(STORAGE_KEY, &encoded)?;
        self.records = updated;
        Ok(())
    }
}
