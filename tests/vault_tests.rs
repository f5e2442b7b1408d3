//! Integration tests for the pwvault vault module.

use pwvault::errors::{PwVaultError, Result};
use pwvault::storage::{FileStorage, MemoryStorage, Storage, STORAGE_KEY};
use pwvault::surfaces::{AlwaysConfirm, Clipboard, Confirm};
use pwvault::vault::{decode_records, encode_records, CredentialRecord, SessionState, VaultStore};
use tempfile::TempDir;

const MASTER: &str = "correct horse battery staple";

/// Helper: an unlocked in-memory store.
fn unlocked() -> VaultStore<MemoryStorage> {
    let mut store = VaultStore::load(MemoryStorage::new()).expect("load");
    store.unlock(MASTER).expect("unlock");
    store
}

struct Decline;

impl Confirm for Decline {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        Ok(false)
    }
}

#[derive(Default)]
struct RecordingClipboard(Option<String>);

impl Clipboard for RecordingClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.0 = Some(text.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Load and unlock
// ---------------------------------------------------------------------------

#[test]
fn missing_storage_slot_loads_empty_and_locked() {
    let store = VaultStore::load(MemoryStorage::new()).unwrap();
    assert!(store.is_empty());
    assert_eq!(store.state(), SessionState::Locked);
}

#[test]
fn empty_master_password_is_rejected() {
    let mut store = VaultStore::load(MemoryStorage::new()).unwrap();
    let result = store.unlock("");
    assert!(matches!(result, Err(PwVaultError::EmptyMasterPassword)));
    assert!(!store.is_unlocked());
}

#[test]
fn locked_store_does_not_expose_records() {
    let mut store = unlocked();
    store.add("GitHub", "octocat", "hunter2").unwrap();
    store.lock();

    assert!(matches!(store.records(), Err(PwVaultError::VaultLocked)));
    assert!(matches!(store.search("git"), Err(PwVaultError::VaultLocked)));
    assert!(matches!(store.reveal(0), Err(PwVaultError::VaultLocked)));
    // The count is metadata and stays visible.
    assert_eq!(store.len(), 1);
}

#[test]
fn wrong_master_password_relocks() {
    let mut store = unlocked();
    store.add("GitHub", "octocat", "hunter2").unwrap();
    let storage = store.storage().clone();

    let mut reopened = VaultStore::load(storage).unwrap();
    let result = reopened.unlock("not the master password");

    assert!(matches!(result, Err(PwVaultError::DecryptionFailed)));
    assert_eq!(reopened.state(), SessionState::Locked);

    // The right password still works afterwards.
    reopened.unlock(MASTER).unwrap();
    assert_eq!(reopened.reveal(0).unwrap().as_str(), "hunter2");
}

#[test]
fn one_corrupted_record_blocks_unlock() {
    let mut store = unlocked();
    store.add("GitHub", "octocat", "hunter2").unwrap();
    store.add("Gmail", "alice", "mail-pw").unwrap();

    let mut records = store.records().unwrap().to_vec();
    records[1].secret_ciphertext = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA".to_string();
    let storage = MemoryStorage::with_value(STORAGE_KEY, &encode_records(&records).unwrap());

    let mut reopened = VaultStore::load(storage).unwrap();
    assert!(matches!(
        reopened.unlock(MASTER),
        Err(PwVaultError::DecryptionFailed)
    ));
    assert!(!reopened.is_unlocked());
}

// ---------------------------------------------------------------------------
// Add
// ---------------------------------------------------------------------------

#[test]
fn add_appends_in_insertion_order_and_persists() {
    let mut store = unlocked();
    assert_eq!(store.add("Gmail", "alice", "pw-1").unwrap(), 0);
    assert_eq!(store.add("GitHub", "octocat", "pw-2").unwrap(), 1);
    assert_eq!(store.add("Gmail", "bob", "pw-3").unwrap(), 2);

    let services: Vec<&str> = store
        .records()
        .unwrap()
        .iter()
        .map(|r| r.service.as_str())
        .collect();
    assert_eq!(services, ["Gmail", "GitHub", "Gmail"]);

    // Every add rewrites the whole list.
    assert_eq!(store.storage().writes(), 3);
    let stored = store.storage().get(STORAGE_KEY).unwrap().unwrap();
    assert_eq!(decode_records(&stored).unwrap().len(), 3);
}

#[test]
fn secrets_are_never_stored_in_plaintext() {
    let mut store = unlocked();
    store.add("GitHub", "octocat", "super-secret-value").unwrap();

    let stored = store.storage().get(STORAGE_KEY).unwrap().unwrap();
    assert!(!stored.contains("super-secret-value"));
}

#[test]
fn add_with_empty_username_is_incomplete() {
    let mut store = unlocked();
    store.add("Gmail", "alice", "pw").unwrap();

    let result = store.add("GitHub", "", "pw");
    assert!(matches!(result, Err(PwVaultError::IncompleteEntry(_))));
    assert_eq!(store.len(), 1);
    assert_eq!(store.storage().writes(), 1);
}

#[test]
fn add_with_missing_service_or_password_is_incomplete() {
    let mut store = unlocked();
    assert!(matches!(
        store.add("   ", "alice", "pw"),
        Err(PwVaultError::IncompleteEntry("service"))
    ));
    assert!(matches!(
        store.add("Gmail", "alice", ""),
        Err(PwVaultError::IncompleteEntry("password"))
    ));
    assert!(store.is_empty());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn declined_delete_changes_nothing() {
    let mut store = unlocked();
    store.add("Gmail", "alice", "pw-1").unwrap();
    store.add("GitHub", "octocat", "pw-2").unwrap();
    let before = store.records().unwrap().to_vec();

    assert!(!store.delete(0, &Decline).unwrap());

    assert_eq!(store.records().unwrap(), before.as_slice());
    assert_eq!(store.storage().writes(), 2);
}

#[test]
fn confirmed_delete_removes_only_that_record() {
    let mut store = unlocked();
    store.add("Gmail", "alice", "pw-1").unwrap();
    store.add("GitHub", "octocat", "pw-2").unwrap();
    store.add("Bank", "alice", "pw-3").unwrap();

    assert!(store.delete(1, &AlwaysConfirm).unwrap());

    let records = store.records().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].service, "Gmail");
    assert_eq!(records[1].service, "Bank");
    assert_eq!(store.reveal(1).unwrap().as_str(), "pw-3");

    let stored = store.storage().get(STORAGE_KEY).unwrap().unwrap();
    assert_eq!(decode_records(&stored).unwrap(), records);
}

#[test]
fn delete_out_of_range_fails() {
    let mut store = unlocked();
    store.add("Gmail", "alice", "pw").unwrap();
    assert!(matches!(
        store.delete(5, &AlwaysConfirm),
        Err(PwVaultError::RecordNotFound(5))
    ));
    assert_eq!(store.len(), 1);
}

// ---------------------------------------------------------------------------
// Search, reveal, copy
// ---------------------------------------------------------------------------

#[test]
fn search_matches_service_case_insensitively() {
    let mut store = unlocked();
    store.add("Gmail", "alice", "pw-1").unwrap();
    store.add("GitHub", "octocat", "pw-2").unwrap();

    let hits = store.search("git").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0, 1);
    assert_eq!(hits[0].1.service, "GitHub");

    assert_eq!(store.search("G").unwrap().len(), 2);
    assert!(store.search("bank").unwrap().is_empty());
}

#[test]
fn reveal_error_does_not_lock_the_session() {
    let mut store = unlocked();
    store.add("GitHub", "octocat", "hunter2").unwrap();

    assert!(matches!(
        store.reveal(9),
        Err(PwVaultError::RecordNotFound(9))
    ));
    assert!(store.is_unlocked());
    assert_eq!(store.reveal(0).unwrap().as_str(), "hunter2");
}

#[test]
fn copy_hands_plaintext_to_clipboard() {
    let mut store = unlocked();
    store.add("GitHub", "octocat", "hunter2").unwrap();

    let mut clipboard = RecordingClipboard::default();
    store.copy(0, &mut clipboard).unwrap();
    assert_eq!(clipboard.0.as_deref(), Some("hunter2"));
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

#[test]
fn three_records_survive_serialization_unchanged() {
    let mut store = unlocked();
    store.add("Gmail", "alice", "pw-1").unwrap();
    store.add("GitHub", "octocat", "pw-2").unwrap();
    store.add("Bank", "alice@example.com", "pw-3").unwrap();
    let original: Vec<CredentialRecord> = store.records().unwrap().to_vec();

    let encoded = encode_records(&original).unwrap();
    let decoded = decode_records(&encoded).unwrap();

    assert_eq!(decoded.len(), 3);
    for (a, b) in original.iter().zip(&decoded) {
        assert_eq!(a.service, b.service);
        assert_eq!(a.username, b.username);
        assert_eq!(a.secret_ciphertext, b.secret_ciphertext);
    }
}

#[test]
fn file_backed_vault_reopens_with_same_password() {
    let dir = TempDir::new().unwrap();

    let mut store = VaultStore::load(FileStorage::new(dir.path())).unwrap();
    store.unlock(MASTER).unwrap();
    store.add("GitHub", "octocat", "hunter2").unwrap();
    store.add("Gmail", "alice", "mail-pw").unwrap();
    let ciphertexts: Vec<String> = store
        .records()
        .unwrap()
        .iter()
        .map(|r| r.secret_ciphertext.clone())
        .collect();
    drop(store);

    let mut reopened = VaultStore::load(FileStorage::new(dir.path())).unwrap();
    reopened.unlock(MASTER).unwrap();

    // Loading never re-encrypts.
    let reloaded: Vec<String> = reopened
        .records()
        .unwrap()
        .iter()
        .map(|r| r.secret_ciphertext.clone())
        .collect();
    assert_eq!(ciphertexts, reloaded);
    assert_eq!(reopened.reveal(1).unwrap().as_str(), "mail-pw");
}

#[test]
fn corrupt_storage_is_an_invalid_format() {
    let storage = MemoryStorage::with_value(STORAGE_KEY, "{\"not\": \"a list\"}");
    assert!(matches!(
        VaultStore::load(storage),
        Err(PwVaultError::InvalidVaultFormat(_))
    ));
}
