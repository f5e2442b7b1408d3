//! Vault module — credential records, the unlock session, and the store.
//!
//! This module provides:
//! - `CredentialRecord` and the persisted encoding (`record`)
//! - The lock/unlock state machine (`session`)
//! - High-level `VaultStore` for add, delete, search and reveal (`store`)

pub mod record;
pub mod session;
pub mod store;

// Re-export the most commonly used items.
pub use record::{
    decode_records, encode_records, filter_by_service, validate_labels, CredentialRecord,
};
pub use session::{SessionState, VaultSession};
pub use store::VaultStore;
