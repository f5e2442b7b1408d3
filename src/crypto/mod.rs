//! Cryptographic primitives for pwvault.
//!
//! This module provides:
//! - Argon2id master-password key derivation (`kdf`)
//! - AES-256-GCM protection of individual secrets (`codec`)
//! - The zeroizing key type (`keys`)
//! - Random password generation (`generator`)

pub mod codec;
pub mod generator;
pub mod kdf;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{derive_key, encrypt, decrypt, ...};
pub use codec::{decrypt, encrypt};
pub use generator::generate_password;
pub use kdf::derive_key;
pub use keys::MasterKey;
