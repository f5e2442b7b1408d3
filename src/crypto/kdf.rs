//! Password-based key derivation using Argon2id.
//!
//! The vault key is a pure function of the master password: the salt and
//! the cost parameters are fixed, so the same password always unlocks the
//! same records and nothing besides the ciphertexts needs to be stored.
//!
//! A fixed salt means one precomputed dictionary covers every pwvault
//! install. That is accepted for a local single-user tool; see DESIGN.md.

use argon2::{Algorithm, Argon2, Params, Version};

use super::keys::{MasterKey, KEY_LEN};
use crate::errors::{PwVaultError, Result};

/// Hardcoded salt shared by every vault.
pub const FIXED_SALT: &[u8] = b"pwvault:fixed-salt:v1";

/// Memory cost in KiB (19 MiB).
pub const MEMORY_KIB: u32 = 19_456;

/// Number of passes over memory.
pub const ITERATIONS: u32 = 2;

/// Parallelism lanes.
pub const PARALLELISM: u32 = 1;

/// Derive the 32-byte vault key from a master password.
///
/// Callers must reject an empty password before reaching this function;
/// it is still accepted here so the function stays total.
pub fn derive_key(master_password: &str) -> Result<MasterKey> {
    let params = Params::new(MEMORY_KIB, ITERATIONS, PARALLELISM, Some(KEY_LEN))
        .map_err(|e| PwVaultError::KeyDerivationFailed(format!("invalid Argon2 params: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = [0u8; KEY_LEN];
    argon2
        .hash_password_into(master_password.as_bytes(), FIXED_SALT, &mut key)
        .map_err(|e| PwVaultError::KeyDerivationFailed(format!("Argon2id hashing failed: {e}")))?;

    Ok(MasterKey::new(key))
}
