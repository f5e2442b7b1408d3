//! AES-256-GCM protection for individual secrets.
//!
//! Each call to `encrypt` generates a fresh random 12-byte nonce and
//! prepends it to the ciphertext, then base64-encodes the whole blob so
//! it can live in a JSON string.
//!
//! Layout of the decoded bytes:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]
//!
//! `decrypt` reports every failure as `DecryptionFailed`, including a
//! successful decryption that yields an empty string. Empty secrets
//! therefore cannot be stored in a way that reads back.

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use zeroize::Zeroize;

use super::keys::MasterKey;
use crate::errors::{PwVaultError, Result};

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// Encrypt `plaintext` under `key` into a self-describing base64 string.
pub fn encrypt(plaintext: &str, key: &MasterKey) -> Result<String> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| PwVaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext.as_bytes())
        .map_err(|e| PwVaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    // Prepend the nonce so the record only needs to store one blob.
    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&ciphertext);
    Ok(BASE64.encode(output))
}

/// Decrypt a string produced by `encrypt`.
///
/// Fails on malformed base64, short input, a wrong key or tampered bytes,
/// non-UTF-8 plaintext, and an empty result.
pub fn decrypt(ciphertext: &str, key: &MasterKey) -> Result<String> {
    let blob = BASE64
        .decode(ciphertext)
        .map_err(|_| PwVaultError::DecryptionFailed)?;

    if blob.len() < NONCE_LEN {
        return Err(PwVaultError::DecryptionFailed);
    }

    let (nonce_bytes, sealed) = blob.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| PwVaultError::DecryptionFailed)?;

    let plaintext = cipher
        .decrypt(nonce, sealed)
        .map_err(|_| PwVaultError::DecryptionFailed)?;

    let text = String::from_utf8(plaintext).map_err(|e| {
        let mut bad_bytes = e.into_bytes();
        bad_bytes.zeroize();
        PwVaultError::DecryptionFailed
    })?;

    // An empty result is treated the same as a wrong key.
    if text.is_empty() {
        return Err(PwVaultError::DecryptionFailed);
    }

    Ok(text)
}
