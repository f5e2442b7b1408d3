//! Random password generation for new entries.

use rand::Rng;
use zeroize::Zeroizing;

use crate::errors::{PwVaultError, Result};

/// Shortest password the generator will produce.
pub const MIN_LENGTH: usize = 8;

/// Longest password the generator will produce.
pub const MAX_LENGTH: usize = 128;

const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{}:,.?";

/// Generate a random password of `length` characters.
///
/// The result always contains at least one lowercase letter, one
/// uppercase letter, one digit and one symbol.
pub fn generate_password(length: usize) -> Result<Zeroizing<String>> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(PwVaultError::CommandFailed(format!(
            "password length must be between {MIN_LENGTH} and {MAX_LENGTH} (got {length})"
        )));
    }

    let classes = [LOWER, UPPER, DIGITS, SYMBOLS];
    let alphabet: Vec<u8> = classes.concat();
    let mut rng = rand::rng();

    let mut bytes = Zeroizing::new(Vec::with_capacity(length));
    for class in classes {
        bytes.push(class[rng.random_range(0..class.len())]);
    }
    while bytes.len() < length {
        bytes.push(alphabet[rng.random_range(0..alphabet.len())]);
    }

    // Fisher-Yates so the guaranteed characters are not always up front.
    for i in (1..bytes.len()).rev() {
        let j = rng.random_range(0..=i);
        bytes.swap(i, j);
    }

    let password: String = bytes.iter().map(|&b| char::from(b)).collect();
    Ok(Zeroizing::new(password))
}
