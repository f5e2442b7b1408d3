//! Persistence surface — a single-slot string key-value store.
//!
//! The vault keeps its whole record list under one fixed key and
//! rewrites the full value after every mutation, so a backend only
//! has to get and set opaque strings.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::errors::Result;

/// The fixed namespace under which the record list is stored.
pub const STORAGE_KEY: &str = "passwordVault";

/// A key-value backend for the serialized record list.
pub trait Storage {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
