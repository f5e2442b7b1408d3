//! Interactive surfaces the vault talks to: the clipboard and the
//! yes/no confirmation prompt.
//!
//! Both are traits so the store and the commands can be driven by
//! scripted implementations in tests.

pub mod clipboard;
pub mod confirm;

pub use clipboard::{Clipboard, SystemClipboard};
pub use confirm::{AlwaysConfirm, Confirm, DialoguerConfirm};
