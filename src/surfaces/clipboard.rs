//! Clipboard surface (write-only).

use crate::errors::{PwVaultError, Result};

/// Something that can receive copied text.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// The operating system clipboard, via `arboard`.
///
/// The handle is opened lazily so commands that never copy do not
/// need a display server.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            let handle = arboard::Clipboard::new()
                .map_err(|e| PwVaultError::ClipboardError(format!("cannot open clipboard: {e}")))?;
            self.inner = Some(handle);
        }

        match self.inner.as_mut() {
            Some(handle) => handle
                .set_text(text.to_string())
                .map_err(|e| PwVaultError::ClipboardError(format!("cannot write clipboard: {e}"))),
            None => Err(PwVaultError::ClipboardError("clipboard unavailable".into())),
        }
    }
}
