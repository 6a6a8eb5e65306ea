//! OSC 52 clipboard
//!
//! Copies through the terminal's clipboard escape sequence, so the
//! binary works over SSH and needs no display-server libraries. A
//! terminal that ignores OSC 52 silently drops the write; either way
//! the session state is untouched.

use std::io::{self, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// Clipboard error types
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// IO error while writing the escape sequence
    #[error("Terminal write failed: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// Send `text` to the system clipboard via OSC 52.
pub fn copy_to_clipboard(text: &str) -> ClipboardResult<()> {
    let payload = STANDARD.encode(text.as_bytes());
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]52;c;{payload}\x07")?;
    stdout.flush()?;
    Ok(())
}
