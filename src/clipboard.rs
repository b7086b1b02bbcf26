use std::io::{self, Stdout, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard is disabled")]
    Disabled,

    #[error("clipboard write failed: {0}")]
    Io(#[from] io::Error),
}

/// Somewhere copied text can be sent
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Sets the system clipboard through the terminal using the OSC 52 escape
/// sequence, which most modern terminal emulators (and tmux) honour
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl Osc52Clipboard<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        write!(self.out, "\x1b]52;c;{}\x07", STANDARD.encode(text))?;
        self.out.flush()?;
        Ok(())
    }
}

/// Clipboard that refuses every write
pub struct DisabledClipboard;

impl Clipboard for DisabledClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Disabled)
    }
}

/// Copy `text`, reporting only whether it worked
pub fn copy_best_effort(clipboard: &mut dyn Clipboard, text: &str) -> bool {
    match clipboard.write_text(text) {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "copy to clipboard failed");
            false
        }
    }
}
