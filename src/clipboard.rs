// src/clipboard.rs
use clipboard::{ClipboardContext, ClipboardProvider};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard init error: {0}")]
    Init(String),

    #[error("Clipboard write error: {0}")]
    Write(String),
}

/// Anything that can take a full password and put it on a clipboard.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The host clipboard. A fresh context is opened for every write.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut ctx: ClipboardContext = ClipboardProvider::new()
            .map_err(|e| ClipboardError::Init(e.to_string()))?;

        ctx.set_contents(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;

        Ok(())
    }
}
