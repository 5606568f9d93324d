use howto_core::{HowToError, Result};

/// Clipboard write port. Used as the share fallback, so failures are
/// reported rather than swallowed.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The OS clipboard via `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new()
            .map_err(|e| HowToError::Clipboard(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text.to_string())
            .map_err(|e| HowToError::Clipboard(e.to_string()))
    }
}

/// Discards writes. For environments without a clipboard (headless
/// terminals, tests that don't care).
pub struct NoopClipboard;

impl Clipboard for NoopClipboard {
    fn set_text(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }
}
