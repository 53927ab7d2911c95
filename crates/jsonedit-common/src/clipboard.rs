use crate::errors::PlatformError;

/// Anything that can receive text for the system clipboard.
///
/// The widget's copy action writes through this capability so it never
/// touches a concrete clipboard backend.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), PlatformError>;
}

/// Captures copied text in memory. Used by headless hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), PlatformError> {
        self.contents = Some(text.to_owned());
        Ok(())
    }
}
