use std::sync::Mutex;

use crate::ClipboardError;

/// Host clipboard. Writes may suspend; the caller awaits them before reporting.
#[async_trait::async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: String) -> Result<(), ClipboardError>;
}

/// Keeps every write in memory. Used by headless hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: Mutex<Vec<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent text written, if any.
    pub fn contents(&self) -> Option<String> {
        self.writes.lock().ok().and_then(|w| w.last().cloned())
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|w| w.len()).unwrap_or(0)
    }
}

#[async_trait::async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: String) -> Result<(), ClipboardError> {
        let mut writes = self
            .writes
            .lock()
            .map_err(|err| ClipboardError::WriteFailed(err.to_string()))?;
        writes.push(text);
        Ok(())
    }
}

/// Stand-in for hosts that have no clipboard at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

#[async_trait::async_trait]
impl Clipboard for NoClipboard {
    async fn write_text(&self, _text: String) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("no clipboard on this host".to_string()))
    }
}
