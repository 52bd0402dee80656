use crate::{CatalogError, OutputSink};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Records written lines in memory, in write order.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every line written so far.
    pub fn lines(&self) -> Vec<String> {
        self.guard().clone()
    }

    /// Returns the recorded lines and empties the buffer.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.guard())
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OutputSink for MemorySink {
    fn write_line(&self, line: &str) -> Result<(), CatalogError> {
        self.guard().push(line.to_string());
        Ok(())
    }
}
