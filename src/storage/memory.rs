use std::sync::Mutex;

use crate::expense::ExpenseRecord;

use super::{Result, StorageBackend};

/// In-memory backend that round-trips through the same JSON codec as the
/// file backend. Useful for tests and for embedding without filesystem
/// access.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    contents: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw serialized document, if anything has been saved yet.
    pub fn document(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StorageBackend for MemoryStorage {
    fn save(&self, records: &[ExpenseRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        *self.lock() = Some(json);
        Ok(())
    }

    fn load(&self) -> Result<Vec<ExpenseRecord>> {
        match self.lock().as_deref() {
            Some(document) => Ok(serde_json::from_str(document)?),
            None => Ok(Vec::new()),
        }
    }
}
