pub mod json_backend;
pub mod memory;

use crate::expense::ExpenseRecord;

pub use crate::errors::Result;

/// Abstraction over persistence backends holding the expense document.
///
/// The document is replaced wholesale on every save; there is no
/// incremental patching. A backend with no document, or one whose content
/// no longer parses, loads as an empty collection rather than an error.
pub trait StorageBackend: Send + Sync {
    fn save(&self, records: &[ExpenseRecord]) -> Result<()>;
    fn load(&self) -> Result<Vec<ExpenseRecord>>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for std::sync::Arc<B> {
    fn save(&self, records: &[ExpenseRecord]) -> Result<()> {
        (**self).save(records)
    }

    fn load(&self) -> Result<Vec<ExpenseRecord>> {
        (**self).load()
    }
}

pub use json_backend::JsonStorage;
pub use memory::MemoryStorage;
