use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    expense::ExpenseRecord,
    utils::{ensure_dir, tmp_path, write_atomic, PathResolver},
};

use super::{Result, StorageBackend};

const EXPENSES_FILE: &str = "expenses.json";

/// File-backed storage keeping the whole expense document in one JSON file.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Roots the storage at `root`, or the platform data directory when
    /// `None`.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let base = PathResolver::resolve_base(root);
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(EXPENSES_FILE),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn file_path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, records: &[ExpenseRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(records)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn load(&self) -> Result<Vec<ExpenseRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&data) {
            Ok(records) => Ok(records),
            Err(err) => {
                tracing::warn!(
                    "discarding unreadable expense document at `{}`: {}",
                    self.path.display(),
                    err
                );
                Ok(Vec::new())
            }
        }
    }
}
