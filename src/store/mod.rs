//! Persistence-coupled expense store.
//!
//! [`ExpenseStore`] owns the canonical [`ExpenseLog`] and an injected
//! [`StorageBackend`]. Commands are applied one at a time; after every
//! state-changing command the full collection is written back to the
//! backend on the same logical turn.

use uuid::Uuid;

use crate::{
    expense::{ExpenseLog, ExpenseRecord, SortDirection},
    storage::StorageBackend,
};

pub struct ExpenseStore {
    log: ExpenseLog,
    backend: Box<dyn StorageBackend>,
}

impl ExpenseStore {
    /// Opens the store over `backend`, loading any persisted records.
    ///
    /// A backend that cannot be read starts the store empty; missing prior
    /// state is never a hard failure.
    pub fn open(backend: Box<dyn StorageBackend>) -> Self {
        let log = match backend.load() {
            Ok(records) => {
                tracing::debug!("loaded {} expense record(s)", records.len());
                ExpenseLog::from_records(records)
            }
            Err(err) => {
                tracing::warn!("starting with an empty expense log: {}", err);
                ExpenseLog::new()
            }
        };
        Self { log, backend }
    }

    /// Appends the record and returns its id.
    ///
    /// Callers wanting the new record in amount-sorted position follow up
    /// with [`sort_by_amount`](Self::sort_by_amount) as a separate command.
    pub fn add(&mut self, record: ExpenseRecord) -> Uuid {
        let id = self.log.add(record);
        tracing::debug!("added expense {}", id);
        self.persist();
        id
    }

    /// Removes the record with the given id; unknown ids are absorbed as
    /// no-ops and nothing is rewritten.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let removed = self.log.remove(id);
        if removed {
            tracing::debug!("removed expense {}", id);
            self.persist();
        }
        removed
    }

    /// Flips the paid flag on the matching record; unknown ids are no-ops.
    pub fn toggle_completed(&mut self, id: Uuid) -> bool {
        let toggled = self.log.toggle_completed(id);
        if toggled {
            self.persist();
        }
        toggled
    }

    /// Applies the pending sort direction and flips it for the next call.
    pub fn sort_by_amount(&mut self) -> SortDirection {
        let applied = self.log.sort_by_amount();
        self.persist();
        applied
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        self.log.records()
    }

    /// Owned copy of the current collection for callers that outlive the
    /// borrow.
    pub fn snapshot(&self) -> Vec<ExpenseRecord> {
        self.log.records().to_vec()
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.log.sort_direction()
    }

    // Write-back failures are logged and dropped; the in-memory mutation
    // stands and there is no retry.
    fn persist(&self) {
        if let Err(err) = self.backend.save(self.log.records()) {
            tracing::warn!("failed to persist expense log: {}", err);
        }
    }
}
