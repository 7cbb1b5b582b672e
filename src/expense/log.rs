use uuid::Uuid;

use super::record::ExpenseRecord;

/// Direction applied by the next amount sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Ordered collection of expense records plus the amount-sort direction.
///
/// Insertion order is significant for display; mutations target records by
/// id and absorb unknown ids as no-ops.
#[derive(Debug, Clone, Default)]
pub struct ExpenseLog {
    records: Vec<ExpenseRecord>,
    direction: SortDirection,
}

impl ExpenseLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-loaded collection. The sort direction starts
    /// ascending; it is view state and never persisted.
    pub fn from_records(records: Vec<ExpenseRecord>) -> Self {
        Self {
            records,
            direction: SortDirection::default(),
        }
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Direction the next `sort_by_amount` call will apply.
    pub fn sort_direction(&self) -> SortDirection {
        self.direction
    }

    /// Appends the record and returns its id. Existing records keep their
    /// positions.
    pub fn add(&mut self, record: ExpenseRecord) -> Uuid {
        let id = record.id;
        self.records.push(record);
        id
    }

    /// Removes the record with the given id, preserving the order of the
    /// rest. Returns `false` when no record matches.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() != before
    }

    /// Flips the paid flag on the matching record, leaving every other field
    /// untouched. Returns `false` when no record matches.
    pub fn toggle_completed(&mut self, id: Uuid) -> bool {
        match self.records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.completed = !record.completed;
                true
            }
            None => false,
        }
    }

    /// Stable-sorts the collection by amount in the pending direction, then
    /// flips the direction for the next invocation. Returns the direction
    /// that was applied.
    pub fn sort_by_amount(&mut self) -> SortDirection {
        let applied = self.direction;
        match applied {
            SortDirection::Ascending => self.records.sort_by(|a, b| a.amount.cmp(&b.amount)),
            SortDirection::Descending => self.records.sort_by(|a, b| b.amount.cmp(&a.amount)),
        }
        self.direction = applied.flipped();
        applied
    }
}
