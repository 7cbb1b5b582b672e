use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use crate::errors::ExpenseError;

/// Wire format for creation stamps, `YYYY-MM-DD HH:MM`.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One logged spending event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseRecord {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(with = "date_stamp")]
    pub date: NaiveDateTime,
    pub category: Category,
    pub amount: u64,
    #[serde(default)]
    pub completed: bool,
}

impl ExpenseRecord {
    /// Builds a record stamped with a fresh id and the current local time.
    ///
    /// Title and description must be non-empty; producers are expected to
    /// validate form input, so an empty field here is a precondition
    /// violation rather than a recoverable state.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        amount: u64,
    ) -> Result<Self, ExpenseError> {
        let title = title.into();
        let description = description.into();
        if title.is_empty() {
            return Err(ExpenseError::InvalidExpense("title must not be empty".into()));
        }
        if description.is_empty() {
            return Err(ExpenseError::InvalidExpense(
                "description must not be empty".into(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            description,
            date: creation_stamp(),
            category,
            amount,
            completed: false,
        })
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Converts a digit-only amount string into whole currency units.
pub fn parse_amount(input: &str) -> Result<u64, ExpenseError> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(ExpenseError::InvalidAmount(input.to_string()));
    }
    input
        .parse()
        .map_err(|_| ExpenseError::InvalidAmount(input.to_string()))
}

// Stamps are stored at minute precision so a record survives a
// serialize/deserialize cycle unchanged.
fn creation_stamp() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_second(0)
        .and_then(|stamp| stamp.with_nanosecond(0))
        .unwrap_or(now)
}

mod date_stamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
