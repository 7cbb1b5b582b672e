use thiserror::Error;

/// Unified error type for record construction, storage, and configuration.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("Invalid expense: {0}")]
    InvalidExpense(String),
    #[error("Invalid amount: `{0}` is not a whole number")]
    InvalidAmount(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ExpenseError>;

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        ExpenseError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        ExpenseError::Storage(err.to_string())
    }
}
