//! Expense domain models and the ordered log that holds them.

pub mod category;
pub mod log;
pub mod record;

pub use category::Category;
pub use log::{ExpenseLog, SortDirection};
pub use record::{parse_amount, ExpenseRecord, DATE_FORMAT};
