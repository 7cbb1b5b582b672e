use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ExpenseError;

/// Closed set of spending categories an expense can belong to.
///
/// Serialized form is the display label, so persisted documents read
/// `"Current spending"` rather than `"CurrentSpending"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    #[serde(rename = "Current spending")]
    CurrentSpending,
    Entertainment,
    Transport,
    Bills,
    Clothing,
    Home,
    Health,
    Education,
    #[serde(rename = "Taxes and fees")]
    TaxesAndFees,
    Others,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Category; 10] = [
        Category::CurrentSpending,
        Category::Entertainment,
        Category::Transport,
        Category::Bills,
        Category::Clothing,
        Category::Home,
        Category::Health,
        Category::Education,
        Category::TaxesAndFees,
        Category::Others,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::CurrentSpending => "Current spending",
            Category::Entertainment => "Entertainment",
            Category::Transport => "Transport",
            Category::Bills => "Bills",
            Category::Clothing => "Clothing",
            Category::Home => "Home",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::TaxesAndFees => "Taxes and fees",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.label() == s)
            .ok_or_else(|| ExpenseError::InvalidExpense(format!("unknown category `{}`", s)))
    }
}
