//! Read-only spending aggregations over expense record snapshots.
//!
//! Everything here is a pure function of the slice it is given; no state,
//! no side effects, safe to call with any snapshot.

use serde::{Deserialize, Serialize};

use crate::expense::{Category, ExpenseRecord};

/// Sum of all record amounts. Empty slice yields `0`.
pub fn total_amount(records: &[ExpenseRecord]) -> u64 {
    records.iter().map(|record| record.amount).sum()
}

/// Sum of amounts over records in the given category.
pub fn category_amount(records: &[ExpenseRecord], category: Category) -> u64 {
    records
        .iter()
        .filter(|record| record.category == category)
        .map(|record| record.amount)
        .sum()
}

/// Share of the total attributed to `category`, in percent.
///
/// A zero total yields `0.0` rather than a non-finite value, so the result
/// can feed a progress meter directly.
pub fn category_share(records: &[ExpenseRecord], category: Category) -> f64 {
    share_of(category_amount(records, category), total_amount(records))
}

fn share_of(amount: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    amount as f64 * 100.0 / total as f64
}

/// One row of the per-category breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySummary {
    pub category: Category,
    pub amount: u64,
    pub share_percent: f64,
}

/// Complete breakdown for a snapshot: overall total plus one row per
/// category in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendingSummary {
    pub total: u64,
    pub per_category: Vec<CategorySummary>,
}

impl SpendingSummary {
    pub fn from_records(records: &[ExpenseRecord]) -> Self {
        let total = total_amount(records);
        let per_category = Category::ALL
            .iter()
            .map(|&category| {
                let amount = category_amount(records, category);
                CategorySummary {
                    category,
                    amount,
                    share_percent: share_of(amount, total),
                }
            })
            .collect();
        Self { total, per_category }
    }
}
