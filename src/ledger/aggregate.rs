//! Pure reductions over a sequence of expense records, typically the
//! period-filtered view of a ledger.

use std::{borrow::Borrow, collections::HashMap};

use serde::{Deserialize, Serialize};

use super::record::ExpenseRecord;

/// Spending summed for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Sign of a savings figure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SavingsStatus {
    Positive,
    Negative,
    Neutral,
}

impl SavingsStatus {
    /// Badge text shown next to the savings figure.
    pub fn label(&self) -> &'static str {
        match self {
            SavingsStatus::Positive => "Ganancia",
            SavingsStatus::Negative => "Pérdida",
            SavingsStatus::Neutral => "Equilibrado",
        }
    }
}

pub fn total_expense<I>(records: I) -> f64
where
    I: IntoIterator,
    I::Item: Borrow<ExpenseRecord>,
{
    // Folding from +0.0 keeps an empty total from rendering as `-0.00`.
    records
        .into_iter()
        .fold(0.0, |total, record| total + record.borrow().amount)
}

/// Income minus expenses. Negative when spending exceeds income.
pub fn savings(income: f64, total_expense: f64) -> f64 {
    income - total_expense
}

/// Groups amounts by category, keeping the order in which categories first appear.
pub fn by_category<I>(records: I) -> Vec<CategoryTotal>
where
    I: IntoIterator,
    I::Item: Borrow<ExpenseRecord>,
{
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for item in records {
        let record = item.borrow();
        match index.get(&record.category) {
            Some(&slot) => totals[slot].total += record.amount,
            None => {
                index.insert(record.category.clone(), totals.len());
                totals.push(CategoryTotal {
                    category: record.category.clone(),
                    total: record.amount,
                });
            }
        }
    }
    totals
}

pub fn classify_savings(savings: f64) -> SavingsStatus {
    if savings > 0.0 {
        SavingsStatus::Positive
    } else if savings < 0.0 {
        SavingsStatus::Negative
    } else {
        SavingsStatus::Neutral
    }
}
