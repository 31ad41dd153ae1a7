use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single categorized expense as stored in the [`Ledger`](super::Ledger).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub category: String,
    pub amount: f64,
    pub recorded_at: DateTime<Utc>,
}

impl ExpenseRecord {
    /// Builds a record from already-validated parts.
    pub(crate) fn new(category: String, amount: f64, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            amount,
            recorded_at,
        }
    }
}
