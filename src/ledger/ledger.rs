use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use super::{category::normalize_category, record::ExpenseRecord};
use crate::errors::ValidationError;

/// Authoritative session state: the expense list plus the income scalar.
///
/// Records keep insertion order; removal is positional and shifts later entries down.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
    income: f64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn record(&self, index: usize) -> Option<&ExpenseRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn income(&self) -> f64 {
        self.income
    }

    /// Sets income from raw user text. Anything that does not parse to a finite
    /// number resets income to zero; this never fails.
    pub fn set_income(&mut self, raw: &str) {
        let value = parse_leading_float(raw).unwrap_or(0.0);
        self.set_income_value(value);
    }

    pub fn set_income_value(&mut self, value: f64) {
        self.income = if value.is_finite() && value != 0.0 {
            value
        } else {
            0.0
        };
        debug!(income = self.income, "income updated");
    }

    /// Validates and appends an expense stamped with the current time.
    pub fn add_expense(
        &mut self,
        raw_category: &str,
        raw_amount: &str,
    ) -> Result<&ExpenseRecord, ValidationError> {
        self.add_expense_at(raw_category, raw_amount, Utc::now())
    }

    pub fn add_expense_at(
        &mut self,
        raw_category: &str,
        raw_amount: &str,
        recorded_at: DateTime<Utc>,
    ) -> Result<&ExpenseRecord, ValidationError> {
        let amount = parse_amount(raw_amount).inspect_err(|err| {
            warn!(amount = raw_amount, %err, "expense rejected");
        })?;
        let category = normalize_category(raw_category);
        debug!(%category, amount, "expense recorded");
        self.records.push(ExpenseRecord::new(category, amount, recorded_at));
        Ok(&self.records[self.records.len() - 1])
    }

    /// Removes the record at `index`. Out-of-range indices leave the ledger untouched.
    pub fn remove_expense(&mut self, index: usize) -> Option<ExpenseRecord> {
        if index >= self.records.len() {
            debug!(index, len = self.records.len(), "remove ignored: index out of range");
            return None;
        }
        let removed = self.records.remove(index);
        debug!(index, category = %removed.category, "expense removed");
        Some(removed)
    }

    /// Position of the record with the given id, if still present.
    pub fn position_of(&self, id: Uuid) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    /// Drops every record; income is kept.
    pub fn clear(&mut self) {
        let dropped = self.records.len();
        self.records.clear();
        debug!(dropped, "ledger cleared");
    }
}

/// Parses an expense amount, requiring a positive finite number.
pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let amount =
        parse_leading_float(raw).ok_or_else(|| ValidationError::InvalidAmount(raw.to_string()))?;
    if !amount.is_finite() {
        return Err(ValidationError::InvalidAmount(raw.to_string()));
    }
    if amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount(amount));
    }
    Ok(amount)
}

/// Reads the longest decimal literal at the start of `raw` (after leading
/// whitespace), ignoring trailing text: `"12.5kg"` reads as `12.5`.
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        let sign = if text.starts_with('-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok()
}
