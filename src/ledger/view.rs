//! Presentation-ready projections of the ledger and the observer seam
//! renderers plug into.

use serde::Serialize;
use uuid::Uuid;

use super::{
    aggregate::{by_category, classify_savings, savings, total_expense, SavingsStatus},
    palette,
    record::ExpenseRecord,
};
use crate::currency::MoneyFormatter;

/// One row of the expense list. `index` is the position within the filtered view.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExpenseListItem {
    pub index: usize,
    pub record_id: Uuid,
    pub category: String,
    pub amount: f64,
    pub amount_label: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SummaryView {
    pub income: f64,
    pub total_expense: f64,
    pub savings: f64,
    pub status: SavingsStatus,
}

/// Parallel label/value/colour sequences for a pie chart.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Receives refreshed views after every ledger mutation.
///
/// Callbacks arrive in list, summary, chart order on the caller's thread.
pub trait LedgerObserver {
    fn on_list_changed(&mut self, _items: &[ExpenseListItem]) {}
    fn on_summary_changed(&mut self, _summary: &SummaryView) {}
    fn on_chart_changed(&mut self, _chart: &ChartData) {}
}

pub fn expense_list(records: &[&ExpenseRecord], money: &MoneyFormatter) -> Vec<ExpenseListItem> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| ExpenseListItem {
            index,
            record_id: record.id,
            category: record.category.clone(),
            amount: record.amount,
            amount_label: money.format(record.amount),
        })
        .collect()
}

pub fn summary(income: f64, records: &[&ExpenseRecord]) -> SummaryView {
    let total = total_expense(records.iter().copied());
    let net = savings(income, total);
    SummaryView {
        income,
        total_expense: total,
        savings: net,
        status: classify_savings(net),
    }
}

pub fn chart(records: &[&ExpenseRecord]) -> ChartData {
    let totals = by_category(records.iter().copied());
    let colors = palette::colors(totals.len());
    let (labels, values) = totals
        .into_iter()
        .map(|entry| (entry.category, entry.total))
        .unzip();
    ChartData {
        labels,
        values,
        colors,
    }
}
