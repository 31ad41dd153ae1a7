//! Terminal stand-ins for the list, summary, and chart panels.

use colored::{Color, Colorize};

use crate::cli::output;
use crate::currency::format_plain;
use crate::ledger::{ChartData, ExpenseListItem, LedgerObserver, SavingsStatus, SummaryView};

const BAR_WIDTH: usize = 30;

/// Observer that redraws every panel on stdout.
#[derive(Debug, Default)]
pub struct TerminalRenderer;

impl LedgerObserver for TerminalRenderer {
    fn on_list_changed(&mut self, items: &[ExpenseListItem]) {
        print_list(items);
    }

    fn on_summary_changed(&mut self, summary: &SummaryView) {
        print_summary(summary);
    }

    fn on_chart_changed(&mut self, chart: &ChartData) {
        print_chart(chart);
    }
}

pub fn list_lines(items: &[ExpenseListItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| format!("  [{}] {}: {}", item.index, item.category, item.amount_label))
        .collect()
}

pub fn print_list(items: &[ExpenseListItem]) {
    output::section("Gastos");
    if items.is_empty() {
        output::info("  (sin gastos en este periodo)");
        return;
    }
    for line in list_lines(items) {
        output::info(line);
    }
}

pub fn summary_lines(summary: &SummaryView) -> Vec<String> {
    vec![
        format!("  Ingresos:  {}", format_plain(summary.income)),
        format!("  Gastos:    {}", format_plain(summary.total_expense)),
        format!(
            "  Resultado: {} ({})",
            format_plain(summary.savings),
            summary.status.label()
        ),
    ]
}

pub fn print_summary(summary: &SummaryView) {
    output::section("Resumen");
    let lines = summary_lines(summary);
    let (head, last) = lines.split_at(lines.len() - 1);
    for line in head {
        output::info(line);
    }
    let result = match status_color(summary.status) {
        Some(color) => last[0].as_str().color(color).to_string(),
        None => last[0].clone(),
    };
    output::info(result);
}

/// Colour of the savings line; a balanced ledger stays uncoloured.
pub fn status_color(status: SavingsStatus) -> Option<Color> {
    match status {
        SavingsStatus::Positive => Some(Color::Green),
        SavingsStatus::Negative => Some(Color::Red),
        SavingsStatus::Neutral => None,
    }
}

/// Horizontal bar per category, scaled against the largest slice.
pub fn chart_lines(chart: &ChartData) -> Vec<String> {
    let total: f64 = chart.values.iter().sum();
    let max = chart.values.iter().copied().fold(0.0_f64, f64::max);
    let width = chart
        .labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);
    chart
        .labels
        .iter()
        .zip(&chart.values)
        .zip(&chart.colors)
        .map(|((label, value), color)| {
            let filled = if max > 0.0 {
                ((value / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
            format!(
                "  {:<width$} {:<bar$} {} ({:.1}%) {}",
                label,
                "#".repeat(filled),
                format_plain(*value),
                share,
                color,
                width = width,
                bar = BAR_WIDTH,
            )
        })
        .collect()
}

pub fn print_chart(chart: &ChartData) {
    output::section("Gastos por categoría");
    if chart.is_empty() {
        output::info("  (sin datos)");
        return;
    }
    for line in chart_lines(chart) {
        output::info(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn list_lines_show_display_index_and_label() {
        let items = vec![ExpenseListItem {
            index: 0,
            record_id: Uuid::nil(),
            category: "Food".into(),
            amount: 1234.5,
            amount_label: "1.234,50 €".into(),
        }];
        assert_eq!(list_lines(&items), vec!["  [0] Food: 1.234,50 €"]);
    }

    #[test]
    fn summary_lines_use_two_decimals() {
        let summary = SummaryView {
            income: 1000.0,
            total_expense: 350.0,
            savings: 650.0,
            status: SavingsStatus::Positive,
        };
        let lines = summary_lines(&summary);
        assert_eq!(lines[0], "  Ingresos:  1000.00");
        assert_eq!(lines[2], "  Resultado: 650.00 (Ganancia)");
    }

    #[test]
    fn savings_line_colour_tracks_status() {
        assert_eq!(status_color(SavingsStatus::Positive), Some(Color::Green));
        assert_eq!(status_color(SavingsStatus::Negative), Some(Color::Red));
        assert_eq!(status_color(SavingsStatus::Neutral), None);
    }

    #[test]
    fn chart_bars_scale_to_largest_slice() {
        let chart = ChartData {
            labels: vec!["Food".into(), "Transport".into()],
            values: vec![250.0, 125.0],
            colors: vec!["#ff6384".into(), "#36a2eb".into()],
        };
        let lines = chart_lines(&chart);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(&"#".repeat(BAR_WIDTH)));
        assert!(lines[0].contains("250.00 (66.7%) #ff6384"));
        assert!(lines[1].contains("125.00 (33.3%) #36a2eb"));
    }
}
