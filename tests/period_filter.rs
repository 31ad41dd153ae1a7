use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use savings_core::ledger::{FixedClock, Ledger, Period, Session};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 3, 8, 15, 0).unwrap()
}

fn days(value: f64) -> Duration {
    Duration::milliseconds((value * 24.0 * 60.0 * 60.0 * 1000.0).round() as i64)
}

#[test]
fn week_boundary_is_inclusive() {
    let mut ledger = Ledger::new();
    ledger
        .add_expense_at("edge", "1", now() - days(7.0))
        .unwrap();
    ledger
        .add_expense_at("stale", "1", now() - days(7.1))
        .unwrap();
    let visible = Period::Week.filter(ledger.records(), now());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].category, "Edge");
}

#[test]
fn month_is_not_a_rolling_window() {
    let mut ledger = Ledger::new();
    // Five days ago falls in the previous calendar month.
    ledger
        .add_expense_at("august", "10", now() - Duration::days(5))
        .unwrap();
    ledger
        .add_expense_at("september", "20", now() - Duration::days(1))
        .unwrap();
    let visible = Period::Month.filter(ledger.records(), now());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].category, "September");
    assert_eq!(Period::Year.filter(ledger.records(), now()).len(), 2);
}

#[test]
fn year_excludes_last_year() {
    let mut ledger = Ledger::new();
    let last_year = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
    ledger.add_expense_at("party", "80", last_year).unwrap();
    assert!(Period::Year.filter(ledger.records(), now()).is_empty());
    assert_eq!(Period::All.filter(ledger.records(), now()).len(), 1);
}

#[test]
fn filtered_totals_follow_the_active_period() {
    let mut session = Session::with_clock(Box::new(FixedClock::utc(now())));
    session.set_income("1000");
    session.add_expense("food", "100").unwrap();

    session.set_period(Period::Week);
    assert_eq!(session.summary().total_expense, 100.0);

    session.set_period(Period::from_selector("quarter"));
    assert_eq!(session.period(), Period::All);
    assert_eq!(session.summary().savings, 900.0);
}

#[test]
fn filter_preserves_ledger_order() {
    let mut ledger = Ledger::new();
    for (offset, category) in [(3, "c"), (1, "a"), (2, "b")] {
        ledger
            .add_expense_at(category, "1", now() - Duration::days(offset))
            .unwrap();
    }
    let names: Vec<&str> = Period::Week
        .filter(ledger.records(), now())
        .into_iter()
        .map(|record| record.category.as_str())
        .collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

#[test]
fn month_view_uses_the_local_calendar() {
    let madrid = FixedOffset::east_opt(2 * 3600).unwrap();
    let just_after_midnight = madrid.with_ymd_and_hms(2025, 4, 1, 0, 30, 0).unwrap();
    let noon = madrid.with_ymd_and_hms(2025, 4, 1, 12, 0, 0).unwrap();

    let mut ledger = Ledger::new();
    ledger
        .add_expense_at("rent", "700", just_after_midnight.with_timezone(&Utc))
        .unwrap();
    assert_eq!(Period::Month.filter(ledger.records(), noon).len(), 1);

    let mut session = Session::with_clock(Box::new(FixedClock::in_offset(just_after_midnight)));
    session.add_expense("rent", "700").unwrap();
    assert_eq!(session.list_items().len(), 1);
    assert_eq!(session.summary().total_expense, 700.0);
}
