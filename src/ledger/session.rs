use chrono::Local;
use tracing::{debug, info};

use super::{
    ledger::Ledger,
    period::Period,
    record::ExpenseRecord,
    time::{CalendarZone, Clock, SystemClock},
    view::{self, ChartData, ExpenseListItem, LedgerObserver, SummaryView},
};
use crate::{currency::MoneyFormatter, errors::ValidationError};

/// One user session: the ledger, the active period, and the renderers watching it.
///
/// Every mutation recomputes the filtered views and pushes them to observers
/// before returning. Dropping the session discards the ledger.
pub struct Session {
    ledger: Ledger,
    period: Period,
    clock: Box<dyn Clock>,
    money: MoneyFormatter,
    observers: Vec<Box<dyn LedgerObserver>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        info!("ledger session started");
        Self {
            ledger: Ledger::new(),
            period: Period::default(),
            clock,
            money: MoneyFormatter::default(),
            observers: Vec::new(),
        }
    }

    pub fn with_formatter(mut self, money: MoneyFormatter) -> Self {
        self.money = money;
        self
    }

    pub fn with_period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    /// Registers an observer and immediately sends it the current views.
    pub fn subscribe(&mut self, mut observer: Box<dyn LedgerObserver>) {
        let (items, summary, chart) = self.views();
        observer.on_list_changed(&items);
        observer.on_summary_changed(&summary);
        observer.on_chart_changed(&chart);
        self.observers.push(observer);
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn money(&self) -> &MoneyFormatter {
        &self.money
    }

    pub fn set_formatter(&mut self, money: MoneyFormatter) {
        self.money = money;
        self.refresh();
    }

    pub fn set_period(&mut self, period: Period) {
        debug!(%period, "active period changed");
        self.period = period;
        self.refresh();
    }

    pub fn set_income(&mut self, raw: &str) {
        self.ledger.set_income(raw);
        self.refresh();
    }

    pub fn add_expense(
        &mut self,
        raw_category: &str,
        raw_amount: &str,
    ) -> Result<ExpenseRecord, ValidationError> {
        let now = self.clock.now();
        let record = self
            .ledger
            .add_expense_at(raw_category, raw_amount, now)?
            .clone();
        self.refresh();
        Ok(record)
    }

    /// Removes by position in the full ledger.
    pub fn remove_expense(&mut self, index: usize) -> Option<ExpenseRecord> {
        let removed = self.ledger.remove_expense(index);
        if removed.is_some() {
            self.refresh();
        }
        removed
    }

    /// Removes the record shown at `display_index` of the filtered list.
    pub fn remove_visible(&mut self, display_index: usize) -> Option<ExpenseRecord> {
        let target = self.visible_records().get(display_index).map(|record| record.id)?;
        let position = self.ledger.position_of(target)?;
        self.remove_expense(position)
    }

    pub fn clear(&mut self) {
        self.ledger.clear();
        self.refresh();
    }

    /// Records inside the active period, in ledger order.
    pub fn visible_records(&self) -> Vec<&ExpenseRecord> {
        let now = self.clock.now();
        let records = self.ledger.records();
        match self.clock.zone() {
            CalendarZone::Local => self.period.filter(records, now.with_timezone(&Local)),
            CalendarZone::Fixed(offset) => self.period.filter(records, now.with_timezone(&offset)),
        }
    }

    pub fn list_items(&self) -> Vec<ExpenseListItem> {
        view::expense_list(&self.visible_records(), &self.money)
    }

    pub fn summary(&self) -> SummaryView {
        view::summary(self.ledger.income(), &self.visible_records())
    }

    pub fn chart(&self) -> ChartData {
        view::chart(&self.visible_records())
    }

    fn views(&self) -> (Vec<ExpenseListItem>, SummaryView, ChartData) {
        let visible = self.visible_records();
        (
            view::expense_list(&visible, &self.money),
            view::summary(self.ledger.income(), &visible),
            view::chart(&visible),
        )
    }

    /// Recomputes every view and notifies observers in registration order.
    pub fn refresh(&mut self) {
        let (items, summary, chart) = self.views();
        debug!(
            visible = items.len(),
            total = summary.total_expense,
            savings = summary.savings,
            observers = self.observers.len(),
            "views refreshed"
        );
        for observer in &mut self.observers {
            observer.on_list_changed(&items);
            observer.on_summary_changed(&summary);
            observer.on_chart_changed(&chart);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::ledger::{time::FixedClock, SavingsStatus};

    #[derive(Default)]
    struct Recorded {
        events: Vec<&'static str>,
        last_summary: Option<SummaryView>,
    }

    struct Recorder(Rc<RefCell<Recorded>>);

    impl LedgerObserver for Recorder {
        fn on_list_changed(&mut self, _items: &[ExpenseListItem]) {
            self.0.borrow_mut().events.push("list");
        }
        fn on_summary_changed(&mut self, summary: &SummaryView) {
            let mut state = self.0.borrow_mut();
            state.events.push("summary");
            state.last_summary = Some(*summary);
        }
        fn on_chart_changed(&mut self, _chart: &ChartData) {
            self.0.borrow_mut().events.push("chart");
        }
    }

    fn fixed_session() -> Session {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap();
        Session::with_clock(Box::new(FixedClock::utc(now)))
    }

    #[test]
    fn observers_get_list_summary_chart_per_mutation() {
        let state = Rc::new(RefCell::new(Recorded::default()));
        let mut session = fixed_session();
        session.subscribe(Box::new(Recorder(state.clone())));
        state.borrow_mut().events.clear();

        session.set_income("100");
        session.add_expense("rent", "150").unwrap();

        let recorded = state.borrow();
        assert_eq!(
            recorded.events,
            vec!["list", "summary", "chart", "list", "summary", "chart"]
        );
        let summary = recorded.last_summary.unwrap();
        assert_eq!(summary.savings, -50.0);
        assert_eq!(summary.status, SavingsStatus::Negative);
    }

    #[test]
    fn rejected_expense_does_not_notify() {
        let state = Rc::new(RefCell::new(Recorded::default()));
        let mut session = fixed_session();
        session.subscribe(Box::new(Recorder(state.clone())));
        state.borrow_mut().events.clear();

        assert!(session.add_expense("rent", "-1").is_err());
        assert!(session.remove_expense(3).is_none());
        assert!(state.borrow().events.is_empty());
    }

    #[test]
    fn remove_visible_targets_the_displayed_record() {
        let mut session = fixed_session().with_period(Period::Week);
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap();
        session
            .ledger
            .add_expense_at("old", "5", now - Duration::days(30))
            .unwrap();
        session.add_expense("fresh", "7").unwrap();

        let removed = session.remove_visible(0).unwrap();
        assert_eq!(removed.category, "Fresh");
        assert_eq!(session.ledger().len(), 1);
        assert_eq!(session.ledger().records()[0].category, "Old");
        assert!(session.remove_visible(0).is_none());
    }

    #[test]
    fn changing_period_keeps_records() {
        let mut session = fixed_session();
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap();
        session
            .ledger
            .add_expense_at("trip", "300", now - Duration::days(60))
            .unwrap();
        assert!(session.visible_records().is_empty());
        session.set_period(Period::Year);
        assert_eq!(session.visible_records().len(), 1);
        session.set_period(Period::Week);
        assert!(session.visible_records().is_empty());
        assert_eq!(session.ledger().len(), 1);
    }
}
