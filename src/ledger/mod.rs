//! Ledger store, aggregation, period filtering, and the session that ties them
//! to presentation observers.

pub mod aggregate;
pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod palette;
pub mod period;
pub mod record;
pub mod session;
pub mod time;
pub mod view;

pub use aggregate::{
    by_category, classify_savings, savings, total_expense, CategoryTotal, SavingsStatus,
};
pub use category::{normalize_category, UNCATEGORIZED};
pub use ledger::{parse_amount, parse_leading_float, Ledger};
pub use palette::{colors, BASE_PALETTE};
pub use period::{ParsePeriodError, Period};
pub use record::ExpenseRecord;
pub use session::Session;
pub use time::{CalendarZone, Clock, FixedClock, SystemClock};
pub use view::{ChartData, ExpenseListItem, LedgerObserver, SummaryView};
