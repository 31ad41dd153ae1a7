use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::record::ExpenseRecord;

/// Window of records that feed the derived totals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Rolling seven days ending now.
    Week,
    /// Calendar month containing now.
    #[default]
    Month,
    /// Calendar year containing now.
    Year,
    /// No filtering.
    All,
}

impl Period {
    /// Lenient mapping used by front ends; unknown selectors fall back to [`Period::All`].
    pub fn from_selector(selector: &str) -> Self {
        selector.parse().unwrap_or(Period::All)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
            Period::All => "all",
        }
    }

    /// Whether a record stamped at `recorded_at` belongs to this period as seen from `now`.
    ///
    /// The week window is a continuous 7×24h duration, inclusive at the boundary.
    /// Records dated after `now` have a negative age and therefore pass it.
    /// Month and year compare calendar fields in the time zone of `now`.
    pub fn contains<Tz: TimeZone>(&self, recorded_at: DateTime<Utc>, now: DateTime<Tz>) -> bool {
        let local = recorded_at.with_timezone(&now.timezone());
        match self {
            Period::Week => now.with_timezone(&Utc) - recorded_at <= Duration::days(7),
            Period::Month => local.year() == now.year() && local.month() == now.month(),
            Period::Year => local.year() == now.year(),
            Period::All => true,
        }
    }

    /// Records in this period, in ledger order. Stored records are never touched.
    pub fn filter<'a, Tz: TimeZone>(
        &self,
        records: &'a [ExpenseRecord],
        now: DateTime<Tz>,
    ) -> Vec<&'a ExpenseRecord> {
        records
            .iter()
            .filter(|record| self.contains(record.recorded_at, now.clone()))
            .collect()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown period `{0}` (expected week, month, year or all)")]
pub struct ParsePeriodError(pub String);

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "week" | "semana" => Ok(Period::Week),
            "month" | "mes" => Ok(Period::Month),
            "year" | "ano" | "año" => Ok(Period::Year),
            "all" | "todo" => Ok(Period::All),
            other => Err(ParsePeriodError(other.to_string())),
        }
    }
}
