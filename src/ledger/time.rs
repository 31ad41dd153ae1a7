use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Zone in which calendar periods (month, year) are judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarZone {
    /// The host's local time zone, daylight saving included.
    Local,
    Fixed(FixedOffset),
}

/// Clock abstracts access to the current timestamp so sessions remain deterministic in tests.
pub trait Clock {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Calendar the user reads dates in.
    fn zone(&self) -> CalendarZone;
}

/// Real-time clock backed by the system time source and the local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn zone(&self) -> CalendarZone {
        CalendarZone::Local
    }
}

/// Clock frozen at a given instant, read in a fixed offset.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    pub fn utc(at: DateTime<Utc>) -> Self {
        Self {
            at,
            offset: Utc.fix(),
        }
    }

    /// Frozen at `at`, with calendar fields taken from its own offset.
    pub fn in_offset(at: DateTime<FixedOffset>) -> Self {
        Self {
            at: at.with_timezone(&Utc),
            offset: *at.offset(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }

    fn zone(&self) -> CalendarZone {
        CalendarZone::Fixed(self.offset)
    }
}
