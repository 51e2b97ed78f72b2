//! Wall-clock access
//!
//! Every read of the current time in the system goes through a [`Clock`] so
//! that pricing and validation can be pinned to a fixed instant in tests.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use std::fmt::Debug;

/// Source of the current instant
pub trait Clock: Send + Sync + Debug {
    /// Returns the current instant
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current calendar date
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Returns the current calendar year
    fn current_year(&self) -> i32 {
        self.today().year()
    }
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock frozen at `instant`
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Creates a clock frozen at noon UTC on the given date
    ///
    /// Returns `None` if the date does not exist.
    pub fn on(year: i32, month: u32, day: u32) -> Option<Self> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .map(Self::new)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Adds whole days to a calendar date, saturating at the calendar bounds
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}
