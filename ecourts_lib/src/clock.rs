//! Source of "now" for hearing classification and fetch timestamps.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

/// Supplies the evaluation date and fetch timestamps to [`crate::PortalClient`].
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The evaluation date hearings are classified against. Defaults to the
    /// local calendar date of [`Clock::now`].
    fn today(&self) -> NaiveDate {
        self.now().with_timezone(&Local).date_naive()
    }
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant and evaluation date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock {
    now: DateTime<Utc>,
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>, today: NaiveDate) -> Self {
        Self { now, today }
    }

    /// Frozen at midnight UTC of `today`.
    pub fn on(today: NaiveDate) -> Self {
        Self {
            now: Utc.from_utc_datetime(&today.and_time(NaiveTime::MIN)),
            today,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
