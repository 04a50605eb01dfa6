use chrono::{DateTime, Months, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Length of the contribution window in calendar months.
pub const WINDOW_MONTHS: u32 = 6;

/// The `[from, to]` range a feed is queried over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl DateWindow {
    /// Window of the six calendar months ending at `now`.
    ///
    /// When the target month is shorter than the start day, the day is
    /// clamped to that month's last day (Aug 31 → Feb 28/29). Time of day
    /// is kept.
    pub fn ending_at(now: DateTime<Utc>) -> Self {
        let from = now
            .checked_sub_months(Months::new(WINDOW_MONTHS))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self { from, to: now }
    }

    /// `from` as sent upstream, e.g. `2023-11-04T12:00:00.000Z`.
    pub fn from_iso(&self) -> String {
        self.from.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn to_iso(&self) -> String {
        self.to.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
