use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Highest intensity level a day can be bucketed into.
pub const MAX_LEVEL: u8 = 4;

/// Map a contribution count to a coarse 0-4 intensity level.
///
/// Thresholds are fixed: 0 → 0, 1–2 → 1, 3–5 → 2, 6–10 → 3, 11+ → 4.
pub fn level_for_count(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        6..=10 => 3,
        _ => MAX_LEVEL,
    }
}

/// One calendar day of contribution activity.
///
/// The level is always derived from the count; deserializing a day whose
/// level disagrees with its count fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DayWire")]
pub struct ContributionDay {
    date: NaiveDate,
    count: u32,
    level: u8,
}

impl ContributionDay {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self {
            date,
            count,
            level: level_for_count(count),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}

#[derive(Deserialize)]
struct DayWire {
    date: NaiveDate,
    count: u32,
    level: u8,
}

impl TryFrom<DayWire> for ContributionDay {
    type Error = String;

    fn try_from(wire: DayWire) -> Result<Self, Self::Error> {
        let day = ContributionDay::new(wire.date, wire.count);
        if day.level != wire.level {
            return Err(format!(
                "level {} does not match count {} on {}",
                wire.level, wire.count, wire.date
            ));
        }
        Ok(day)
    }
}

/// Days in the order the upstream reported them (ascending by date).
pub type ContributionFeed = Vec<ContributionDay>;

/// Bucket flattened `(date, count)` pairs into a feed, preserving order.
pub fn bucket_days(days: impl IntoIterator<Item = (NaiveDate, u32)>) -> ContributionFeed {
    days.into_iter()
        .map(|(date, count)| ContributionDay::new(date, count))
        .collect()
}
