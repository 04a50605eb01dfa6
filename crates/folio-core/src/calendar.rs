use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::contribution::{bucket_days, ContributionFeed};

/// Contribution calendar as the upstream reports it: weeks of days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionCalendar {
    pub weeks: Vec<ContributionWeek>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    pub contribution_days: Vec<RawContributionDay>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContributionDay {
    pub date: NaiveDate,
    pub contribution_count: u32,
}

impl ContributionCalendar {
    /// Flatten weeks into `(date, count)` pairs in traversal order.
    ///
    /// Days the upstream omitted stay absent; nothing is deduplicated.
    pub fn flatten(&self) -> Vec<(NaiveDate, u32)> {
        self.weeks
            .iter()
            .flat_map(|week| week.contribution_days.iter())
            .map(|day| (day.date, day.contribution_count))
            .collect()
    }

    pub fn day_count(&self) -> usize {
        self.weeks.iter().map(|w| w.contribution_days.len()).sum()
    }

    /// Flatten and bucket into a feed.
    pub fn into_feed(self) -> ContributionFeed {
        bucket_days(self.flatten())
    }
}
