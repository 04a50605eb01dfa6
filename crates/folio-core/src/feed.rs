use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::contribution::ContributionFeed;

/// Success envelope returned by `GET /contribution-feed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub username: String,
    pub contributions: ContributionFeed,
    pub last_updated: DateTime<Utc>,
}

impl FeedResponse {
    pub fn new(username: impl Into<String>, contributions: ContributionFeed) -> Self {
        Self {
            username: username.into(),
            contributions,
            last_updated: Utc::now(),
        }
    }

    pub fn total_contributions(&self) -> u64 {
        self.contributions.iter().map(|d| u64::from(d.count())).sum()
    }
}
