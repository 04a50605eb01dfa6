use std::sync::Arc;

use chrono::{DateTime, Utc};
use folio_core::{ContributionFeed, DateWindow, FeedError};
use tracing::warn;

use crate::ContributionSource;

/// Resolves the window, fetches once, and buckets the result.
#[derive(Clone)]
pub struct ContributionFeedService {
    source: Arc<dyn ContributionSource>,
}

impl ContributionFeedService {
    pub fn new(source: Arc<dyn ContributionSource>) -> Self {
        Self { source }
    }

    pub async fn try_fetch(
        &self,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<ContributionFeed, FeedError> {
        let window = DateWindow::ending_at(now);
        let calendar = self.source.fetch_calendar(username, &window).await?;
        Ok(calendar.into_feed())
    }

    /// Fail-soft variant: any failure is logged and reported as `None`.
    pub async fn fetch(&self, username: &str, now: DateTime<Utc>) -> Option<ContributionFeed> {
        match self.try_fetch(username, now).await {
            Ok(feed) => Some(feed),
            Err(e) => {
                warn!("contribution feed for {username} unavailable: {e}");
                None
            }
        }
    }
}
