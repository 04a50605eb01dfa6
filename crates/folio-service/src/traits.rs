use async_trait::async_trait;
use folio_core::{ContributionCalendar, DateWindow, FeedError};

/// Where raw contribution calendars come from.
///
/// `GitHubClient` talks to the GitHub GraphQL API; tests substitute an
/// in-memory source.
#[async_trait]
pub trait ContributionSource: Send + Sync {
    /// Fetch one user's calendar over `window` with a single request.
    async fn fetch_calendar(
        &self,
        username: &str,
        window: &DateWindow,
    ) -> Result<ContributionCalendar, FeedError>;
}
