pub mod calendar;
pub mod contribution;
pub mod error;
pub mod feed;
pub mod theme;
pub mod window;

pub use calendar::ContributionCalendar;
pub use contribution::{level_for_count, ContributionDay, ContributionFeed, MAX_LEVEL};
pub use error::FeedError;
pub use feed::FeedResponse;
pub use theme::{Theme, ThemeMode};
pub use window::DateWindow;
