mod github;
mod http;
mod pipeline;
mod traits;

pub use github::{GitHubClient, GitHubConfig, DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};
pub use http::{profile_url, FeedClient};
pub use pipeline::ContributionFeedService;
pub use traits::ContributionSource;
