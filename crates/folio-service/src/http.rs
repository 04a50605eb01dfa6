use folio_core::{FeedResponse, Theme};
use reqwest::{Client, StatusCode};
use tracing::debug;

/// Link to a user's profile on the upstream service.
pub fn profile_url(username: &str) -> String {
    format!("https://github.com/{username}")
}

/// Async HTTP client for a running folio-server.
///
/// Mirrors what the heatmap widget expects: a feed on success and nothing
/// otherwise, never an error to show.
pub struct FeedClient {
    base_url: String,
    client: Client,
}

impl FeedClient {
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub async fn fetch_feed(&self, username: &str) -> Option<FeedResponse> {
        let resp = self
            .client
            .get(format!("{}/contribution-feed", self.base_url))
            .query(&[("username", username)])
            .send()
            .await
            .map_err(|e| debug!("feed request failed: {e}"))
            .ok()?;
        if resp.status() != StatusCode::OK {
            debug!("feed request returned {}", resp.status());
            return None;
        }
        resp.json()
            .await
            .map_err(|e| debug!("feed body undecodable: {e}"))
            .ok()
    }

    pub async fn theme(&self) -> Option<Theme> {
        let resp = self
            .client
            .get(format!("{}/contribution-feed/theme", self.base_url))
            .send()
            .await
            .ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json().await.ok()
    }
}
