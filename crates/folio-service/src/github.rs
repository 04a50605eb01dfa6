use async_trait::async_trait;
use folio_core::{ContributionCalendar, DateWindow, FeedError};
use reqwest::header::{CACHE_CONTROL, USER_AGENT};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ContributionSource;

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";
pub const DEFAULT_USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Upstream responses may be reused by intermediaries for this long.
const UPSTREAM_MAX_AGE_SECS: u64 = 86_400;

const CONTRIBUTIONS_QUERY: &str = r#"
query($username: String!, $from: DateTime!, $to: DateTime!) {
  user(login: $username) {
    contributionsCollection(from: $from, to: $to) {
      contributionCalendar {
        weeks {
          contributionDays {
            date
            contributionCount
          }
        }
      }
    }
  }
}
"#;

/// Connection settings for the GitHub GraphQL API.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// Personal access token. Requests fail fast when this is missing.
    pub token: Option<String>,
    pub endpoint: String,
    pub user_agent: String,
}

impl GitHubConfig {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.trim().is_empty())
    }
}

pub struct GitHubClient {
    config: GitHubConfig,
    client: Client,
}

impl GitHubClient {
    pub fn new(config: GitHubConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: QueryVariables<'a>,
}

#[derive(Serialize)]
struct QueryVariables<'a> {
    username: &'a str,
    from: String,
    to: String,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct ResponseData {
    user: Option<UserNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserNode {
    contributions_collection: CollectionNode,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionNode {
    contribution_calendar: ContributionCalendar,
}

/// Extract the calendar from a GraphQL response body.
fn parse_calendar(body: &str) -> Result<ContributionCalendar, FeedError> {
    let response: GraphQlResponse = serde_json::from_str(body)
        .map_err(|e| FeedError::UpstreamProtocol(format!("decode response: {e}")))?;

    if !response.errors.is_empty() {
        let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(FeedError::UpstreamProtocol(messages.join("; ")));
    }

    let data = response
        .data
        .ok_or_else(|| FeedError::UpstreamProtocol("response has no data".into()))?;
    let user = data
        .user
        .ok_or_else(|| FeedError::UpstreamProtocol("user not found".into()))?;
    Ok(user.contributions_collection.contribution_calendar)
}

#[async_trait]
impl ContributionSource for GitHubClient {
    async fn fetch_calendar(
        &self,
        username: &str,
        window: &DateWindow,
    ) -> Result<ContributionCalendar, FeedError> {
        let token = self.config.token().ok_or(FeedError::ConfigurationMissing)?;

        let body = GraphQlRequest {
            query: CONTRIBUTIONS_QUERY,
            variables: QueryVariables {
                username,
                from: window.from_iso(),
                to: window.to_iso(),
            },
        };

        debug!(
            "github: querying contributions for {username} ({} .. {})",
            body.variables.from, body.variables.to
        );

        let resp = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(token)
            .header(USER_AGENT, &self.config.user_agent)
            .header(CACHE_CONTROL, format!("max-age={UPSTREAM_MAX_AGE_SECS}"))
            .json(&body)
            .send()
            .await
            .map_err(|e| FeedError::UpstreamNetwork(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::UpstreamUnavailable {
                status: status.as_u16(),
            });
        }

        let text = resp
            .text()
            .await
            .map_err(|e| FeedError::UpstreamNetwork(format!("read body: {e}")))?;
        parse_calendar(&text)
    }
}
