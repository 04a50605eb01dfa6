//! End-to-end tests: feed server backed by the real GitHub client, talking to
//! an in-process fake GraphQL upstream.
//!
//! Each test spawns both servers on 127.0.0.1:0 and drives them through
//! `FeedClient` or plain reqwest.

use std::sync::Arc;

use axum::http::StatusCode;
use folio_server::test_helpers::{
    graphql_body, spawn_fake_upstream, spawn_test_server, FakeUpstream,
};
use folio_server::FEED_CACHE_CONTROL;
use folio_service::{FeedClient, GitHubClient, GitHubConfig};
use serde_json::Value;

async fn feed_server_for(upstream: &FakeUpstream, token: Option<&str>) -> String {
    let config = GitHubConfig::new(token.map(str::to_string)).with_endpoint(&upstream.endpoint);
    let server = spawn_test_server(Arc::new(GitHubClient::new(config))).await;
    server.base_url
}

async fn upstream_with_days(days: &[(&str, u32)]) -> FakeUpstream {
    spawn_fake_upstream(StatusCode::OK, graphql_body(days).to_string()).await
}

// ---- Success path ----

#[tokio::test]
async fn feed_via_client_buckets_levels() {
    let upstream =
        upstream_with_days(&[("2024-05-02", 5), ("2024-05-03", 10), ("2024-05-04", 0)]).await;
    let url = feed_server_for(&upstream, Some("test-token")).await;

    let feed = FeedClient::new(&url).fetch_feed("octocat").await.unwrap();
    assert_eq!(feed.username, "octocat");
    let levels: Vec<u8> = feed.contributions.iter().map(|d| d.level()).collect();
    assert_eq!(levels, vec![2, 3, 0]);
    assert_eq!(feed.total_contributions(), 15);
}

#[tokio::test]
async fn feed_response_has_cache_headers_and_timestamp() {
    let upstream =
        upstream_with_days(&[("2024-05-02", 5), ("2024-05-03", 10), ("2024-05-04", 0)]).await;
    let url = feed_server_for(&upstream, Some("test-token")).await;

    let resp = reqwest::get(format!("{url}/contribution-feed?username=octocat"))
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(
        resp.headers()
            .get("cache-control")
            .and_then(|v| v.to_str().ok()),
        Some(FEED_CACHE_CONTROL)
    );
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["contributions"].as_array().unwrap().len(), 3);
    assert!(!json["lastUpdated"].is_null());
}

#[tokio::test]
async fn upstream_request_is_authenticated_and_windowed() {
    let upstream = upstream_with_days(&[("2024-05-04", 1)]).await;
    let url = feed_server_for(&upstream, Some("test-token")).await;

    FeedClient::new(&url).fetch_feed("octocat").await.unwrap();

    let requests = upstream.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.authorization.as_deref(), Some("Bearer test-token"));
    assert_eq!(req.cache_control.as_deref(), Some("max-age=86400"));
    assert!(req.user_agent.as_deref().unwrap().starts_with("folio/"));

    let vars = &req.body["variables"];
    assert_eq!(vars["username"], "octocat");
    let from: chrono::DateTime<chrono::Utc> = vars["from"].as_str().unwrap().parse().unwrap();
    let to: chrono::DateTime<chrono::Utc> = vars["to"].as_str().unwrap().parse().unwrap();
    assert_eq!(folio_core::DateWindow::ending_at(to).from, from);
}

#[tokio::test]
async fn repeated_requests_differ_only_in_timestamp() {
    let upstream = upstream_with_days(&[("2024-05-03", 4), ("2024-05-04", 12)]).await;
    let url = feed_server_for(&upstream, Some("test-token")).await;
    let client = FeedClient::new(&url);

    let first = client.fetch_feed("octocat").await.unwrap();
    let second = client.fetch_feed("octocat").await.unwrap();
    assert_eq!(first.username, second.username);
    assert_eq!(
        serde_json::to_vec(&first.contributions).unwrap(),
        serde_json::to_vec(&second.contributions).unwrap()
    );
    // No in-process cache: each request goes upstream.
    assert_eq!(upstream.requests().len(), 2);
}

// ---- Failure paths ----

#[tokio::test]
async fn missing_token_returns_503_without_upstream_call() {
    let upstream = upstream_with_days(&[("2024-05-04", 1)]).await;
    let url = feed_server_for(&upstream, None).await;

    let resp = reqwest::get(format!("{url}/contribution-feed?username=octocat"))
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 503);
    let json: Value = resp.json().await.unwrap();
    assert!(json.get("contributions").is_none());
    assert!(upstream.requests().is_empty());
}

#[tokio::test]
async fn missing_username_returns_400_without_upstream_call() {
    let upstream = upstream_with_days(&[("2024-05-04", 1)]).await;
    let url = feed_server_for(&upstream, Some("test-token")).await;

    let resp = reqwest::get(format!("{url}/contribution-feed")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    assert!(upstream.requests().is_empty());
}

#[tokio::test]
async fn rate_limited_upstream_returns_503() {
    let upstream = spawn_fake_upstream(
        StatusCode::TOO_MANY_REQUESTS,
        r#"{"message":"API rate limit exceeded"}"#,
    )
    .await;
    let url = feed_server_for(&upstream, Some("test-token")).await;

    let resp = reqwest::get(format!("{url}/contribution-feed?username=octocat"))
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 503);
    assert!(FeedClient::new(&url).fetch_feed("octocat").await.is_none());
    // Single attempt per request, no retries.
    assert_eq!(upstream.requests().len(), 2);
}

#[tokio::test]
async fn malformed_payload_returns_503() {
    let upstream = spawn_fake_upstream(StatusCode::OK, r#"{"data":{"user":{}}}"#).await;
    let url = feed_server_for(&upstream, Some("test-token")).await;

    assert!(FeedClient::new(&url).fetch_feed("octocat").await.is_none());
}

#[tokio::test]
async fn unknown_user_returns_503() {
    let body = r#"{"data":{"user":null},"errors":[{"message":"Could not resolve to a User"}]}"#;
    let upstream = spawn_fake_upstream(StatusCode::OK, body).await;
    let url = feed_server_for(&upstream, Some("test-token")).await;

    assert!(FeedClient::new(&url).fetch_feed("nobody").await.is_none());
}

#[tokio::test]
async fn unreachable_upstream_returns_503() {
    let config = GitHubConfig::new(Some("test-token".into())).with_endpoint("http://127.0.0.1:1/graphql");
    let server = spawn_test_server(Arc::new(GitHubClient::new(config))).await;

    let resp = reqwest::get(format!("{}/contribution-feed?username=octocat", server.base_url))
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 503);
}

// ---- Supplementary routes ----

#[tokio::test]
async fn theme_via_client() {
    let upstream = upstream_with_days(&[]).await;
    let url = feed_server_for(&upstream, Some("test-token")).await;

    let theme = FeedClient::new(&url).theme().await.unwrap();
    assert_eq!(theme, folio_core::Theme::default());
}

#[tokio::test]
async fn cors_allows_cross_origin_get() {
    let upstream = upstream_with_days(&[]).await;
    let url = feed_server_for(&upstream, Some("test-token")).await;

    let resp = reqwest::Client::new()
        .get(format!("{url}/api/health"))
        .header("Origin", "https://example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
