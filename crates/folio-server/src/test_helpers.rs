use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderName, StatusCode},
    routing::post,
    Router,
};
use folio_core::calendar::{ContributionWeek, RawContributionDay};
use folio_core::{ContributionCalendar, DateWindow, FeedError};
use folio_service::ContributionSource;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Build a calendar with one week per seven days, in the given order.
pub fn calendar(days: &[(&str, u32)]) -> ContributionCalendar {
    let weeks = days
        .chunks(7)
        .map(|chunk| ContributionWeek {
            contribution_days: chunk
                .iter()
                .map(|(date, count)| RawContributionDay {
                    date: date.parse().unwrap(),
                    contribution_count: *count,
                })
                .collect(),
        })
        .collect();
    ContributionCalendar { weeks }
}

/// GraphQL response body wrapping `calendar(days)`.
pub fn graphql_body(days: &[(&str, u32)]) -> Value {
    json!({
        "data": { "user": { "contributionsCollection": {
            "contributionCalendar": calendar(days)
        }}}
    })
}

/// In-memory source returning a fixed outcome and counting calls.
pub struct StaticSource {
    outcome: Result<ContributionCalendar, FeedError>,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn ok(calendar: ContributionCalendar) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(calendar),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn err(error: FeedError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContributionSource for StaticSource {
    async fn fetch_calendar(
        &self,
        _username: &str,
        _window: &DateWindow,
    ) -> Result<ContributionCalendar, FeedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Build a test router around `source`.
pub fn test_router(source: Arc<dyn ContributionSource>) -> Router {
    crate::app(source)
}

/// A running test server with base_url and background task handle.
pub struct TestServer {
    pub base_url: String,
    _handle: tokio::task::JoinHandle<()>,
}

/// Spawn the feed server on a random port.
pub async fn spawn_test_server(source: Arc<dyn ContributionSource>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
        crate::serve(listener, source).await.unwrap();
    });
    TestServer {
        base_url,
        _handle: handle,
    }
}

/// What the fake upstream saw for one request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub cache_control: Option<String>,
    pub user_agent: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct UpstreamState {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Stand-in for the GitHub GraphQL endpoint that replies with a canned
/// status and body.
pub struct FakeUpstream {
    pub endpoint: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl FakeUpstream {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

pub async fn spawn_fake_upstream(status: StatusCode, body: impl Into<String>) -> FakeUpstream {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = UpstreamState {
        status,
        body: body.into(),
        requests: requests.clone(),
    };
    let app = Router::new()
        .route("/graphql", post(fake_graphql))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}/graphql", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    FakeUpstream {
        endpoint,
        requests,
        _handle: handle,
    }
}

fn header_value(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn fake_graphql(
    State(state): State<UpstreamState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(HeaderName, &'static str); 1], String) {
    state.requests.lock().unwrap().push(RecordedRequest {
        authorization: header_value(&headers, header::AUTHORIZATION),
        cache_control: header_value(&headers, header::CACHE_CONTROL),
        user_agent: header_value(&headers, header::USER_AGENT),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}
