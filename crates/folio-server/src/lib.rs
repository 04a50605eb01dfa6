pub mod config;
pub mod error;
mod routes;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use folio_core::Theme;
use folio_service::{ContributionFeedService, ContributionSource};
use tokio::net::TcpListener;

pub use routes::contributions::FEED_CACHE_CONTROL;

/// Build the application router around a contribution source.
pub fn app(source: Arc<dyn ContributionSource>) -> Router {
    let state = Arc::new(routes::InnerAppState {
        feeds: ContributionFeedService::new(source),
        theme: Theme::default(),
    });
    routes::build_router(state)
}

pub async fn serve(listener: TcpListener, source: Arc<dyn ContributionSource>) -> Result<()> {
    axum::serve(listener, app(source)).await?;
    Ok(())
}
