pub mod contributions;
pub mod health;

use std::sync::Arc;

use axum::{http::Method, Router};
use folio_core::Theme;
use folio_service::ContributionFeedService;
use tower_http::cors::{Any, CorsLayer};

pub struct InnerAppState {
    pub feeds: ContributionFeedService,
    /// Palette served to the heatmap renderer.
    pub theme: Theme,
}

pub type AppState = Arc<InnerAppState>;

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .merge(health::routes())
        .merge(contributions::routes())
        .layer(cors)
        .with_state(state)
}
