pub mod state;
pub mod videos;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::http::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/videos", get(videos::list_videos))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
