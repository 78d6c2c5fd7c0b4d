use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::routes::{blockchain, health::health};

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1/blockchain", blockchain::router())
        .layer(TraceLayer::new_for_http())
}
