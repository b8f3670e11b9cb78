use axum::{routing::get, Router};

use crate::handlers::health;

pub fn create_router() -> Router {
    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health_check))
}
