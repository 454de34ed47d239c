use axum::{routing::get, Router};

use super::handler::{generate, SharedConfig};

pub fn router(config: SharedConfig) -> Router {
    Router::new()
        .route("/api/generate/:count", get(generate))
        .with_state(config)
}
