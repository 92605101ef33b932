use axum::Router;
use std::time::Duration;

use reviewlens::{app_state::AppState, routes::create_router};

pub fn test_app() -> Router {
    let state = AppState::new(Duration::from_secs(5)).expect("Failed to build app state");
    create_router(state)
}

pub async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}
