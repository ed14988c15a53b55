use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};

use super::{diagram, flows, summary, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/flows", get(flows::get_flows))
        .route("/diagram", get(diagram::get_diagram))
        .route("/summary", get(summary::get_summary))
        .route("/defaults", get(summary::get_defaults))
        .route("/healthz", get(healthz))
        .with_state(state)
}

pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}
