pub mod diagram;
pub mod error;
pub mod flows;
pub mod health;
pub mod response;
pub mod summary;
pub mod v1;

use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::Config;

/// Shared handler state. The engine itself is stateless; handlers only
/// need the configured defaults.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
}

impl AppState {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }
}

pub fn router(state: AppState, cfg: &Config) -> Router {
    let mut router = Router::new()
        .nest("/api/v1", v1::router(state))
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .fallback(fallback_404);

    if cfg.server.enable_cors {
        use tower_http::cors::{Any, CorsLayer};
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([axum::http::Method::GET])
            .allow_headers([axum::http::header::CONTENT_TYPE]);
        router = router.layer(cors);
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(64 * 1024))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    cfg.server.request_timeout_secs,
                ))),
        )
        .layer(TraceLayer::new_for_http())
}

async fn fallback_404(uri: axum::http::Uri) -> error::ApiError {
    error::ApiError::NotFound(uri.path().to_string())
}
