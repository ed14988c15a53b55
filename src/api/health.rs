use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::{domain::SimParams, engine};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: chrono::DateTime<chrono::Utc>,
    checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    engine: ComponentHealth,
}

/// Health status of a component
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ComponentHealth {
    fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            error: None,
        }
    }

    fn unhealthy(error: String) -> Self {
        Self {
            status: "unhealthy".to_string(),
            error: Some(error),
        }
    }
}

/// GET /health - Health check endpoint
///
/// Runs a reference computation and verifies the conservation identities
/// still hold (catches a miscompiled or corrupted engine, cheap enough
/// to run on every probe).
pub async fn health_check() -> impl IntoResponse {
    let engine_health = check_engine();
    let all_healthy = engine_health.status == "healthy";

    let response = HealthResponse {
        status: if all_healthy {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        timestamp: chrono::Utc::now(),
        checks: HealthChecks {
            engine: engine_health,
        },
    };

    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}

fn check_engine() -> ComponentHealth {
    let params = SimParams::default();
    let flows = engine::compute_flows(&params);
    if flows.verify_conservation(params.income) {
        ComponentHealth::healthy()
    } else {
        ComponentHealth::unhealthy("conservation identities violated".to_string())
    }
}

/// GET /health/live - Liveness probe
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}
