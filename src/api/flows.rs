use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    config::SimulationConfig,
    domain::{FlowSet, SimParams},
    engine,
};

use super::{response::ApiResponse, AppState};

/// Slider positions as they arrive from the UI. Unset parameters fall
/// back to the configured defaults; out-of-range values are clamped,
/// never rejected (slider semantics).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SliderQuery {
    pub income: Option<f64>,
    pub tax_percent: Option<u8>,
    pub savings_percent: Option<u8>,
    pub import_percent: Option<u8>,
}

impl SliderQuery {
    pub fn resolve(&self, defaults: &SimulationConfig) -> SimParams {
        SimParams::from_sliders(
            self.income.unwrap_or(defaults.default_income),
            self.tax_percent.unwrap_or(defaults.default_tax_percent),
            self.savings_percent
                .unwrap_or(defaults.default_savings_percent),
            self.import_percent
                .unwrap_or(defaults.default_import_percent),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct FlowsResponse {
    /// The parameters actually used, after defaults and clamping.
    pub params: SimParams,
    pub flows: FlowSet,
}

/// GET /api/v1/flows - Compute all money flows for the given sliders
pub async fn get_flows(
    State(st): State<AppState>,
    Query(q): Query<SliderQuery>,
) -> Json<ApiResponse<FlowsResponse>> {
    let params = q.resolve(&st.cfg.simulation);
    let flows = engine::compute_flows(&params);

    tracing::debug!(
        income = params.income,
        tax_rate = params.tax_rate,
        "computed flow set"
    );

    Json(ApiResponse::success(FlowsResponse { params, flows }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_resolve_fills_defaults() {
        let q = SliderQuery {
            income: None,
            tax_percent: None,
            savings_percent: None,
            import_percent: None,
        };
        let params = q.resolve(&Config::default().simulation);
        assert_eq!(params, SimParams::default());
    }

    #[test]
    fn test_resolve_clamps_income() {
        let q = SliderQuery {
            income: Some(99_000.0),
            tax_percent: Some(25),
            savings_percent: None,
            import_percent: None,
        };
        let params = q.resolve(&Config::default().simulation);
        assert_eq!(params.income, 5000.0);
    }
}
