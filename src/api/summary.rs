use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::{
    domain::params::{
        IMPORT_PERCENT_MAX, INCOME_MAX, INCOME_MIN, INCOME_STEP, SAVINGS_PERCENT_MAX,
        TAX_PERCENT_MAX,
    },
    engine,
    report::{balance_report, BalanceReport},
};

use super::{flows::SliderQuery, response::ApiResponse, AppState};

/// GET /api/v1/summary - Sector balances and flow table
pub async fn get_summary(
    State(st): State<AppState>,
    Query(q): Query<SliderQuery>,
) -> Json<ApiResponse<BalanceReport>> {
    let params = q.resolve(&st.cfg.simulation);
    let flows = engine::compute_flows(&params);
    Json(ApiResponse::success(balance_report(&flows)))
}

/// Declared domain of one slider, for clients building their own controls.
#[derive(Debug, Serialize)]
pub struct SliderSpec {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

/// GET /api/v1/defaults - Slider domains, steps and default positions
pub async fn get_defaults(State(st): State<AppState>) -> Json<ApiResponse<Vec<SliderSpec>>> {
    let sim = &st.cfg.simulation;
    let specs = vec![
        SliderSpec {
            name: "income",
            min: INCOME_MIN,
            max: INCOME_MAX,
            step: INCOME_STEP,
            default: sim.default_income,
        },
        SliderSpec {
            name: "tax_percent",
            min: 0.0,
            max: f64::from(TAX_PERCENT_MAX),
            step: 1.0,
            default: f64::from(sim.default_tax_percent),
        },
        SliderSpec {
            name: "savings_percent",
            min: 0.0,
            max: f64::from(SAVINGS_PERCENT_MAX),
            step: 1.0,
            default: f64::from(sim.default_savings_percent),
        },
        SliderSpec {
            name: "import_percent",
            min: 0.0,
            max: f64::from(IMPORT_PERCENT_MAX),
            step: 1.0,
            default: f64::from(sim.default_import_percent),
        },
    ];

    Json(ApiResponse::success(specs))
}
