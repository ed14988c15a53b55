use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    diagram::{self, DiagramStyle},
    engine,
};

use super::{flows::SliderQuery, AppState};

// Slider fields are repeated here instead of `#[serde(flatten)]`:
// the urlencoded deserializer cannot flatten non-string fields.
#[derive(Debug, Deserialize)]
pub struct DiagramQuery {
    pub income: Option<f64>,
    pub tax_percent: Option<u8>,
    pub savings_percent: Option<u8>,
    pub import_percent: Option<u8>,
    pub scaled: Option<bool>,
    pub goods_flows: Option<bool>,
}

impl DiagramQuery {
    fn sliders(&self) -> SliderQuery {
        SliderQuery {
            income: self.income,
            tax_percent: self.tax_percent,
            savings_percent: self.savings_percent,
            import_percent: self.import_percent,
        }
    }

    fn style(&self) -> DiagramStyle {
        DiagramStyle {
            scale_edge_widths: self.scaled.unwrap_or(false),
            show_goods_flows: self.goods_flows.unwrap_or(false),
        }
    }
}

/// GET /api/v1/diagram - Render the flow diagram as Graphviz DOT text
pub async fn get_diagram(
    State(st): State<AppState>,
    Query(q): Query<DiagramQuery>,
) -> impl IntoResponse {
    let params = q.sliders().resolve(&st.cfg.simulation);
    let flows = engine::compute_flows(&params);
    let edges = diagram::edges(&params, &flows);
    let dot = diagram::render(&edges, &q.style());

    ([(header::CONTENT_TYPE, "text/vnd.graphviz")], dot)
}
