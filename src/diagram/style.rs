use serde::{Deserialize, Serialize};

/// Presentation options for the rendered diagram.
///
/// Both classroom variants share the same computation; they differ only
/// in these two switches.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DiagramStyle {
    /// Scale edge pen widths monotonically with flow magnitude.
    pub scale_edge_widths: bool,

    /// Draw dashed counter-edges for the goods moving opposite to the
    /// money flows (consumption, imports, exports).
    pub show_goods_flows: bool,
}

impl DiagramStyle {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn weighted() -> Self {
        Self {
            scale_edge_widths: true,
            show_goods_flows: true,
        }
    }
}
