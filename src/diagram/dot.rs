use strum::IntoEnumIterator;

use crate::domain::{FlowEdge, Sector};

use super::DiagramStyle;

const BASE_PEN_WIDTH: f64 = 1.0;
const MAX_EXTRA_PEN_WIDTH: f64 = 4.0;

/// Render the flow edges as a Graphviz `digraph`.
///
/// Amounts are rounded to whole euros in the labels; the underlying
/// values stay untouched.
pub fn render(edges: &[FlowEdge], style: &DiagramStyle) -> String {
    let mut out = String::new();

    out.push_str("digraph circular_flow {\n");
    out.push_str("    rankdir=LR;\n");
    out.push_str(
        "    node [shape=box, style=\"filled,rounded\", fontname=\"Arial\", fontsize=\"12\"];\n\n",
    );

    for sector in Sector::iter() {
        out.push_str(&format!(
            "    {} [label=\"{}\", fillcolor=\"{}\"];\n",
            sector.node_id(),
            sector.label(),
            sector.fill_color(),
        ));
    }
    out.push('\n');

    let max_amount = edges
        .iter()
        .filter_map(|e| e.amount)
        .fold(0.0f64, f64::max);

    for edge in edges {
        out.push_str(&render_edge(edge, style, max_amount));
    }

    if style.show_goods_flows {
        out.push('\n');
        for edge in goods_counter_edges(edges) {
            out.push_str(&edge);
        }
    }

    out.push_str("}\n");
    out
}

fn render_edge(edge: &FlowEdge, style: &DiagramStyle, max_amount: f64) -> String {
    let label = match edge.amount {
        Some(amount) => format!(" {} ({:.0}\u{20ac})", edge.name, amount),
        None => format!(" {}", edge.name),
    };

    let mut attrs = format!("label=\"{}\", color=\"{}\"", label, edge.kind.color());

    if style.scale_edge_widths {
        if let Some(amount) = edge.amount {
            attrs.push_str(&format!(
                ", penwidth={:.2}",
                pen_width(amount, max_amount)
            ));
        }
    }

    format!(
        "    {} -> {} [{}];\n",
        edge.from.node_id(),
        edge.to.node_id(),
        attrs
    )
}

/// Monotone magnitude-to-width mapping; the widest edge is the largest flow.
fn pen_width(amount: f64, max_amount: f64) -> f64 {
    if max_amount <= 0.0 {
        return BASE_PEN_WIDTH;
    }
    BASE_PEN_WIDTH + MAX_EXTRA_PEN_WIDTH * (amount / max_amount)
}

/// Goods move opposite to the money for the consumption and trade flows.
fn goods_counter_edges(edges: &[FlowEdge]) -> Vec<String> {
    use crate::domain::FlowKind;

    edges
        .iter()
        .filter(|e| {
            matches!(
                e.kind,
                FlowKind::Consumption | FlowKind::Import | FlowKind::Export
            )
        })
        .map(|e| {
            format!(
                "    {} -> {} [label=\" Goods\", style=dashed, color=\"#AAAAAA\"];\n",
                e.to.node_id(),
                e.from.node_id(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::edges;
    use crate::domain::SimParams;
    use crate::engine::compute_flows;

    fn classroom_edges() -> Vec<FlowEdge> {
        let params = SimParams::new(3000.0, 0.25, 0.10, 0.15);
        let flows = compute_flows(&params);
        edges(&params, &flows)
    }

    #[test]
    fn test_dot_contains_all_sector_nodes() {
        let dot = render(&classroom_edges(), &DiagramStyle::plain());
        for id in ["HH", "FI", "GOV", "BK", "FO"] {
            assert!(dot.contains(&format!("    {} [label=", id)), "missing {}", id);
        }
        assert!(dot.starts_with("digraph circular_flow {"));
        assert!(dot.contains("rankdir=LR"));
    }

    #[test]
    fn test_labels_round_to_whole_euros() {
        let dot = render(&classroom_edges(), &DiagramStyle::plain());
        // imports 303.75 rounds to 304, consumption 1721.25 to 1721
        assert!(dot.contains("Imports (304\u{20ac})"));
        assert!(dot.contains("Consumption (1721\u{20ac})"));
        assert!(dot.contains("Taxes (200\u{20ac})"));
    }

    #[test]
    fn test_investment_edge_has_no_amount() {
        let dot = render(&classroom_edges(), &DiagramStyle::plain());
        assert!(dot.contains("label=\" Investment\""));
        assert!(!dot.contains("Investment ("));
    }

    #[test]
    fn test_plain_style_has_no_pen_widths() {
        let dot = render(&classroom_edges(), &DiagramStyle::plain());
        assert!(!dot.contains("penwidth"));
        assert!(!dot.contains("style=dashed"));
    }

    #[test]
    fn test_weighted_style_scales_and_dashes() {
        let dot = render(&classroom_edges(), &DiagramStyle::weighted());
        assert!(dot.contains("penwidth"));
        // the income edge (3000) is the largest flow -> full width
        assert!(dot.contains("penwidth=5.00"));
        assert_eq!(dot.matches("style=dashed").count(), 3);
    }

    #[test]
    fn test_pen_width_monotone() {
        assert!(pen_width(100.0, 1000.0) < pen_width(500.0, 1000.0));
        assert_eq!(pen_width(1000.0, 1000.0), BASE_PEN_WIDTH + MAX_EXTRA_PEN_WIDTH);
        // all-zero flows fall back to the base width
        assert_eq!(pen_width(0.0, 0.0), BASE_PEN_WIDTH);
    }
}
