//! Diagram layer: maps a computed [`FlowSet`] onto directed edges between
//! the five sector nodes and renders them as Graphviz DOT.

pub mod dot;
pub mod style;

pub use dot::render;
pub use style::DiagramStyle;

use crate::domain::{FlowEdge, FlowKind, FlowSet, Sector, SimParams};

/// Build the directed edge list for one computation.
///
/// The income edge carries the input income (Firms pay wages back to
/// Households); the investment edge is unquantified in this model.
pub fn edges(params: &SimParams, flows: &FlowSet) -> Vec<FlowEdge> {
    use Sector::*;

    vec![
        FlowEdge::new(
            Households,
            Firms,
            "Consumption",
            Some(flows.domestic_consumption),
            FlowKind::Consumption,
        ),
        FlowEdge::new(Firms, Households, "Income", Some(params.income), FlowKind::Income),
        FlowEdge::new(
            Households,
            Government,
            "Taxes",
            Some(flows.household_tax),
            FlowKind::Tax,
        ),
        FlowEdge::new(
            Government,
            Households,
            "Transfers",
            Some(flows.transfers),
            FlowKind::Transfer,
        ),
        FlowEdge::new(Firms, Government, "Taxes", Some(flows.firm_tax), FlowKind::Tax),
        FlowEdge::new(
            Government,
            Firms,
            "Subsidies",
            Some(flows.subsidies),
            FlowKind::Subsidy,
        ),
        FlowEdge::new(Households, Banks, "Savings", Some(flows.savings), FlowKind::Saving),
        FlowEdge::new(Banks, Firms, "Investment", None, FlowKind::Investment),
        FlowEdge::new(
            Households,
            Foreign,
            "Imports",
            Some(flows.imports),
            FlowKind::Import,
        ),
        FlowEdge::new(Foreign, Firms, "Exports", Some(flows.exports), FlowKind::Export),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_flows;

    #[test]
    fn test_ten_edges_between_declared_sectors() {
        let params = SimParams::default();
        let flows = compute_flows(&params);
        let edges = edges(&params, &flows);

        assert_eq!(edges.len(), 10);
        // every sector participates in at least one flow
        for sector in [
            Sector::Households,
            Sector::Firms,
            Sector::Government,
            Sector::Banks,
            Sector::Foreign,
        ] {
            assert!(edges.iter().any(|e| e.from == sector || e.to == sector));
        }
    }

    #[test]
    fn test_only_investment_is_unquantified() {
        let params = SimParams::default();
        let flows = compute_flows(&params);
        let unquantified: Vec<_> = edges(&params, &flows)
            .into_iter()
            .filter(|e| e.amount.is_none())
            .collect();

        assert_eq!(unquantified.len(), 1);
        assert_eq!(unquantified[0].name, "Investment");
        assert_eq!(unquantified[0].from, Sector::Banks);
        assert_eq!(unquantified[0].to, Sector::Firms);
    }

    #[test]
    fn test_income_edge_echoes_input() {
        let params = SimParams::new(4200.0, 0.1, 0.1, 0.1);
        let flows = compute_flows(&params);
        let all = edges(&params, &flows);
        let income = all.iter().find(|e| e.name == "Income").unwrap();
        assert_eq!(income.amount, Some(4200.0));
    }
}
