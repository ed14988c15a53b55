//! Sector balances summary: the tabular view shown next to the diagram.

use serde::Serialize;
use std::fmt;

use crate::domain::FlowSet;

/// Classroom prompt shown under the diagram.
pub const TEACHING_NOTE: &str = "Raise the savings rate and watch what happens \
to firm revenue. Discuss the paradox of thrift.";

/// One row of the flow table.
#[derive(Debug, Clone, Serialize)]
pub struct FlowRow {
    pub flow: &'static str,
    pub amount_eur: f64,
}

/// Summary of the sector balances for one computation.
///
/// Amounts are raw model values; rounding is left to the consumer
/// (the `Display` impl rounds to cents, the diagram to whole euros).
#[derive(Debug, Clone, Serialize)]
pub struct BalanceReport {
    pub net_income: f64,
    pub government_balance: f64,
    pub deficit: bool,
    pub table: Vec<FlowRow>,
    pub teaching_note: &'static str,
}

/// Build the summary view from a computed flow set.
pub fn balance_report(flows: &FlowSet) -> BalanceReport {
    BalanceReport {
        net_income: flows.net_income,
        government_balance: flows.government_balance,
        deficit: flows.is_deficit(),
        table: vec![
            FlowRow {
                flow: "Domestic consumption",
                amount_eur: flows.domestic_consumption,
            },
            FlowRow {
                flow: "Household taxes",
                amount_eur: flows.household_tax,
            },
            FlowRow {
                flow: "Savings",
                amount_eur: flows.savings,
            },
            FlowRow {
                flow: "Imports",
                amount_eur: flows.imports,
            },
        ],
        teaching_note: TEACHING_NOTE,
    }
}

impl fmt::Display for BalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Households net: {:.2} \u{20ac}", self.net_income)?;
        writeln!(
            f,
            "Government balance: {:.2} \u{20ac}{}",
            self.government_balance,
            if self.deficit { " (deficit)" } else { "" }
        )?;
        for row in &self.table {
            writeln!(f, "  {}: {:.2} \u{20ac}", row.flow, row.amount_eur)?;
        }
        Ok(())
    }
}
