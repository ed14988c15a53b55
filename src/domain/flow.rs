use serde::{Deserialize, Serialize};
use std::fmt;

use super::Sector;

/// Tolerance for the conservation identities. The arithmetic itself is
/// exact up to float rounding; display rounding happens only in the
/// presentation layer.
pub const BALANCE_TOLERANCE: f64 = 1e-9;

/// Complete set of inter-sector money flows for one computation.
///
/// Conservation identities (all exact up to [`BALANCE_TOLERANCE`]):
/// - `net_income + household_tax == income`
/// - `savings + disposable_consumption == net_income`
/// - `domestic_consumption + imports == disposable_consumption`
///
/// Every field is non-negative for in-domain inputs except
/// `government_balance`, which goes negative when the government runs a
/// deficit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowSet {
    /// Households -> Government.
    pub household_tax: f64,

    /// After-tax household income.
    pub net_income: f64,

    /// Households -> Banks.
    pub savings: f64,

    /// Funds available for consumption after tax and savings.
    pub disposable_consumption: f64,

    /// Households -> Foreign sector.
    pub imports: f64,

    /// Households -> Firms.
    pub domestic_consumption: f64,

    /// Total government outlay.
    pub government_spending: f64,

    /// Government -> Firms.
    pub subsidies: f64,

    /// Government -> Households.
    pub transfers: f64,

    /// Foreign sector -> Firms.
    pub exports: f64,

    /// Firms -> Government (fixed amount, not input-dependent).
    pub firm_tax: f64,

    /// Tax receipts minus outlays (transfers + subsidies); may be negative.
    pub government_balance: f64,
}

impl FlowSet {
    /// `net_income + household_tax == income`
    pub fn verify_income_split(&self, income: f64) -> bool {
        (self.net_income + self.household_tax - income).abs() < BALANCE_TOLERANCE
    }

    /// `savings + disposable_consumption == net_income`
    pub fn verify_net_income_split(&self) -> bool {
        (self.savings + self.disposable_consumption - self.net_income).abs() < BALANCE_TOLERANCE
    }

    /// `domestic_consumption + imports == disposable_consumption`
    pub fn verify_consumption_split(&self) -> bool {
        (self.domestic_consumption + self.imports - self.disposable_consumption).abs()
            < BALANCE_TOLERANCE
    }

    /// All three conservation identities at once.
    pub fn verify_conservation(&self, income: f64) -> bool {
        self.verify_income_split(income)
            && self.verify_net_income_split()
            && self.verify_consumption_split()
    }

    /// Whether the government runs a deficit.
    pub fn is_deficit(&self) -> bool {
        self.government_balance < 0.0
    }
}

impl fmt::Display for FlowSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FlowSet {{ Net: {:.2}, Consumption: {:.2}, Tax: {:.2}, Savings: {:.2}, Imports: {:.2}, Gov balance: {:.2} }}",
            self.net_income,
            self.domestic_consumption,
            self.household_tax,
            self.savings,
            self.imports,
            self.government_balance,
        )
    }
}

/// Category of a flow, used for edge coloring in the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowKind {
    Consumption,
    Income,
    Tax,
    Transfer,
    Subsidy,
    Saving,
    Investment,
    Import,
    Export,
}

impl FlowKind {
    /// Edge color in the rendered diagram.
    pub fn color(&self) -> &'static str {
        match self {
            FlowKind::Consumption | FlowKind::Income => "#333333",
            FlowKind::Tax => "red",
            FlowKind::Transfer | FlowKind::Subsidy => "blue",
            FlowKind::Saving | FlowKind::Investment => "green",
            FlowKind::Import | FlowKind::Export => "#666666",
        }
    }
}

/// One directed money flow between two sectors, ready for rendering.
///
/// `amount` is `None` for flows the model leaves unquantified (the
/// Banks -> Firms investment edge).
#[derive(Debug, Clone, Serialize)]
pub struct FlowEdge {
    pub from: Sector,
    pub to: Sector,
    pub name: &'static str,
    pub amount: Option<f64>,
    pub kind: FlowKind,
}

impl FlowEdge {
    pub fn new(
        from: Sector,
        to: Sector,
        name: &'static str,
        amount: Option<f64>,
        kind: FlowKind,
    ) -> Self {
        Self {
            from,
            to,
            name,
            amount,
            kind,
        }
    }
}
