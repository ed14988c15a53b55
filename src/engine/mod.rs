//! Flow computation engine.
//!
//! A single pure function maps the four input parameters to the complete
//! set of inter-sector money flows. There is no state, no I/O and no
//! failure path; each call is an independent O(1) computation.

use crate::domain::{FlowSet, SimParams};

// Model ratios for the simplified sectors. The government spends most of
// its tax take; the trade balance is assumed to run a surplus.
pub const GOVERNMENT_SPENDING_RATIO: f64 = 0.9;
pub const SUBSIDY_SHARE: f64 = 0.3;
pub const TRANSFER_SHARE: f64 = 0.4;
pub const EXPORT_SURPLUS_FACTOR: f64 = 1.1;

/// Corporate tax is a fixed amount, independent of the inputs.
pub const FIRM_TAX: f64 = 200.0;

/// Compute all money flows for one set of parameters.
///
/// Each step depends only on the steps before it:
/// 1. household tax is taken from gross income
/// 2. savings are taken from net income
/// 3. the remainder splits into imports and domestic consumption
/// 4. government spending, subsidies and transfers are fixed ratios of
///    the tax take; exports are a fixed markup on imports
///
/// The caller is responsible for clamping the inputs to their domains
/// ([`SimParams::clamped`]); out-of-domain values still produce a
/// well-defined result, just one with no economic meaning.
pub fn compute_flows(params: &SimParams) -> FlowSet {
    let household_tax = params.income * params.tax_rate;
    let net_income = params.income - household_tax;

    let savings = net_income * params.savings_rate;
    let disposable_consumption = net_income - savings;

    let imports = disposable_consumption * params.import_rate;
    let domestic_consumption = disposable_consumption - imports;

    let government_spending = household_tax * GOVERNMENT_SPENDING_RATIO;
    let subsidies = government_spending * SUBSIDY_SHARE;
    let transfers = government_spending * TRANSFER_SHARE;

    let exports = imports * EXPORT_SURPLUS_FACTOR;

    let government_balance = household_tax - (transfers + subsidies);

    FlowSet {
        household_tax,
        net_income,
        savings,
        disposable_consumption,
        imports,
        domestic_consumption,
        government_spending,
        subsidies,
        transfers,
        exports,
        firm_tax: FIRM_TAX,
        government_balance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_classroom_scenario() {
        let params = SimParams::new(3000.0, 0.25, 0.10, 0.15);
        let flows = compute_flows(&params);

        assert!(approx(flows.household_tax, 750.0));
        assert!(approx(flows.net_income, 2250.0));
        assert!(approx(flows.savings, 225.0));
        assert!(approx(flows.disposable_consumption, 2025.0));
        assert!(approx(flows.imports, 303.75));
        assert!(approx(flows.domestic_consumption, 1721.25));
        assert!(approx(flows.government_spending, 675.0));
        assert!(approx(flows.subsidies, 202.5));
        assert!(approx(flows.transfers, 270.0));
        assert!(approx(flows.exports, 334.125));
        assert!(approx(flows.government_balance, 277.5));
        assert_eq!(flows.firm_tax, FIRM_TAX);
    }

    #[test]
    fn test_all_rates_zero() {
        let params = SimParams::new(1000.0, 0.0, 0.0, 0.0);
        let flows = compute_flows(&params);

        assert!(approx(flows.household_tax, 0.0));
        assert!(approx(flows.net_income, 1000.0));
        assert!(approx(flows.savings, 0.0));
        assert!(approx(flows.disposable_consumption, 1000.0));
        assert!(approx(flows.imports, 0.0));
        assert!(approx(flows.domestic_consumption, 1000.0));
        assert!(approx(flows.government_spending, 0.0));
        assert!(approx(flows.subsidies, 0.0));
        assert!(approx(flows.transfers, 0.0));
        assert!(approx(flows.exports, 0.0));
        assert!(approx(flows.government_balance, 0.0));
    }

    #[test]
    fn test_max_tax_boundary() {
        let params = SimParams::new(5000.0, 0.5, 0.0, 0.0);
        let flows = compute_flows(&params);

        assert!(approx(flows.household_tax, 2500.0));
        assert!(approx(flows.net_income, 2500.0));
    }

    #[test]
    fn test_firm_tax_independent_of_inputs() {
        for income in [500.0, 3000.0, 5000.0] {
            let flows = compute_flows(&SimParams::new(income, 0.5, 0.3, 0.4));
            assert_eq!(flows.firm_tax, 200.0);
        }
    }

    #[test]
    fn test_idempotent_bit_for_bit() {
        let params = SimParams::new(4321.0, 0.37, 0.21, 0.33);
        let a = compute_flows(&params);
        let b = compute_flows(&params);
        assert_eq!(a.imports.to_bits(), b.imports.to_bits());
        assert_eq!(a.government_balance.to_bits(), b.government_balance.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn test_negative_income_is_well_defined() {
        // No clamping in the engine: garbage in, arithmetic out.
        let flows = compute_flows(&SimParams::new(-1000.0, 0.25, 0.10, 0.15));
        assert!(flows.net_income < 0.0);
        assert!(flows.verify_conservation(-1000.0));
    }

    proptest! {
        #[test]
        fn prop_flows_non_negative_in_domain(
            income in 500.0..5000.0f64,
            tax in 0.0..0.5f64,
            savings in 0.0..0.3f64,
            import in 0.0..0.4f64,
        ) {
            let flows = compute_flows(&SimParams::new(income, tax, savings, import));

            prop_assert!(flows.household_tax >= 0.0);
            prop_assert!(flows.net_income >= 0.0);
            prop_assert!(flows.savings >= 0.0);
            prop_assert!(flows.disposable_consumption >= 0.0);
            prop_assert!(flows.imports >= 0.0);
            prop_assert!(flows.domestic_consumption >= 0.0);
            prop_assert!(flows.government_spending >= 0.0);
            prop_assert!(flows.subsidies >= 0.0);
            prop_assert!(flows.transfers >= 0.0);
            prop_assert!(flows.exports >= 0.0);
            prop_assert!(flows.firm_tax >= 0.0);
        }

        #[test]
        fn prop_conservation_identities(
            income in 500.0..5000.0f64,
            tax in 0.0..0.5f64,
            savings in 0.0..0.3f64,
            import in 0.0..0.4f64,
        ) {
            let flows = compute_flows(&SimParams::new(income, tax, savings, import));
            prop_assert!(flows.verify_income_split(income));
            prop_assert!(flows.verify_net_income_split());
            prop_assert!(flows.verify_consumption_split());
        }

        #[test]
        fn prop_government_balance_is_spending_share(
            income in 500.0..5000.0f64,
            tax in 0.0..0.5f64,
        ) {
            // transfers + subsidies = 0.7 * 0.9 * tax take, so the balance
            // stays positive whenever any tax is collected.
            let flows = compute_flows(&SimParams::new(income, tax, 0.1, 0.1));
            let expected = flows.household_tax * (1.0 - GOVERNMENT_SPENDING_RATIO * (SUBSIDY_SHARE + TRANSFER_SHARE));
            prop_assert!((flows.government_balance - expected).abs() < 1e-9);
        }

        #[test]
        fn prop_raising_taxes_is_monotone(
            income in 500.0..5000.0f64,
            tax in 0.0..0.45f64,
            delta in 0.01..0.05f64,
            savings in 0.01..0.3f64,
            import in 0.01..0.4f64,
        ) {
            let low = compute_flows(&SimParams::new(income, tax, savings, import));
            let high = compute_flows(&SimParams::new(income, tax + delta, savings, import));

            prop_assert!(high.net_income < low.net_income);
            prop_assert!(high.savings < low.savings);
            prop_assert!(high.disposable_consumption < low.disposable_consumption);
            prop_assert!(high.domestic_consumption < low.domestic_consumption);
            prop_assert!(high.government_spending > low.government_spending);
            prop_assert!(high.subsidies > low.subsidies);
            prop_assert!(high.transfers > low.transfers);
        }

        #[test]
        fn prop_idempotent(
            income in 500.0..5000.0f64,
            tax in 0.0..0.5f64,
            savings in 0.0..0.3f64,
            import in 0.0..0.4f64,
        ) {
            let params = SimParams::new(income, tax, savings, import);
            prop_assert_eq!(compute_flows(&params), compute_flows(&params));
        }
    }
}
