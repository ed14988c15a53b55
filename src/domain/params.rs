use serde::{Deserialize, Serialize};
use validator::Validate;

// Slider domains. Income moves in absolute steps, the three rates are
// exposed to the UI as integer percentages and divided by 100 before use.
pub const INCOME_MIN: f64 = 500.0;
pub const INCOME_MAX: f64 = 5000.0;
pub const INCOME_STEP: f64 = 100.0;

pub const TAX_PERCENT_MAX: u8 = 50;
pub const SAVINGS_PERCENT_MAX: u8 = 30;
pub const IMPORT_PERCENT_MAX: u8 = 40;

pub const DEFAULT_INCOME: f64 = 3000.0;
pub const DEFAULT_TAX_PERCENT: u8 = 25;
pub const DEFAULT_SAVINGS_PERCENT: u8 = 10;
pub const DEFAULT_IMPORT_PERCENT: u8 = 15;

/// Input parameters for one flow computation.
///
/// Rates are fractions, not percentages. The engine itself never clamps;
/// callers coming from unclamped sources go through [`SimParams::clamped`]
/// first, which is what the HTTP layer does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct SimParams {
    /// Gross household income (wages), EUR.
    #[validate(range(min = 500.0, max = 5000.0))]
    pub income: f64,

    /// Fraction of income paid as household tax.
    #[validate(range(min = 0.0, max = 0.5))]
    pub tax_rate: f64,

    /// Fraction of net income saved.
    #[validate(range(min = 0.0, max = 0.3))]
    pub savings_rate: f64,

    /// Fraction of disposable consumption spent abroad.
    #[validate(range(min = 0.0, max = 0.4))]
    pub import_rate: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self::from_sliders(
            DEFAULT_INCOME,
            DEFAULT_TAX_PERCENT,
            DEFAULT_SAVINGS_PERCENT,
            DEFAULT_IMPORT_PERCENT,
        )
    }
}

impl SimParams {
    pub fn new(income: f64, tax_rate: f64, savings_rate: f64, import_rate: f64) -> Self {
        Self {
            income,
            tax_rate,
            savings_rate,
            import_rate,
        }
    }

    /// Build parameters from slider positions (income in EUR, rates as
    /// integer percentages), clamped to the slider domains.
    pub fn from_sliders(
        income: f64,
        tax_percent: u8,
        savings_percent: u8,
        import_percent: u8,
    ) -> Self {
        Self {
            income,
            tax_rate: f64::from(tax_percent) / 100.0,
            savings_rate: f64::from(savings_percent) / 100.0,
            import_rate: f64::from(import_percent) / 100.0,
        }
        .clamped()
    }

    /// Clamp every parameter to its declared domain.
    ///
    /// NaN falls back to the domain minimum; `f64::clamp` would let it
    /// through and poison every derived flow.
    pub fn clamped(self) -> Self {
        Self {
            income: clamp_or_min(self.income, INCOME_MIN, INCOME_MAX),
            tax_rate: clamp_or_min(self.tax_rate, 0.0, f64::from(TAX_PERCENT_MAX) / 100.0),
            savings_rate: clamp_or_min(
                self.savings_rate,
                0.0,
                f64::from(SAVINGS_PERCENT_MAX) / 100.0,
            ),
            import_rate: clamp_or_min(
                self.import_rate,
                0.0,
                f64::from(IMPORT_PERCENT_MAX) / 100.0,
            ),
        }
    }
}

fn clamp_or_min(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}
