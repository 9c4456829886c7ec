//! Inflation and flat tax rates shared by every account in a scenario

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};

/// Default annual inflation, in percent
pub const DEFAULT_INFLATION_RATE: Decimal = dec!(2.0);

/// Default flat federal income tax rate, in percent
pub const DEFAULT_FEDERAL_TAX_RATE: Decimal = dec!(25.0);

/// Default flat state income tax rate, in percent
pub const DEFAULT_STATE_TAX_RATE: Decimal = dec!(3.75);

/// One macroeconomic scenario: inflation plus a flat tax regime.
///
/// All rates are percentages (2.0 means 2%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomicAssumptions {
    /// Annual inflation rate
    #[serde(default = "default_inflation_rate")]
    pub inflation_rate: Decimal,

    /// Flat federal marginal tax rate
    #[serde(default = "default_federal_tax_rate")]
    pub federal_tax_rate: Decimal,

    /// Flat state marginal tax rate
    #[serde(default = "default_state_tax_rate")]
    pub state_tax_rate: Decimal,
}

fn default_inflation_rate() -> Decimal {
    DEFAULT_INFLATION_RATE
}

fn default_federal_tax_rate() -> Decimal {
    DEFAULT_FEDERAL_TAX_RATE
}

fn default_state_tax_rate() -> Decimal {
    DEFAULT_STATE_TAX_RATE
}

impl EconomicAssumptions {
    pub fn new(inflation_rate: Decimal, federal_tax_rate: Decimal, state_tax_rate: Decimal) -> Self {
        Self {
            inflation_rate,
            federal_tax_rate,
            state_tax_rate,
        }
    }

    /// Federal plus state rate, in percent
    pub fn combined_tax_rate(&self) -> Decimal {
        self.federal_tax_rate + self.state_tax_rate
    }

    /// Check that pre-tax grossing-up is defined for this scenario
    pub fn validate(&self) -> PlannerResult<()> {
        let combined = self.combined_tax_rate();
        if combined >= Decimal::ONE_HUNDRED {
            return Err(PlannerError::DegenerateTaxRate { combined });
        }
        Ok(())
    }
}

impl Default for EconomicAssumptions {
    fn default() -> Self {
        Self::new(
            DEFAULT_INFLATION_RATE,
            DEFAULT_FEDERAL_TAX_RATE,
            DEFAULT_STATE_TAX_RATE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let a = EconomicAssumptions::default();
        assert_eq!(a.inflation_rate, dec!(2.0));
        assert_eq!(a.federal_tax_rate, dec!(25.0));
        assert_eq!(a.state_tax_rate, dec!(3.75));
        assert_eq!(a.combined_tax_rate(), dec!(28.75));
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_total_tax_of_one_hundred() {
        let a = EconomicAssumptions::new(dec!(2.0), dec!(60), dec!(40));
        let err = a.validate().unwrap_err();
        assert!(matches!(err, PlannerError::DegenerateTaxRate { combined } if combined == dec!(100)));
    }

    #[test]
    fn test_deserialize_fills_missing_rates() {
        let a: EconomicAssumptions = serde_json::from_str(r#"{"inflation_rate": 3.5}"#).unwrap();
        assert_eq!(a.inflation_rate, dec!(3.5));
        assert_eq!(a.federal_tax_rate, DEFAULT_FEDERAL_TAX_RATE);
        assert_eq!(a.state_tax_rate, DEFAULT_STATE_TAX_RATE);
    }
}
