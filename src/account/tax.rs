//! Flat-rate conversions between pre-tax and after-tax values

use rust_decimal::Decimal;

use crate::assumptions::EconomicAssumptions;
use crate::error::{PlannerError, PlannerResult};
use crate::rates::percent_to_fraction;

/// Value a holder keeps after paying the combined flat tax:
/// `value * (1 - (federal + state) / 100)`
pub fn convert_value_to_after_tax(value: Decimal, assumptions: &EconomicAssumptions) -> Decimal {
    value * retained_fraction(assumptions)
}

/// Pre-tax amount that leaves `value` after the combined flat tax.
///
/// Exact inverse of [`convert_value_to_after_tax`]. Fails when the combined
/// rate is 100% or more.
pub fn convert_value_to_pre_tax(
    value: Decimal,
    assumptions: &EconomicAssumptions,
) -> PlannerResult<Decimal> {
    let retained = retained_fraction(assumptions);
    if retained <= Decimal::ZERO {
        return Err(PlannerError::DegenerateTaxRate {
            combined: assumptions.combined_tax_rate(),
        });
    }
    Ok(value / retained)
}

fn retained_fraction(assumptions: &EconomicAssumptions) -> Decimal {
    Decimal::ONE - percent_to_fraction(assumptions.combined_tax_rate())
}
