//! Percent-rate conversions and decimal compounding helpers

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};

use crate::error::{PlannerError, PlannerResult};

/// Convert a percent rate (5.0 for 5%) to a fraction (0.05)
pub fn percent_to_fraction(rate: Decimal) -> Decimal {
    rate / Decimal::ONE_HUNDRED
}

/// Growth multiplier for one period at a percent rate: `1 + rate / 100`
pub fn growth_multiplier(rate: Decimal) -> Decimal {
    Decimal::ONE + percent_to_fraction(rate)
}

/// Raise a growth factor to a (possibly fractional) number of years.
///
/// Whole years use exact repeated multiplication. Fractional years go through
/// `powd`, which needs a positive base.
pub fn compound(base: Decimal, years: Decimal) -> PlannerResult<Decimal> {
    let invalid = || PlannerError::InvalidGrowth { base, years };

    if years.fract().is_zero() {
        let whole = years.to_i64().ok_or_else(invalid)?;
        return base.checked_powi(whole).ok_or_else(invalid);
    }

    if base <= Decimal::ZERO {
        return Err(invalid());
    }
    base.checked_powd(years).ok_or_else(invalid)
}

/// Round a monetary amount to cents (banker's rounding)
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp(2)
}
