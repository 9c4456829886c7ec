//! Retirement account with a cached inflation-adjusted projection

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::tax::{convert_value_to_after_tax, convert_value_to_pre_tax};
use crate::assumptions::SharedAssumptions;
use crate::error::{PlannerError, PlannerResult};
use crate::rates::{compound, growth_multiplier};

/// Default account label
pub const DEFAULT_ACCOUNT_NAME: &str = "401(k)";

/// A single retirement fund.
///
/// Call [`Account::compute_future_value`] to project the fund forward; the
/// result is expressed in today's dollars and cached. The pre-tax and after-tax
/// views read from that cache and never recompute it, so after changing any
/// parameter (or the shared inflation rate) the projection must be rerun.
#[derive(Debug, Clone)]
pub struct Account {
    /// Label only, not used in any calculation
    pub name: String,

    /// Starting principal
    pub initial_value: Decimal,

    /// Roth: contributions already taxed, growth and withdrawals untaxed.
    /// Traditional: contributions pre-tax, withdrawals taxed.
    pub roth: bool,

    /// Nominal annual growth rate at the start of the horizon, in percent
    pub interest_rate: Decimal,

    /// Projection horizon in years, may be fractional
    pub years: Decimal,

    final_interest_rate: Option<Decimal>,
    assumptions: SharedAssumptions,
    future_value: Option<Decimal>,
}

impl Account {
    /// Create an account bound to a fresh default scenario
    pub fn new(
        name: impl Into<String>,
        initial_value: Decimal,
        roth: bool,
        interest_rate: Decimal,
        years: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            initial_value,
            roth,
            interest_rate,
            years,
            final_interest_rate: None,
            assumptions: SharedAssumptions::default(),
            future_value: None,
        }
    }

    /// Ramp the growth rate towards `rate` by the end of the horizon
    pub fn with_final_interest_rate(mut self, rate: Decimal) -> Self {
        self.final_interest_rate = Some(rate);
        self
    }

    /// Bind the account to a shared scenario
    pub fn with_assumptions(mut self, assumptions: SharedAssumptions) -> Self {
        self.assumptions = assumptions;
        self
    }

    /// Growth rate at the end of the horizon; the starting rate when no ramp is set
    pub fn final_interest_rate(&self) -> Decimal {
        self.final_interest_rate.unwrap_or(self.interest_rate)
    }

    pub fn set_final_interest_rate(&mut self, rate: Option<Decimal>) {
        self.final_interest_rate = rate;
    }

    pub fn assumptions(&self) -> &SharedAssumptions {
        &self.assumptions
    }

    pub fn set_assumptions(&mut self, assumptions: SharedAssumptions) {
        self.assumptions = assumptions;
    }

    /// Last computed projection, if any
    pub fn future_value(&self) -> Option<Decimal> {
        self.future_value
    }

    /// Project the account forward in today's dollars.
    ///
    /// The starting and final growth multipliers are averaged to approximate a
    /// linear shift in allocation over the horizon, then deflated by inflation:
    ///
    /// `initial_value * (((g(rate) + g(final_rate)) / 2) / g(inflation)) ^ years`
    pub fn compute_future_value(&mut self) -> PlannerResult<Decimal> {
        let inflation_rate = self.assumptions.inflation_rate();
        let inflation_growth = growth_multiplier(inflation_rate);
        if inflation_growth <= Decimal::ZERO {
            return Err(PlannerError::DegenerateInflation {
                rate: inflation_rate,
            });
        }

        let average_growth = growth_multiplier(self.interest_rate)
            .checked_add(growth_multiplier(self.final_interest_rate()))
            .map(|sum| sum / dec!(2));
        let real_growth = average_growth
            .and_then(|growth| growth.checked_div(inflation_growth))
            .ok_or(PlannerError::InvalidGrowth {
                base: inflation_growth,
                years: self.years,
            })?;

        let future_value = self
            .initial_value
            .checked_mul(compound(real_growth, self.years)?)
            .ok_or(PlannerError::InvalidGrowth {
                base: real_growth,
                years: self.years,
            })?;
        log::debug!(
            "account '{}': {} at {}%..{}% over {} years (inflation {}%) -> {}",
            self.name,
            self.initial_value,
            self.interest_rate,
            self.final_interest_rate(),
            self.years,
            inflation_rate,
            future_value
        );

        self.future_value = Some(future_value);
        Ok(future_value)
    }

    /// Cached projection as the holder would realize it after tax
    pub fn future_value_after_tax(&self) -> PlannerResult<Decimal> {
        let value = self.cached_future_value()?;
        if self.roth {
            Ok(value)
        } else {
            Ok(convert_value_to_after_tax(value, &self.assumptions.snapshot()))
        }
    }

    /// Cached projection expressed as an equivalent pre-tax amount
    pub fn future_value_pre_tax(&self) -> PlannerResult<Decimal> {
        let value = self.cached_future_value()?;
        if self.roth {
            convert_value_to_pre_tax(value, &self.assumptions.snapshot())
        } else {
            Ok(value)
        }
    }

    fn cached_future_value(&self) -> PlannerResult<Decimal> {
        self.future_value
            .ok_or_else(|| PlannerError::FutureValueNotComputed {
                account: self.name.clone(),
            })
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new(
            DEFAULT_ACCOUNT_NAME,
            Decimal::ZERO,
            false,
            Decimal::ZERO,
            Decimal::ZERO,
        )
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name={}, initial_value={}, roth={}",
            self.name, self.initial_value, self.roth
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::EconomicAssumptions;
    use crate::rates::round_to_cents;

    fn scenario(inflation: Decimal) -> SharedAssumptions {
        SharedAssumptions::new(EconomicAssumptions::new(inflation, dec!(25.0), dec!(3.75)))
    }

    fn test_account(interest: Decimal, inflation: Decimal) -> Account {
        Account::new("401(k)", dec!(100000.00), false, interest, dec!(10))
            .with_assumptions(scenario(inflation))
    }

    #[test]
    fn test_display() {
        let account = test_account(dec!(5.0), dec!(2.0));
        assert_eq!(account.to_string(), "name=401(k), initial_value=100000.00, roth=false");
    }

    #[test]
    fn test_simple_no_inflation() {
        let mut account = test_account(dec!(5.0), dec!(0.0));
        let fv = account.compute_future_value().unwrap();

        assert_eq!(fv, dec!(162889.462677744140625));
        assert_eq!(round_to_cents(fv), dec!(162889.46));
        assert_eq!(account.future_value(), Some(fv));
    }

    #[test]
    fn test_with_inflation() {
        let mut account = test_account(dec!(5.0), dec!(2.0));
        let fv = account.compute_future_value().unwrap();
        assert_eq!(round_to_cents(fv), dec!(133626.09));
    }

    #[test]
    fn test_with_final_interest_rate() {
        let mut account = test_account(dec!(8.0), dec!(2.0)).with_final_interest_rate(dec!(5.0));
        let fv = account.compute_future_value().unwrap();
        assert_eq!(round_to_cents(fv), dec!(153990.65));
    }

    #[test]
    fn test_final_rate_falls_back_to_interest_rate() {
        let mut account = test_account(dec!(6.5), dec!(2.0));
        assert_eq!(account.final_interest_rate(), dec!(6.5));

        let flat = account.compute_future_value().unwrap();
        account.set_final_interest_rate(Some(dec!(6.5)));
        let explicit = account.compute_future_value().unwrap();

        assert_eq!(flat, explicit);
    }

    #[test]
    fn test_zero_years_returns_initial_value() {
        let mut account = test_account(dec!(9.0), dec!(3.0)).with_final_interest_rate(dec!(1.0));
        account.years = Decimal::ZERO;
        assert_eq!(account.compute_future_value().unwrap(), dec!(100000.00));
    }

    #[test]
    fn test_fractional_years() {
        let mut account = test_account(dec!(21.0), dec!(0.0));
        account.years = dec!(0.5);
        let fv = account.compute_future_value().unwrap();
        // sqrt(1.21) = 1.1
        assert!((fv - dec!(110000)).abs() < dec!(1), "got {}", fv);
    }

    #[test]
    fn test_inflation_of_minus_one_hundred_fails() {
        let mut account = test_account(dec!(5.0), dec!(-100));
        let err = account.compute_future_value().unwrap_err();
        assert!(matches!(err, PlannerError::DegenerateInflation { .. }));
        assert_eq!(account.future_value(), None);
    }

    #[test]
    fn test_inflation_below_minus_one_hundred_fails() {
        let mut account = test_account(dec!(5.0), dec!(-150));
        let err = account.compute_future_value().unwrap_err();
        assert!(matches!(err, PlannerError::DegenerateInflation { rate } if rate == dec!(-150)));
        assert_eq!(account.future_value(), None);
    }

    #[test]
    fn test_overflowing_projection_is_an_error() {
        let mut account = Account::new("big", dec!(10000000000000000000000), false, dec!(100), dec!(30))
            .with_assumptions(scenario(dec!(0.0)));

        let err = account.compute_future_value().unwrap_err();
        assert!(matches!(err, PlannerError::InvalidGrowth { base, years } if base == dec!(2) && years == dec!(30)));
        assert_eq!(account.future_value(), None);
    }

    #[test]
    fn test_tiny_inflation_growth_overflow_is_an_error() {
        // inflation growth multiplier of 1e-28 pushes the compounded factor out of range
        let mut account = test_account(dec!(5.0), dec!(-99.99999999999999999999999999));
        let err = account.compute_future_value().unwrap_err();
        assert!(matches!(err, PlannerError::InvalidGrowth { .. }));
    }

    #[test]
    fn test_tax_views_require_projection() {
        let account = test_account(dec!(5.0), dec!(2.0));
        assert!(matches!(
            account.future_value_after_tax(),
            Err(PlannerError::FutureValueNotComputed { .. })
        ));
        assert!(matches!(
            account.future_value_pre_tax(),
            Err(PlannerError::FutureValueNotComputed { .. })
        ));
    }

    #[test]
    fn test_traditional_tax_views() {
        let mut account = test_account(dec!(5.0), dec!(0.0));
        let fv = account.compute_future_value().unwrap();

        assert_eq!(account.future_value_pre_tax().unwrap(), fv);
        assert_eq!(account.future_value_after_tax().unwrap(), fv * dec!(0.7125));
    }

    #[test]
    fn test_roth_tax_views() {
        let mut account = test_account(dec!(5.0), dec!(0.0));
        account.roth = true;
        let fv = account.compute_future_value().unwrap();

        assert_eq!(account.future_value_after_tax().unwrap(), fv);
        assert_eq!(account.future_value_pre_tax().unwrap(), fv / dec!(0.7125));
    }

    #[test]
    fn test_shared_inflation_change_seen_on_next_projection() {
        let shared = scenario(dec!(0.0));
        let mut a = Account::new("a", dec!(100000.00), false, dec!(5.0), dec!(10))
            .with_assumptions(shared.clone());
        let mut b = Account::new("b", dec!(100000.00), true, dec!(5.0), dec!(10))
            .with_assumptions(shared.clone());

        let before = a.compute_future_value().unwrap();
        shared.set_inflation_rate(dec!(2.0));

        // cached value is untouched until recomputed
        assert_eq!(a.future_value(), Some(before));

        let after = a.compute_future_value().unwrap();
        assert_eq!(round_to_cents(after), dec!(133626.09));
        assert_eq!(round_to_cents(b.compute_future_value().unwrap()), dec!(133626.09));
    }

    #[test]
    fn test_default_account() {
        let mut account = Account::default();
        assert_eq!(account.name, DEFAULT_ACCOUNT_NAME);
        assert_eq!(account.compute_future_value().unwrap(), Decimal::ZERO);
        assert_eq!(account.assumptions().snapshot(), EconomicAssumptions::default());
    }
}
