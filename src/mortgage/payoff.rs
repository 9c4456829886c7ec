//! Month-by-month loan payoff calculation

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::schedule::{AmortizationRow, AmortizationSchedule};
use crate::error::{PlannerError, PlannerResult};
use crate::rates::percent_to_fraction;

/// Longest payoff the month counter can represent
pub const MAX_PAYOFF_MONTHS: u32 = u32::MAX;

/// Inputs for a simple fixed-payment loan payoff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanPayoffCalculator {
    /// Outstanding principal
    pub loan_amount: Decimal,

    /// Annual interest rate, in percent
    pub annual_interest_rate: Decimal,

    /// Fixed payment each month
    pub monthly_payment: Decimal,

    /// Extra principal paid every month on top of the fixed payment
    #[serde(default)]
    pub extra_principal_payment: Decimal,
}

impl LoanPayoffCalculator {
    pub fn new(loan_amount: Decimal, annual_interest_rate: Decimal, monthly_payment: Decimal) -> Self {
        Self {
            loan_amount,
            annual_interest_rate,
            monthly_payment,
            extra_principal_payment: Decimal::ZERO,
        }
    }

    pub fn with_extra_principal_payment(mut self, extra: Decimal) -> Self {
        self.extra_principal_payment = extra;
        self
    }

    /// Number of months until the balance reaches zero.
    ///
    /// Fails with [`PlannerError::UnpayableLoan`] as soon as a month's interest
    /// meets or exceeds the fixed payment.
    pub fn months_to_payoff(&self) -> PlannerResult<u32> {
        let months = self.amortize(MAX_PAYOFF_MONTHS, |_| {})?;
        log::debug!(
            "loan {} at {}% paying {} (+{} extra): {} months",
            self.loan_amount,
            self.annual_interest_rate,
            self.monthly_payment,
            self.extra_principal_payment,
            months
        );
        Ok(months)
    }

    /// Every payment period up to payoff
    pub fn schedule(&self) -> PlannerResult<AmortizationSchedule> {
        let mut schedule = AmortizationSchedule::new();
        self.amortize(MAX_PAYOFF_MONTHS, |row| schedule.add_row(row))?;
        Ok(schedule)
    }

    /// Run the amortization, handing each period to `on_period`.
    /// Returns the number of periods, failing once more than `max_months` are needed.
    fn amortize<F>(&self, max_months: u32, mut on_period: F) -> PlannerResult<u32>
    where
        F: FnMut(AmortizationRow),
    {
        let monthly_rate = percent_to_fraction(self.annual_interest_rate / dec!(12));
        let mut principal = self.loan_amount;
        let mut month = 0u32;

        while principal > Decimal::ZERO {
            let next_month = month
                .checked_add(1)
                .filter(|m| *m <= max_months)
                .ok_or(PlannerError::PayoffHorizonExceeded { months: month })?;

            let interest = monthly_rate * principal;
            let principal_portion = self.monthly_payment - interest;

            // a negative extra payment could otherwise keep the balance from ever falling
            if principal_portion <= Decimal::ZERO
                || principal_portion + self.extra_principal_payment <= Decimal::ZERO
            {
                log::warn!(
                    "loan never amortizes: month {} interest {} vs payment {}",
                    next_month,
                    interest,
                    self.monthly_payment
                );
                return Err(PlannerError::UnpayableLoan {
                    month: next_month,
                    interest,
                    payment: self.monthly_payment,
                });
            }

            let beginning_balance = principal;
            principal -= principal_portion;
            principal -= self.extra_principal_payment;
            month = next_month;

            on_period(AmortizationRow {
                month,
                beginning_balance,
                interest,
                principal: principal_portion,
                extra: self.extra_principal_payment,
                ending_balance: principal,
            });
        }

        Ok(month)
    }
}
