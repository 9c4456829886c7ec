//! Loan amortization: payoff period and schedule

mod payoff;
mod schedule;

pub use payoff::{LoanPayoffCalculator, MAX_PAYOFF_MONTHS};
pub use schedule::{AmortizationRow, AmortizationSchedule, AmortizationSummary};
