//! Retirement Planner - retirement account projections and loan payoff
//!
//! This library provides:
//! - Inflation-adjusted future values for retirement accounts, with an optional
//!   interest-rate ramp towards a final rate
//! - Flat-rate pre-tax/after-tax views for Roth and traditional accounts
//! - Economic scenarios shared by many accounts
//! - Portfolio projections across accounts
//! - Month-by-month loan payoff periods and amortization schedules
//!
//! All amounts and rates are exact decimals; rates are percentages (5.0 = 5%).

pub mod account;
pub mod assumptions;
pub mod error;
pub mod mortgage;
pub mod portfolio;
pub mod rates;

// Re-export commonly used types
pub use account::{convert_value_to_after_tax, convert_value_to_pre_tax, Account};
pub use assumptions::{EconomicAssumptions, SharedAssumptions};
pub use error::{PlannerError, PlannerResult};
pub use mortgage::{AmortizationSchedule, LoanPayoffCalculator};
pub use portfolio::{Portfolio, PortfolioProjection};
