//! Error types for projections, conversions and loaders

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("The interest payment, {interest}, exceeds the monthly payment, {payment} (month {month})")]
    UnpayableLoan {
        month: u32,
        interest: Decimal,
        payment: Decimal,
    },

    #[error("Loan needs more than {months} months to pay off")]
    PayoffHorizonExceeded { months: u32 },

    #[error("Inflation rate {rate}% gives a non-positive growth multiplier")]
    DegenerateInflation { rate: Decimal },

    #[error("Combined tax rate {combined}% must be below 100%")]
    DegenerateTaxRate { combined: Decimal },

    #[error("Cannot raise growth factor {base} to the power {years}")]
    InvalidGrowth { base: Decimal, years: Decimal },

    #[error("Future value of account '{account}' has not been computed")]
    FutureValueNotComputed { account: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PlannerResult<T> = Result<T, PlannerError>;
