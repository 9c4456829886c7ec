//! Amortization schedule output structures

use std::io::Write;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PlannerResult;

/// One payment period of an amortized loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Payment period (1-indexed)
    pub month: u32,
    pub beginning_balance: Decimal,
    pub interest: Decimal,
    /// Part of the scheduled payment that reduces principal
    pub principal: Decimal,
    /// Extra principal paid on top of the scheduled payment
    pub extra: Decimal,
    /// May be negative in the final period when the extra payment overshoots
    pub ending_balance: Decimal,
}

/// Full payoff schedule for a loan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub rows: Vec<AmortizationRow>,
}

impl AmortizationSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, row: AmortizationRow) {
        self.rows.push(row);
    }

    /// Number of payment periods
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get summary statistics
    pub fn summary(&self) -> AmortizationSummary {
        let total_interest: Decimal = self.rows.iter().map(|r| r.interest).sum();
        let total_principal: Decimal = self.rows.iter().map(|r| r.principal).sum();
        let total_extra: Decimal = self.rows.iter().map(|r| r.extra).sum();

        AmortizationSummary {
            months: self.rows.len() as u32,
            total_interest,
            total_principal,
            total_extra,
            total_paid: total_interest + total_principal + total_extra,
            final_balance: self
                .rows
                .last()
                .map(|r| r.ending_balance)
                .unwrap_or(Decimal::ZERO),
        }
    }

    /// Write the schedule as CSV, one row per period
    pub fn write_csv<W: Write>(&self, writer: W) -> PlannerResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Summary statistics for a payoff schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationSummary {
    pub months: u32,
    pub total_interest: Decimal,
    pub total_principal: Decimal,
    pub total_extra: Decimal,
    pub total_paid: Decimal,
    pub final_balance: Decimal,
}
