//! Load accounts from a CSV file
//!
//! Expected columns: `name,initial_value,roth,interest_rate,years,final_interest_rate`.
//! `final_interest_rate` may be left empty (no ramp).

use std::io::Read;
use std::path::Path;

use csv::Reader;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::Account;
use crate::assumptions::SharedAssumptions;
use crate::error::PlannerResult;

/// Raw CSV row. Amounts and rates are parsed from the cell text so their
/// digits and scale survive unchanged.
#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    #[serde(with = "rust_decimal::serde::str")]
    initial_value: Decimal,
    roth: bool,
    #[serde(with = "rust_decimal::serde::str")]
    interest_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    years: Decimal,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    final_interest_rate: Option<Decimal>,
}

impl CsvRow {
    fn into_account(self, assumptions: &SharedAssumptions) -> Account {
        let mut account = Account::new(
            self.name,
            self.initial_value,
            self.roth,
            self.interest_rate,
            self.years,
        )
        .with_assumptions(assumptions.clone());
        account.set_final_interest_rate(self.final_interest_rate);
        account
    }
}

/// Load all accounts from a CSV file, binding each to `assumptions`
pub fn load_accounts<P: AsRef<Path>>(
    path: P,
    assumptions: &SharedAssumptions,
) -> PlannerResult<Vec<Account>> {
    let path = path.as_ref();
    let reader = Reader::from_path(path)?;
    let accounts = collect_accounts(reader, assumptions)?;
    log::info!("loaded {} accounts from {}", accounts.len(), path.display());
    Ok(accounts)
}

/// Load accounts from any reader (e.g., string buffer, stdin)
pub fn load_accounts_from_reader<R: Read>(
    reader: R,
    assumptions: &SharedAssumptions,
) -> PlannerResult<Vec<Account>> {
    collect_accounts(Reader::from_reader(reader), assumptions)
}

fn collect_accounts<R: Read>(
    mut reader: Reader<R>,
    assumptions: &SharedAssumptions,
) -> PlannerResult<Vec<Account>> {
    let mut accounts = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        accounts.push(row.into_account(assumptions));
    }
    Ok(accounts)
}
