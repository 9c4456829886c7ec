//! Portfolio of accounts projected under one economic scenario
//!
//! Every account added to a portfolio is bound to the portfolio's shared
//! assumptions, so changing inflation or tax rates on the portfolio affects all
//! of them on the next projection.

use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::account::Account;
use crate::assumptions::{EconomicAssumptions, SharedAssumptions};
use crate::error::PlannerResult;

/// Accounts sharing one scenario
///
/// # Example
/// ```ignore
/// let mut portfolio = Portfolio::new(EconomicAssumptions::default().into());
/// portfolio.add_account(Account::new("401(k)", dec!(100000), false, dec!(7), dec!(20)));
///
/// let projection = portfolio.project()?;
/// println!("after tax: {}", projection.total_after_tax);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    assumptions: SharedAssumptions,
    accounts: Vec<Account>,
}

impl Portfolio {
    pub fn new(assumptions: SharedAssumptions) -> Self {
        Self {
            assumptions,
            accounts: Vec::new(),
        }
    }

    /// Add an account, rebinding it to this portfolio's scenario
    pub fn add_account(&mut self, mut account: Account) {
        account.set_assumptions(self.assumptions.clone());
        self.accounts.push(account);
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn accounts_mut(&mut self) -> &mut [Account] {
        &mut self.accounts
    }

    /// Handle to the shared scenario
    pub fn assumptions(&self) -> &SharedAssumptions {
        &self.assumptions
    }

    /// Project every account in parallel and collect per-account tax views.
    /// The first failing account aborts the run.
    pub fn project(&mut self) -> PlannerResult<PortfolioProjection> {
        let scenario = self.assumptions.snapshot();

        let rows = self
            .accounts
            .par_iter_mut()
            .map(|account| -> PlannerResult<AccountProjection> {
                let future_value = account.compute_future_value()?;
                Ok(AccountProjection {
                    name: account.name.clone(),
                    roth: account.roth,
                    initial_value: account.initial_value,
                    future_value,
                    pre_tax: account.future_value_pre_tax()?,
                    after_tax: account.future_value_after_tax()?,
                })
            })
            .collect::<PlannerResult<Vec<_>>>()?;

        let projection = PortfolioProjection::from_rows(scenario, rows);
        log::info!(
            "projected {} accounts: future value {} (pre-tax {}, after-tax {})",
            projection.accounts.len(),
            projection.total_future_value,
            projection.total_pre_tax,
            projection.total_after_tax
        );
        Ok(projection)
    }
}

impl Extend<Account> for Portfolio {
    fn extend<I: IntoIterator<Item = Account>>(&mut self, iter: I) {
        for account in iter {
            self.add_account(account);
        }
    }
}

/// Projection of one account within a portfolio run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountProjection {
    pub name: String,
    pub roth: bool,
    pub initial_value: Decimal,
    pub future_value: Decimal,
    pub pre_tax: Decimal,
    pub after_tax: Decimal,
}

/// Result of projecting a whole portfolio
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioProjection {
    /// Scenario in force when the projection ran
    pub assumptions: EconomicAssumptions,
    pub accounts: Vec<AccountProjection>,
    pub total_initial_value: Decimal,
    pub total_future_value: Decimal,
    pub total_pre_tax: Decimal,
    pub total_after_tax: Decimal,
}

impl PortfolioProjection {
    fn from_rows(assumptions: EconomicAssumptions, accounts: Vec<AccountProjection>) -> Self {
        Self {
            assumptions,
            total_initial_value: accounts.iter().map(|a| a.initial_value).sum(),
            total_future_value: accounts.iter().map(|a| a.future_value).sum(),
            total_pre_tax: accounts.iter().map(|a| a.pre_tax).sum(),
            total_after_tax: accounts.iter().map(|a| a.after_tax).sum(),
            accounts,
        }
    }
}
