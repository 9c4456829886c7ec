//! Retirement accounts, tax conversions and account loading

mod data;
mod tax;
pub mod loader;

pub use data::{Account, DEFAULT_ACCOUNT_NAME};
pub use loader::{load_accounts, load_accounts_from_reader};
pub use tax::{convert_value_to_after_tax, convert_value_to_pre_tax};
