//! Economic assumptions: inflation and flat tax rates for a scenario

mod economic;
mod shared;
pub mod loader;

pub use economic::{
    EconomicAssumptions, DEFAULT_FEDERAL_TAX_RATE, DEFAULT_INFLATION_RATE, DEFAULT_STATE_TAX_RATE,
};
pub use loader::{load_assumptions, load_assumptions_from_reader};
pub use shared::SharedAssumptions;
