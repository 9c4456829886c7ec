//! Shared handle to one economic scenario

use std::sync::{Arc, PoisonError, RwLock};

use rust_decimal::Decimal;

use super::EconomicAssumptions;

/// Handle to an [`EconomicAssumptions`] shared by many accounts.
///
/// Cloning the handle shares the scenario; it does not copy it. An update made
/// through any clone is seen by every account on its next projection. Values
/// already cached by an account are left alone.
#[derive(Debug, Clone, Default)]
pub struct SharedAssumptions {
    inner: Arc<RwLock<EconomicAssumptions>>,
}

impl SharedAssumptions {
    pub fn new(assumptions: EconomicAssumptions) -> Self {
        Self {
            inner: Arc::new(RwLock::new(assumptions)),
        }
    }

    /// Copy of the scenario as it stands right now
    pub fn snapshot(&self) -> EconomicAssumptions {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mutate the scenario in place
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut EconomicAssumptions),
    {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard);
        log::debug!(
            "economic assumptions updated: inflation={}% federal={}% state={}%",
            guard.inflation_rate,
            guard.federal_tax_rate,
            guard.state_tax_rate
        );
    }

    pub fn inflation_rate(&self) -> Decimal {
        self.snapshot().inflation_rate
    }

    pub fn set_inflation_rate(&self, rate: Decimal) {
        self.update(|a| a.inflation_rate = rate);
    }

    /// True when both handles point at the same scenario
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<EconomicAssumptions> for SharedAssumptions {
    fn from(assumptions: EconomicAssumptions) -> Self {
        Self::new(assumptions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_clones_share_one_scenario() {
        let shared = SharedAssumptions::default();
        let other = shared.clone();

        other.set_inflation_rate(dec!(4.5));

        assert_eq!(shared.inflation_rate(), dec!(4.5));
        assert!(shared.ptr_eq(&other));
    }

    #[test]
    fn test_separate_handles_are_independent() {
        let a = SharedAssumptions::default();
        let b = SharedAssumptions::default();

        a.update(|s| s.federal_tax_rate = dec!(10));

        assert_eq!(b.snapshot().federal_tax_rate, dec!(25.0));
        assert!(!a.ptr_eq(&b));
    }
}
