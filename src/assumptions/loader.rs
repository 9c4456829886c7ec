//! JSON-based scenario loader
//!
//! A scenario file holds the three percent rates; any that are missing fall
//! back to the defaults:
//!
//! ```json
//! { "inflation_rate": 2.5, "federal_tax_rate": 22.0, "state_tax_rate": 5.0 }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::EconomicAssumptions;
use crate::error::PlannerResult;

/// Default scenario file name
pub const DEFAULT_ASSUMPTIONS_FILE: &str = "assumptions.json";

/// Load and validate a scenario from a JSON file
pub fn load_assumptions<P: AsRef<Path>>(path: P) -> PlannerResult<EconomicAssumptions> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let assumptions = load_assumptions_from_reader(BufReader::new(file))?;
    log::info!(
        "loaded economic assumptions from {}: inflation={}% tax={}%",
        path.display(),
        assumptions.inflation_rate,
        assumptions.combined_tax_rate()
    );
    Ok(assumptions)
}

/// Load and validate a scenario from any reader
pub fn load_assumptions_from_reader<R: Read>(reader: R) -> PlannerResult<EconomicAssumptions> {
    let assumptions: EconomicAssumptions = serde_json::from_reader(reader)?;
    assumptions.validate()?;
    Ok(assumptions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_load_from_reader() {
        let json = r#"{ "inflation_rate": 2.5, "federal_tax_rate": 22.0, "state_tax_rate": 5.0 }"#;
        let a = load_assumptions_from_reader(json.as_bytes()).unwrap();

        assert_eq!(a.inflation_rate, dec!(2.5));
        assert_eq!(a.combined_tax_rate(), dec!(27.0));
    }

    #[test]
    fn test_rates_are_read_exactly() {
        let json = r#"{ "inflation_rate": 2.123456789012345678901, "federal_tax_rate": "22.10", "state_tax_rate": 5 }"#;
        let a = load_assumptions_from_reader(json.as_bytes()).unwrap();

        assert_eq!(a.inflation_rate, dec!(2.123456789012345678901));
        assert_eq!(a.inflation_rate.to_string(), "2.123456789012345678901");
        assert_eq!(a.federal_tax_rate.to_string(), "22.10");
        assert_eq!(a.state_tax_rate, dec!(5));
    }

    #[test]
    fn test_empty_object_gives_defaults() {
        let a = load_assumptions_from_reader("{}".as_bytes()).unwrap();
        assert_eq!(a, EconomicAssumptions::default());
    }

    #[test]
    fn test_rejects_confiscatory_tax() {
        let json = r#"{ "federal_tax_rate": 80, "state_tax_rate": 20 }"#;
        let err = load_assumptions_from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, PlannerError::DegenerateTaxRate { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = load_assumptions_from_reader("{ inflation".as_bytes()).unwrap_err();
        assert!(matches!(err, PlannerError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_assumptions("does/not/exist.json").unwrap_err();
        assert!(matches!(err, PlannerError::Io(_)));
    }
}
