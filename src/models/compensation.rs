//! Compensation component model.
//!
//! This module defines the [`CompensationComponents`] struct describing the
//! shape of an employee's pay package: basic salary plus named allowances.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The inputs to a pay calculation for one employee at one point in time.
///
/// Every monetary field must be non-negative; allowances default to zero
/// when omitted. The routing metadata (`iban`, `bank_name`) is carried
/// through to payroll line items but never participates in calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::CompensationComponents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let components = CompensationComponents {
///     basic_salary: Decimal::from_str("15000").unwrap(),
///     housing_allowance: Decimal::from_str("3000").unwrap(),
///     ..Default::default()
/// };
/// assert_eq!(components.total_allowances(), Decimal::from_str("3000").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompensationComponents {
    /// The basic monthly salary.
    pub basic_salary: Decimal,
    /// Housing allowance. Included in the GOSI wage base.
    #[serde(default)]
    pub housing_allowance: Decimal,
    /// Transportation allowance. Excluded from the GOSI wage base.
    #[serde(default)]
    pub transportation_allowance: Decimal,
    /// Food allowance. Excluded from the GOSI wage base.
    #[serde(default)]
    pub food_allowance: Decimal,
    /// Mobile allowance. Excluded from the GOSI wage base.
    #[serde(default)]
    pub mobile_allowance: Decimal,
    /// Any other allowances. Excluded from the GOSI wage base.
    #[serde(default)]
    pub other_allowances: Decimal,
    /// Payment routing IBAN. Not used in calculation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    /// Payment routing bank name. Not used in calculation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
}

impl CompensationComponents {
    /// Returns the sum of all allowance fields (everything except basic salary).
    pub fn total_allowances(&self) -> Decimal {
        self.housing_allowance
            + self.transportation_allowance
            + self.food_allowance
            + self.mobile_allowance
            + self.other_allowances
    }

    /// Returns each monetary field paired with its name, for validation.
    pub fn monetary_fields(&self) -> [(&'static str, Decimal); 6] {
        [
            ("basic_salary", self.basic_salary),
            ("housing_allowance", self.housing_allowance),
            ("transportation_allowance", self.transportation_allowance),
            ("food_allowance", self.food_allowance),
            ("mobile_allowance", self.mobile_allowance),
            ("other_allowances", self.other_allowances),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_is_zero_filled() {
        let components = CompensationComponents::default();
        assert_eq!(components.basic_salary, Decimal::ZERO);
        assert_eq!(components.total_allowances(), Decimal::ZERO);
        assert!(components.iban.is_none());
        assert!(components.bank_name.is_none());
    }

    #[test]
    fn test_total_allowances_sums_all_five_fields() {
        let components = CompensationComponents {
            basic_salary: dec("15000"),
            housing_allowance: dec("3000"),
            transportation_allowance: dec("1000"),
            food_allowance: dec("400"),
            mobile_allowance: dec("100"),
            other_allowances: dec("500"),
            iban: None,
            bank_name: None,
        };
        assert_eq!(components.total_allowances(), dec("5000"));
    }

    #[test]
    fn test_deserialize_with_missing_allowances_defaults_to_zero() {
        let json = r#"{ "basic_salary": "12000" }"#;
        let components: CompensationComponents = serde_json::from_str(json).unwrap();
        assert_eq!(components.basic_salary, dec("12000"));
        assert_eq!(components.housing_allowance, Decimal::ZERO);
        assert_eq!(components.other_allowances, Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_full_package() {
        let json = r#"{
            "basic_salary": "15000",
            "housing_allowance": "3000",
            "transportation_allowance": "1000",
            "other_allowances": "500",
            "iban": "SA0380000000608010167519",
            "bank_name": "Al Rajhi Bank"
        }"#;
        let components: CompensationComponents = serde_json::from_str(json).unwrap();
        assert_eq!(components.basic_salary, dec("15000"));
        assert_eq!(components.housing_allowance, dec("3000"));
        assert_eq!(components.transportation_allowance, dec("1000"));
        assert_eq!(components.food_allowance, Decimal::ZERO);
        assert_eq!(components.other_allowances, dec("500"));
        assert_eq!(
            components.iban.as_deref(),
            Some("SA0380000000608010167519")
        );
        assert_eq!(components.bank_name.as_deref(), Some("Al Rajhi Bank"));
    }

    #[test]
    fn test_serialize_round_trip() {
        let components = CompensationComponents {
            basic_salary: dec("9500.50"),
            housing_allowance: dec("2000"),
            transportation_allowance: Decimal::ZERO,
            food_allowance: dec("300"),
            mobile_allowance: Decimal::ZERO,
            other_allowances: Decimal::ZERO,
            iban: Some("SA0380000000608010167519".to_string()),
            bank_name: None,
        };
        let json = serde_json::to_string(&components).unwrap();
        let deserialized: CompensationComponents = serde_json::from_str(&json).unwrap();
        assert_eq!(components, deserialized);
    }

    #[test]
    fn test_none_routing_fields_skipped_in_json() {
        let components = CompensationComponents {
            basic_salary: dec("5000"),
            ..Default::default()
        };
        let json = serde_json::to_string(&components).unwrap();
        assert!(!json.contains("iban"));
        assert!(!json.contains("bank_name"));
    }

    #[test]
    fn test_monetary_fields_covers_basic_and_all_allowances() {
        let components = CompensationComponents {
            basic_salary: dec("1"),
            housing_allowance: dec("2"),
            transportation_allowance: dec("3"),
            food_allowance: dec("4"),
            mobile_allowance: dec("5"),
            other_allowances: dec("6"),
            iban: None,
            bank_name: None,
        };
        let fields = components.monetary_fields();
        assert_eq!(fields.len(), 6);
        let sum: Decimal = fields.iter().map(|(_, v)| *v).sum();
        assert_eq!(sum, dec("21"));
        assert_eq!(fields[0].0, "basic_salary");
    }
}
