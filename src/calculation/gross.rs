//! Gross salary calculation.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::CompensationComponents;

/// Sums basic salary and all allowance fields into the gross salary.
///
/// Missing allowances are zero by construction of
/// [`CompensationComponents`]; a documented default, not an error.
///
/// # Errors
///
/// Returns [`EngineError::Validation`] naming the first monetary field
/// that is negative.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::gross_of;
/// use payroll_engine::models::CompensationComponents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let components = CompensationComponents {
///     basic_salary: Decimal::from_str("15000").unwrap(),
///     housing_allowance: Decimal::from_str("3000").unwrap(),
///     transportation_allowance: Decimal::from_str("1000").unwrap(),
///     other_allowances: Decimal::from_str("500").unwrap(),
///     ..Default::default()
/// };
/// assert_eq!(gross_of(&components).unwrap(), Decimal::from_str("19500").unwrap());
/// ```
pub fn gross_of(components: &CompensationComponents) -> EngineResult<Decimal> {
    for (field, value) in components.monetary_fields() {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(EngineError::Validation {
                field: field.to_string(),
                message: "must not be negative".to_string(),
            });
        }
    }

    Ok(components.basic_salary + components.total_allowances())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// GR-001: gross sums basic and every allowance
    #[test]
    fn test_gross_sums_basic_and_allowances() {
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
        assert_eq!(gross_of(&components).unwrap(), dec("20000"));
    }

    /// GR-002: missing allowances default to zero
    #[test]
    fn test_gross_of_basic_only() {
        let components = CompensationComponents {
            basic_salary: dec("12000"),
            ..Default::default()
        };
        assert_eq!(gross_of(&components).unwrap(), dec("12000"));
    }

    /// GR-003: negative basic salary is rejected
    #[test]
    fn test_negative_basic_salary_rejected() {
        let components = CompensationComponents {
            basic_salary: dec("-1"),
            ..Default::default()
        };
        match gross_of(&components).unwrap_err() {
            EngineError::Validation { field, .. } => assert_eq!(field, "basic_salary"),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    /// GR-004: negative allowance is rejected and named
    #[test]
    fn test_negative_allowance_rejected_and_named() {
        let components = CompensationComponents {
            basic_salary: dec("10000"),
            food_allowance: dec("-50"),
            ..Default::default()
        };
        match gross_of(&components).unwrap_err() {
            EngineError::Validation { field, .. } => assert_eq!(field, "food_allowance"),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_package_grosses_zero() {
        let components = CompensationComponents::default();
        assert_eq!(gross_of(&components).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_zero_is_not_rejected() {
        let components = CompensationComponents {
            basic_salary: dec("-0"),
            ..Default::default()
        };
        assert!(gross_of(&components).is_ok());
    }

    #[test]
    fn test_routing_metadata_does_not_affect_gross() {
        let mut components = CompensationComponents {
            basic_salary: dec("9000"),
            housing_allowance: dec("1000"),
            ..Default::default()
        };
        let bare = gross_of(&components).unwrap();

        components.iban = Some("SA0380000000608010167519".to_string());
        components.bank_name = Some("Al Rajhi Bank".to_string());
        assert_eq!(gross_of(&components).unwrap(), bare);
    }
}
