//! Property-based tests for the calculation invariants.
//!
//! These properties must hold for any valid input, not just the fixture
//! scenarios: net pay never exceeds gross pay, the wage base is capped
//! exactly at the ceiling, calculation is deterministic, and the two
//! adjustment input modes are inverses.

use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_engine::calculation::{
    apply_percentage, calculate, gosi_wage_base, increase_percentage,
};
use payroll_engine::models::{CompensationComponents, ContributorClassification};
use payroll_engine::rates::statutory_rates;

/// Builds components from cent-denominated integers, keeping values in a
/// realistic payroll range.
fn components(basic_cents: i64, housing_cents: i64, other_cents: i64) -> CompensationComponents {
    CompensationComponents {
        basic_salary: Decimal::new(basic_cents, 2),
        housing_allowance: Decimal::new(housing_cents, 2),
        other_allowances: Decimal::new(other_cents, 2),
        ..Default::default()
    }
}

proptest! {
    #[test]
    fn net_never_exceeds_gross(
        basic in 0i64..10_000_000,
        housing in 0i64..2_000_000,
        other in 0i64..1_000_000,
    ) {
        for classification in [
            ContributorClassification::Saudi,
            ContributorClassification::NonSaudi,
        ] {
            let rates = statutory_rates(classification);
            let breakdown =
                calculate(&components(basic, housing, other), &rates).unwrap();
            prop_assert!(breakdown.net_salary <= breakdown.gross_salary);
            prop_assert!(breakdown.net_salary >= Decimal::ZERO);
        }
    }

    #[test]
    fn wage_base_capped_exactly_at_ceiling(
        basic in 0i64..20_000_000,
        housing in 0i64..20_000_000,
    ) {
        let rates = statutory_rates(ContributorClassification::Saudi);
        let input = components(basic, housing, 0);
        let breakdown = calculate(&input, &rates).unwrap();

        let uncapped = gosi_wage_base(&input);
        if uncapped > rates.wage_ceiling {
            prop_assert_eq!(breakdown.gosi_wage_base, rates.wage_ceiling);
        } else {
            prop_assert_eq!(breakdown.gosi_wage_base, uncapped);
        }
    }

    #[test]
    fn calculation_is_deterministic(
        basic in 0i64..10_000_000,
        housing in 0i64..2_000_000,
    ) {
        let rates = statutory_rates(ContributorClassification::Saudi);
        let input = components(basic, housing, 0);
        let first = calculate(&input, &rates).unwrap();
        let second = calculate(&input, &rates).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn employer_contribution_never_reduces_net(
        basic in 0i64..10_000_000,
        housing in 0i64..2_000_000,
    ) {
        let rates = statutory_rates(ContributorClassification::Saudi);
        let input = components(basic, housing, 0);
        let breakdown = calculate(&input, &rates).unwrap();
        prop_assert_eq!(
            breakdown.net_salary,
            breakdown.gross_salary - breakdown.gosi_employee
        );
    }

    #[test]
    fn adjustment_modes_are_inverses(
        old_cents in 1i64..10_000_000,
        new_cents in 0i64..10_000_000,
    ) {
        let old_basic = Decimal::new(old_cents, 2);
        let new_basic = Decimal::new(new_cents, 2);

        let pct = increase_percentage(old_basic, new_basic);
        let reproduced = apply_percentage(old_basic, pct);
        prop_assert_eq!(reproduced.round_dp(2), new_basic.round_dp(2));
    }
}
