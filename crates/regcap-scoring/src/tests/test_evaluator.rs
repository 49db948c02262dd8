//! Tests for the parameterized evaluator and named bindings.

use super::*;
use regcap_core::RatioFamily;
use regcap_test::{assert_close, loop_constraint, two_item};

#[test]
fn test_two_item_srwa_cet1() {
    let value = srwa_cet1(
        &two_item::balances(),
        &two_item::table(),
        &two_item::thresholds(),
    )
    .unwrap();
    assert_close(value, two_item::EXPECTED_SRWA_CET1);
}

#[test]
fn test_zero_balances_evaluate_to_zero() {
    let table = bank::sample_table();
    let zeros = vec![0.0; table.len()];
    for constraint in CapitalConstraint::ALL {
        let value = evaluate(constraint, &zeros, &table, &bank_thresholds(constraint)).unwrap();
        assert_eq!(value, 0.0, "{constraint}");
    }
}

#[test]
fn test_named_bindings_match_evaluate() {
    let table = bank::sample_table();
    let balances = bank::sample_balances();
    for (constraint, binding) in named_bindings() {
        let thresholds = bank_thresholds(constraint);
        assert_eq!(
            binding(&balances, &table, &thresholds).unwrap(),
            evaluate(constraint, &balances, &table, &thresholds).unwrap(),
            "{constraint}"
        );
    }
}

#[test]
fn test_matches_per_line_item_loop() {
    let table = bank::sample_table();
    for balances in [bank::sample_balances(), bank::stressed_balances()] {
        for constraint in CapitalConstraint::ALL {
            let thresholds = bank_thresholds(constraint);
            let value = evaluate(constraint, &balances, &table, &thresholds).unwrap();
            assert_close(
                value,
                loop_constraint(constraint, &balances, &table, &thresholds),
            );
        }
    }
}

#[test]
fn test_bank_values() {
    let table = bank::sample_table();
    let balances = bank::sample_balances();
    let minimums = bank::sample_minimums();

    // 100 - (0.045 + 0.019) * 625
    assert_close(
        srwa_cet1(&balances, &table, &minimums.standardized).unwrap(),
        60.0,
    );
    // 100 - (0.045 + 0.019) * 597.5
    assert_close(
        arwa_cet1(&balances, &table, &minimums.advanced).unwrap(),
        61.76,
    );
    // 300 - 0.075 * 1000
    assert_close(
        lev_tlac(&balances, &table, &minimums.leverage).unwrap(),
        225.0,
    );
    assert_close(gsib_addon(&balances, &table).unwrap(), 0.019);
}

#[test]
fn test_leverage_is_linear_in_balances() {
    let table = bank::sample_table();
    let balances = bank::sample_balances();
    let doubled: Vec<f64> = balances.iter().map(|x| x * 2.0).collect();

    for tier in CapitalTier::ALL {
        let constraint = CapitalConstraint::new(RatioFamily::Leverage, tier);
        let thresholds = bank_thresholds(constraint);
        let base = evaluate(constraint, &balances, &table, &thresholds).unwrap();
        let scaled = evaluate(constraint, &doubled, &table, &thresholds).unwrap();
        assert_close(scaled, 2.0 * base);
    }
}

#[test]
fn test_gsib_addon_makes_rwa_constraints_quadratic() {
    let table = bank::sample_table();
    let balances = bank::sample_balances();
    let doubled: Vec<f64> = balances.iter().map(|x| x * 2.0).collect();
    let addon = gsib_addon(&balances, &table).unwrap();

    for constraint in CapitalConstraint::ALL
        .into_iter()
        .filter(|c| c.has_gsib_addon())
    {
        let thresholds = bank_thresholds(constraint);
        let base = evaluate(constraint, &balances, &table, &thresholds).unwrap();
        let scaled = evaluate(constraint, &doubled, &table, &thresholds).unwrap();
        let exposure: f64 = balances
            .iter()
            .zip(table.exposure_weights(constraint.family))
            .map(|(x, w)| x * w)
            .sum();

        assert!((scaled - 2.0 * base).abs() > 1.0, "{constraint}");
        // v(2x) - 2 v(x) = -2 * addon * exposure
        assert_close(scaled - 2.0 * base, -2.0 * addon * exposure);
    }
}

#[test]
fn test_without_resources_value_is_minus_required_capital() {
    let balances = bank::sample_balances();
    for constraint in CapitalConstraint::ALL {
        let table = bank_table_without_resources(constraint.tier);
        let thresholds = bank_thresholds(constraint);
        let value = evaluate(constraint, &balances, &table, &thresholds).unwrap();

        let addon = if constraint.has_gsib_addon() {
            gsib_addon(&balances, &table).unwrap()
        } else {
            0.0
        };
        let threshold = thresholds.get(constraint.tier).unwrap();
        let required: f64 = balances
            .iter()
            .zip(table.exposure_weights(constraint.family))
            .map(|(x, w)| (threshold + addon) * w * x)
            .sum();

        assert!(value <= 0.0, "{constraint}");
        assert_close(value, -required);
    }
}

#[test]
fn test_gsib_contribution_only_tightens_rwa_constraints() {
    let balances = two_item::balances();
    let plain = two_item::table();
    let surcharged = two_item::table_with_gsib(1e-4);
    let thresholds = two_item::thresholds();

    for constraint in CapitalConstraint::ALL {
        let without = evaluate(constraint, &balances, &plain, &thresholds).unwrap();
        let with = evaluate(constraint, &balances, &surcharged, &thresholds).unwrap();
        if constraint.has_gsib_addon() {
            assert!(with < without, "{constraint}: {with} !< {without}");
        } else {
            assert_eq!(with, without, "{constraint}");
        }
    }
}

#[test]
fn test_balance_length_mismatch_fails_fast() {
    let err = srwa_t1(&[1.0, 2.0, 3.0], &two_item::table(), &two_item::thresholds()).unwrap_err();
    assert_eq!(
        err,
        RegCapError::ShapeMismatch {
            name: "balances",
            expected: 2,
            actual: 3,
        }
    );
    assert!(gsib_addon(&[1.0], &two_item::table()).is_err());
}

#[test]
fn test_missing_threshold_is_named() {
    let leverage = Thresholds::from_slice(&[0.03, 0.04]).unwrap();
    let table = two_item::table();
    let balances = two_item::balances();

    assert!(lev_t1(&balances, &table, &leverage).is_ok());
    assert_eq!(
        lev_tc(&balances, &table, &leverage),
        Err(RegCapError::MissingThreshold {
            family: RatioFamily::Leverage,
            tier: CapitalTier::TotalCapital,
        })
    );
    assert!(lev_tlac(&balances, &table, &leverage).is_err());
}

#[test]
fn test_non_finite_balances_propagate() {
    let table = two_item::table();
    let thresholds = two_item::thresholds();

    let nan = srwa_cet1(&[f64::NAN, 200.0], &table, &thresholds).unwrap();
    assert!(nan.is_nan());

    let inf = lev_cet1(&[f64::INFINITY, 0.0], &table, &thresholds).unwrap();
    assert!(!inf.is_finite());
}

#[test]
fn test_empty_table() {
    let table = ReferenceTable::default();
    let value = arwa_tlac(&[], &table, &two_item::thresholds()).unwrap();
    assert_eq!(value, 0.0);
}
