//! Tests for the batched constraint set and analysis.

use super::*;
use regcap_core::{RatioFamily, RegulatoryMinimums};
use regcap_test::assert_close;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Records `(level, event, constraint)` for every event it sees.
#[derive(Clone, Default)]
struct CapturedEvents(Arc<Mutex<Vec<(Level, String, String)>>>);

#[derive(Default)]
struct FieldVisitor {
    event: String,
    constraint: String,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = value.to_string(),
            "constraint" => self.constraint = value.to_string(),
            _ => {}
        }
    }
}

impl<S: Subscriber> Layer<S> for CapturedEvents {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.0.lock().unwrap().push((
            *event.metadata().level(),
            visitor.event,
            visitor.constraint,
        ));
    }
}

fn partial_leverage_minimums() -> RegulatoryMinimums {
    let mut minimums = bank::sample_minimums();
    minimums.leverage = Thresholds::from_slice(&[0.03, 0.04]).unwrap();
    minimums
}

#[test]
fn test_set_values_match_individual_evaluation() {
    let table = bank::sample_table();
    let minimums = bank::sample_minimums();
    let set = CapitalConstraintSet::new(&table, &minimums).unwrap();
    assert_eq!(set.len(), 12);
    assert_eq!(set.constraints(), &CapitalConstraint::ALL);

    for balances in [bank::sample_balances(), bank::stressed_balances()] {
        let values = set.evaluate_all(&balances).unwrap();
        for (&constraint, &value) in set.constraints().iter().zip(&values) {
            let expected = evaluate(
                constraint,
                &balances,
                &table,
                minimums.for_family(constraint.family),
            )
            .unwrap();
            assert_close(value, expected);
        }
    }
}

#[test]
fn test_new_requires_every_threshold() {
    let table = bank::sample_table();
    let minimums = partial_leverage_minimums();
    let err = CapitalConstraintSet::new(&table, &minimums).unwrap_err();
    assert_eq!(
        err,
        RegCapError::MissingThreshold {
            family: RatioFamily::Leverage,
            tier: CapitalTier::TotalCapital,
        }
    );
}

#[test]
fn test_configured_skips_missing_tiers() {
    let table = bank::sample_table();
    let minimums = partial_leverage_minimums();
    let set = CapitalConstraintSet::configured(&table, &minimums);
    assert_eq!(set.len(), 10);
    assert!(!set.constraints().contains(&CapitalConstraint::LEV_TC));
    assert!(!set.constraints().contains(&CapitalConstraint::LEV_TLAC));
    assert_eq!(set.thresholds()[8], 0.03);
}

#[test]
fn test_with_constraints_keeps_order() {
    let table = bank::sample_table();
    let minimums = bank::sample_minimums();
    let set = CapitalConstraintSet::with_constraints(
        &table,
        &minimums,
        [CapitalConstraint::LEV_TLAC, CapitalConstraint::SRWA_CET1],
    )
    .unwrap();

    assert_eq!(set.thresholds(), &[0.075, 0.045]);
    let values = set.evaluate_all(&bank::sample_balances()).unwrap();
    assert_close(values[0], 225.0);
    assert_close(values[1], 60.0);
}

#[test]
fn test_evaluate_into_checks_output_length() {
    let table = bank::sample_table();
    let minimums = bank::sample_minimums();
    let set = CapitalConstraintSet::new(&table, &minimums).unwrap();

    let mut out = [0.0; 3];
    assert_eq!(
        set.evaluate_into(&bank::sample_balances(), &mut out),
        Err(RegCapError::ShapeMismatch {
            name: "values",
            expected: 12,
            actual: 3,
        })
    );

    let mut out = [0.0; 12];
    assert!(set.evaluate_into(&[1.0, 2.0], &mut out).is_err());
}

#[test]
fn test_jacobian_rows_match_gradients() {
    let table = bank::sample_table();
    let minimums = bank::sample_minimums();
    let set = CapitalConstraintSet::new(&table, &minimums).unwrap();
    let balances = bank::stressed_balances();
    let n = table.len();

    let mut jacobian = vec![0.0; set.len() * n];
    set.jacobian_into(&balances, &mut jacobian).unwrap();

    let mut grad = vec![0.0; n];
    for (row, &constraint) in jacobian.chunks_exact(n).zip(set.constraints()) {
        gradient_into(
            constraint,
            &balances,
            &table,
            minimums.for_family(constraint.family),
            &mut grad,
        )
        .unwrap();
        for (a, b) in row.iter().zip(&grad) {
            assert_close(*a, *b);
        }
    }

    let mut short = vec![0.0; n];
    assert!(set.jacobian_into(&balances, &mut short).is_err());
}

#[test]
fn test_feasibility() {
    let table = bank::sample_table();
    let minimums = bank::sample_minimums();
    let set = CapitalConstraintSet::new(&table, &minimums).unwrap();

    assert!(set.is_feasible(&bank::sample_balances()).unwrap());
    assert!(!set.is_feasible(&bank::stressed_balances()).unwrap());

    let mut invalid = bank::sample_balances();
    invalid[bank::COMMON_EQUITY] = f64::NAN;
    assert!(!set.is_feasible(&invalid).unwrap());
}

#[test]
fn test_explain_healthy_bank() {
    let table = bank::sample_table();
    let minimums = bank::sample_minimums();
    let set = CapitalConstraintSet::new(&table, &minimums).unwrap();

    let analysis = set.explain(&bank::sample_balances()).unwrap();
    assert_eq!(analysis.len(), 12);
    assert!(analysis.is_feasible());
    assert!(analysis.violations().is_empty());
    assert_eq!(analysis.total_shortfall(), 0.0);

    let lev = analysis.get(CapitalConstraint::LEV_CET1).unwrap();
    assert_eq!(lev.capital_ratio(), Some(0.1));
    assert_eq!(lev.gsib_addon, 0.0);
    assert_eq!(lev.effective_minimum(), 0.03);

    let srwa = analysis.get(CapitalConstraint::SRWA_CET1).unwrap();
    assert_close(srwa.gsib_addon, 0.019);
    assert_close(srwa.effective_minimum(), 0.064);
    assert_close(srwa.exposure, 625.0);
    assert_close(srwa.value, 60.0);

    // arwa_cet1 is next at 61.76
    assert_eq!(
        analysis.binding().unwrap().constraint,
        CapitalConstraint::SRWA_CET1
    );
}

#[test]
fn test_explain_stressed_bank() {
    let table = bank::sample_table();
    let minimums = bank::sample_minimums();
    let set = CapitalConstraintSet::new(&table, &minimums).unwrap();

    let analysis = set.explain(&bank::stressed_balances()).unwrap();
    assert!(!analysis.is_feasible());

    let violated: Vec<_> = analysis.violations().iter().map(|a| a.name()).collect();
    assert_eq!(
        violated,
        vec![
            "srwa_cet1",
            "srwa_t1",
            "srwa_tc",
            "arwa_cet1",
            "arwa_t1",
            "lev_cet1",
            "lev_t1",
        ]
    );

    let binding = analysis.binding().unwrap();
    assert_eq!(binding.constraint, CapitalConstraint::SRWA_CET1);
    assert_close(binding.value, -30.0);
    assert_close(binding.shortfall(), 30.0);

    let lev_t1 = analysis.get(CapitalConstraint::LEV_T1).unwrap();
    assert_close(lev_t1.capital_ratio().unwrap(), 0.03);
    assert_close(lev_t1.shortfall(), 10.0);

    // 30 + 19.375 + 1.875 + 28.24 + 17.2025 + 20 + 10
    assert_close(analysis.total_shortfall(), 126.6925);
}

#[test]
fn test_explain_reports_nan_as_binding() {
    let table = bank::sample_table();
    let minimums = bank::sample_minimums();
    let set = CapitalConstraintSet::new(&table, &minimums).unwrap();

    let mut balances = bank::sample_balances();
    balances[bank::TRADING_ASSETS] = f64::NAN;
    let analysis = set.explain(&balances).unwrap();

    assert!(!analysis.is_feasible());
    assert!(analysis.binding().unwrap().value.is_nan());
}

#[test]
fn test_empty_table_set() {
    let table = ReferenceTable::default();
    let minimums = bank::sample_minimums();
    let set = CapitalConstraintSet::new(&table, &minimums).unwrap();

    assert_eq!(set.evaluate_all(&[]).unwrap(), vec![0.0; 12]);
    let mut jacobian: [f64; 0] = [];
    assert!(set.jacobian_into(&[], &mut jacobian).is_ok());

    let analysis = set.explain(&[]).unwrap();
    assert!(analysis.is_feasible());
    assert_eq!(
        analysis.get(CapitalConstraint::ARWA_TC).unwrap().capital_ratio(),
        None
    );
}

#[test]
fn test_explain_warns_on_non_finite_values() {
    let table = bank::sample_table();
    let minimums = bank::sample_minimums();
    let set = CapitalConstraintSet::new(&table, &minimums).unwrap();

    let captured = CapturedEvents::default();
    let subscriber = tracing_subscriber::registry().with(captured.clone());

    let mut balances = bank::sample_balances();
    balances[bank::TRADING_ASSETS] = f64::NAN;
    tracing::subscriber::with_default(subscriber, || {
        set.explain(&bank::sample_balances()).unwrap();
        set.explain(&balances).unwrap();
    });

    let events = captured.0.lock().unwrap();
    let warnings: Vec<_> = events
        .iter()
        .filter(|(level, event, _)| *level == Level::WARN && event == "non_finite_constraint")
        .map(|(_, _, constraint)| constraint.as_str())
        .collect();

    // NaN times a zero weight is still NaN, so every weighted sum is poisoned
    assert_eq!(warnings.len(), 12);
    assert_eq!(warnings[0], "srwa_cet1");
    assert_eq!(warnings[11], "lev_tlac");
    assert_eq!(
        events
            .iter()
            .filter(|(_, event, _)| event == "constraint_analysis")
            .count(),
        24
    );
}
