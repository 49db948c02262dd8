//! Float assertions and an index-loop rendition of the constraint formula.

use regcap_core::{CapitalConstraint, ReferenceTable, Thresholds};

/// Default absolute/relative tolerance for [`assert_close`].
pub const TOLERANCE: f64 = 1e-9;

/// Asserts `actual` is within [`TOLERANCE`] of `expected`, scaled by magnitude.
///
/// # Panics
///
/// Panics with both values when they differ by more than the tolerance.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= TOLERANCE * scale,
        "expected {expected}, got {actual} (diff {})",
        (actual - expected).abs()
    );
}

/// Evaluates `constraint` with two explicit passes over the line items:
/// first the GSIB add-on, then the per-item slack terms.
///
/// Used as the reference the vectorized evaluator is checked against.
///
/// # Panics
///
/// Panics if the constraint's tier has no threshold.
#[allow(clippy::needless_range_loop)]
pub fn loop_constraint(
    constraint: CapitalConstraint,
    balances: &[f64],
    table: &ReferenceTable,
    thresholds: &Thresholds,
) -> f64 {
    let threshold = thresholds
        .get(constraint.tier)
        .expect("threshold configured for tier");
    let weights = table.exposure_weights(constraint.family);
    let resources = table.resource_weights(constraint.tier);
    let gsib = table.gsib_contributions();

    let mut addon = 0.0;
    if constraint.has_gsib_addon() {
        for i in 0..balances.len() {
            addon += balances[i] * gsib[i];
        }
    }

    let mut value = 0.0;
    for i in 0..balances.len() {
        value += -((threshold + addon) * weights[i] * balances[i]) + resources[i] * balances[i];
    }
    value
}
