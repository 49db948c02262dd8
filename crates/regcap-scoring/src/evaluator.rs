//! Parameterized constraint evaluator.
//!
//! For constraint (family, tier) with threshold `t`:
//!
//! ```text
//! addon = sum_i x[i] * gsib[i]                  (RWA families only)
//! value = sum_i resource[i] * x[i] - (t + addon) * sum_i weight[i] * x[i]
//! ```
//!
//! Leverage constraints have no add-on term.

use regcap_core::{CapitalConstraint, ReferenceTable, Result, Thresholds};

/// Evaluates one capital constraint for `balances`.
///
/// # Errors
///
/// - [`ShapeMismatch`](regcap_core::RegCapError::ShapeMismatch) if
///   `balances` and `table` differ in length.
/// - [`MissingThreshold`](regcap_core::RegCapError::MissingThreshold) if
///   `thresholds` has no entry for the constraint's tier.
///
/// Non-finite balances or weights propagate into the result.
///
/// # Example
///
/// ```
/// use regcap_core::{CapitalConstraint, LineItem, ReferenceTable, Thresholds};
/// use regcap_scoring::evaluate;
///
/// let table = ReferenceTable::from_line_items([
///     LineItem::new("Assets").with_risk_weights(0.5, 0.5, 1.0),
///     LineItem::new("Equity").with_resources(1.0, 1.0, 1.0, 1.0),
/// ]);
/// let thresholds = Thresholds::new(0.045, 0.06, 0.08, 0.18);
///
/// // 10 - 0.045 * (0.5 * 100)
/// let value = evaluate(CapitalConstraint::SRWA_CET1, &[100.0, 10.0], &table, &thresholds).unwrap();
/// assert!((value - 7.75).abs() < 1e-12);
/// ```
pub fn evaluate(
    constraint: CapitalConstraint,
    balances: &[f64],
    table: &ReferenceTable,
    thresholds: &Thresholds,
) -> Result<f64> {
    table.ensure_len("balances", balances.len())?;
    let threshold = thresholds.require(constraint.family, constraint.tier)?;

    let weights = table.exposure_weights(constraint.family);
    let resources = table.resource_weights(constraint.tier);

    if constraint.has_gsib_addon() {
        let (resource_sum, exposure_sum, addon) = balances
            .iter()
            .zip(resources)
            .zip(weights)
            .zip(table.gsib_contributions())
            .fold((0.0, 0.0, 0.0), |(r, e, g), (((&x, &rw), &w), &c)| {
                (r + rw * x, e + w * x, g + c * x)
            });
        Ok(slack(resource_sum, exposure_sum, threshold + addon))
    } else {
        let (resource_sum, exposure_sum) = balances
            .iter()
            .zip(resources)
            .zip(weights)
            .fold((0.0, 0.0), |(r, e), ((&x, &rw), &w)| (r + rw * x, e + w * x));
        Ok(slack(resource_sum, exposure_sum, threshold))
    }
}

/// Computes the GSIB surcharge `sum_i x[i] * gsib[i]` for `balances`.
///
/// # Errors
///
/// Returns [`ShapeMismatch`](regcap_core::RegCapError::ShapeMismatch) if
/// `balances` and `table` differ in length.
pub fn gsib_addon(balances: &[f64], table: &ReferenceTable) -> Result<f64> {
    table.ensure_len("balances", balances.len())?;
    Ok(dot(balances, table.gsib_contributions()))
}

#[inline]
pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Resources minus the required share of exposure.
#[inline]
pub(crate) fn slack(resources: f64, exposure: f64, minimum: f64) -> f64 {
    resources - minimum * exposure
}
