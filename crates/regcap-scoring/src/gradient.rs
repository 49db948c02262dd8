//! Analytic constraint gradients.
//!
//! With exposure `E = sum_i w[i] * x[i]` and add-on `g = sum_i c[i] * x[i]`:
//!
//! ```text
//! d value / d x[j] = r[j] - (t + g) * w[j] - c[j] * E
//! ```
//!
//! The last term exists only for RWA families; leverage constraints are
//! linear and their gradient is `r[j] - t * w[j]`.

use regcap_core::{CapitalConstraint, ReferenceTable, Result, Thresholds};

use crate::evaluator::dot;

/// Writes the gradient of `constraint` at `balances` into `out`.
///
/// # Errors
///
/// Returns [`ShapeMismatch`](regcap_core::RegCapError::ShapeMismatch) if
/// `balances` or `out` differ in length from `table`, and
/// [`MissingThreshold`](regcap_core::RegCapError::MissingThreshold) if the
/// tier has no threshold.
///
/// # Example
///
/// ```
/// use regcap_core::{CapitalConstraint, LineItem, ReferenceTable, Thresholds};
/// use regcap_scoring::gradient_into;
///
/// let table = ReferenceTable::from_line_items([
///     LineItem::new("Assets").with_risk_weights(1.0, 1.0, 1.0),
///     LineItem::new("Equity").with_resources(1.0, 1.0, 1.0, 1.0),
/// ]);
/// let thresholds = Thresholds::from_slice(&[0.03, 0.04]).unwrap();
///
/// let mut grad = [0.0; 2];
/// gradient_into(CapitalConstraint::LEV_CET1, &[100.0, 5.0], &table, &thresholds, &mut grad).unwrap();
/// assert_eq!(grad, [-0.03, 1.0]);
/// ```
pub fn gradient_into(
    constraint: CapitalConstraint,
    balances: &[f64],
    table: &ReferenceTable,
    thresholds: &Thresholds,
    out: &mut [f64],
) -> Result<()> {
    table.ensure_len("balances", balances.len())?;
    table.ensure_len("gradient", out.len())?;
    let threshold = thresholds.require(constraint.family, constraint.tier)?;

    let weights = table.exposure_weights(constraint.family);
    if constraint.has_gsib_addon() {
        let exposure = dot(balances, weights);
        let addon = dot(balances, table.gsib_contributions());
        write_gradient(constraint, table, threshold + addon, Some(exposure), out);
    } else {
        write_gradient(constraint, table, threshold, None, out);
    }
    Ok(())
}

/// Fills `out` with `r[j] - minimum * w[j] - c[j] * exposure`.
///
/// `gsib_exposure` is `Some(E)` for constraints carrying the add-on.
/// Lengths are checked by the caller.
pub(crate) fn write_gradient(
    constraint: CapitalConstraint,
    table: &ReferenceTable,
    minimum: f64,
    gsib_exposure: Option<f64>,
    out: &mut [f64],
) {
    let resources = table.resource_weights(constraint.tier);
    let weights = table.exposure_weights(constraint.family);

    match gsib_exposure {
        Some(exposure) => {
            for (((g, &r), &w), &c) in out
                .iter_mut()
                .zip(resources)
                .zip(weights)
                .zip(table.gsib_contributions())
            {
                *g = r - minimum * w - c * exposure;
            }
        }
        None => {
            for ((g, &r), &w) in out.iter_mut().zip(resources).zip(weights) {
                *g = r - minimum * w;
            }
        }
    }
}
