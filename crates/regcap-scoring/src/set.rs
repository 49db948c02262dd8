//! Batched evaluation of enabled constraints.
//!
//! Optimizers typically take all inequality constraints as one vector
//! function plus its Jacobian. `CapitalConstraintSet` binds the reference
//! table and regulatory minimums once, resolves every threshold up front,
//! and then evaluates the whole vector from a single pass over the
//! balances.

use regcap_core::{CapitalConstraint, RegCapError, ReferenceTable, RegulatoryMinimums, Result};
use tracing::{debug, trace, warn};

use crate::analysis::{CapitalAnalysis, ConstraintAnalysis};
use crate::gradient::write_gradient;
use crate::totals::BalanceSheetTotals;

/// An ordered set of capital constraints bound to one reference table.
///
/// # Example
///
/// ```
/// use regcap_core::{LineItem, ReferenceTable, RegulatoryMinimums, Thresholds};
/// use regcap_scoring::CapitalConstraintSet;
///
/// let table = ReferenceTable::from_line_items([
///     LineItem::new("Loans").with_risk_weights(1.0, 1.0, 1.0),
///     LineItem::new("Equity").with_resources(1.0, 1.0, 1.0, 1.0),
/// ]);
/// let minimums = RegulatoryMinimums::new(
///     Thresholds::new(0.045, 0.06, 0.08, 0.18),
///     Thresholds::new(0.045, 0.06, 0.08, 0.18),
///     Thresholds::new(0.03, 0.04, 0.05, 0.075),
/// );
///
/// let set = CapitalConstraintSet::new(&table, &minimums).unwrap();
/// let mut values = vec![0.0; set.len()];
/// set.evaluate_into(&[100.0, 20.0], &mut values).unwrap();
///
/// assert_eq!(values.len(), 12);
/// assert!(set.is_feasible(&[100.0, 20.0]).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct CapitalConstraintSet<'a> {
    table: &'a ReferenceTable,
    constraints: Vec<CapitalConstraint>,
    thresholds: Vec<f64>,
}

impl<'a> CapitalConstraintSet<'a> {
    /// Creates a set with all twelve constraints.
    ///
    /// # Errors
    ///
    /// Returns [`RegCapError::MissingThreshold`] if any family lacks a tier.
    pub fn new(table: &'a ReferenceTable, minimums: &RegulatoryMinimums) -> Result<Self> {
        Self::with_constraints(table, minimums, CapitalConstraint::ALL)
    }

    /// Creates a set with every constraint whose threshold is configured.
    pub fn configured(table: &'a ReferenceTable, minimums: &RegulatoryMinimums) -> Self {
        let (constraints, thresholds): (Vec<_>, Vec<_>) = CapitalConstraint::ALL
            .into_iter()
            .filter_map(|c| {
                minimums
                    .for_family(c.family)
                    .get(c.tier)
                    .map(|t| (c, t))
            })
            .unzip();
        Self {
            table,
            constraints,
            thresholds,
        }
    }

    /// Creates a set with the given constraints, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`RegCapError::MissingThreshold`] for the first constraint
    /// whose tier has no threshold.
    pub fn with_constraints<I>(
        table: &'a ReferenceTable,
        minimums: &RegulatoryMinimums,
        constraints: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = CapitalConstraint>,
    {
        let constraints: Vec<_> = constraints.into_iter().collect();
        let thresholds = constraints
            .iter()
            .map(|c| minimums.require(c.family, c.tier))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            table,
            constraints,
            thresholds,
        })
    }

    /// Number of constraints in the set.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns true if the set has no constraints.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Constraints in evaluation order.
    pub fn constraints(&self) -> &[CapitalConstraint] {
        &self.constraints
    }

    /// Base threshold resolved for each constraint, in evaluation order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Reference table the set evaluates against.
    pub fn table(&self) -> &ReferenceTable {
        self.table
    }

    /// Writes every constraint value into `out`, in set order.
    ///
    /// # Errors
    ///
    /// Returns [`RegCapError::ShapeMismatch`] if `balances` does not match
    /// the table or `out` does not match [`len`](Self::len).
    pub fn evaluate_into(&self, balances: &[f64], out: &mut [f64]) -> Result<()> {
        ensure_out("values", out.len(), self.len())?;
        let totals = BalanceSheetTotals::compute(balances, self.table)?;

        for ((value, &constraint), &threshold) in
            out.iter_mut().zip(&self.constraints).zip(&self.thresholds)
        {
            *value = totals.slack(constraint, threshold);
        }

        trace!(
            event = "evaluate_set",
            constraint_count = self.len(),
            line_item_count = balances.len(),
            gsib_addon = totals.gsib_addon,
        );
        Ok(())
    }

    /// Returns every constraint value, in set order.
    pub fn evaluate_all(&self, balances: &[f64]) -> Result<Vec<f64>> {
        let mut values = vec![0.0; self.len()];
        self.evaluate_into(balances, &mut values)?;
        Ok(values)
    }

    /// Writes the row-major `len() x table.len()` Jacobian into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`RegCapError::ShapeMismatch`] if `balances` does not match
    /// the table or `out` does not hold exactly one row per constraint.
    pub fn jacobian_into(&self, balances: &[f64], out: &mut [f64]) -> Result<()> {
        let n = self.table.len();
        ensure_out("jacobian", out.len(), self.len() * n)?;
        let totals = BalanceSheetTotals::compute(balances, self.table)?;
        if n == 0 {
            return Ok(());
        }

        for ((row, &constraint), &threshold) in out
            .chunks_exact_mut(n)
            .zip(&self.constraints)
            .zip(&self.thresholds)
        {
            let minimum = threshold + totals.addon_for(constraint);
            let gsib_exposure = constraint
                .has_gsib_addon()
                .then(|| totals.exposure(constraint.family));
            write_gradient(constraint, self.table, minimum, gsib_exposure, row);
        }
        Ok(())
    }

    /// Returns true if every constraint is satisfied (`value >= 0`).
    ///
    /// A NaN value counts as unsatisfied.
    pub fn is_feasible(&self, balances: &[f64]) -> Result<bool> {
        let totals = BalanceSheetTotals::compute(balances, self.table)?;
        Ok(self
            .constraints
            .iter()
            .zip(&self.thresholds)
            .all(|(&c, &t)| totals.slack(c, t) >= 0.0))
    }

    /// Explains every constraint value.
    pub fn explain(&self, balances: &[f64]) -> Result<CapitalAnalysis> {
        let totals = BalanceSheetTotals::compute(balances, self.table)?;
        let analyses: Vec<_> = self
            .constraints
            .iter()
            .zip(&self.thresholds)
            .map(|(&c, &t)| ConstraintAnalysis::from_totals(c, t, &totals))
            .collect();

        for analysis in &analyses {
            if !analysis.value.is_finite() {
                warn!(
                    event = "non_finite_constraint",
                    constraint = analysis.name(),
                    value = analysis.value,
                );
            }
            debug!(
                event = "constraint_analysis",
                constraint = analysis.name(),
                value = analysis.value,
                resources = analysis.resources,
                exposure = analysis.exposure,
                minimum = analysis.effective_minimum(),
            );
        }

        Ok(CapitalAnalysis::new(totals, analyses))
    }
}

fn ensure_out(name: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(RegCapError::ShapeMismatch {
            name,
            expected,
            actual,
        })
    }
}
