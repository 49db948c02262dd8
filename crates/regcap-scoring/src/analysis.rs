//! Constraint analysis for explaining an evaluated balance sheet.
//!
//! Where the solver interface only needs the slack values, the analysis
//! keeps the numerator, denominator and minimum behind each one, so a
//! caller can report realized ratios and shortfalls.

use regcap_core::CapitalConstraint;

use crate::totals::BalanceSheetTotals;

/// Breakdown of one evaluated constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintAnalysis {
    /// The constraint evaluated.
    pub constraint: CapitalConstraint,
    /// Slack value: `resources - effective_minimum * exposure`.
    pub value: f64,
    /// Capital resources counted at the constraint's tier.
    pub resources: f64,
    /// Exposure measure of the constraint's family.
    pub exposure: f64,
    /// Base minimum ratio from the threshold vector.
    pub threshold: f64,
    /// GSIB add-on applied; zero for leverage constraints.
    pub gsib_addon: f64,
}

impl ConstraintAnalysis {
    /// Builds the breakdown of `constraint` from precomputed totals.
    pub fn from_totals(
        constraint: CapitalConstraint,
        threshold: f64,
        totals: &BalanceSheetTotals,
    ) -> Self {
        Self {
            constraint,
            value: totals.slack(constraint, threshold),
            resources: totals.resources(constraint.tier),
            exposure: totals.exposure(constraint.family),
            threshold,
            gsib_addon: totals.addon_for(constraint),
        }
    }

    /// Returns the constraint name.
    pub fn name(&self) -> &'static str {
        self.constraint.name()
    }

    /// Minimum ratio after the GSIB add-on.
    pub fn effective_minimum(&self) -> f64 {
        self.threshold + self.gsib_addon
    }

    /// Realized capital ratio `resources / exposure`; `None` for zero exposure.
    pub fn capital_ratio(&self) -> Option<f64> {
        (self.exposure != 0.0).then(|| self.resources / self.exposure)
    }

    /// Returns true if the minimum is met. False for NaN values.
    pub fn is_satisfied(&self) -> bool {
        self.value >= 0.0
    }

    /// Capital missing to meet the minimum; zero when satisfied.
    pub fn shortfall(&self) -> f64 {
        if self.value < 0.0 {
            -self.value
        } else {
            0.0
        }
    }
}

/// Analysis of every enabled constraint for one balance vector.
#[derive(Debug, Clone, PartialEq)]
pub struct CapitalAnalysis {
    /// Totals the analyses were computed from.
    pub totals: BalanceSheetTotals,
    /// Per-constraint breakdown, in the set's constraint order.
    pub analyses: Vec<ConstraintAnalysis>,
}

impl CapitalAnalysis {
    /// Creates an analysis.
    pub fn new(totals: BalanceSheetTotals, analyses: Vec<ConstraintAnalysis>) -> Self {
        Self { totals, analyses }
    }

    /// Returns true if every constraint is satisfied.
    pub fn is_feasible(&self) -> bool {
        self.analyses.iter().all(ConstraintAnalysis::is_satisfied)
    }

    /// Returns the constraints that are not satisfied.
    pub fn violations(&self) -> Vec<&ConstraintAnalysis> {
        self.analyses.iter().filter(|a| !a.is_satisfied()).collect()
    }

    /// Returns the constraint with the smallest slack.
    ///
    /// NaN slack sorts below every number so an invalid state is reported
    /// as binding.
    pub fn binding(&self) -> Option<&ConstraintAnalysis> {
        self.analyses.iter().min_by(|a, b| {
            match (a.value.is_nan(), b.value.is_nan()) {
                (true, false) => std::cmp::Ordering::Less,
                (false, true) => std::cmp::Ordering::Greater,
                _ => a.value.total_cmp(&b.value),
            }
        })
    }

    /// Returns the breakdown for `constraint`, if it was evaluated.
    pub fn get(&self, constraint: CapitalConstraint) -> Option<&ConstraintAnalysis> {
        self.analyses.iter().find(|a| a.constraint == constraint)
    }

    /// Sum of shortfalls across all constraints.
    pub fn total_shortfall(&self) -> f64 {
        self.analyses.iter().map(ConstraintAnalysis::shortfall).sum()
    }

    /// Number of constraints analysed.
    pub fn len(&self) -> usize {
        self.analyses.len()
    }

    /// Returns true if no constraints were analysed.
    pub fn is_empty(&self) -> bool {
        self.analyses.is_empty()
    }
}
