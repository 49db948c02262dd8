//! Balance-sheet totals shared by every constraint.
//!
//! All twelve constraints are functions of eight weighted sums: three
//! exposure measures, four resource totals and the GSIB add-on. Computing
//! them once lets a constraint set evaluate everything in a single pass.

use regcap_core::{CapitalConstraint, CapitalTier, RatioFamily, ReferenceTable, Result};

use crate::evaluator::slack;

/// Weighted sums of a balance vector against a reference table.
///
/// # Example
///
/// ```
/// use regcap_core::{CapitalTier, LineItem, RatioFamily, ReferenceTable};
/// use regcap_scoring::BalanceSheetTotals;
///
/// let table = ReferenceTable::from_line_items([
///     LineItem::new("Loans").with_risk_weights(1.0, 0.8, 1.0),
///     LineItem::new("Equity").with_resources(1.0, 1.0, 1.0, 1.0),
/// ]);
/// let totals = BalanceSheetTotals::compute(&[90.0, 10.0], &table).unwrap();
///
/// assert_eq!(totals.exposure(RatioFamily::StandardizedRwa), 90.0);
/// assert_eq!(totals.resources(CapitalTier::Cet1), 10.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BalanceSheetTotals {
    /// Sum of standardized risk weight times balance.
    pub standardized_rwa: f64,
    /// Sum of advanced risk weight times balance.
    pub advanced_rwa: f64,
    /// Sum of leverage-exposure weight times balance.
    pub leverage_exposure: f64,
    /// GSIB surcharge, added to RWA minimums.
    pub gsib_addon: f64,
    /// Capital resources per tier, in tier order.
    pub resources: [f64; 4],
}

impl BalanceSheetTotals {
    /// Computes every total in one pass over the line items.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeMismatch`](regcap_core::RegCapError::ShapeMismatch) if
    /// `balances` and `table` differ in length.
    pub fn compute(balances: &[f64], table: &ReferenceTable) -> Result<Self> {
        table.ensure_len("balances", balances.len())?;

        let n = balances.len();
        let s_rwa = &table.exposure_weights(RatioFamily::StandardizedRwa)[..n];
        let a_rwa = &table.exposure_weights(RatioFamily::AdvancedRwa)[..n];
        let lev = &table.exposure_weights(RatioFamily::Leverage)[..n];
        let gsib = &table.gsib_contributions()[..n];
        let cet1 = &table.resource_weights(CapitalTier::Cet1)[..n];
        let t1 = &table.resource_weights(CapitalTier::Tier1)[..n];
        let tc = &table.resource_weights(CapitalTier::TotalCapital)[..n];
        let tlac = &table.resource_weights(CapitalTier::Tlac)[..n];

        let mut totals = Self::default();
        for (i, &x) in balances.iter().enumerate() {
            totals.standardized_rwa += s_rwa[i] * x;
            totals.advanced_rwa += a_rwa[i] * x;
            totals.leverage_exposure += lev[i] * x;
            totals.gsib_addon += gsib[i] * x;
            totals.resources[0] += cet1[i] * x;
            totals.resources[1] += t1[i] * x;
            totals.resources[2] += tc[i] * x;
            totals.resources[3] += tlac[i] * x;
        }
        Ok(totals)
    }

    /// Exposure measure of `family`.
    #[inline]
    pub fn exposure(&self, family: RatioFamily) -> f64 {
        match family {
            RatioFamily::StandardizedRwa => self.standardized_rwa,
            RatioFamily::AdvancedRwa => self.advanced_rwa,
            RatioFamily::Leverage => self.leverage_exposure,
        }
    }

    /// Capital resources counted at `tier`.
    #[inline]
    pub fn resources(&self, tier: CapitalTier) -> f64 {
        self.resources[tier.index()]
    }

    /// GSIB add-on applied to `constraint`: the surcharge for RWA
    /// families, zero for leverage.
    #[inline]
    pub fn addon_for(&self, constraint: CapitalConstraint) -> f64 {
        if constraint.has_gsib_addon() {
            self.gsib_addon
        } else {
            0.0
        }
    }

    /// Slack of `constraint` at base minimum `threshold`.
    #[inline]
    pub fn slack(&self, constraint: CapitalConstraint, threshold: f64) -> f64 {
        let minimum = if constraint.has_gsib_addon() {
            threshold + self.gsib_addon
        } else {
            threshold
        };
        slack(
            self.resources(constraint.tier),
            self.exposure(constraint.family),
            minimum,
        )
    }
}
