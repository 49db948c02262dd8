//! RegCap - Regulatory-capital inequality constraints
//!
//! Evaluates SRWA, ARWA and leverage capital constraints at the CET1,
//! Tier 1, Total Capital and TLAC tiers for a candidate balance sheet.
//!
//! # Example
//!
//! ```rust
//! use regcap::prelude::*;
//!
//! let table: ReferenceTable = [
//!     LineItem::new("loans").with_risk_weights(1.0, 0.5, 1.0),
//!     LineItem::new("equity").with_resources(1.0, 1.0, 1.0, 1.0),
//! ]
//! .into_iter()
//! .collect();
//!
//! let thresholds = Thresholds::new(0.045, 0.06, 0.08, 0.18);
//! let value = srwa_cet1(&[100.0, 10.0], &table, &thresholds).unwrap();
//! assert!((value - 5.5).abs() < 1e-12);
//! ```

use tracing::info;

pub use regcap_config::{CapitalConfig, ConfigError};
pub use regcap_core::{
    CapitalConstraint, CapitalTier, LineItem, RatioFamily, ReferenceColumns, ReferenceTable,
    RegCapError, RegulatoryMinimums, Result, Thresholds,
};
pub use regcap_scoring::{
    arwa_cet1, arwa_t1, arwa_tc, arwa_tlac, evaluate, gradient_into, gsib_addon, lev_cet1,
    lev_t1, lev_tc, lev_tlac, srwa_cet1, srwa_t1, srwa_tc, srwa_tlac, BalanceSheetTotals,
    CapitalAnalysis, CapitalConstraintSet, ConstraintAnalysis,
};

#[cfg(feature = "console")]
pub mod console;


/// Builds the constraint set enabled by `config` over `table`.
///
/// # Errors
///
/// Returns [`RegCapError::MissingThreshold`] if an enabled constraint has
/// no configured minimum.
pub fn constraint_set<'a>(
    config: &CapitalConfig,
    table: &'a ReferenceTable,
) -> Result<CapitalConstraintSet<'a>> {
    CapitalConstraintSet::with_constraints(table, &config.minimums, config.enabled_constraints())
}

/// Evaluates every enabled constraint for `balances` and logs the outcome.
///
/// Emits one `capital_check` event per constraint and a closing
/// `capital_summary` event at `info` level.
pub fn check(
    config: &CapitalConfig,
    table: &ReferenceTable,
    balances: &[f64],
) -> Result<CapitalAnalysis> {
    let analysis = constraint_set(config, table)?.explain(balances)?;

    for item in &analysis.analyses {
        info!(
            event = "capital_check",
            constraint = item.name(),
            value = item.value,
            capital_ratio = item.capital_ratio().unwrap_or(f64::NAN),
            minimum = item.effective_minimum(),
            satisfied = item.is_satisfied(),
        );
    }

    let violations = analysis.violations().len();
    info!(
        event = "capital_summary",
        constraint_count = analysis.len() as u64,
        violation_count = violations as u64,
        feasible = analysis.is_feasible(),
        binding = analysis.binding().map_or("none", ConstraintAnalysis::name),
        total_shortfall = analysis.total_shortfall(),
    );

    Ok(analysis)
}

pub mod prelude {
    pub use super::{
        arwa_cet1, arwa_t1, arwa_tc, arwa_tlac, lev_cet1, lev_t1, lev_tc, lev_tlac, srwa_cet1,
        srwa_t1, srwa_tc, srwa_tlac,
    };
    pub use super::{check, constraint_set, evaluate, gradient_into, gsib_addon};
    pub use super::{
        CapitalAnalysis, CapitalConfig, CapitalConstraint, CapitalConstraintSet, CapitalTier,
        LineItem, RatioFamily, ReferenceTable, RegulatoryMinimums, Thresholds,
    };
}
