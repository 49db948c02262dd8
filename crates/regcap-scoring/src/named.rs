//! The twelve named capital constraints.
//!
//! Each function binds one (family, tier) pair to [`evaluate`]; arguments
//! are the candidate balances, the reference table, and the threshold
//! vector of the constraint's family.

use regcap_core::{CapitalConstraint, ReferenceTable, Result, Thresholds};

use crate::evaluator::evaluate;

/// Generates a thin named binding over [`evaluate`] per constraint.
///
/// # Usage
/// ```ignore
/// named_constraints! {
///     /// Docs for the binding.
///     srwa_cet1 => SRWA_CET1;
/// }
/// ```
macro_rules! named_constraints {
    ($($(#[$doc:meta])* $name:ident => $constraint:ident;)+) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(
                balances: &[f64],
                table: &ReferenceTable,
                thresholds: &Thresholds,
            ) -> Result<f64> {
                evaluate(CapitalConstraint::$constraint, balances, table, thresholds)
            }
        )+
    };
}

named_constraints! {
    /// Standardized RWA at CET1: equity must cover the CET1 minimum plus
    /// the GSIB add-on, times standardized RWA.
    srwa_cet1 => SRWA_CET1;

    /// Standardized RWA at Tier 1: equity and preferred stock must cover the
    /// Tier 1 minimum plus the GSIB add-on, times standardized RWA.
    srwa_t1 => SRWA_T1;

    /// Standardized RWA at Total Capital: Tier 1 plus subordinated debt must
    /// cover the Total Capital minimum plus the GSIB add-on.
    srwa_tc => SRWA_TC;

    /// Standardized RWA at TLAC: Total Capital plus eligible senior debt must
    /// cover the TLAC minimum plus the GSIB add-on.
    srwa_tlac => SRWA_TLAC;

    /// Advanced RWA at CET1, with GSIB add-on.
    arwa_cet1 => ARWA_CET1;

    /// Advanced RWA at Tier 1, with GSIB add-on.
    arwa_t1 => ARWA_T1;

    /// Advanced RWA at Total Capital, with GSIB add-on.
    arwa_tc => ARWA_TC;

    /// Advanced RWA at TLAC, with GSIB add-on.
    arwa_tlac => ARWA_TLAC;

    /// Leverage at CET1: equity must cover the minimum times leverage
    /// exposure. No GSIB add-on.
    lev_cet1 => LEV_CET1;

    /// Leverage at Tier 1. No GSIB add-on.
    lev_t1 => LEV_T1;

    /// Leverage at Total Capital. No GSIB add-on.
    lev_tc => LEV_TC;

    /// Leverage at TLAC. No GSIB add-on.
    lev_tlac => LEV_TLAC;
}
