//! Tests for constraint evaluation.

mod test_evaluator;
mod test_set;

use super::*;
use regcap_core::{CapitalConstraint, CapitalTier, RegCapError, ReferenceTable, Thresholds};
use regcap_test::bank;

type NamedConstraintFn = fn(&[f64], &ReferenceTable, &Thresholds) -> regcap_core::Result<f64>;

/// Every named binding paired with the constraint it evaluates.
fn named_bindings() -> [(CapitalConstraint, NamedConstraintFn); 12] {
    [
        (CapitalConstraint::SRWA_CET1, srwa_cet1),
        (CapitalConstraint::SRWA_T1, srwa_t1),
        (CapitalConstraint::SRWA_TC, srwa_tc),
        (CapitalConstraint::SRWA_TLAC, srwa_tlac),
        (CapitalConstraint::ARWA_CET1, arwa_cet1),
        (CapitalConstraint::ARWA_T1, arwa_t1),
        (CapitalConstraint::ARWA_TC, arwa_tc),
        (CapitalConstraint::ARWA_TLAC, arwa_tlac),
        (CapitalConstraint::LEV_CET1, lev_cet1),
        (CapitalConstraint::LEV_T1, lev_t1),
        (CapitalConstraint::LEV_TC, lev_tc),
        (CapitalConstraint::LEV_TLAC, lev_tlac),
    ]
}

/// Bank thresholds for the family of `constraint`.
fn bank_thresholds(constraint: CapitalConstraint) -> Thresholds {
    *bank::sample_minimums().for_family(constraint.family)
}

/// Bank table with every resource weight of `tier` set to zero.
fn bank_table_without_resources(tier: CapitalTier) -> ReferenceTable {
    bank::line_items()
        .into_iter()
        .map(|mut item| {
            match tier {
                CapitalTier::Cet1 => item.cet1_resource = 0.0,
                CapitalTier::Tier1 => item.tier1_resource = 0.0,
                CapitalTier::TotalCapital => item.total_capital_resource = 0.0,
                CapitalTier::Tlac => item.tlac_resource = 0.0,
            }
            item
        })
        .collect()
}
