//! Regulatory-capital constraint evaluation for balance-sheet optimizers.
//!
//! This crate evaluates capital inequality constraints for a candidate
//! balance sheet:
//! - One parameterized evaluator (`evaluate`) and twelve named bindings
//!   (`srwa_cet1` ... `lev_tlac`)
//! - Analytic gradients for solvers that consume Jacobians
//! - A constraint set that evaluates every enabled constraint in one pass
//! - Per-constraint analysis (ratios, shortfalls, binding constraint)
//!
//! # Sign convention
//!
//! Every constraint returns a slack value: `>= 0` when the minimum is met,
//! negative by the size of the capital shortfall otherwise.
//!
//! # Allocation
//!
//! Evaluation, gradients and the set's `*_into` methods only read their
//! inputs and write into caller-provided buffers; nothing is allocated per
//! call.

pub mod analysis;
pub mod evaluator;
pub mod gradient;
pub mod named;
pub mod set;
pub mod totals;

#[cfg(test)]
mod tests;

pub use analysis::{CapitalAnalysis, ConstraintAnalysis};
pub use evaluator::{evaluate, gsib_addon};
pub use gradient::gradient_into;
pub use named::{
    arwa_cet1, arwa_t1, arwa_tc, arwa_tlac, lev_cet1, lev_t1, lev_tc, lev_tlac, srwa_cet1,
    srwa_t1, srwa_tc, srwa_tlac,
};
pub use set::CapitalConstraintSet;
pub use totals::BalanceSheetTotals;
