//! RegCap Core - Core types for regulatory-capital constraints
//!
//! This crate provides the data model shared by the evaluator:
//! - Capital tiers and ratio families
//! - Named constraint identifiers
//! - Line items and the columnar reference table
//! - Threshold vectors and per-family regulatory minimums

pub mod constraint;
pub mod error;
pub mod minimums;
pub mod table;
pub mod tier;


pub use constraint::CapitalConstraint;
pub use error::{RegCapError, Result};
pub use minimums::{RegulatoryMinimums, Thresholds};
pub use table::{LineItem, ReferenceColumns, ReferenceTable};
pub use tier::{CapitalTier, RatioFamily};
