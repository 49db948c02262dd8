//! Shared test fixtures for RegCap crates.
//!
//! This crate provides balance sheets, reference tables and float
//! assertions for testing. It depends only on `regcap-core`.
//!
//! - [`two_item`] - Minimal two-line-item scenario with a hand-computed result
//! - [`bank`] - Ten-line-item bank balance sheet, healthy and stressed
//! - [`float`] - Tolerance-based float assertions and the per-line-item loop formula
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! regcap-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use regcap_test::bank::{sample_balances, sample_minimums, sample_table};
//! use regcap_test::float::assert_close;
//! ```

pub mod bank;
pub mod float;
pub mod two_item;

pub use float::{assert_close, loop_constraint};
