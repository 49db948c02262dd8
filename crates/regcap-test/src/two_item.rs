//! Two-line-item fixture.
//!
//! Balances `[100, 200]`, standardized weights `[0.5, 1.0]`, CET1 resource
//! weights `[1.0, 0.0]`, no GSIB contribution and a 4.5% CET1 minimum:
//!
//! `srwa_cet1 = 100 - 0.045 * (0.5 * 100 + 1.0 * 200) = 88.75`
//!
//! # Example
//!
//! ```
//! use regcap_test::two_item::{balances, table};
//!
//! assert_eq!(table().len(), balances().len());
//! ```

use regcap_core::{LineItem, ReferenceTable, Thresholds};

/// Expected `srwa_cet1` for this fixture.
pub const EXPECTED_SRWA_CET1: f64 = 88.75;

/// Balances of the two line items.
pub fn balances() -> Vec<f64> {
    vec![100.0, 200.0]
}

/// Line items without GSIB contribution.
pub fn line_items() -> Vec<LineItem> {
    vec![
        LineItem::new("Equity-funded asset")
            .with_risk_weights(0.5, 0.5, 1.0)
            .with_resources(1.0, 1.0, 1.0, 1.0),
        LineItem::new("Risky asset").with_risk_weights(1.0, 1.0, 1.0),
    ]
}

/// Reference table without GSIB contribution.
pub fn table() -> ReferenceTable {
    ReferenceTable::from_line_items(line_items())
}

/// Same table with a GSIB contribution of `contribution` on every line item.
pub fn table_with_gsib(contribution: f64) -> ReferenceTable {
    line_items()
        .into_iter()
        .map(|item| item.with_gsib_contribution(contribution))
        .collect()
}

/// Standardized minimums starting at 4.5% CET1.
pub fn thresholds() -> Thresholds {
    Thresholds::new(0.045, 0.06, 0.08, 0.18)
}
