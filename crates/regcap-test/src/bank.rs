//! Bank balance-sheet fixture.
//!
//! Ten line items, five assets and five funding sources, totalling 1000 on
//! each side. The healthy balances satisfy every constraint; the stressed
//! balances shift equity into deposits and breach the CET1 and Tier 1
//! minimums.
//!
//! Healthy totals: standardized RWA 625, advanced RWA 597.5, leverage
//! exposure 1000, GSIB add-on 0.019, CET1 100, Tier 1 120, Total Capital
//! 150, TLAC 300.

use regcap_core::{LineItem, ReferenceTable, RegulatoryMinimums, Thresholds};

/// Line-item indices.
pub const CASH: usize = 0;
pub const TREASURIES: usize = 1;
pub const MORTGAGES: usize = 2;
pub const COMMERCIAL_LOANS: usize = 3;
pub const TRADING_ASSETS: usize = 4;
pub const DEPOSITS: usize = 5;
pub const SENIOR_DEBT: usize = 6;
pub const SUBORDINATED_DEBT: usize = 7;
pub const PREFERRED_STOCK: usize = 8;
pub const COMMON_EQUITY: usize = 9;

/// Line items in index order.
pub fn line_items() -> Vec<LineItem> {
    vec![
        LineItem::new("Cash").with_risk_weights(0.0, 0.0, 1.0),
        LineItem::new("Treasuries").with_risk_weights(0.0, 0.0, 1.0),
        LineItem::new("Residential mortgages")
            .with_risk_weights(0.5, 0.35, 1.0)
            .with_gsib_contribution(2e-5),
        LineItem::new("Commercial loans")
            .with_risk_weights(1.0, 0.9, 1.0)
            .with_gsib_contribution(2e-5),
        LineItem::new("Trading assets")
            .with_risk_weights(1.0, 1.2, 1.0)
            .with_gsib_contribution(4e-5),
        LineItem::new("Deposits"),
        LineItem::new("Senior debt").with_resources(0.0, 0.0, 0.0, 1.0),
        LineItem::new("Subordinated debt").with_resources(0.0, 0.0, 1.0, 1.0),
        LineItem::new("Preferred stock").with_resources(0.0, 1.0, 1.0, 1.0),
        LineItem::new("Common equity").with_resources(1.0, 1.0, 1.0, 1.0),
    ]
}

/// Reference table built from [`line_items`].
pub fn sample_table() -> ReferenceTable {
    ReferenceTable::from_line_items(line_items())
}

/// Balances satisfying every constraint.
pub fn sample_balances() -> Vec<f64> {
    vec![
        100.0, 150.0, 250.0, 300.0, 200.0, // assets
        700.0, 150.0, 30.0, 20.0, 100.0, // funding
    ]
}

/// Balances with equity cut to 10 and deposits raised to 790.
///
/// CET1 10, Tier 1 30, Total Capital 60, TLAC 210.
pub fn stressed_balances() -> Vec<f64> {
    let mut balances = sample_balances();
    balances[COMMON_EQUITY] = 10.0;
    balances[DEPOSITS] = 790.0;
    balances
}

/// Standardized and advanced minimums share one vector; leverage is lower.
pub fn sample_minimums() -> RegulatoryMinimums {
    let rwa = Thresholds::new(0.045, 0.06, 0.08, 0.18);
    RegulatoryMinimums::new(rwa, rwa, Thresholds::new(0.03, 0.04, 0.05, 0.075))
}
