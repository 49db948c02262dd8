//! Reference table of per-line-item weights.
//!
//! Rows are balance-sheet line items. The table is built once per
//! optimization run and stored column-wise so every weighted sum is a
//! single scan over contiguous slices.

use crate::error::{RegCapError, Result};
use crate::tier::{CapitalTier, RatioFamily};

/// Weights and resource coefficients for one balance-sheet line item.
///
/// With the `serde` feature, fields also accept the column labels used by
/// tabular balance-sheet exports (`s_rwa`, `a_rwa`, `b1_leverage`,
/// `cet1_contr_per_balance`, `CET1_resource`, `T1_resource`,
/// `total_capital_resource`, `TLAC_resource`).
///
/// Every weight column is required and unknown columns are rejected, so a
/// missing or misspelled label fails at load time instead of reading as zero.
///
/// # Example
///
/// ```
/// use regcap_core::{CapitalTier, LineItem, RatioFamily};
///
/// let loans = LineItem::new("Commercial loans")
///     .with_risk_weights(1.0, 0.85, 1.0)
///     .with_gsib_contribution(1e-7);
///
/// assert_eq!(loans.exposure_weight(RatioFamily::AdvancedRwa), 0.85);
/// assert_eq!(loans.resource(CapitalTier::Cet1), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct LineItem {
    /// Optional display name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,

    /// Standardized-approach risk weight.
    #[cfg_attr(feature = "serde", serde(alias = "s_rwa"))]
    pub standardized_rwa: f64,

    /// Advanced-approach risk weight.
    #[cfg_attr(feature = "serde", serde(alias = "a_rwa"))]
    pub advanced_rwa: f64,

    /// Leverage-exposure weight.
    #[cfg_attr(feature = "serde", serde(alias = "b1_leverage"))]
    pub leverage_exposure: f64,

    /// GSIB surcharge contribution per unit of balance.
    #[cfg_attr(feature = "serde", serde(alias = "cet1_contr_per_balance"))]
    pub gsib_contribution: f64,

    /// Share of the balance counted as CET1 capital.
    #[cfg_attr(feature = "serde", serde(alias = "CET1_resource"))]
    pub cet1_resource: f64,

    /// Share of the balance counted as Tier 1 capital.
    #[cfg_attr(feature = "serde", serde(alias = "T1_resource"))]
    pub tier1_resource: f64,

    /// Share of the balance counted as Total Capital.
    pub total_capital_resource: f64,

    /// Share of the balance counted as TLAC.
    #[cfg_attr(feature = "serde", serde(alias = "TLAC_resource"))]
    pub tlac_resource: f64,
}

impl LineItem {
    /// Creates a named line item with all weights zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the standardized, advanced and leverage exposure weights.
    pub fn with_risk_weights(mut self, standardized: f64, advanced: f64, leverage: f64) -> Self {
        self.standardized_rwa = standardized;
        self.advanced_rwa = advanced;
        self.leverage_exposure = leverage;
        self
    }

    /// Sets the GSIB contribution per unit of balance.
    pub fn with_gsib_contribution(mut self, contribution: f64) -> Self {
        self.gsib_contribution = contribution;
        self
    }

    /// Sets the resource weight of every tier, narrowest first.
    pub fn with_resources(mut self, cet1: f64, tier1: f64, total_capital: f64, tlac: f64) -> Self {
        self.cet1_resource = cet1;
        self.tier1_resource = tier1;
        self.total_capital_resource = total_capital;
        self.tlac_resource = tlac;
        self
    }

    /// Exposure weight under `family`.
    pub fn exposure_weight(&self, family: RatioFamily) -> f64 {
        match family {
            RatioFamily::StandardizedRwa => self.standardized_rwa,
            RatioFamily::AdvancedRwa => self.advanced_rwa,
            RatioFamily::Leverage => self.leverage_exposure,
        }
    }

    /// Resource weight for `tier`.
    pub fn resource(&self, tier: CapitalTier) -> f64 {
        match tier {
            CapitalTier::Cet1 => self.cet1_resource,
            CapitalTier::Tier1 => self.tier1_resource,
            CapitalTier::TotalCapital => self.total_capital_resource,
            CapitalTier::Tlac => self.tlac_resource,
        }
    }
}

/// Raw columns for building a [`ReferenceTable`] without line-item records.
///
/// Every column must have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceColumns {
    pub standardized_rwa: Vec<f64>,
    pub advanced_rwa: Vec<f64>,
    pub leverage_exposure: Vec<f64>,
    pub gsib_contribution: Vec<f64>,
    pub cet1_resource: Vec<f64>,
    pub tier1_resource: Vec<f64>,
    pub total_capital_resource: Vec<f64>,
    pub tlac_resource: Vec<f64>,
}

/// Immutable, column-oriented table of line-item weights.
///
/// # Example
///
/// ```
/// use regcap_core::{CapitalTier, LineItem, RatioFamily, ReferenceTable};
///
/// let table: ReferenceTable = vec![
///     LineItem::new("Cash").with_risk_weights(0.0, 0.0, 1.0),
///     LineItem::new("Equity").with_resources(1.0, 1.0, 1.0, 1.0),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.exposure_weights(RatioFamily::Leverage), &[1.0, 0.0]);
/// assert_eq!(table.resource_weights(CapitalTier::Tlac), &[0.0, 1.0]);
/// assert!(table.ensure_len("balances", 3).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceTable {
    names: Vec<Option<String>>,
    standardized_rwa: Vec<f64>,
    advanced_rwa: Vec<f64>,
    leverage_exposure: Vec<f64>,
    gsib_contribution: Vec<f64>,
    resources: [Vec<f64>; 4],
}

impl ReferenceTable {
    /// Builds a table from line-item records.
    pub fn from_line_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = LineItem>,
    {
        let mut table = Self::default();
        for item in items {
            table.standardized_rwa.push(item.standardized_rwa);
            table.advanced_rwa.push(item.advanced_rwa);
            table.leverage_exposure.push(item.leverage_exposure);
            table.gsib_contribution.push(item.gsib_contribution);
            for tier in CapitalTier::ALL {
                table.resources[tier.index()].push(item.resource(tier));
            }
            table.names.push(item.name);
        }
        table
    }

    /// Builds a table from raw columns.
    ///
    /// # Errors
    ///
    /// Returns [`RegCapError::ShapeMismatch`] naming the first column whose
    /// length differs from `standardized_rwa`.
    pub fn from_columns(columns: ReferenceColumns) -> Result<Self> {
        let expected = columns.standardized_rwa.len();
        let lengths = [
            ("a_rwa", columns.advanced_rwa.len()),
            ("b1_leverage", columns.leverage_exposure.len()),
            ("cet1_contr_per_balance", columns.gsib_contribution.len()),
            ("CET1_resource", columns.cet1_resource.len()),
            ("T1_resource", columns.tier1_resource.len()),
            ("total_capital_resource", columns.total_capital_resource.len()),
            ("TLAC_resource", columns.tlac_resource.len()),
        ];
        if let Some(&(name, actual)) = lengths.iter().find(|(_, len)| *len != expected) {
            return Err(RegCapError::ShapeMismatch {
                name,
                expected,
                actual,
            });
        }

        Ok(Self {
            names: vec![None; expected],
            standardized_rwa: columns.standardized_rwa,
            advanced_rwa: columns.advanced_rwa,
            leverage_exposure: columns.leverage_exposure,
            gsib_contribution: columns.gsib_contribution,
            resources: [
                columns.cet1_resource,
                columns.tier1_resource,
                columns.total_capital_resource,
                columns.tlac_resource,
            ],
        })
    }

    /// Number of line items.
    #[inline]
    pub fn len(&self) -> usize {
        self.standardized_rwa.len()
    }

    /// Returns true if the table has no line items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.standardized_rwa.is_empty()
    }

    /// Fails with [`RegCapError::ShapeMismatch`] unless `actual` equals the row count.
    #[inline]
    pub fn ensure_len(&self, name: &'static str, actual: usize) -> Result<()> {
        let expected = self.len();
        if actual == expected {
            Ok(())
        } else {
            Err(RegCapError::ShapeMismatch {
                name,
                expected,
                actual,
            })
        }
    }

    /// Exposure weight column for `family`.
    #[inline]
    pub fn exposure_weights(&self, family: RatioFamily) -> &[f64] {
        match family {
            RatioFamily::StandardizedRwa => &self.standardized_rwa,
            RatioFamily::AdvancedRwa => &self.advanced_rwa,
            RatioFamily::Leverage => &self.leverage_exposure,
        }
    }

    /// Resource weight column for `tier`.
    #[inline]
    pub fn resource_weights(&self, tier: CapitalTier) -> &[f64] {
        &self.resources[tier.index()]
    }

    /// GSIB contribution-per-balance column.
    #[inline]
    pub fn gsib_contributions(&self) -> &[f64] {
        &self.gsib_contribution
    }

    /// Display name of line item `index`, if it has one.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).and_then(|n| n.as_deref())
    }

    /// Reassembles line item `index` as a record.
    pub fn line_item(&self, index: usize) -> Option<LineItem> {
        if index >= self.len() {
            return None;
        }
        Some(LineItem {
            name: self.names[index].clone(),
            standardized_rwa: self.standardized_rwa[index],
            advanced_rwa: self.advanced_rwa[index],
            leverage_exposure: self.leverage_exposure[index],
            gsib_contribution: self.gsib_contribution[index],
            cet1_resource: self.resources[0][index],
            tier1_resource: self.resources[1][index],
            total_capital_resource: self.resources[2][index],
            tlac_resource: self.resources[3][index],
        })
    }
}

impl FromIterator<LineItem> for ReferenceTable {
    fn from_iter<I: IntoIterator<Item = LineItem>>(iter: I) -> Self {
        Self::from_line_items(iter)
    }
}
