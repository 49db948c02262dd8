//! Capital tiers and ratio families.
//!
//! A constraint is identified by the pair (family, tier): the family picks
//! the exposure measure in the denominator, the tier picks which capital
//! resources count towards the numerator.

use std::fmt;

/// Regulatory capital resource tier, from narrowest to broadest.
///
/// The discriminant is the position of the tier's entry in a threshold
/// vector.
///
/// # Example
///
/// ```
/// use regcap_core::CapitalTier;
///
/// assert_eq!(CapitalTier::Tier1.index(), 1);
/// assert_eq!(CapitalTier::ALL[3], CapitalTier::Tlac);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CapitalTier {
    /// Common Equity Tier 1: equity.
    Cet1 = 0,
    /// Tier 1: equity and preferred stock.
    Tier1 = 1,
    /// Total Capital: Tier 1 plus subordinated debt.
    TotalCapital = 2,
    /// Total Loss-Absorbing Capacity: Total Capital plus eligible senior debt.
    Tlac = 3,
}

impl CapitalTier {
    /// All tiers in threshold-vector order.
    pub const ALL: [CapitalTier; 4] = [
        CapitalTier::Cet1,
        CapitalTier::Tier1,
        CapitalTier::TotalCapital,
        CapitalTier::Tlac,
    ];

    /// Position of this tier within a threshold vector.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short suffix used in constraint names (`cet1`, `t1`, `tc`, `tlac`).
    pub const fn short_name(self) -> &'static str {
        match self {
            CapitalTier::Cet1 => "cet1",
            CapitalTier::Tier1 => "t1",
            CapitalTier::TotalCapital => "tc",
            CapitalTier::Tlac => "tlac",
        }
    }
}

impl fmt::Display for CapitalTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CapitalTier::Cet1 => "CET1",
            CapitalTier::Tier1 => "Tier 1",
            CapitalTier::TotalCapital => "Total Capital",
            CapitalTier::Tlac => "TLAC",
        };
        f.write_str(label)
    }
}

/// Exposure measure a capital ratio is computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RatioFamily {
    /// Standardized-approach risk-weighted assets.
    StandardizedRwa,
    /// Advanced-approach risk-weighted assets.
    AdvancedRwa,
    /// Leverage exposure.
    Leverage,
}

impl RatioFamily {
    /// All families in constraint-table order.
    pub const ALL: [RatioFamily; 3] = [
        RatioFamily::StandardizedRwa,
        RatioFamily::AdvancedRwa,
        RatioFamily::Leverage,
    ];

    /// Returns true if the GSIB surcharge is added to this family's minimum.
    ///
    /// Leverage ratios carry no GSIB term.
    #[inline]
    pub const fn has_gsib_addon(self) -> bool {
        !matches!(self, RatioFamily::Leverage)
    }

    /// Prefix used in constraint names (`srwa`, `arwa`, `lev`).
    pub const fn short_name(self) -> &'static str {
        match self {
            RatioFamily::StandardizedRwa => "srwa",
            RatioFamily::AdvancedRwa => "arwa",
            RatioFamily::Leverage => "lev",
        }
    }
}

impl fmt::Display for RatioFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RatioFamily::StandardizedRwa => "Standardized RWA",
            RatioFamily::AdvancedRwa => "Advanced RWA",
            RatioFamily::Leverage => "Leverage",
        };
        f.write_str(label)
    }
}
