//! Named capital constraints.
//!
//! Each of the twelve constraints is a (ratio family, capital tier) pair.
//! Names follow the `<family>_<tier>` convention, e.g. `srwa_cet1`.

use std::fmt;
use std::str::FromStr;

use crate::error::RegCapError;
use crate::tier::{CapitalTier, RatioFamily};

/// Identifier for one capital inequality constraint.
///
/// # Example
///
/// ```
/// use regcap_core::{CapitalConstraint, CapitalTier, RatioFamily};
///
/// let c = CapitalConstraint::new(RatioFamily::Leverage, CapitalTier::Tier1);
/// assert_eq!(c.name(), "lev_t1");
/// assert!(!c.has_gsib_addon());
///
/// let parsed: CapitalConstraint = "arwa_tlac".parse().unwrap();
/// assert_eq!(parsed, CapitalConstraint::ARWA_TLAC);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct CapitalConstraint {
    /// Exposure measure in the denominator.
    pub family: RatioFamily,
    /// Capital resources in the numerator and threshold entry.
    pub tier: CapitalTier,
}

impl CapitalConstraint {
    pub const SRWA_CET1: Self = Self::new(RatioFamily::StandardizedRwa, CapitalTier::Cet1);
    pub const SRWA_T1: Self = Self::new(RatioFamily::StandardizedRwa, CapitalTier::Tier1);
    pub const SRWA_TC: Self = Self::new(RatioFamily::StandardizedRwa, CapitalTier::TotalCapital);
    pub const SRWA_TLAC: Self = Self::new(RatioFamily::StandardizedRwa, CapitalTier::Tlac);
    pub const ARWA_CET1: Self = Self::new(RatioFamily::AdvancedRwa, CapitalTier::Cet1);
    pub const ARWA_T1: Self = Self::new(RatioFamily::AdvancedRwa, CapitalTier::Tier1);
    pub const ARWA_TC: Self = Self::new(RatioFamily::AdvancedRwa, CapitalTier::TotalCapital);
    pub const ARWA_TLAC: Self = Self::new(RatioFamily::AdvancedRwa, CapitalTier::Tlac);
    pub const LEV_CET1: Self = Self::new(RatioFamily::Leverage, CapitalTier::Cet1);
    pub const LEV_T1: Self = Self::new(RatioFamily::Leverage, CapitalTier::Tier1);
    pub const LEV_TC: Self = Self::new(RatioFamily::Leverage, CapitalTier::TotalCapital);
    pub const LEV_TLAC: Self = Self::new(RatioFamily::Leverage, CapitalTier::Tlac);

    /// All twelve constraints, family-major then tier order.
    pub const ALL: [CapitalConstraint; 12] = [
        Self::SRWA_CET1,
        Self::SRWA_T1,
        Self::SRWA_TC,
        Self::SRWA_TLAC,
        Self::ARWA_CET1,
        Self::ARWA_T1,
        Self::ARWA_TC,
        Self::ARWA_TLAC,
        Self::LEV_CET1,
        Self::LEV_T1,
        Self::LEV_TC,
        Self::LEV_TLAC,
    ];

    /// Creates a constraint identifier.
    pub const fn new(family: RatioFamily, tier: CapitalTier) -> Self {
        Self { family, tier }
    }

    /// Returns true if the GSIB add-on tightens this constraint.
    #[inline]
    pub const fn has_gsib_addon(&self) -> bool {
        self.family.has_gsib_addon()
    }

    /// Returns the canonical name, e.g. `srwa_cet1`.
    pub const fn name(&self) -> &'static str {
        use CapitalTier::*;
        use RatioFamily::*;

        match (self.family, self.tier) {
            (StandardizedRwa, Cet1) => "srwa_cet1",
            (StandardizedRwa, Tier1) => "srwa_t1",
            (StandardizedRwa, TotalCapital) => "srwa_tc",
            (StandardizedRwa, Tlac) => "srwa_tlac",
            (AdvancedRwa, Cet1) => "arwa_cet1",
            (AdvancedRwa, Tier1) => "arwa_t1",
            (AdvancedRwa, TotalCapital) => "arwa_tc",
            (AdvancedRwa, Tlac) => "arwa_tlac",
            (Leverage, Cet1) => "lev_cet1",
            (Leverage, Tier1) => "lev_t1",
            (Leverage, TotalCapital) => "lev_tc",
            (Leverage, Tlac) => "lev_tlac",
        }
    }

    /// Looks up a constraint by its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for CapitalConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CapitalConstraint {
    type Err = RegCapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::from_name(&trimmed.to_ascii_lowercase())
            .ok_or_else(|| RegCapError::UnknownConstraint(trimmed.to_string()))
    }
}

impl TryFrom<String> for CapitalConstraint {
    type Error = RegCapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CapitalConstraint> for String {
    fn from(constraint: CapitalConstraint) -> Self {
        constraint.name().to_string()
    }
}
