//! Minimum-ratio thresholds.

use crate::error::{RegCapError, Result};
use crate::tier::{CapitalTier, RatioFamily};

/// Minimum capital ratios for one ratio family, one entry per tier.
///
/// Entries bind to tiers in order (CET1, Tier 1, Total Capital, TLAC).
/// A family may configure only its leading tiers; the remaining tiers
/// report no minimum.
///
/// # Examples
///
/// ```
/// use regcap_core::{CapitalTier, Thresholds};
///
/// let srwa = Thresholds::new(0.045, 0.06, 0.08, 0.18);
/// assert_eq!(srwa.get(CapitalTier::TotalCapital), Some(0.08));
///
/// let lev = Thresholds::from_slice(&[0.03, 0.04]).unwrap();
/// assert_eq!(lev.get(CapitalTier::Tier1), Some(0.04));
/// assert_eq!(lev.get(CapitalTier::Tlac), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<f64>", into = "Vec<f64>"))]
pub struct Thresholds {
    values: [f64; 4],
    len: usize,
}

impl Thresholds {
    /// Fewest entries a threshold vector may carry.
    pub const MIN_LEN: usize = 2;

    /// Creates thresholds covering all four tiers.
    pub const fn new(cet1: f64, tier1: f64, total_capital: f64, tlac: f64) -> Self {
        Self {
            values: [cet1, tier1, total_capital, tlac],
            len: 4,
        }
    }

    /// Creates thresholds from 2 to 4 positional entries.
    ///
    /// # Errors
    ///
    /// Returns [`RegCapError::InvalidThresholds`] for any other length.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        if values.len() < Self::MIN_LEN || values.len() > CapitalTier::ALL.len() {
            return Err(RegCapError::InvalidThresholds(values.len()));
        }
        let mut out = [0.0; 4];
        out[..values.len()].copy_from_slice(values);
        Ok(Self {
            values: out,
            len: values.len(),
        })
    }

    /// Returns the minimum for `tier`, if configured.
    #[inline]
    pub fn get(&self, tier: CapitalTier) -> Option<f64> {
        let index = tier.index();
        (index < self.len).then(|| self.values[index])
    }

    /// Returns the minimum for `tier`, failing if it is not configured.
    #[inline]
    pub fn require(&self, family: RatioFamily, tier: CapitalTier) -> Result<f64> {
        self.get(tier)
            .ok_or(RegCapError::MissingThreshold { family, tier })
    }

    /// Number of configured tiers.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a threshold vector holds at least two entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Configured entries in tier order.
    pub fn as_slice(&self) -> &[f64] {
        &self.values[..self.len]
    }
}

impl TryFrom<Vec<f64>> for Thresholds {
    type Error = RegCapError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::from_slice(&values)
    }
}

impl From<Thresholds> for Vec<f64> {
    fn from(thresholds: Thresholds) -> Self {
        thresholds.as_slice().to_vec()
    }
}

/// Threshold vectors for every ratio family.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct RegulatoryMinimums {
    /// Standardized RWA minimums.
    pub standardized: Thresholds,
    /// Advanced RWA minimums.
    pub advanced: Thresholds,
    /// Leverage minimums.
    pub leverage: Thresholds,
}

impl RegulatoryMinimums {
    /// Creates minimums from one threshold vector per family.
    pub fn new(standardized: Thresholds, advanced: Thresholds, leverage: Thresholds) -> Self {
        Self {
            standardized,
            advanced,
            leverage,
        }
    }

    /// Returns the threshold vector for `family`.
    pub fn for_family(&self, family: RatioFamily) -> &Thresholds {
        match family {
            RatioFamily::StandardizedRwa => &self.standardized,
            RatioFamily::AdvancedRwa => &self.advanced,
            RatioFamily::Leverage => &self.leverage,
        }
    }

    /// Returns the minimum for (`family`, `tier`), failing if not configured.
    pub fn require(&self, family: RatioFamily, tier: CapitalTier) -> Result<f64> {
        self.for_family(family).require(family, tier)
    }
}
