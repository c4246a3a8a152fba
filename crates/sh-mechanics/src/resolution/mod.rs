//! Success classification.
//!
//! A check total is compared to a threshold. Below it is a failure; at
//! or above it is a success, and every full `tier_width` points of margin
//! raise the success by one tier:
//!
//! ```text
//! total < threshold                      -> Failure
//! threshold <= total < threshold + width -> Success (tier 0)
//! total >= threshold + width             -> SuccessTier((total - threshold) / width)
//! ```

use serde::{Deserialize, Serialize};

/// Default threshold a check total must reach.
pub const DEFAULT_THRESHOLD: i32 = 10;

/// Default margin per success tier.
pub const DEFAULT_TIER_WIDTH: u32 = 5;

/// The classified result of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The total fell short of the threshold.
    Failure,
    /// A bare success (tier 0).
    Success,
    /// A success with a margin of at least one tier.
    SuccessTier(u32),
}

impl Outcome {
    /// The success tier, or `None` for a failure.
    pub fn tier(self) -> Option<u32> {
        match self {
            Self::Failure => None,
            Self::Success => Some(0),
            Self::SuccessTier(n) => Some(n),
        }
    }

    /// Returns true for any kind of success.
    pub fn is_success(self) -> bool {
        !matches!(self, Self::Failure)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Failure => write!(f, "Failure"),
            Self::Success => write!(f, "Success"),
            Self::SuccessTier(n) => write!(f, "Success, tier {n}"),
        }
    }
}

/// Maps a total and threshold to an [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessClassifier {
    /// Margin per success tier. Zero is treated as 1.
    pub tier_width: u32,
}

impl Default for SuccessClassifier {
    fn default() -> Self {
        Self {
            tier_width: DEFAULT_TIER_WIDTH,
        }
    }
}

impl SuccessClassifier {
    /// Create a classifier with a custom tier width.
    pub fn new(tier_width: u32) -> Self {
        Self { tier_width }
    }

    /// Classify `total` against `threshold`. Reaching the threshold exactly
    /// is a success. Any threshold, including zero or negative, is accepted.
    pub fn classify(&self, total: i32, threshold: i32) -> Outcome {
        let margin = i64::from(total) - i64::from(threshold);
        if margin < 0 {
            return Outcome::Failure;
        }
        let tier = margin / i64::from(self.tier_width.max(1));
        match u32::try_from(tier) {
            Ok(0) => Outcome::Success,
            Ok(n) => Outcome::SuccessTier(n),
            Err(_) => Outcome::SuccessTier(u32::MAX),
        }
    }
}

/// Classify with the default tier width.
pub fn classify(total: i32, threshold: i32) -> Outcome {
    SuccessClassifier::default().classify(total, threshold)
}
