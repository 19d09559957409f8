use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Parameter weight clamped to [0.0, 1.0].
/// Represents the learner's confidence that a parameter's setting is 1.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Weight(f64);

impl Weight {
    /// Starting weight for every parameter: maximal uncertainty.
    pub const INITIAL: Weight = Weight(constants::INITIAL_WEIGHT);

    /// Create a new Weight, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Move toward 1 under the bounded proportional rule:
    /// `w += rate * (1 - w)`.
    ///
    /// For `rate` in (0, 1] the result stays in [0, 1]; the step shrinks
    /// as the weight approaches the boundary, so it never reaches 1.
    pub fn nudge_up(&mut self, rate: f64) {
        self.0 += rate * (1.0 - self.0);
    }

    /// Move toward 0 under the bounded proportional rule:
    /// `w -= rate * w`.
    pub fn nudge_down(&mut self, rate: f64) {
        self.0 -= rate * self.0;
    }

    /// Whether the weight is within `threshold` of 0 or of 1.
    pub fn decided(self, threshold: f64) -> bool {
        self.0 < threshold || 1.0 - self.0 < threshold
    }

    /// Round to the nearest boundary bit (ties go to 1).
    pub fn round_to_bit(self) -> bool {
        self.0 >= 0.5
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Weight> for f64 {
    fn from(w: Weight) -> Self {
        w.0
    }
}
