use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{LearnerError, VarlearnResult};

/// Learner configuration.
///
/// Defaults match the classic simulation settings: a 5e-4 learning rate
/// and a 0.02 convergence threshold, with unbounded hypothesis resampling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnerConfig {
    /// Step size of the bounded proportional update rule. Must be in (0, 1].
    pub learning_rate: f64,
    /// Distance from 0 or 1 at which a weight counts as decided.
    pub convergence_threshold: f64,
    /// Cap on hypothesis resampling attempts. `None` retries forever,
    /// which hangs if legality and the weight distribution never intersect.
    pub max_sample_attempts: Option<u64>,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            learning_rate: constants::DEFAULT_LEARNING_RATE,
            convergence_threshold: constants::DEFAULT_CONVERGENCE_THRESHOLD,
            max_sample_attempts: None,
        }
    }
}

impl LearnerConfig {
    /// Reject unusable settings before a learner is built.
    pub fn validate(&self) -> VarlearnResult<()> {
        // Negated comparisons so NaN fails validation too.
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(LearnerError::InvalidLearningRate {
                rate: self.learning_rate,
            }
            .into());
        }
        if !(self.convergence_threshold > 0.0 && self.convergence_threshold <= 1.0) {
            return Err(LearnerError::InvalidThreshold {
                threshold: self.convergence_threshold,
            }
            .into());
        }
        Ok(())
    }
}
