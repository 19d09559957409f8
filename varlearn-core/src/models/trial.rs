use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::grammar::GrammarId;
use crate::weight::Weight;

/// One simulated trial's outcome, produced by the simulation harness.
///
/// Deliberately row-shaped: callers export these however they like
/// (tab-separated text, JSON lines, ...); the harness never serializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    /// Update strategy the learner ran.
    pub strategy: String,
    /// Target grammar whose language was fed to the learner.
    pub grammar: GrammarId,
    /// Trial index within this grammar (0-based).
    pub trial: u32,
    /// Sentences consumed before convergence or the cap.
    pub sentences_consumed: u64,
    /// The learner's final rounded-weight inference.
    pub final_guess: GrammarId,
    /// Final weight vector, one entry per parameter.
    pub weights: Vec<Weight>,
    /// Wall time spent on the trial.
    pub elapsed: Duration,
}
