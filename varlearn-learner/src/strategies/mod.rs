//! The four weight-update strategies.
//!
//! All share the bounded proportional rule (bit 1: `w += rate * (1 - w)`,
//! bit 0: `w -= rate * w`); they differ in which parameters they touch and
//! in what parse failure is taken to mean.

mod punish_only;
mod relevance_filtered;
mod reward_only;
mod skeptical;

pub use punish_only::PunishOnly;
pub use relevance_filtered::RelevanceFiltered;
pub use reward_only::RewardOnly;
pub use skeptical::Skeptical;

use serde::{Deserialize, Serialize};

use varlearn_core::{grammar, GrammarId, IUpdatePolicy, Weight};

/// Closed set of available strategies, selected at learner construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    RewardOnly,
    RelevanceFiltered,
    Skeptical,
    PunishOnly,
}

impl StrategyKind {
    /// Build the policy object for this kind.
    pub fn build(self) -> Box<dyn IUpdatePolicy> {
        match self {
            StrategyKind::RewardOnly => Box::new(RewardOnly),
            StrategyKind::RelevanceFiltered => Box::new(RelevanceFiltered),
            StrategyKind::Skeptical => Box::new(Skeptical),
            StrategyKind::PunishOnly => Box::new(PunishOnly),
        }
    }
}

/// Apply the bounded proportional rule to one parameter.
pub(crate) fn apply_rule(weight: &mut Weight, set: bool, rate: f64) {
    if set {
        weight.nudge_up(rate);
    } else {
        weight.nudge_down(rate);
    }
}

/// Apply the rule to every parameter using `hypothesis`'s bits.
pub(crate) fn apply_unconditional(weights: &mut [Weight], hypothesis: GrammarId, rate: f64) {
    let num_params = weights.len();
    for (index, weight) in weights.iter_mut().enumerate() {
        apply_rule(weight, grammar::bit(hypothesis, index, num_params), rate);
    }
}
