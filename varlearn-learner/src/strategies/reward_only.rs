use varlearn_core::{EvidenceContext, IUpdatePolicy, VarlearnResult, Weight};

use super::apply_unconditional;

/// Unconditional reward: every parameter is nudged toward the successful
/// hypothesis's setting.
pub struct RewardOnly;

impl IUpdatePolicy for RewardOnly {
    fn name(&self) -> &'static str {
        "reward_only"
    }

    fn reward(&self, cx: &EvidenceContext<'_>, weights: &mut [Weight]) -> VarlearnResult<()> {
        apply_unconditional(weights, cx.hypothesis, cx.rate);
        Ok(())
    }

    fn punish(&self, _cx: &EvidenceContext<'_>, _weights: &mut [Weight]) -> VarlearnResult<()> {
        // Failure under one sampled hypothesis is ambiguous evidence;
        // take no action.
        Ok(())
    }
}
