use varlearn_core::{grammar, EvidenceContext, IUpdatePolicy, VarlearnResult, Weight};

use super::apply_unconditional;

/// Inverted reward: parse failure is committed to as positive evidence
/// for the opposite setting of every parameter, so punishing a hypothesis
/// is exactly rewarding its bitwise complement. The aggressive, noisy
/// variant; reward takes no action.
pub struct PunishOnly;

impl IUpdatePolicy for PunishOnly {
    fn name(&self) -> &'static str {
        "punish_only"
    }

    fn reward(&self, _cx: &EvidenceContext<'_>, _weights: &mut [Weight]) -> VarlearnResult<()> {
        Ok(())
    }

    fn punish(&self, cx: &EvidenceContext<'_>, weights: &mut [Weight]) -> VarlearnResult<()> {
        let inverted = grammar::complement(cx.hypothesis, weights.len());
        apply_unconditional(weights, inverted, cx.rate);
        Ok(())
    }
}
