use varlearn_core::{grammar, EvidenceContext, IUpdatePolicy, Relevance, VarlearnResult, Weight};

use super::apply_rule;

/// Reward-only learning that skips parameters the sentence's annotation
/// marks irrelevant, while still updating the rest from the same call.
///
/// Requires the domain to supply relevance annotations; a sentence with
/// none is a fatal lookup failure.
pub struct RelevanceFiltered;

impl IUpdatePolicy for RelevanceFiltered {
    fn name(&self) -> &'static str {
        "relevance_filtered"
    }

    fn reward(&self, cx: &EvidenceContext<'_>, weights: &mut [Weight]) -> VarlearnResult<()> {
        let relevance = cx.domain.sentence_relevance(cx.sentence)?;
        let num_params = weights.len();
        for (index, weight) in weights.iter_mut().enumerate() {
            if relevance[index] == Relevance::Irrelevant {
                continue;
            }
            apply_rule(weight, grammar::bit(cx.hypothesis, index, num_params), cx.rate);
        }
        Ok(())
    }

    fn punish(&self, _cx: &EvidenceContext<'_>, _weights: &mut [Weight]) -> VarlearnResult<()> {
        Ok(())
    }
}
