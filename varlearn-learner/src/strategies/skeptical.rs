use varlearn_core::{grammar, EvidenceContext, IUpdatePolicy, Relevance, VarlearnResult, Weight};

use super::apply_rule;

/// Relevance-filtered learning that additionally tempers the update for
/// parameters whose evidence is ambiguous, using half the configured rate.
pub struct Skeptical;

impl IUpdatePolicy for Skeptical {
    fn name(&self) -> &'static str {
        "skeptical"
    }

    fn reward(&self, cx: &EvidenceContext<'_>, weights: &mut [Weight]) -> VarlearnResult<()> {
        let relevance = cx.domain.sentence_relevance(cx.sentence)?;
        let num_params = weights.len();
        for (index, weight) in weights.iter_mut().enumerate() {
            let rate = match relevance[index] {
                Relevance::Irrelevant => continue,
                Relevance::Ambiguous => cx.rate / 2.0,
                Relevance::Relevant => cx.rate,
            };
            apply_rule(weight, grammar::bit(cx.hypothesis, index, num_params), rate);
        }
        Ok(())
    }

    fn punish(&self, _cx: &EvidenceContext<'_>, _weights: &mut [Weight]) -> VarlearnResult<()> {
        Ok(())
    }
}
