use super::domain::IGrammarDomain;
use crate::errors::VarlearnResult;
use crate::grammar::{GrammarId, SentenceId};
use crate::weight::Weight;

/// One observation's worth of evidence, handed to an update policy.
pub struct EvidenceContext<'a> {
    /// Domain, for relevance lookups.
    pub domain: &'a dyn IGrammarDomain,
    /// The sampled hypothesis grammar the sentence was tested against.
    pub hypothesis: GrammarId,
    /// The observed sentence.
    pub sentence: SentenceId,
    /// Learning rate in effect.
    pub rate: f64,
}

/// Weight-update policy: how one parse outcome adjusts the weight vector.
///
/// `reward` runs on parse success, `punish` on parse failure. A policy
/// mutates the weight vector it is handed and nothing else, so each
/// implementation is testable in isolation.
pub trait IUpdatePolicy: Send + Sync {
    /// Stable name used in trial records.
    fn name(&self) -> &'static str;

    /// The sentence parsed under the hypothesis.
    fn reward(&self, cx: &EvidenceContext<'_>, weights: &mut [Weight]) -> VarlearnResult<()>;

    /// The sentence failed to parse under the hypothesis.
    fn punish(&self, cx: &EvidenceContext<'_>, weights: &mut [Weight]) -> VarlearnResult<()>;
}
