//! Hypothesis sampling from the weight vector.

use rand::Rng;

use varlearn_core::{GrammarId, IGrammarDomain, LearnerError, VarlearnResult, Weight};

/// Sample a legal hypothesis grammar.
///
/// Each parameter is an independent biased coin flip with success
/// probability equal to its weight; success sets that parameter's bit.
/// An illegal candidate is discarded and all P parameters are resampled
/// from scratch.
///
/// With `max_attempts = None` this retries forever: a domain whose
/// legality predicate never intersects the weight distribution hangs the
/// caller. Passing a cap turns that stall into
/// [`LearnerError::SamplerStalled`] instead.
pub fn choose_grammar<R: Rng + ?Sized>(
    weights: &[Weight],
    domain: &dyn IGrammarDomain,
    rng: &mut R,
    max_attempts: Option<u64>,
) -> VarlearnResult<GrammarId> {
    let num_params = weights.len();
    let mut attempts: u64 = 0;
    loop {
        let mut candidate: GrammarId = 0;
        for (index, weight) in weights.iter().enumerate() {
            if rng.gen::<f64>() < weight.value() {
                candidate |= 1 << (num_params - 1 - index);
            }
        }
        if domain.legal_grammar(candidate) {
            return Ok(candidate);
        }
        attempts += 1;
        if let Some(cap) = max_attempts {
            if attempts >= cap {
                return Err(LearnerError::SamplerStalled { attempts }.into());
            }
        }
    }
}
