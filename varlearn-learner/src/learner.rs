use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::trace;

use varlearn_core::{
    grammar, EvidenceContext, GrammarId, IGrammarDomain, IUpdatePolicy, LearnerConfig,
    LearnerError, SentenceId, VarlearnResult, Weight,
};

use crate::sampler;
use crate::strategies::StrategyKind;

/// Online learner of a hidden parameter vector.
///
/// Owns the weight vector (one entry per domain parameter, all starting
/// at 0.5) and its own random stream, so independent learners never share
/// state and seeded runs reproduce exactly.
pub struct VariationalLearner {
    domain: Arc<dyn IGrammarDomain>,
    policy: Box<dyn IUpdatePolicy>,
    config: LearnerConfig,
    weights: Vec<Weight>,
    rng: StdRng,
}

impl std::fmt::Debug for VariationalLearner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariationalLearner")
            .field("config", &self.config)
            .field("weights", &self.weights)
            .finish_non_exhaustive()
    }
}

impl VariationalLearner {
    /// Create a learner with a fresh weight vector.
    ///
    /// The configuration and the domain's parameter count are validated
    /// eagerly; a bad learning rate or threshold never reaches the update
    /// loop.
    pub fn new(
        domain: Arc<dyn IGrammarDomain>,
        strategy: StrategyKind,
        config: LearnerConfig,
        seed: u64,
    ) -> VarlearnResult<Self> {
        config.validate()?;
        let num_params = domain.num_params();
        if num_params == 0 || num_params > grammar::MAX_PARAMS {
            return Err(LearnerError::ParamCountOutOfRange { num_params }.into());
        }
        Ok(Self {
            domain,
            policy: strategy.build(),
            config,
            weights: vec![Weight::INITIAL; num_params],
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Replace the weight vector, e.g. to start from a known state in
    /// tests. The length must match the domain's parameter count.
    pub fn with_weights(mut self, weights: Vec<Weight>) -> VarlearnResult<Self> {
        if weights.len() != self.weights.len() {
            return Err(LearnerError::WeightCountMismatch {
                expected: self.weights.len(),
                actual: weights.len(),
            }
            .into());
        }
        self.weights = weights;
        Ok(self)
    }

    /// Current weight vector.
    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    /// Name of the active update strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Sample a legal hypothesis grammar from the current weights.
    pub fn choose_grammar(&mut self) -> VarlearnResult<GrammarId> {
        sampler::choose_grammar(
            &self.weights,
            self.domain.as_ref(),
            &mut self.rng,
            self.config.max_sample_attempts,
        )
    }

    /// Whether `sentence` is a member of `grammar`'s language.
    pub fn parses(&self, grammar: GrammarId, sentence: SentenceId) -> VarlearnResult<bool> {
        Ok(self.domain.language(grammar)?.contains(&sentence))
    }

    /// Consume one observed sentence: sample a hypothesis, test the
    /// parse, and let the active strategy adjust the weights.
    ///
    /// The single externally driven mutation entry point of the learner.
    pub fn consume(&mut self, sentence: SentenceId) -> VarlearnResult<()> {
        let hypothesis = self.choose_grammar()?;
        let parsed = self.parses(hypothesis, sentence)?;
        trace!(hypothesis, sentence, parsed, "observation");
        let cx = EvidenceContext {
            domain: self.domain.as_ref(),
            hypothesis,
            sentence,
            rate: self.config.learning_rate,
        };
        if parsed {
            self.policy.reward(&cx, &mut self.weights)
        } else {
            self.policy.punish(&cx, &mut self.weights)
        }
    }

    /// Whether every weight is within the configured threshold of 0 or 1.
    pub fn converged(&self) -> bool {
        self.converged_at(self.config.convergence_threshold)
    }

    /// Convergence check at an explicit threshold.
    pub fn converged_at(&self, threshold: f64) -> bool {
        self.weights.iter().all(|w| w.decided(threshold))
    }

    /// Round every weight to its nearest boundary and encode the result:
    /// the learner's grammar inference, independent of sampling.
    pub fn best_guess(&self) -> GrammarId {
        let bits: Vec<bool> = self.weights.iter().map(|w| w.round_to_bit()).collect();
        grammar::encode(&bits)
    }
}
