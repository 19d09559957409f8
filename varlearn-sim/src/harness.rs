use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

use varlearn_core::{
    DomainError, GrammarId, IGrammarDomain, LearnerConfig, SentenceId, TrialResult,
    VarlearnResult,
};
use varlearn_learner::{StrategyKind, VariationalLearner};

/// A target language materialized for uniform sentence draws.
///
/// Built once per grammar. Sentences are sorted so seeded runs do not
/// depend on set iteration order.
#[derive(Debug, Clone)]
pub struct Language {
    pub grammar: GrammarId,
    pub sentences: Vec<SentenceId>,
}

impl Language {
    /// Materialize `grammar`'s sentence set from the domain.
    pub fn from_domain(domain: &dyn IGrammarDomain, grammar: GrammarId) -> VarlearnResult<Self> {
        let mut sentences: Vec<SentenceId> = domain.language(grammar)?.iter().copied().collect();
        sentences.sort_unstable();
        Ok(Self { grammar, sentences })
    }
}

/// Feed uniformly drawn sentences (with replacement) to `learner` until
/// it converges or the cap is exhausted; returns the number of sentences
/// consumed.
///
/// The cap is checked after consuming, so an uncapped-by-convergence run
/// consumes exactly `sentence_cap + 1` sentences. A learner that starts
/// converged consumes none.
pub fn run_one<R: Rng + ?Sized>(
    learner: &mut VariationalLearner,
    language: &Language,
    sentence_cap: u64,
    rng: &mut R,
) -> VarlearnResult<u64> {
    let mut consumed: u64 = 0;
    while !learner.converged() {
        let sentence = *language.sentences.choose(rng).ok_or(DomainError::EmptyLanguage {
            grammar: language.grammar,
        })?;
        learner.consume(sentence)?;
        consumed += 1;
        if consumed > sentence_cap {
            break;
        }
    }
    Ok(consumed)
}

/// Run `trials_per_grammar` fresh learners against every grammar id.
///
/// Each grammar's language is materialized once; every trial constructs a
/// fresh learner with its own derived rng seed, runs [`run_one`], and
/// times it. The returned [`TrialStream`] is lazy and single-pass:
/// results are produced one trial at a time as the caller iterates.
pub fn run_many(
    domain: Arc<dyn IGrammarDomain>,
    strategy: StrategyKind,
    grammar_ids: Vec<GrammarId>,
    trials_per_grammar: u32,
    sentence_cap: u64,
    config: LearnerConfig,
    seed: u64,
) -> TrialStream {
    TrialStream {
        domain,
        strategy,
        config,
        sentence_cap,
        trials_per_grammar,
        grammars: grammar_ids.into_iter(),
        current: None,
        trial: 0,
        draw_rng: StdRng::seed_from_u64(seed),
        next_learner_seed: seed.wrapping_add(1),
    }
}

/// Lazy, finite, one-pass stream of trial results.
///
/// A domain failure is fatal to its own trial and yielded as `Err`; the
/// stream then moves on. A grammar whose language cannot be materialized
/// at all yields one `Err` and is skipped entirely.
pub struct TrialStream {
    domain: Arc<dyn IGrammarDomain>,
    strategy: StrategyKind,
    config: LearnerConfig,
    sentence_cap: u64,
    trials_per_grammar: u32,
    grammars: std::vec::IntoIter<GrammarId>,
    current: Option<Language>,
    trial: u32,
    draw_rng: StdRng,
    next_learner_seed: u64,
}

impl TrialStream {
    fn run_trial(&mut self, trial: u32) -> VarlearnResult<TrialResult> {
        let seed = self.next_learner_seed;
        self.next_learner_seed = self.next_learner_seed.wrapping_add(1);

        let mut learner = VariationalLearner::new(
            Arc::clone(&self.domain),
            self.strategy,
            self.config.clone(),
            seed,
        )?;

        let language = self.current.as_ref().expect("current language is set");
        let started = Instant::now();
        let consumed = run_one(&mut learner, language, self.sentence_cap, &mut self.draw_rng)?;
        let elapsed = started.elapsed();

        info!(
            strategy = learner.strategy_name(),
            grammar = language.grammar,
            trial,
            consumed,
            "trial finished"
        );

        Ok(TrialResult {
            strategy: learner.strategy_name().to_string(),
            grammar: language.grammar,
            trial,
            sentences_consumed: consumed,
            final_guess: learner.best_guess(),
            weights: learner.weights().to_vec(),
            elapsed,
        })
    }
}

impl Iterator for TrialStream {
    type Item = VarlearnResult<TrialResult>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current.is_some() && self.trial < self.trials_per_grammar {
                let trial = self.trial;
                self.trial += 1;
                return Some(self.run_trial(trial));
            }
            // Current grammar exhausted; materialize the next language.
            let grammar = self.grammars.next()?;
            self.trial = 0;
            match Language::from_domain(self.domain.as_ref(), grammar) {
                Ok(language) => self.current = Some(language),
                Err(err) => {
                    self.current = None;
                    return Some(Err(err));
                }
            }
        }
    }
}
