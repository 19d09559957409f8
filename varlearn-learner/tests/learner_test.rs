use std::sync::Arc;

use test_fixtures::{forced_grammar_domain, saturated_domain, FixtureDomain};
use varlearn_core::{
    DomainError, IGrammarDomain, LearnerConfig, LearnerError, VarlearnError, Weight,
};
use varlearn_learner::{StrategyKind, VariationalLearner};

fn config(learning_rate: f64, convergence_threshold: f64) -> LearnerConfig {
    LearnerConfig {
        learning_rate,
        convergence_threshold,
        max_sample_attempts: None,
    }
}

fn learner_on(
    domain: impl IGrammarDomain + 'static,
    strategy: StrategyKind,
    config: LearnerConfig,
    seed: u64,
) -> VariationalLearner {
    VariationalLearner::new(Arc::new(domain), strategy, config, seed).unwrap()
}

// ── Construction ─────────────────────────────────────────────────────────

#[test]
fn weights_start_at_maximal_uncertainty() {
    let learner = learner_on(
        saturated_domain(5),
        StrategyKind::RewardOnly,
        LearnerConfig::default(),
        1,
    );
    assert_eq!(learner.weights(), &[Weight::INITIAL; 5]);
}

#[test]
fn bad_learning_rate_is_rejected_at_construction() {
    let err = VariationalLearner::new(
        Arc::new(saturated_domain(3)),
        StrategyKind::RewardOnly,
        config(0.0, 0.02),
        1,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        VarlearnError::Learner(LearnerError::InvalidLearningRate { .. })
    ));
}

#[test]
fn zero_parameter_domain_is_rejected() {
    let err = VariationalLearner::new(
        Arc::new(FixtureDomain::builder(0).build()),
        StrategyKind::RewardOnly,
        LearnerConfig::default(),
        1,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        VarlearnError::Learner(LearnerError::ParamCountOutOfRange { num_params: 0 })
    ));
}

#[test]
fn with_weights_checks_the_length() {
    let learner = learner_on(
        saturated_domain(3),
        StrategyKind::RewardOnly,
        LearnerConfig::default(),
        1,
    );
    let err = learner.with_weights(vec![Weight::INITIAL; 4]).unwrap_err();
    assert!(matches!(
        err,
        VarlearnError::Learner(LearnerError::WeightCountMismatch {
            expected: 3,
            actual: 4
        })
    ));
}

// ── Hypothesis sampling ──────────────────────────────────────────────────

#[test]
fn choose_grammar_only_returns_legal_grammars() {
    let mut learner = learner_on(
        forced_grammar_domain(),
        StrategyKind::RewardOnly,
        LearnerConfig::default(),
        42,
    );
    for _ in 0..50 {
        assert_eq!(learner.choose_grammar().unwrap(), 3);
    }
}

#[test]
fn boundary_weights_pin_the_sample() {
    let mut learner = learner_on(
        saturated_domain(3),
        StrategyKind::RewardOnly,
        LearnerConfig::default(),
        7,
    )
    .with_weights(vec![Weight::new(1.0), Weight::new(0.0), Weight::new(0.0)])
    .unwrap();

    for _ in 0..20 {
        assert_eq!(learner.choose_grammar().unwrap(), 0b100);
    }
}

#[test]
fn sampler_stall_surfaces_with_a_cap() {
    // No legal grammars at all: the retry loop can never succeed.
    let domain = FixtureDomain::builder(2).language_only(0, &[1]).build();
    let mut learner = VariationalLearner::new(
        Arc::new(domain),
        StrategyKind::RewardOnly,
        LearnerConfig {
            max_sample_attempts: Some(64),
            ..Default::default()
        },
        9,
    )
    .unwrap();

    let err = learner.choose_grammar().unwrap_err();
    assert!(matches!(
        err,
        VarlearnError::Learner(LearnerError::SamplerStalled { attempts: 64 })
    ));
}

// ── Parse oracle and domain failures ─────────────────────────────────────

#[test]
fn parses_tests_language_membership() {
    let learner = learner_on(
        forced_grammar_domain(),
        StrategyKind::RewardOnly,
        LearnerConfig::default(),
        1,
    );
    assert!(learner.parses(3, 2).unwrap());
    assert!(learner.parses(0, 1).unwrap());
    assert!(!learner.parses(0, 2).unwrap());
}

#[test]
fn missing_language_entry_is_fatal() {
    // Grammar 0b01 is legal but has no language entry, so the parse
    // lookup inside consume fails.
    let domain = FixtureDomain::builder(2).legal_only(0b01).build();
    let mut learner = learner_on(domain, StrategyKind::RewardOnly, LearnerConfig::default(), 3);

    let err = learner.consume(5).unwrap_err();
    assert!(matches!(
        err,
        VarlearnError::Domain(DomainError::UnknownGrammar { grammar: 0b01 })
    ));
}

// ── Convergence and best guess ───────────────────────────────────────────

#[test]
fn initial_learner_is_converged_only_above_half() {
    let learner = learner_on(
        saturated_domain(3),
        StrategyKind::RewardOnly,
        LearnerConfig::default(),
        1,
    );
    assert!(learner.converged_at(0.51));
    assert!(!learner.converged_at(0.5));
    assert!(!learner.converged_at(0.02));
    assert!(!learner.converged());
}

#[test]
fn near_boundary_weights_are_converged() {
    let learner = learner_on(
        saturated_domain(3),
        StrategyKind::RewardOnly,
        LearnerConfig::default(),
        1,
    )
    .with_weights(vec![
        Weight::new(0.01),
        Weight::new(0.99),
        Weight::new(0.985),
    ])
    .unwrap();
    assert!(learner.converged_at(0.02));
}

#[test]
fn best_guess_rounds_the_weights() {
    let learner = learner_on(
        saturated_domain(3),
        StrategyKind::RewardOnly,
        LearnerConfig::default(),
        1,
    )
    .with_weights(vec![Weight::new(0.9), Weight::new(0.1), Weight::new(0.8)])
    .unwrap();
    assert_eq!(learner.best_guess(), 0b101);
}

// ── End-to-end learning drift ────────────────────────────────────────────

#[test]
fn repeated_reward_drifts_weights_toward_the_target() {
    // Only grammar 3 (0b011) is legal, so every hypothesis is 3; sentence
    // 2 parses in it, so every consume is a reward. Parameters 1 and 2
    // must rise monotonically, parameter 0 must fall.
    let mut learner = learner_on(
        forced_grammar_domain(),
        StrategyKind::RewardOnly,
        config(0.02, 0.02),
        11,
    );

    let mut previous: Vec<f64> = learner.weights().iter().map(|w| w.value()).collect();
    for _ in 0..300 {
        learner.consume(2).unwrap();
        let current: Vec<f64> = learner.weights().iter().map(|w| w.value()).collect();
        assert!(current[0] < previous[0]);
        assert!(current[1] > previous[1]);
        assert!(current[2] > previous[2]);
        previous = current;
    }

    assert_eq!(learner.best_guess(), 3);
}

#[test]
fn skeptical_consume_applies_annotations() {
    // Hypothesis is always 3 (0b011). Sentence 2's annotation marks
    // parameter 0 irrelevant and parameter 1 ambiguous.
    let domain = FixtureDomain::builder(3)
        .language_only(0, &[1])
        .language(3, &[1, 2])
        .relevance(2, "~*1")
        .build();
    let mut learner = learner_on(domain, StrategyKind::Skeptical, config(0.1, 0.02), 5);

    learner.consume(2).unwrap();

    let weights = learner.weights();
    assert_eq!(weights[0], Weight::INITIAL);
    assert!((weights[1].value() - 0.525).abs() < 1e-12);
    assert!((weights[2].value() - 0.55).abs() < 1e-12);
}
