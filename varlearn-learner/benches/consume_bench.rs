use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use test_fixtures::saturated_domain;
use varlearn_core::{IGrammarDomain, LearnerConfig};
use varlearn_learner::{StrategyKind, VariationalLearner};

fn bench_consume(c: &mut Criterion) {
    let domain: Arc<dyn IGrammarDomain> = Arc::new(saturated_domain(13));

    c.bench_function("consume/reward_only", |b| {
        let mut learner = VariationalLearner::new(
            Arc::clone(&domain),
            StrategyKind::RewardOnly,
            LearnerConfig::default(),
            7,
        )
        .unwrap();
        b.iter(|| learner.consume(42).unwrap());
    });

    c.bench_function("consume/punish_only", |b| {
        let mut learner = VariationalLearner::new(
            Arc::clone(&domain),
            StrategyKind::PunishOnly,
            LearnerConfig::default(),
            7,
        )
        .unwrap();
        b.iter(|| learner.consume(42).unwrap());
    });
}

criterion_group!(benches, bench_consume);
criterion_main!(benches);
