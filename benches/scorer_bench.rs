use criterion::{Criterion, criterion_group, criterion_main};
use greekfit::config::EvaluationConfig;
use greekfit::core::{Greek, Preference};
use greekfit::market::MarketParams;
use greekfit::report::evaluate;
use greekfit::strategy::{Catalog, PreferenceSet, suggest_strategies};
use std::hint::black_box;

fn bench_suggest_strategies(c: &mut Criterion) {
    let catalog = Catalog::standard();
    let prefs = PreferenceSet::any()
        .with(Greek::Delta, Preference::Neutral)
        .with(Greek::Vega, Preference::Negative)
        .with(Greek::Theta, Preference::Positive);

    c.bench_function("suggest_strategies_standard", |b| {
        b.iter(|| black_box(suggest_strategies(black_box(&catalog), black_box(&prefs))))
    });
}

fn bench_full_evaluation(c: &mut Criterion) {
    let catalog = Catalog::standard();
    let prefs = PreferenceSet::any().with(Greek::Gamma, Preference::Positive);
    let market = MarketParams::default();
    let config = EvaluationConfig::default();

    c.bench_function("evaluate_default_request", |b| {
        b.iter(|| {
            let report = evaluate(black_box(&catalog), &prefs, &market, &config)
                .expect("evaluation should succeed");
            black_box(report)
        })
    });
}

criterion_group!(scorer_benches, bench_suggest_strategies, bench_full_evaluation);
criterion_main!(scorer_benches);
