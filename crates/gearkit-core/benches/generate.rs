//! Benchmarks for bundle generation and tier lookup over the built-in catalog.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use gearkit_core::{BundleRequest, Catalog, Engine, Heuristics, Style, TierClassifier};

fn bench_generate(c: &mut Criterion) {
    let engine = Engine::with_builtin();
    let mut group = c.benchmark_group("generate_bundle");

    for style in [Style::Sporty, Style::Classic, Style::Premium] {
        let request = BundleRequest {
            budget: 500.0,
            size: "M".to_string(),
            style,
        };
        group.bench_with_input(BenchmarkId::new("style", style.as_str()), &request, |b, r| {
            b.iter(|| engine.generate_bundle(black_box(r)))
        });
    }

    group.finish();
}

fn bench_tiers(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let signals = Heuristics::default().tier_signals;

    c.bench_function("tier_cold", |b| {
        b.iter(|| {
            let classifier = TierClassifier::new(signals.clone());
            for item in catalog.iter() {
                black_box(classifier.classify(item, &catalog));
            }
        })
    });

    let warm = TierClassifier::new(signals);
    c.bench_function("tier_cached", |b| {
        b.iter(|| {
            for item in catalog.iter() {
                black_box(warm.classify(item, &catalog));
            }
        })
    });
}

criterion_group!(benches, bench_generate, bench_tiers);
criterion_main!(benches);
