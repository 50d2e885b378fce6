use criterion::{criterion_group, criterion_main, Criterion};
use impactlens_core::{GeneratorConfig, SeededRandom};
use impactlens_synth::DatasetBuilder;
use std::hint::black_box;

fn bench_build_default_window(c: &mut Criterion) {
    let builder = DatasetBuilder::new(GeneratorConfig::new()).unwrap();

    c.bench_function("build_default_window", |b| {
        b.iter(|| {
            let mut rng = SeededRandom::new(black_box(42));
            builder.build(&mut rng)
        });
    });
}

fn bench_build_one_quarter(c: &mut Criterion) {
    let mut config = GeneratorConfig::new();
    config.start = "2025-04-07".parse().unwrap();
    config.end = "2025-06-30".parse().unwrap();
    let builder = DatasetBuilder::new(config).unwrap();

    c.bench_function("build_one_quarter", |b| {
        b.iter(|| {
            let mut rng = SeededRandom::new(black_box(42));
            builder.build(&mut rng)
        });
    });
}

criterion_group!(benches, bench_build_default_window, bench_build_one_quarter);
criterion_main!(benches);
