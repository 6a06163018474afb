//! Criterion benchmarks for construction and search.
//!
//! Instances are generated from a fixed seed: a hidden exact partition
//! plus random decoy columns, so every instance has a feasible solution.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use spp_tabu::construction;
use spp_tabu::instance::Instance;
use spp_tabu::tabu::{TabuConfig, TabuRunner};

fn planted_instance(n: usize, decoys: usize, seed: u64) -> Instance {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(n + decoys);

    // Hidden partition: consecutive runs of 1..=4 elements.
    let mut e = 1;
    while e <= n {
        let len = rng.random_range(1..=4).min(n - e + 1);
        records.push((rng.random_range(5..20), (e..e + len).collect()));
        e += len;
    }

    for _ in 0..decoys {
        let len = rng.random_range(1..=6);
        let elements = (0..len).map(|_| rng.random_range(1..=n)).collect();
        records.push((rng.random_range(1..25), elements));
    }

    Instance::new(n, records).expect("generated elements are in range")
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    group.sample_size(10);

    for &n in &[50, 200, 500] {
        let instance = planted_instance(n, n * 2, 7);
        group.bench_with_input(BenchmarkId::from_parameter(n), &instance, |b, inst| {
            b.iter(|| {
                let mut rng = ChaCha8Rng::seed_from_u64(42);
                black_box(construction::initial_solution(black_box(inst), &mut rng))
            })
        });
    }
    group.finish();
}

fn bench_tabu_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu_search");
    group.sample_size(10);

    for &n in &[30, 60] {
        let instance = planted_instance(n, n * 2, 11);
        let config = TabuConfig::default()
            .with_tabu_capacity(10)
            .with_iteration_limit(20)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_cols{}", n, instance.subset_count()), n),
            &(instance, config),
            |b, (inst, cfg)| {
                b.iter(|| {
                    let result = TabuRunner::run(black_box(inst), black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_construction, bench_tabu_search);
criterion_main!(benches);
