use std::collections::VecDeque;

use criterion::{criterion_group, criterion_main, Criterion};
use tinyrand::{StdRand, Wyrand};

use archery::mc;

fn criterion_benchmark(c: &mut Criterion) {
    let mut rotation = VecDeque::with_capacity(4);

    // sanity check
    let winner = mc::run_once(4, &mut rotation, &mut StdRand::default());
    assert!(winner < 4);

    c.bench_function("cri_mc_wyrand_4", |b| {
        let mut rand = Wyrand::default();
        b.iter(|| mc::run_once(4, &mut rotation, &mut rand));
    });

    c.bench_function("cri_mc_engine_4_1k", |b| {
        let mut engine = mc::MonteCarloEngine::default()
            .with_contestants(4)
            .with_trials(1_000);
        b.iter(|| engine.simulate());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
