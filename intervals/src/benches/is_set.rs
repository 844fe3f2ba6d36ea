use criterion::{criterion_group, Criterion};
use freshness_intervals::Store;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

/// Number of queries issued per iteration.
const QUERIES: usize = 1_000;

fn bench_is_set(c: &mut Criterion) {
    for n in [100, 10_000, 1_000_000] {
        // Populate disjoint ranges so every update adds two markers
        let store: Store = (0..n).map(|i: u64| i * 10..=i * 10 + 4).collect();
        let mut rng = StdRng::seed_from_u64(n);
        let queries: Vec<u64> = (0..QUERIES).map(|_| rng.gen_range(0..n * 10)).collect();

        c.bench_function(
            &format!("{}/markers={} queries={QUERIES}", module_path!(), store.len()),
            |b| {
                b.iter(|| {
                    queries
                        .iter()
                        .filter(|&&id| black_box(&store).is_set(id))
                        .count()
                });
            },
        );
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_is_set
}
