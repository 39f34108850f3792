use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spa_core::{RentTier, SpaConfig};

fn wide_schedule(n: usize) -> Vec<RentTier> {
    (0..n)
        .map(|i| RentTier {
            min_revenue: i as f64 * 250_000.0,
            max_revenue: if i + 1 == n {
                None
            } else {
                Some((i + 1) as f64 * 250_000.0)
            },
            percentage: 4.0 + i as f64 * 0.25,
        })
        .collect()
}

fn bench_compute(c: &mut Criterion) {
    let cfg = SpaConfig::default();
    c.bench_function("compute default week", |b| {
        b.iter(|| spa_econ::compute(black_box(&cfg)))
    });

    let mut wide = SpaConfig::default();
    wide.costs.rent_tiers = wide_schedule(40);
    c.bench_function("compute week x 40 rent tiers", |b| {
        b.iter(|| spa_econ::compute(black_box(&wide)))
    });
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
