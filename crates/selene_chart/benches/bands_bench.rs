use criterion::{Criterion, black_box, criterion_group, criterion_main};
use selene_chart::{ChartConfig, sample_bands};
use selene_phase::UtcTime;

fn bands_bench(c: &mut Criterion) {
    let start = UtcTime::date(2024, 1, 1);
    let end = UtcTime::date(2024, 12, 31);
    let config = ChartConfig::default();

    let mut group = c.benchmark_group("chart_bands");
    group.sample_size(20);
    group.bench_function("hourly_year", |b| {
        b.iter(|| {
            sample_bands(black_box(config), black_box(&start), black_box(&end), 1.0)
                .expect("sampling should succeed")
        })
    });
    group.finish();
}

criterion_group!(benches, bands_bench);
criterion_main!(benches);
