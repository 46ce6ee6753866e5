use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use saxvsm_rs::algorithms::paa::{paa, znorm};
use saxvsm_rs::{build_bags, compute_weights, discretize, LabeledSeries, SaxConfig, SaxVsm};

fn synthetic_class(n_series: usize, len: usize, freq: f64) -> Vec<Vec<f64>> {
    (0..n_series)
        .map(|k| {
            (0..len)
                .map(|i| (i as f64 * freq + k as f64).sin() + 0.1 * ((i * 31 + k) % 7) as f64)
                .collect()
        })
        .collect()
}

fn synthetic_dataset(n_series: usize, len: usize) -> LabeledSeries {
    let mut data = LabeledSeries::new();
    data.insert("slow".into(), synthetic_class(n_series, len, 0.05));
    data.insert("mid".into(), synthetic_class(n_series, len, 0.2));
    data.insert("fast".into(), synthetic_class(n_series, len, 0.7));
    data
}

fn bench_paa(c: &mut Criterion) {
    let mut group = c.benchmark_group("paa");
    let window: Vec<f64> = (0..100).map(|i| (i as f64 * 0.1).sin()).collect();
    for segments in [4, 7, 10] {
        group.bench_with_input(BenchmarkId::from_parameter(segments), &segments, |b, &s| {
            b.iter(|| paa(black_box(&znorm(&window, 0.01)), s))
        });
    }
    group.finish();
}

fn bench_discretize(c: &mut Criterion) {
    let mut group = c.benchmark_group("discretize");
    let config = SaxConfig::new(60, 6, 6);
    for n in [1_000, 5_000, 10_000] {
        let ts: Vec<f64> = (0..n).map(|i| (i as f64 * 0.1).sin()).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| discretize(black_box(&ts), &config))
        });
    }
    group.finish();
}

fn bench_weights(c: &mut Criterion) {
    let config = SaxConfig::new(30, 6, 6);
    let data = synthetic_dataset(20, 500);
    let bags = build_bags(&data, &config).unwrap();
    c.bench_function("compute_weights", |b| {
        b.iter(|| compute_weights(black_box(&bags)))
    });
}

fn bench_fit_and_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("saxvsm");
    group.sample_size(10);
    let clf = SaxVsm::new(SaxConfig::new(30, 6, 6)).unwrap();
    for dims in [1, 3] {
        let train: Vec<LabeledSeries> = (0..dims).map(|_| synthetic_dataset(20, 500)).collect();
        let test: Vec<LabeledSeries> = (0..dims).map(|_| synthetic_dataset(10, 500)).collect();
        group.bench_with_input(BenchmarkId::new("fit", dims), &dims, |b, _| {
            b.iter(|| clf.fit(black_box(&train)))
        });
        let models = clf.fit(&train).unwrap();
        group.bench_with_input(BenchmarkId::new("evaluate", dims), &dims, |b, _| {
            b.iter(|| clf.evaluate(black_box(&test), &models, Default::default()))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_paa,
    bench_discretize,
    bench_weights,
    bench_fit_and_evaluate
);
criterion_main!(benches);
