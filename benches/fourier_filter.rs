use std::hint::black_box;
use criterion::{criterion_group, criterion_main, Criterion};
use kawafilter::{fill::highcut, fourier::fourier_filter};
use ndarray::Array1;

fn trace(n: usize) -> Array1<f64> {
    Array1::from_shape_fn(n, |i| (i as f64 * 0.01).sin() + 0.1 * (i as f64 * 1.7).cos())
}

fn bench_fourier_filter_401(c: &mut Criterion) {
    let x = trace(401);
    c.bench_function("fourier_filter 401 samples, pad 2000", |b| {
        b.iter(|| {
            let y = fourier_filter(black_box(&x), black_box(400), 2000).unwrap();
            black_box(y[0])
        })
    });
}

fn bench_fourier_filter_60k(c: &mut Criterion) {
    let x = trace(60_000);
    c.bench_function("fourier_filter 60k samples, pad 2000", |b| {
        b.iter(|| {
            let y = fourier_filter(black_box(&x), black_box(4000), 2000).unwrap();
            black_box(y[0])
        })
    });
}

fn bench_highcut_60k(c: &mut Criterion) {
    let x = trace(60_000);
    c.bench_function("highcut 60k samples", |b| {
        b.iter(|| {
            let y = highcut(black_box(&x), black_box(0.9)).unwrap();
            black_box(y[0])
        })
    });
}

criterion_group!(benches, bench_fourier_filter_401, bench_fourier_filter_60k, bench_highcut_60k);
criterion_main!(benches);
