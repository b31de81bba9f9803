/// Shared helpers for synthetic test signals.
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

#[allow(unused)]
/// `sin(x)` sampled at `n` points over `[-π, π]`.
pub fn sine(n: usize) -> Array1<f64> {
    Array1::linspace(-PI, PI, n).mapv(f64::sin)
}

#[allow(unused)]
/// Seeded Gaussian noise, `N(0, sigma²)`.
pub fn gaussian_noise(n: usize, sigma: f64, seed: u64) -> Array1<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(0.0, sigma).unwrap();
    Array1::from_shape_fn(n, |_| dist.sample(&mut rng))
}

#[allow(unused)]
/// Maximum absolute difference between two signals.
pub fn max_abs_diff(a: &Array1<f64>, b: &Array1<f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).fold(0.0_f64, f64::max)
}

#[allow(unused)]
/// Root-mean-square of a signal.
pub fn rms(a: &Array1<f64>) -> f64 {
    (a.iter().map(|v| v * v).sum::<f64>() / a.len() as f64).sqrt()
}
