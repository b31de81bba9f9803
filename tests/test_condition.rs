mod common;
use common::{gaussian_noise, max_abs_diff, sine};
use kawafilter::io::{write_signal, SignalFile};
use kawafilter::{condition, fourier_filter, ConditionConfig, SignalError};
use ndarray::{s, Array1};

#[test]
fn default_config_only_filters() {
    let x = &sine(401) + &gaussian_noise(401, 0.1, 9);
    let out = condition(&x, &ConditionConfig::default()).unwrap();
    assert!(out.baseline.is_none());
    let direct = fourier_filter(&x, 400, 2000).unwrap();
    assert_eq!(out.signal, direct);
}

#[test]
fn spikes_removed_before_filtering() {
    let clean = Array1::from_shape_fn(600, |i| 2.0 + 0.5 * (i as f64 * 0.02).sin());
    let mut spiky = clean.clone();
    for i in [100usize, 101, 350, 500] {
        spiky[i] = 1e3;
    }
    let cfg = ConditionConfig { hcut: Some(10.0), fcut: 200, ..Default::default() };
    let out = condition(&spiky, &cfg).unwrap();

    let reference = fourier_filter(&clean, 200, 2000).unwrap();
    let centre = s![50..550];
    let err = max_abs_diff(&out.signal.slice(centre).to_owned(), &reference.slice(centre).to_owned());
    assert!(err < 0.05, "spikes leaked through: max diff {err:.4}");
}

#[test]
fn baseline_normalisation_applied() {
    let x = Array1::from_elem(800, 4.0);
    let cfg = ConditionConfig { baseline_end: Some(100), ..Default::default() };
    let out = condition(&x, &cfg).unwrap();
    approx::assert_abs_diff_eq!(out.baseline.unwrap(), 4.0, epsilon = 1e-9);
    for &v in out.signal.iter() {
        approx::assert_abs_diff_eq!(v, 1.0, epsilon = 1e-9);
    }
}

#[test]
fn gaps_filled_without_hcut() {
    let mut x = sine(401);
    x[200] = f64::NAN;
    let out = condition(&x, &ConditionConfig::default()).unwrap();
    assert!(out.signal.iter().all(|v| v.is_finite()));
}

#[test]
fn baseline_beyond_signal_fails() {
    let x = sine(100);
    let cfg = ConditionConfig { baseline_end: Some(100), ..Default::default() };
    assert!(matches!(
        condition(&x, &cfg),
        Err(SignalError::OutOfBoundsEndpoint { endpoint: 100, len: 100 })
    ));
}

#[test]
fn file_roundtrip_through_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.safetensors");
    let output = dir.path().join("out.safetensors");

    let x = &sine(401) + &gaussian_noise(401, 0.05, 21);
    write_signal(&input, &x, None).unwrap();

    let loaded = SignalFile::load(&input).unwrap();
    let cfg = ConditionConfig { baseline_end: Some(50), ..Default::default() };
    let out = condition(&loaded.signal, &cfg).unwrap();
    write_signal(&output, &out.signal, out.baseline).unwrap();

    let back = SignalFile::load(&output).unwrap().signal;
    assert_eq!(back.len(), 401);
    assert_eq!(back, out.signal);
}
