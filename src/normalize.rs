//! Baseline estimation and baseline normalisation.
//!
//! `compute_baseline` — mean of the pre-stimulus prefix `signal[..endpoint]`
//! `normalize`        — `signal / baseline`, so `1.0` means "at baseline"
use log::warn;
use ndarray::{s, Array1};

use crate::error::{Result, SignalError};

/// Mean of `signal[0..endpoint]`.
///
/// # Errors
///
/// * [`SignalError::OutOfBoundsEndpoint`] if `endpoint >= signal.len()`.
/// * [`SignalError::EmptyBaselineWindow`] if `endpoint == 0`.
pub fn compute_baseline(signal: &Array1<f64>, endpoint: usize) -> Result<f64> {
    if endpoint >= signal.len() {
        return Err(SignalError::OutOfBoundsEndpoint { endpoint, len: signal.len() });
    }
    signal
        .slice(s![..endpoint])
        .mean()
        .ok_or(SignalError::EmptyBaselineWindow)
}

/// Divide every sample by `baseline`.
///
/// Plain IEEE-754 division: a zero baseline gives ±inf (or NaN for 0/0).
pub fn normalize(signal: &Array1<f64>, baseline: f64) -> Array1<f64> {
    if baseline == 0.0 || !baseline.is_finite() {
        warn!("normalize: baseline {baseline} produces non-finite samples");
    }
    signal.mapv(|v| v / baseline)
}
