//! # kawafilter — one-dimensional signal conditioning
//!
//! A handful of preprocessing steps for single-channel numeric recordings
//! (physiological traces, lab measurements), built on
//! [ndarray](https://crates.io/crates/ndarray) and
//! [RustFFT](https://crates.io/crates/rustfft).
//!
//! ## Pipeline overview
//!
//! ```text
//! signal.safetensors
//!   │
//!   ├─ fill::highcut()             samples > hcut → NaN → linear interpolation
//!   ├─ fourier::fourier_filter()   edge pad → FFT → __/\__ window → IFFT → truncate
//!   ├─ normalize::compute_baseline()  mean of signal[..baseline_end]
//!   └─ normalize::normalize()      ÷ baseline
//!        │
//!        └─→ Array1<f64>, same length as the input
//! ```
//!
//! ## Quick start
//!
//! ```no_run
//! use kawafilter::{condition, ConditionConfig};
//! use kawafilter::io::SignalFile;
//!
//! let raw = SignalFile::load("data/trace.safetensors".as_ref()).unwrap();
//! let cfg = ConditionConfig { hcut: Some(3.0), baseline_end: Some(200), ..Default::default() };
//! let out = condition(&raw.signal, &cfg).unwrap();
//! println!("baseline = {:?}, {} samples", out.baseline, out.signal.len());
//! ```
//!
//! ## Running individual steps
//!
//! ```
//! use kawafilter::{fill_nan, fourier_filter, compute_baseline, normalize};
//! use ndarray::Array1;
//!
//! let x = Array1::from_shape_fn(500, |i| 2.0 + (i as f64 * 0.05).sin());
//! let x = fill_nan(&x).unwrap();
//! let smooth = fourier_filter(&x, 40, 200).unwrap();
//! let b = compute_baseline(&smooth, 100).unwrap();
//! let rel = normalize(&smooth, b);
//! assert_eq!(rel.len(), 500);
//! ```

pub mod config;
pub mod error;
pub mod fill;
pub mod fourier;
pub mod io;
pub mod normalize;
pub mod pad;

use log::debug;
use ndarray::Array1;

// ── Crate-root re-exports ─────────────────────────────────────────────────

pub use config::ConditionConfig;
pub use error::{Result, SignalError};
pub use fill::{fill_nan, highcut};
pub use fourier::{
    fourier_filter, fourier_filter_complex, fourier_filter_default,
    triangular_window, DEFAULT_SAMPLES_TO_ADD,
};
pub use io::{write_signal, SignalFile, StWriter};
pub use normalize::{compute_baseline, normalize};
pub use pad::{connect, pad_edges};

/// Output of [`condition`].
#[derive(Debug, Clone)]
pub struct Conditioned {
    /// Filtered (and, with a baseline window, normalised) signal.
    pub signal: Array1<f64>,
    /// Baseline the signal was divided by, if any.
    pub baseline: Option<f64>,
}

/// Run the **full conditioning pipeline** on one signal.
///
/// # Pipeline steps
///
/// 1. If [`ConditionConfig::hcut`] is set, replace samples above it by
///    interpolation. Otherwise any NaN samples are filled.
/// 2. Fourier low-pass filter with [`ConditionConfig::fcut`] and
///    [`ConditionConfig::samples_to_add`].
/// 3. If [`ConditionConfig::baseline_end`] is set, compute the baseline on the
///    filtered signal and divide by it.
///
/// # Errors
///
/// Any error of the individual steps: an all-missing (or all-above-`hcut`)
/// signal, an empty signal, `fcut` too wide, or a baseline window out of
/// bounds.
///
/// # Examples
///
/// ```
/// use kawafilter::{condition, ConditionConfig};
/// use ndarray::Array1;
///
/// let x = Array1::from_elem(1000, 5.0);
/// let cfg = ConditionConfig { baseline_end: Some(100), ..Default::default() };
/// let out = condition(&x, &cfg).unwrap();
/// assert!((out.signal[500] - 1.0).abs() < 1e-9);
/// ```
pub fn condition(signal: &Array1<f64>, cfg: &ConditionConfig) -> Result<Conditioned> {
    // 1. Spike suppression / gap filling.
    let cleaned = match cfg.hcut {
        Some(h) => fill::highcut(signal, h)?,
        None => fill::fill_nan(signal)?,
    };

    // 2. Low-pass.
    let smooth = fourier::fourier_filter(&cleaned, cfg.fcut, cfg.samples_to_add)?;

    // 3. Baseline normalisation.
    let Some(end) = cfg.baseline_end else {
        return Ok(Conditioned { signal: smooth, baseline: None });
    };
    let b = normalize::compute_baseline(&smooth, end)?;
    debug!("condition: baseline over [0, {end}) = {b}");
    Ok(Conditioned { signal: normalize::normalize(&smooth, b), baseline: Some(b) })
}
