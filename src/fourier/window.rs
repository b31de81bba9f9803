//! Frequency-domain window for the Fourier filter.
//!
//! Laid out for a spectrum centred with [`fftshift`] (zero frequency at
//! index `N/2`):
//!
//! ```text
//!   zeros(N/2 - fcut) | linspace(0, 1, fcut) | linspace(1, 0, fcut) | zeros(N/2 - fcut)
//! ```
//!
//! Bin `N/2` (DC) is the first sample of the falling ramp and always has
//! weight 1 when `fcut >= 1`.
use rustfft::num_complex::Complex;

use crate::error::{Result, SignalError};

/// `n` evenly spaced points from `start` to `stop`, both ends included.
///
/// Same conventions as `numpy.linspace`: `n = 0` is empty, `n = 1` is
/// `[start]`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            out[n - 1] = stop;
            out
        }
    }
}

/// Build the triangular pass-band window for an even-length spectrum of
/// `n_total` bins.
///
/// # Errors
///
/// [`SignalError::WindowTooWide`] if `fcut > n_total / 2`.
pub fn triangular_window(n_total: usize, fcut: usize) -> Result<Vec<f64>> {
    debug_assert!(n_total % 2 == 0, "window length must be even, got {n_total}");
    let half = n_total / 2;
    if fcut > half {
        return Err(SignalError::WindowTooWide { fcut, half });
    }
    let zero_pad = half - fcut;

    let mut w = Vec::with_capacity(n_total);
    w.resize(zero_pad, 0.0);
    w.extend(linspace(0.0, 1.0, fcut));
    w.extend(linspace(1.0, 0.0, fcut));
    w.resize(n_total, 0.0);
    Ok(w)
}

/// Move the zero-frequency bin to index `N/2` (`numpy.fft.fftshift`).
pub fn fftshift(buf: &mut [Complex<f64>]) {
    let n = buf.len();
    buf.rotate_right(n / 2);
}

/// Inverse of [`fftshift`]; also correct for odd lengths.
pub fn ifftshift(buf: &mut [Complex<f64>]) {
    let n = buf.len();
    buf.rotate_left(n / 2);
}
