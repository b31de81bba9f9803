//! Fourier-domain low-pass filter with constant edge padding.
//!
//! Algorithm:
//!   1. Pad `samples_to_add` copies of `x[0]` on the left and of `x[-1]` on
//!      the right (one more on the right if that makes the length odd).
//!   2. FFT, then `fftshift` so DC sits at `N/2`.
//!   3. Multiply by the triangular window (`window::triangular_window`).
//!   4. `ifftshift`, inverse FFT, scale by `1/N`.
//!   5. Drop the left padding and keep exactly `x.len()` samples.
//!
//! The window is not Hermitian-symmetric (the rising ramp is one bin longer
//! on the negative side), so the inverse transform carries a small imaginary
//! residue. [`fourier_filter`] returns the real part;
//! [`fourier_filter_complex`] returns the raw result.
use log::debug;
use ndarray::Array1;
use rustfft::{num_complex::Complex, FftPlanner};

use super::window::{fftshift, ifftshift, triangular_window};
use crate::error::{Result, SignalError};
use crate::pad::pad_edges;

/// Edge padding applied on each side when the caller has no preference.
pub const DEFAULT_SAMPLES_TO_ADD: usize = 2000;

/// Smooth `signal` with a triangular low-pass window of half-width `fcut`
/// frequency bins. Returns the real part of the filtered signal, same length
/// as `signal`.
///
/// # Errors
///
/// * [`SignalError::EmptySignal`] for an empty input.
/// * [`SignalError::WindowTooWide`] if `fcut` exceeds half the padded length.
pub fn fourier_filter(signal: &Array1<f64>, fcut: usize, samples_to_add: usize) -> Result<Array1<f64>> {
    let filtered = fourier_filter_complex(signal, fcut, samples_to_add)?;
    Ok(filtered.mapv(|c| c.re))
}

/// [`fourier_filter`] with [`DEFAULT_SAMPLES_TO_ADD`] samples of padding.
pub fn fourier_filter_default(signal: &Array1<f64>, fcut: usize) -> Result<Array1<f64>> {
    fourier_filter(signal, fcut, DEFAULT_SAMPLES_TO_ADD)
}

/// Same pipeline as [`fourier_filter`] but returns the complex inverse
/// transform untouched.
pub fn fourier_filter_complex(
    signal: &Array1<f64>,
    fcut: usize,
    samples_to_add: usize,
) -> Result<Array1<Complex<f64>>> {
    let n_x = signal.len();
    if n_x == 0 {
        return Err(SignalError::EmptySignal);
    }

    // Even FFT length keeps DC on the window's centre bin.
    let odd_extra = (n_x + 2 * samples_to_add) % 2;
    let padded = pad_edges(signal, samples_to_add, samples_to_add + odd_extra);
    let n_fft = padded.len();

    let window = triangular_window(n_fft, fcut)?;
    debug!(
        "fourier_filter: n_x={n_x} pad={samples_to_add}+{odd_extra} n_fft={n_fft} fcut={fcut}"
    );

    let mut buf: Vec<Complex<f64>> = padded
        .iter()
        .map(|&v| Complex { re: v, im: 0.0 })
        .collect();

    let mut planner: FftPlanner<f64> = FftPlanner::new();
    planner.plan_fft_forward(n_fft).process(&mut buf);
    fftshift(&mut buf);

    assert_eq!(
        buf.len(),
        window.len(),
        "spectrum and window lengths differ"
    );
    for (b, &w) in buf.iter_mut().zip(window.iter()) {
        *b *= w;
    }

    ifftshift(&mut buf);
    planner.plan_fft_inverse(n_fft).process(&mut buf);
    let inv_scale = 1.0 / n_fft as f64;

    // Strip padding.
    Ok(buf[samples_to_add..samples_to_add + n_x]
        .iter()
        .map(|&c| c * inv_scale)
        .collect())
}
