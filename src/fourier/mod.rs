//! Fourier-domain low-pass filtering.
//!
//! - [`window`]: the `__/\__` frequency-domain window and FFT shift helpers.
//! - [`apply`]: pad → FFT → shift → window → unshift → IFFT → truncate.

pub mod apply;
pub mod window;

pub use apply::{fourier_filter, fourier_filter_complex, fourier_filter_default, DEFAULT_SAMPLES_TO_ADD};
pub use window::{fftshift, ifftshift, linspace, triangular_window};
