//! Conditioning configuration.
//!
//! [`ConditionConfig`] holds every tunable parameter of [`crate::condition`].

use crate::fourier::DEFAULT_SAMPLES_TO_ADD;

/// Configuration for the conditioning pipeline.
///
/// All fields are `pub` so you can construct one with struct-update syntax:
///
/// ```
/// use kawafilter::ConditionConfig;
///
/// let cfg = ConditionConfig {
///     hcut: Some(5.0),          // suppress spikes above 5.0
///     baseline_end: Some(100),  // normalise by the first 100 samples
///     ..ConditionConfig::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ConditionConfig {
    /// Upper bound for spike suppression. Samples above it are replaced by
    /// interpolation before filtering.
    ///
    /// Default: `None` (step skipped).
    pub hcut: Option<f64>,

    /// Half-width of the triangular pass band, in frequency bins of the
    /// padded signal. Must not exceed half the padded length.
    ///
    /// Default: `400`.
    pub fcut: usize,

    /// Constant edge padding on each side before the FFT.
    ///
    /// Default: `2000`.
    pub samples_to_add: usize,

    /// Baseline window `[0, baseline_end)` on the filtered signal. When set,
    /// the output is divided by the window mean.
    ///
    /// Default: `None` (no normalisation).
    pub baseline_end: Option<usize>,
}

impl Default for ConditionConfig {
    fn default() -> Self {
        Self {
            hcut: None,
            fcut: 400,
            samples_to_add: DEFAULT_SAMPLES_TO_ADD,
            baseline_end: None,
        }
    }
}
