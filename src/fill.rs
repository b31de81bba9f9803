//! Missing-sample interpolation and spike suppression.
//!
//! `fill_nan` — every NaN is replaced by linear interpolation between the
//!   nearest valid neighbours (by index). Leading/trailing NaN runs take the
//!   first/last valid value, matching `numpy.interp` clamping.
//!
//! `highcut`  — samples above `hcut` are marked NaN, then `fill_nan`.
use log::{debug, warn};
use ndarray::{s, Array1};

use crate::error::{Result, SignalError};

/// Fill NaN samples by linear interpolation.
///
/// NaN-free input is returned unchanged (so is an empty signal).
///
/// # Errors
///
/// [`SignalError::InvalidInterpolation`] if the signal has no valid sample.
pub fn fill_nan(signal: &Array1<f64>) -> Result<Array1<f64>> {
    let mut out = signal.to_owned();
    let n_missing = out.iter().filter(|v| v.is_nan()).count();
    if n_missing == 0 {
        return Ok(out);
    }

    let good: Vec<usize> = out
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_nan())
        .map(|(i, _)| i)
        .collect();

    let (Some(&first), Some(&last)) = (good.first(), good.last()) else {
        return Err(SignalError::InvalidInterpolation(format!(
            "all {} samples are missing",
            out.len()
        )));
    };
    debug!("fill_nan: {n_missing} of {} samples missing", out.len());

    if first > 0 || last < out.len() - 1 {
        warn!(
            "fill_nan: missing samples at the signal edges are held at the nearest valid value"
        );
    }

    // Leading run.
    let y_first = out[first];
    out.slice_mut(s![..first]).fill(y_first);

    // Interior gaps.
    for pair in good.windows(2) {
        let (x0, x1) = (pair[0], pair[1]);
        if x1 - x0 < 2 {
            continue;
        }
        let (y0, y1) = (out[x0], out[x1]);
        let slope = (y1 - y0) / (x1 - x0) as f64;
        for i in x0 + 1..x1 {
            out[i] = y0 + slope * (i - x0) as f64;
        }
    }

    // Trailing run.
    let y_last = out[last];
    out.slice_mut(s![last + 1..]).fill(y_last);

    Ok(out)
}

/// Replace every sample greater than `hcut` by interpolation between its
/// neighbours. Samples `<= hcut` are left untouched.
///
/// # Errors
///
/// [`SignalError::InvalidInterpolation`] if every sample exceeds `hcut`.
pub fn highcut(signal: &Array1<f64>, hcut: f64) -> Result<Array1<f64>> {
    let masked = signal.mapv(|v| if v > hcut { f64::NAN } else { v });
    fill_nan(&masked)
}
