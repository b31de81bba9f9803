//! Concatenation and constant edge padding.
//!
//! `connect`    — `left` followed by `right`
//! `pad_edges`  — `[x[0]; n_l] ++ x ++ [x[-1]; n_r]`
use ndarray::Array1;

/// Join two signals end-to-end.
pub fn connect(left: &Array1<f64>, right: &Array1<f64>) -> Array1<f64> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    out.extend(left.iter().copied());
    out.extend(right.iter().copied());
    Array1::from_vec(out)
}

/// Constant padding: `n_l` copies of the first sample on the left and `n_r`
/// copies of the last sample on the right.
///
/// An empty signal has no edge value and is returned empty.
pub fn pad_edges(x: &Array1<f64>, n_l: usize, n_r: usize) -> Array1<f64> {
    let (Some(&first), Some(&last)) = (x.first(), x.last()) else {
        return Array1::zeros(0);
    };
    let left = Array1::from_elem(n_l, first);
    let right = Array1::from_elem(n_r, last);
    connect(&connect(&left, x), &right)
}
