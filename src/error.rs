//! Error type shared by every conditioning step.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignalError {
    #[error("cannot fill missing samples: {0}")]
    InvalidInterpolation(String),

    #[error("baseline endpoint {endpoint} out of bounds for signal of length {len}")]
    OutOfBoundsEndpoint { endpoint: usize, len: usize },

    #[error("baseline window is empty (endpoint = 0)")]
    EmptyBaselineWindow,

    #[error("signal is empty")]
    EmptySignal,

    #[error("fcut = {fcut} exceeds half the padded length ({half})")]
    WindowTooWide { fcut: usize, half: usize },

    #[error("malformed signal file: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SignalError>;
