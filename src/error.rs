//! Error handling for the loadbar library.
//!
//! Only two things can go wrong: a load bar is configured with an unusable
//! value range, or the terminal refuses a write while redrawing. Out-of-range
//! progress values are never errors, they are clamped.

use std::io;
use thiserror::Error;

/// Errors that can happen when using loadbar.
#[derive(Error, Debug)]
pub enum Error {
    /// The configured range is empty or inverted.
    ///
    /// Returned at construction time when `start >= finish`. No load bar is
    /// produced.
    #[error("Invalid range: start value {start} must be less than finish value {finish}")]
    InvalidRange { start: f64, finish: f64 },

    /// One of the range bounds is NaN or infinite.
    #[error("Invalid range: {name} value must be finite, got {value}")]
    NonFiniteBound { name: &'static str, value: f64 },

    /// I/O Error.
    ///
    /// Wraps failures of the underlying terminal while a line is being
    /// written, cleared or finalized.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a loadbar error.
pub type Result<T> = std::result::Result<T, Error>;
