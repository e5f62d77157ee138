//! Clamped progress value and its derived percentage.

use crate::error::{Error, Result};

/// A value advancing through a fixed `[start, finish]` range.
///
/// The current value always lies inside the range: every write is clamped,
/// never rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressState {
    start: f64,
    finish: f64,
    current: f64,
}

impl ProgressState {
    /// Create a new [`ProgressState`].
    ///
    /// `initial` is clamped into the range before it is stored.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NonFiniteBound`] if either bound is NaN or infinite
    /// and with [`Error::InvalidRange`] if `start >= finish`.
    pub fn new(start: f64, finish: f64, initial: f64) -> Result<Self> {
        if !start.is_finite() {
            return Err(Error::NonFiniteBound {
                name: "start",
                value: start,
            });
        }
        if !finish.is_finite() {
            return Err(Error::NonFiniteBound {
                name: "finish",
                value: finish,
            });
        }
        if start >= finish {
            return Err(Error::InvalidRange { start, finish });
        }

        let mut state = Self {
            start,
            finish,
            current: start,
        };
        state.set_current(initial);
        Ok(state)
    }

    /// Store `value`, clamped into `[start, finish]`.
    ///
    /// Returns `true` if the stored value changed. NaN is ignored.
    pub fn set_current(&mut self, value: f64) -> bool {
        if value.is_nan() {
            return false;
        }
        // Adding zero turns -0.0 into 0.0.
        let clamped = value.clamp(self.start, self.finish) + 0.0;
        let changed = clamped != self.current;
        self.current = clamped;
        changed
    }

    /// Lower bound of the range.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Upper bound of the range.
    pub fn finish(&self) -> f64 {
        self.finish
    }

    /// Current value, always within the range.
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Progress through the range, from `0.0` to `1.0` inclusive.
    pub fn percentage(&self) -> f64 {
        let span = self.finish - self.start;
        if span.is_finite() {
            return (self.current - self.start) / span;
        }

        // Two finite bounds can be more than f64::MAX apart; halves never are.
        let half = |value: f64| value / 2.0;
        (half(self.current) - half(self.start)) / (half(self.finish) - half(self.start))
    }

    /// `true` once the current value is exactly the finish value.
    ///
    /// Exact comparison: fractional increments that drift past or short of
    /// `finish` only count once clamping lands on it.
    pub fn is_finished(&self) -> bool {
        self.current == self.finish
    }
}
