//! Progress value tracking.
//!
//! This module provides [`ProgressState`], the clamped value model behind every
//! load bar. It knows nothing about rendering or terminals.
//!
//! # Examples
//!
//! ```rust
//! use loadbar::progress::ProgressState;
//!
//! # fn main() -> Result<(), loadbar::Error> {
//! let mut state = ProgressState::new(0.0, 100.0, 0.0)?;
//! state.set_current(250.0);
//! assert_eq!(state.current(), 100.0);
//! assert!(state.is_finished());
//! # Ok(())
//! # }
//! ```

pub(crate) mod state;

pub use state::ProgressState;
