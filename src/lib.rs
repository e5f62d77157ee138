//! Loadbar draws a single-line progress indicator on the terminal and redraws
//! it in place as the value advances.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use loadbar::{LoadBarBuilder, StyleFlags, Error};
//!
//! # fn main() -> Result<(), Error> {
//! let mut bar = LoadBarBuilder::new()
//!     .add_style(StyleFlags::PERCENTAGE)
//!     .build()?;
//!
//! while !bar.is_finished() {
//!     bar.inc(1.0)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`load_bar`] - The `LoadBar` driver, `LoadBarBuilder` and `LoadBarConfig`
//! - [`progress`] - The clamped value model, `ProgressState`
//! - [`render`] - Composition of the displayed text
//! - [`style`] - Style flags, bracket styles and the spinner
//! - [`terminal`] - The `TerminalSurface` trait and its console implementation
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod error;
pub mod load_bar;
pub mod progress;
pub mod render;
pub mod style;
pub mod terminal;

pub use error::{Error, Result};
pub use load_bar::{LoadBar, LoadBarBuilder, LoadBarConfig};
pub use progress::ProgressState;
pub use render::render;
pub use style::{BracketStyle, Spinner, StyleFlags};
pub use terminal::{ConsoleSurface, TerminalSurface};
