//! Configuration of a load bar.
//!
//! [`LoadBarConfig`] is the immutable bundle a [`LoadBar`] is built from. It can
//! be filled in directly or assembled with the [`LoadBarBuilder`].
//!
//! # Examples
//!
//! ```rust
//! use loadbar::load_bar::LoadBarConfig;
//! use loadbar::style::{BracketStyle, StyleFlags};
//!
//! let config = LoadBarConfig {
//!     finish: 300.0,
//!     bracket_style: BracketStyle::Angle,
//!     styles: StyleFlags::ALL,
//!     ..LoadBarConfig::default()
//! };
//! assert_eq!(config.initial_value(), 0.0);
//! ```
//!
//! [`LoadBar`]: super::LoadBar
//! [`LoadBarBuilder`]: super::LoadBarBuilder

use crate::style::{BracketStyle, StyleFlags};

/// Configuration structure for a load bar.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadBarConfig {
    /// The starting point.
    pub start: f64,
    /// The ending point.
    pub finish: f64,
    /// Value shown at construction. Defaults to `start` when unset.
    pub initial_current: Option<f64>,
    /// Width of the bar in columns, brackets included. Raised to 4 when
    /// smaller.
    pub bar_width: usize,
    /// Glyph filling the completed part of the bar.
    pub fill_glyph: char,
    /// Elements to draw.
    pub styles: StyleFlags,
    /// Brackets around the bar.
    pub bracket_style: BracketStyle,
    /// Redraw on every value change.
    pub auto_render: bool,
    /// Erase the line when finished instead of keeping it. Only consulted when
    /// `auto_render` is set.
    pub clear_on_finish: bool,
}

impl LoadBarConfig {
    /// Default width of the bar.
    pub const DEFAULT_BAR_WIDTH: usize = 40;
    /// Default fill glyph, a full block.
    pub const DEFAULT_FILL_GLYPH: char = '█';

    /// Value shown at construction, before clamping.
    pub fn initial_value(&self) -> f64 {
        self.initial_current.unwrap_or(self.start)
    }
}

impl Default for LoadBarConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            finish: 100.0,
            initial_current: None,
            bar_width: Self::DEFAULT_BAR_WIDTH,
            fill_glyph: Self::DEFAULT_FILL_GLYPH,
            styles: StyleFlags::default(),
            bracket_style: BracketStyle::Square,
            auto_render: true,
            clear_on_finish: false,
        }
    }
}
