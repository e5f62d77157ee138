//! Builder pattern implementation for creating LoadBar instances.
//!
//! # Examples
//!
//! ```rust,no_run
//! use loadbar::load_bar::LoadBarBuilder;
//! use loadbar::style::{BracketStyle, StyleFlags};
//!
//! # fn main() -> Result<(), loadbar::Error> {
//! let mut bar = LoadBarBuilder::new()
//!     .bar_material('|')
//!     .bar_width(50)
//!     .bracket_style(BracketStyle::Angle)
//!     .clear_when_finished(true)
//!     .start_value(100.0)
//!     .finish_value(300.0)
//!     .current_value(125.0)
//!     .styles(StyleFlags::ALL)
//!     .build()?;
//!
//! while !bar.is_finished() {
//!     bar.inc(1.0)?;
//! }
//! # Ok(())
//! # }
//! ```

use super::{config::LoadBarConfig, load_bar::LoadBar};
use crate::error::Result;
use crate::style::{BracketStyle, StyleFlags};
use crate::terminal::{ConsoleSurface, TerminalSurface};

/// A builder used to create a [`LoadBar`].
///
/// ```rust
/// use loadbar::load_bar::LoadBarBuilder;
/// use loadbar::style::StyleFlags;
///
/// let config = LoadBarBuilder::new()
///     .add_style(StyleFlags::PERCENTAGE)
///     .finish_value(10.0)
///     .config();
/// assert_eq!(config.styles, StyleFlags::BAR | StyleFlags::PERCENTAGE);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoadBarBuilder {
    config: LoadBarConfig,
}

impl LoadBarBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        LoadBarBuilder::default()
    }

    /// Set the starting point.
    pub fn start_value(mut self, value: f64) -> Self {
        self.config.start = value;
        self
    }

    /// Set the ending point.
    pub fn finish_value(mut self, value: f64) -> Self {
        self.config.finish = value;
        self
    }

    /// Set the value shown at construction.
    pub fn current_value(mut self, value: f64) -> Self {
        self.config.initial_current = Some(value);
        self
    }

    /// Replace the display styles.
    pub fn styles(mut self, styles: StyleFlags) -> Self {
        self.config.styles = styles;
        self
    }

    /// Add `style` to the display styles.
    pub fn add_style(mut self, style: StyleFlags) -> Self {
        self.config.styles |= style;
        self
    }

    /// Set the width of the bar, brackets included.
    pub fn bar_width(mut self, width: usize) -> Self {
        self.config.bar_width = width;
        self
    }

    /// Set the glyph filling the completed part of the bar.
    pub fn bar_material(mut self, glyph: char) -> Self {
        self.config.fill_glyph = glyph;
        self
    }

    /// Set the brackets around the bar.
    pub fn bracket_style(mut self, style: BracketStyle) -> Self {
        self.config.bracket_style = style;
        self
    }

    /// Should the display be redrawn whenever the value changes?
    pub fn update_on_change(mut self, should_update: bool) -> Self {
        self.config.auto_render = should_update;
        self
    }

    /// Should the line be erased once the bar is finished?
    pub fn clear_when_finished(mut self, clear: bool) -> Self {
        self.config.clear_on_finish = clear;
        self
    }

    /// Get the assembled configuration.
    pub fn config(&self) -> LoadBarConfig {
        self.config.clone()
    }

    /// Create a [`LoadBar`] drawing to standard output.
    pub fn build(self) -> Result<LoadBar<ConsoleSurface>> {
        LoadBar::new(self.config)
    }

    /// Create a [`LoadBar`] drawing to `surface`.
    pub fn build_with_surface<S: TerminalSurface>(self, surface: S) -> Result<LoadBar<S>> {
        LoadBar::with_surface(self.config, surface)
    }
}
