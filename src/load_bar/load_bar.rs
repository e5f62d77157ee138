//! The load bar driver.
//!
//! A [`LoadBar`] ties a [`ProgressState`] to a terminal line. With
//! `auto_render` enabled every write redraws the line; the write that reaches
//! the finish value either erases the line or commits it with a line break,
//! depending on `clear_on_finish`. After that no automatic redraw happens until
//! the value moves away from the finish again.
//!
//! # Examples
//!
//! ```rust,no_run
//! use loadbar::load_bar::{LoadBar, LoadBarConfig};
//! use loadbar::style::StyleFlags;
//!
//! # fn main() -> Result<(), loadbar::Error> {
//! let mut bar = LoadBar::new(LoadBarConfig {
//!     styles: StyleFlags::BAR | StyleFlags::PERCENTAGE,
//!     ..LoadBarConfig::default()
//! })?;
//!
//! for step in 0..=100 {
//!     bar.set_current(step as f64)?;
//! }
//! assert!(bar.is_finished());
//! # Ok(())
//! # }
//! ```

use super::config::LoadBarConfig;
use crate::error::Result;
use crate::progress::ProgressState;
use crate::render::render;
use crate::style::Spinner;
use crate::terminal::{ConsoleSurface, TerminalSurface};

use tracing::{debug, trace};

/// A text-based load bar occupying one terminal line.
#[derive(Debug)]
pub struct LoadBar<S = ConsoleSurface> {
    config: LoadBarConfig,
    state: ProgressState,
    spinner: Spinner,
    surface: S,
    /// Set once the finished line has been committed or erased.
    done: bool,
}

impl LoadBar<ConsoleSurface> {
    /// Create a load bar drawing to standard output.
    ///
    /// # Errors
    ///
    /// Fails if the configured range is invalid, or if drawing the initial
    /// state fails.
    pub fn new(config: LoadBarConfig) -> Result<Self> {
        Self::with_surface(config, ConsoleSurface::stdout())
    }
}

impl<S: TerminalSurface> LoadBar<S> {
    /// Create a load bar drawing to `surface`.
    ///
    /// With `auto_render` enabled the initial state is drawn right away.
    pub fn with_surface(config: LoadBarConfig, surface: S) -> Result<Self> {
        let state = ProgressState::new(config.start, config.finish, config.initial_value())?;
        debug!(
            start = state.start(),
            finish = state.finish(),
            current = state.current(),
            styles = %config.styles,
            "Creating load bar"
        );

        let mut bar = Self {
            config,
            state,
            spinner: Spinner::new(),
            surface,
            done: false,
        };
        if bar.config.auto_render {
            bar.refresh()?;
        }
        Ok(bar)
    }

    /// Set the current value, clamped into the configured range.
    ///
    /// With `auto_render` enabled the line is redrawn before returning, even if
    /// clamping left the value unchanged.
    pub fn set_current(&mut self, value: f64) -> Result<()> {
        let changed = self.state.set_current(value);
        trace!(value, current = self.state.current(), changed, "Setting load bar value");

        if self.done && !self.state.is_finished() {
            debug!("Load bar left its finish value, resuming display");
            self.done = false;
        }

        if self.config.auto_render && !self.done {
            self.refresh()?;
        }
        Ok(())
    }

    /// Add `delta` to the current value.
    pub fn inc(&mut self, delta: f64) -> Result<()> {
        self.set_current(self.state.current() + delta)
    }

    /// Jump to the finish value.
    pub fn finish(&mut self) -> Result<()> {
        self.set_current(self.state.finish())
    }

    /// Draw the current state now and return the drawn text.
    ///
    /// The value is left untouched, but the spinner still advances if it is
    /// displayed.
    pub fn render_now(&mut self) -> Result<String> {
        self.draw()
    }

    /// Erase the line and return the cursor to its start.
    pub fn clear(&mut self) -> Result<()> {
        debug!("Clearing load bar line");
        self.surface.clear_current_line()?;
        Ok(())
    }

    /// The starting point.
    pub fn start_value(&self) -> f64 {
        self.state.start()
    }

    /// The ending point.
    pub fn finish_value(&self) -> f64 {
        self.state.finish()
    }

    /// The value displayed right now.
    pub fn current_value(&self) -> f64 {
        self.state.current()
    }

    /// Progress as a fraction between `0.0` and `1.0`.
    pub fn percentage(&self) -> f64 {
        self.state.percentage()
    }

    /// `true` once the current value equals the finish value.
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &LoadBarConfig {
        &self.config
    }

    /// Get a reference to the terminal surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consume the load bar, returning its terminal surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Redraw after a value change, finalizing the line when finished.
    fn refresh(&mut self) -> Result<()> {
        if !self.state.is_finished() {
            self.draw()?;
            return Ok(());
        }

        debug!(clear = self.config.clear_on_finish, "Load bar finished");
        if self.config.clear_on_finish {
            self.surface.clear_current_line()?;
        } else {
            self.draw()?;
            self.surface.emit_line_break()?;
        }
        // Only a line that was actually finalized stops further redraws.
        self.done = true;
        Ok(())
    }

    fn draw(&mut self) -> Result<String> {
        let (line, next) = render(&self.state, &self.config, self.spinner);
        self.spinner = next;
        self.surface.overwrite_current_line(&line)?;
        Ok(line)
    }
}
