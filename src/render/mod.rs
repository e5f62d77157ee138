//! Text composition for a single load bar line.
//!
//! [`render`] is a pure function of the progress state, the configuration and
//! the spinner position. Segments are appended in a fixed order, each only if
//! its style is enabled:
//!
//! 1. the bar, e.g. `[####    ]`
//! 2. the fraction, ` (25 / 100)`
//! 3. the percentage, ` 25%`
//! 4. the spinner, ` /`
//!
//! Leading whitespace of the composed line is trimmed, so a line without a bar
//! starts directly with its first visible segment.
//!
//! # Examples
//!
//! ```rust
//! use loadbar::progress::ProgressState;
//! use loadbar::render::render;
//! use loadbar::style::{Spinner, StyleFlags};
//! use loadbar::LoadBarConfig;
//!
//! # fn main() -> Result<(), loadbar::Error> {
//! let state = ProgressState::new(0.0, 100.0, 25.0)?;
//! let config = LoadBarConfig {
//!     styles: StyleFlags::FRACTION | StyleFlags::PERCENTAGE,
//!     ..LoadBarConfig::default()
//! };
//!
//! let (line, _) = render(&state, &config, Spinner::new());
//! assert_eq!(line, "(25 / 100) 25%");
//! # Ok(())
//! # }
//! ```

pub(crate) mod bar;

pub use bar::{bar_segment, effective_width, MIN_BAR_WIDTH};

use crate::load_bar::LoadBarConfig;
use crate::progress::ProgressState;
use crate::style::Spinner;

/// Compose the line for `state`.
///
/// Returns the text together with the spinner to use for the next render. The
/// spinner only advances when the spinner style is enabled.
pub fn render(state: &ProgressState, config: &LoadBarConfig, spinner: Spinner) -> (String, Spinner) {
    let styles = config.styles;
    let mut line = String::new();
    let mut next = spinner;

    if styles.bar {
        line.push_str(&bar_segment(
            state.percentage(),
            config.bar_width,
            config.fill_glyph,
            config.bracket_style,
        ));
    }

    if styles.fraction {
        line.push_str(&format!(" ({} / {})", state.current(), state.finish()));
    }

    if styles.percentage {
        line.push_str(&format!(" {}%", whole_percent(state.percentage())));
    }

    if styles.spinner {
        line.push(' ');
        line.push_str(spinner.glyph());
        next = spinner.advance();
    }

    (line.trim_start().to_string(), next)
}

/// `percentage` scaled to 0..=100, rounded half away from zero.
pub fn whole_percent(percentage: f64) -> u32 {
    (percentage * 100.0).round() as u32
}
