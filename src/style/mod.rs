//! Load bar styling options.
//!
//! This module provides the visual building blocks a load bar is composed of:
//!
//! - `flags` - [`StyleFlags`], the set of elements to draw
//! - `brackets` - [`BracketStyle`], the glyph pair framing the bar
//! - `spinner` - [`Spinner`], the cyclic glyph sequence
//!
//! # Examples
//!
//! ## Combining Styles
//!
//! ```rust
//! use loadbar::style::StyleFlags;
//!
//! let styles = StyleFlags::BAR | StyleFlags::PERCENTAGE;
//! assert!(styles.contains(StyleFlags::PERCENTAGE));
//! assert!(!styles.contains(StyleFlags::SPINNER));
//! ```
//!
//! ## Bracket Glyphs
//!
//! ```rust
//! use loadbar::style::BracketStyle;
//!
//! assert_eq!(BracketStyle::Curly.glyphs(), ("{", "}"));
//! assert_eq!(BracketStyle::None.glyphs(), ("", ""));
//! ```

pub(crate) mod brackets;
pub(crate) mod flags;
pub(crate) mod spinner;

pub use brackets::BracketStyle;
pub use flags::StyleFlags;
pub use spinner::Spinner;
