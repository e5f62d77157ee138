//! Load bar module containing the driver, its builder and configuration.
//!
//! # Overview
//!
//! - `load_bar` - [`LoadBar`], which keeps the value and redraws the line
//! - `builder` - [`LoadBarBuilder`] for fluent configuration
//! - `config` - [`LoadBarConfig`] and its defaults
//!
//! # Examples
//!
//! ## Default Load Bar
//!
//! ```rust,no_run
//! use loadbar::load_bar::{LoadBar, LoadBarConfig};
//!
//! # fn main() -> Result<(), loadbar::Error> {
//! let mut bar = LoadBar::new(LoadBarConfig::default())?;
//! bar.set_current(42.0)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Manual Rendering
//!
//! ```rust,no_run
//! use loadbar::load_bar::LoadBarBuilder;
//! use loadbar::style::StyleFlags;
//!
//! # fn main() -> Result<(), loadbar::Error> {
//! let mut bar = LoadBarBuilder::new()
//!     .styles(StyleFlags::PERCENTAGE | StyleFlags::SPINNER)
//!     .update_on_change(false)
//!     .build()?;
//!
//! bar.set_current(10.0)?;
//! let line = bar.render_now()?;
//! assert_eq!(line, "10% |");
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod load_bar;

pub use builder::LoadBarBuilder;
pub use config::LoadBarConfig;
pub use load_bar::LoadBar;
