//! Terminal output used by a load bar.
//!
//! A load bar owns exactly one terminal line for as long as it is displayed.
//! It redraws that line through the [`TerminalSurface`] trait, which keeps the
//! driver independent of the actual output device.
//!
//! - `console` - [`ConsoleSurface`], the implementation over [`console::Term`]
//!
//! Nothing else may write to the line while a load bar is active: interleaved
//! output is overwritten by the next redraw.

pub(crate) mod console;

pub use self::console::ConsoleSurface;

use std::io;

/// A terminal line that can be redrawn in place.
pub trait TerminalSurface {
    /// Move to column 0 of the current line and write `text` over it, padded
    /// to the line width, without moving to a new line.
    fn overwrite_current_line(&mut self, text: &str) -> io::Result<()>;

    /// Return the cursor to column 0 of the current line.
    fn move_cursor_to_line_start(&mut self) -> io::Result<()>;

    /// Commit the current line and move to the start of the next one.
    fn emit_line_break(&mut self) -> io::Result<()>;

    /// Blank out the current line and leave the cursor at column 0.
    fn clear_current_line(&mut self) -> io::Result<()> {
        self.overwrite_current_line("")?;
        self.move_cursor_to_line_start()
    }
}

impl<T: TerminalSurface + ?Sized> TerminalSurface for &mut T {
    fn overwrite_current_line(&mut self, text: &str) -> io::Result<()> {
        (**self).overwrite_current_line(text)
    }

    fn move_cursor_to_line_start(&mut self) -> io::Result<()> {
        (**self).move_cursor_to_line_start()
    }

    fn emit_line_break(&mut self) -> io::Result<()> {
        (**self).emit_line_break()
    }

    fn clear_current_line(&mut self) -> io::Result<()> {
        (**self).clear_current_line()
    }
}
