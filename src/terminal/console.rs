use super::TerminalSurface;

use console::{pad_str, Alignment, Term};
use std::io;

/// [`TerminalSurface`] writing to a [`console::Term`].
///
/// ```rust,no_run
/// use loadbar::terminal::{ConsoleSurface, TerminalSurface};
///
/// # fn main() -> std::io::Result<()> {
/// let mut surface = ConsoleSurface::stderr();
/// surface.overwrite_current_line("[##  ] 50%")?;
/// surface.emit_line_break()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConsoleSurface {
    term: Term,
    /// Fixed line width, overriding the size reported by the terminal.
    width: Option<usize>,
}

impl ConsoleSurface {
    /// Create a surface over `term`.
    pub fn new(term: Term) -> Self {
        Self { term, width: None }
    }

    /// Surface over standard output.
    pub fn stdout() -> Self {
        Self::new(Term::stdout())
    }

    /// Surface over standard error.
    pub fn stderr() -> Self {
        Self::new(Term::stderr())
    }

    /// Use a fixed line width instead of asking the terminal.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Columns available for a line, leaving one for the line terminator.
    pub fn line_width(&self) -> usize {
        let width = self
            .width
            .unwrap_or_else(|| usize::from(self.term.size().1));
        width.saturating_sub(1)
    }

    /// Get a reference to the underlying terminal.
    pub fn term(&self) -> &Term {
        &self.term
    }
}

impl Default for ConsoleSurface {
    fn default() -> Self {
        Self::stdout()
    }
}

impl TerminalSurface for ConsoleSurface {
    fn overwrite_current_line(&mut self, text: &str) -> io::Result<()> {
        let line = pad_str(text, self.line_width(), Alignment::Left, Some(""));
        self.term.write_str("\r")?;
        self.term.write_str(&line)?;
        self.term.flush()
    }

    fn move_cursor_to_line_start(&mut self) -> io::Result<()> {
        self.term.write_str("\r")?;
        self.term.flush()
    }

    fn emit_line_break(&mut self) -> io::Result<()> {
        self.term.write_line("")?;
        self.term.flush()
    }

    fn clear_current_line(&mut self) -> io::Result<()> {
        self.term.clear_line()?;
        self.term.flush()
    }
}
