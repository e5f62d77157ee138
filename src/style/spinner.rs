/// Cursor into the fixed spinner sequence `| / - \`.
///
/// A spinner only moves when it is rendered: [`Spinner::advance`] steps to the
/// next glyph and wraps back to the first after the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spinner {
    index: usize,
}

impl Spinner {
    /// Glyphs shown by the spinner, in order.
    pub const FRAMES: [&'static str; 4] = ["|", "/", "-", "\\"];

    /// Create a spinner at its first glyph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Position in [`Spinner::FRAMES`].
    pub fn index(&self) -> usize {
        self.index
    }

    /// Glyph at the current position.
    pub fn glyph(&self) -> &'static str {
        Self::FRAMES[self.index]
    }

    /// The spinner one step further along, wrapping after the last glyph.
    pub fn advance(self) -> Self {
        Self {
            index: (self.index + 1) % Self::FRAMES.len(),
        }
    }
}
