/// Determines which brackets are drawn on either side of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BracketStyle {
    /// No brackets.
    None,
    /// `[ ]`
    #[default]
    Square,
    /// `{ }`
    Curly,
    /// `< >`
    Angle,
    /// `( )`
    Parentheses,
    /// `| |`
    Bar,
}

impl BracketStyle {
    /// Every bracket style, in declaration order.
    pub const ALL: [BracketStyle; 6] = [
        BracketStyle::None,
        BracketStyle::Square,
        BracketStyle::Curly,
        BracketStyle::Angle,
        BracketStyle::Parentheses,
        BracketStyle::Bar,
    ];

    /// The `(left, right)` glyph pair. Both are empty for [`BracketStyle::None`].
    pub fn glyphs(self) -> (&'static str, &'static str) {
        match self {
            BracketStyle::None => ("", ""),
            BracketStyle::Square => ("[", "]"),
            BracketStyle::Curly => ("{", "}"),
            BracketStyle::Angle => ("<", ">"),
            BracketStyle::Parentheses => ("(", ")"),
            BracketStyle::Bar => ("|", "|"),
        }
    }
}
