use crate::style::BracketStyle;

/// Narrowest bar that is ever drawn, brackets included.
pub const MIN_BAR_WIDTH: usize = 4;

/// The configured width raised to [`MIN_BAR_WIDTH`] if it is narrower.
pub fn effective_width(bar_width: usize) -> usize {
    bar_width.max(MIN_BAR_WIDTH)
}

/// Draw the bar for `percentage` (between 0.0 and 1.0).
///
/// The brackets take their share of `bar_width`; the interior is filled with
/// `fill` proportionally, rounding down, and padded with spaces.
pub fn bar_segment(percentage: f64, bar_width: usize, fill: char, brackets: BracketStyle) -> String {
    let (left, right) = brackets.glyphs();
    let interior = effective_width(bar_width)
        .saturating_sub(left.chars().count())
        .saturating_sub(right.chars().count());
    let filled = ((interior as f64 * percentage).floor() as usize).min(interior);

    let mut segment = String::with_capacity(bar_width + left.len() + right.len());
    segment.push_str(left);
    segment.extend(std::iter::repeat(fill).take(filled));
    segment.extend(std::iter::repeat(' ').take(interior - filled));
    segment.push_str(right);
    segment
}
