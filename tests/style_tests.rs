//! Tests for style flags, bracket styles and the spinner.

use loadbar::{BracketStyle, Spinner, StyleFlags};

#[test]
fn test_bracket_glyphs() {
    let expected = [
        (BracketStyle::None, ("", "")),
        (BracketStyle::Square, ("[", "]")),
        (BracketStyle::Curly, ("{", "}")),
        (BracketStyle::Angle, ("<", ">")),
        (BracketStyle::Parentheses, ("(", ")")),
        (BracketStyle::Bar, ("|", "|")),
    ];
    for (style, glyphs) in expected {
        assert_eq!(style.glyphs(), glyphs, "{style:?}");
    }
    assert_eq!(BracketStyle::ALL.len(), expected.len());
}

#[test]
fn test_bracket_style_default_is_square() {
    assert_eq!(BracketStyle::default(), BracketStyle::Square);
}

#[test]
fn test_style_flags_default_is_bar() {
    assert_eq!(StyleFlags::default(), StyleFlags::BAR);
}

#[test]
fn test_style_flags_combine() {
    let mut styles = StyleFlags::BAR | StyleFlags::PERCENTAGE;
    assert!(styles.contains(StyleFlags::BAR));
    assert!(styles.contains(StyleFlags::PERCENTAGE));
    assert!(!styles.contains(StyleFlags::SPINNER));
    assert!(!styles.contains(StyleFlags::ALL));

    styles |= StyleFlags::FRACTION | StyleFlags::SPINNER;
    assert_eq!(styles, StyleFlags::ALL);
}

#[test]
fn test_style_flags_order_independent() {
    assert_eq!(
        StyleFlags::SPINNER | StyleFlags::BAR,
        StyleFlags::BAR | StyleFlags::SPINNER
    );
}

#[test]
fn test_style_flags_empty() {
    assert!(StyleFlags::NONE.is_empty());
    assert!(!StyleFlags::FRACTION.is_empty());
    assert!(StyleFlags::ALL.contains(StyleFlags::NONE));
}

#[test]
fn test_style_flags_display() {
    assert_eq!(StyleFlags::NONE.to_string(), "none");
    assert_eq!(
        (StyleFlags::SPINNER | StyleFlags::BAR).to_string(),
        "bar | spinner"
    );
}

#[test]
fn test_spinner_cycles_through_four_glyphs() {
    let mut spinner = Spinner::new();
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(spinner.glyph());
        spinner = spinner.advance();
    }
    assert_eq!(seen, ["|", "/", "-", "\\"]);
    assert_eq!(spinner, Spinner::new());
    assert_eq!(spinner.index(), 0);
}
