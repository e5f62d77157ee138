//! Tests for the terminal surface contract.

use loadbar::{ConsoleSurface, LoadBar, StyleFlags, TerminalSurface};
use std::io;

#[cfg(unix)]
use console::Term;
#[cfg(unix)]
use std::fs::{self, File};

mod common;
use common::helpers::*;

/// Surface relying on the provided `clear_current_line`.
#[derive(Default)]
struct LineOnlySurface {
    ops: Vec<SurfaceOp>,
}

impl TerminalSurface for LineOnlySurface {
    fn overwrite_current_line(&mut self, text: &str) -> io::Result<()> {
        self.ops.push(SurfaceOp::Overwrite(text.to_string()));
        Ok(())
    }

    fn move_cursor_to_line_start(&mut self) -> io::Result<()> {
        self.ops.push(SurfaceOp::LineStart);
        Ok(())
    }

    fn emit_line_break(&mut self) -> io::Result<()> {
        self.ops.push(SurfaceOp::LineBreak);
        Ok(())
    }
}

#[test]
fn test_default_clear_blanks_line_and_returns_to_start() {
    let mut surface = LineOnlySurface::default();
    surface.clear_current_line().unwrap();
    assert_eq!(
        surface.ops,
        vec![SurfaceOp::Overwrite(String::new()), SurfaceOp::LineStart]
    );
}

#[test]
fn test_borrowed_surface_is_a_surface() {
    let mut surface = RecordingSurface::new();
    {
        let mut bar = LoadBar::with_surface(create_test_config(StyleFlags::BAR), &mut surface).unwrap();
        bar.set_current(100.0).unwrap();
    }
    assert_eq!(
        surface.ops,
        vec![
            SurfaceOp::Overwrite("[        ]".to_string()),
            SurfaceOp::Overwrite("[########]".to_string()),
            SurfaceOp::LineBreak,
        ]
    );
}

#[test]
fn test_console_surface_line_width_leaves_terminator_column() {
    let surface = ConsoleSurface::stderr().with_width(80);
    assert_eq!(surface.line_width(), 79);

    let narrow = ConsoleSurface::stdout().with_width(0);
    assert_eq!(narrow.line_width(), 0);
}

#[test]
fn test_console_surface_reports_terminal_width() {
    let surface = ConsoleSurface::default();
    let (_, columns) = surface.term().size();
    assert_eq!(surface.line_width(), usize::from(columns).saturating_sub(1));
}

#[cfg(unix)]
#[test]
fn test_console_surface_redraws_pads_and_truncates() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("term.out");
    let term = Term::read_write_pair(
        File::open("/dev/null").unwrap(),
        File::create(&path).unwrap(),
    );
    let mut surface = ConsoleSurface::new(term).with_width(12);

    surface.overwrite_current_line("[██  ] 50%").unwrap();
    surface.overwrite_current_line("0123456789ABCDEF").unwrap();
    surface.clear_current_line().unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "\r[██  ] 50% \r0123456789A\r\u{1b}[2K");
}

#[cfg(unix)]
#[test]
fn test_console_surface_line_break_and_line_start() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("term.out");
    let term = Term::read_write_pair(
        File::open("/dev/null").unwrap(),
        File::create(&path).unwrap(),
    );
    let mut surface = ConsoleSurface::new(term).with_width(6);

    surface.overwrite_current_line("[##]").unwrap();
    surface.emit_line_break().unwrap();
    surface.move_cursor_to_line_start().unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "\r[##] \n\r");
}
