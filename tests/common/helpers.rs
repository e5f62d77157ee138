#![allow(dead_code)]

use loadbar::{BracketStyle, LoadBar, LoadBarConfig, StyleFlags, TerminalSurface};
use std::io;

// Common test constants
pub const TEST_FILL: char = '#';
pub const TEST_BAR_WIDTH: usize = 10;

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Overwrite(String),
    LineStart,
    LineBreak,
    Clear,
}

/// Terminal surface keeping every call instead of writing anywhere.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
    /// Number of upcoming line breaks that fail instead of being recorded.
    pub failing_line_breaks: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the most recent overwrite, if any.
    pub fn last_line(&self) -> Option<&str> {
        self.ops.iter().rev().find_map(|op| match op {
            SurfaceOp::Overwrite(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn overwrite_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Overwrite(_)))
            .count()
    }
}

impl TerminalSurface for RecordingSurface {
    fn overwrite_current_line(&mut self, text: &str) -> io::Result<()> {
        self.ops.push(SurfaceOp::Overwrite(text.to_string()));
        Ok(())
    }

    fn move_cursor_to_line_start(&mut self) -> io::Result<()> {
        self.ops.push(SurfaceOp::LineStart);
        Ok(())
    }

    fn emit_line_break(&mut self) -> io::Result<()> {
        if self.failing_line_breaks > 0 {
            self.failing_line_breaks -= 1;
            return Err(io::Error::new(io::ErrorKind::Interrupted, "line break lost"));
        }
        self.ops.push(SurfaceOp::LineBreak);
        Ok(())
    }

    fn clear_current_line(&mut self) -> io::Result<()> {
        self.ops.push(SurfaceOp::Clear);
        Ok(())
    }
}

/// Terminal surface failing every write.
#[derive(Debug, Default)]
pub struct BrokenSurface;

impl TerminalSurface for BrokenSurface {
    fn overwrite_current_line(&mut self, _text: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal went away"))
    }

    fn move_cursor_to_line_start(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal went away"))
    }

    fn emit_line_break(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal went away"))
    }
}

/// Creates a 0..100 config with a 10 column `#` bar and the given styles.
pub fn create_test_config(styles: StyleFlags) -> LoadBarConfig {
    LoadBarConfig {
        bar_width: TEST_BAR_WIDTH,
        fill_glyph: TEST_FILL,
        styles,
        bracket_style: BracketStyle::Square,
        ..LoadBarConfig::default()
    }
}

/// Creates a test config that is only drawn on demand.
pub fn create_manual_config(styles: StyleFlags) -> LoadBarConfig {
    LoadBarConfig {
        auto_render: false,
        ..create_test_config(styles)
    }
}

/// Creates a load bar over a fresh [`RecordingSurface`].
pub fn create_recorded_bar(config: LoadBarConfig) -> LoadBar<RecordingSurface> {
    LoadBar::with_surface(config, RecordingSurface::new()).expect("Failed to create load bar")
}
