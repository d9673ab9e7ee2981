//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's TestBackend so widget tests read as
//! render-then-assert on buffer text.

use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Test terminal wrapper around ratatui's TestBackend
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        self.terminal.backend().buffer().area
    }

    /// Render a single widget into the full frame
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("draw");
    }

    /// Render with an arbitrary draw closure (full-screen `view` tests)
    pub fn draw_with(&mut self, f: impl FnOnce(&mut Frame)) {
        self.terminal.draw(f).expect("draw");
    }

    /// Whether the rendered buffer contains `needle` anywhere
    pub fn buffer_contains(&self, needle: &str) -> bool {
        let buffer = self.terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text.contains(needle)
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}
