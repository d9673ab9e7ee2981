//! Bottom status bar: input mode, activity indicators and key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use omnihub_app::state::{AppState, InputMode, Tab};

use crate::theme::{palette, styles};

/// One-line status strip
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn mode_span(&self) -> Span<'static> {
        let (label, style) = match self.state.mode {
            InputMode::Normal => (" NORMAL ", styles::text_muted()),
            InputMode::Search => (" SEARCH ", styles::accent_bold()),
            InputMode::AddDevice => (" ADD ", styles::accent_bold()),
        };
        Span::styled(label, style)
    }

    fn activity_span(&self) -> Option<Span<'static>> {
        if self.state.transmit.is_transmitting() {
            return Some(Span::styled(
                "⇋ TX ",
                Style::default().fg(palette::TRANSMIT_LIVE),
            ));
        }
        if self.state.assistant.is_loading() {
            return Some(Span::styled(
                "… assistant ",
                Style::default().fg(palette::STATUS_YELLOW),
            ));
        }
        None
    }

    fn hints(&self) -> &'static str {
        match self.state.tab {
            Tab::Dashboard => "↑↓ move · Enter open · p power · a add · / search · q quit",
            Tab::Remotes => "press remote keys · Esc dashboard · 1-4 tabs",
            Tab::Fm => "↑↓ tune · s scan · b pair · Space play · t transmit · Esc back",
            Tab::Assistant => "type and Enter to send · Esc dashboard · Tab cycle",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![self.mode_span(), Span::raw(" ")];
        if let Some(activity) = self.activity_span() {
            spans.push(activity);
        }
        spans.push(Span::styled(self.hints(), styles::text_muted()));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_dashboard_hints() {
        let state = AppState::seeded();
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(StatusBar::new(&state), area);

        assert!(term.buffer_contains("NORMAL"));
        assert!(term.buffer_contains("p power"));
    }

    #[test]
    fn test_transmit_indicator() {
        let mut state = AppState::seeded();
        state.transmit.record("VOL_UP");
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(StatusBar::new(&state), area);

        assert!(term.buffer_contains("TX"));
    }
}
