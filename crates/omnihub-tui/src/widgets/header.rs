//! Header bar: app title plus a compact hub summary

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use omnihub_app::state::AppState;
use omnihub_core::PowerState;

use crate::theme::{palette, styles};

/// Main header showing app title and device counts
pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn summary(&self) -> (usize, usize) {
        let devices = self.state.devices.devices();
        let on = devices
            .iter()
            .filter(|d| d.power == PowerState::On)
            .count();
        (devices.len(), on)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (total, on) = self.summary();
        let line = Line::from(vec![
            Span::styled("⌂ OmniControl", styles::accent_bold()),
            Span::styled("  smart hub", styles::text_muted()),
            Span::raw("   "),
            Span::styled(format!("{total} devices"), styles::text_secondary()),
            Span::styled(" · ", styles::text_muted()),
            Span::styled(format!("{on} on"), styles::power(on > 0)),
        ]);

        Paragraph::new(line).render(inner, buf);
    }
}
