//! Assistant chat panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use omnihub_app::AssistantPanel;
use omnihub_core::Role;

use crate::theme::{palette, styles};

/// Transcript plus the input line
pub struct AssistantView<'a> {
    panel: &'a AssistantPanel,
}

impl<'a> AssistantView<'a> {
    pub fn new(panel: &'a AssistantPanel) -> Self {
        Self { panel }
    }
}

impl Widget for AssistantView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(Span::styled(" AI Hub ", styles::text_primary()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = Vec::new();
        for message in self.panel.transcript() {
            let (label, style) = match message.role {
                Role::User => ("You", Style::default().fg(palette::CHAT_USER)),
                Role::Assistant => ("Hub", Style::default().fg(palette::CHAT_ASSISTANT)),
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {label}: "), style),
                Span::styled(message.content.clone(), styles::text_primary()),
            ]));
        }

        if self.panel.is_loading() {
            lines.push(Line::from(Span::styled(
                " Hub is thinking…",
                styles::text_muted(),
            )));
        }

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(" ❯ ", styles::accent_bold()),
            Span::styled(format!("{}▏", self.panel.input), styles::text_primary()),
        ]));

        // Keep the tail (including the input line) visible when the
        // transcript outgrows the panel.
        let overflow = lines.len().saturating_sub(inner.height as usize);
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((overflow as u16, 0))
            .render(inner, buf);
    }
}
