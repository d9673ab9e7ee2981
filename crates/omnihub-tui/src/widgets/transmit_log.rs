//! Protocol log for simulated IR bursts

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use omnihub_app::TransmitLog;

use crate::theme::{palette, styles};

/// Rolling transmit log with a live indicator in the title
pub struct TransmitLogView<'a> {
    log: &'a TransmitLog,
}

impl<'a> TransmitLogView<'a> {
    pub fn new(log: &'a TransmitLog) -> Self {
        Self { log }
    }
}

impl Widget for TransmitLogView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.log.is_transmitting() {
            Span::styled(" IR Log ⇋ TX ", Style::default().fg(palette::TRANSMIT_LIVE))
        } else {
            Span::styled(" IR Log ", styles::text_secondary())
        };

        let block = styles::glass_block(false).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines: Vec<Line> = if self.log.records().is_empty() {
            vec![Line::from(Span::styled(
                "  no bursts yet",
                styles::text_muted(),
            ))]
        } else {
            self.log
                .records()
                .iter()
                .map(|r| {
                    Line::from(vec![
                        Span::styled(
                            format!("  {} ", r.at.format("%H:%M:%S")),
                            styles::text_muted(),
                        ),
                        Span::styled(format!("{:<14}", r.command), styles::text_primary()),
                        Span::styled(r.code.clone(), styles::accent()),
                    ])
                })
                .collect()
        };

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_empty_log_placeholder() {
        let log = TransmitLog::new();
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(TransmitLogView::new(&log), area);

        assert!(term.buffer_contains("IR Log"));
        assert!(term.buffer_contains("no bursts yet"));
    }

    #[test]
    fn test_records_and_indicator_render() {
        let mut log = TransmitLog::new();
        log.record("VOL_UP");
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(TransmitLogView::new(&log), area);

        assert!(term.buffer_contains("VOL_UP"));
        assert!(term.buffer_contains("0x"));
        assert!(term.buffer_contains("TX"));
    }
}
