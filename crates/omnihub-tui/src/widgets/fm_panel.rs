//! Broadcast (FM transmitter) panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use omnihub_app::BroadcastState;

use crate::theme::{palette, styles};

/// Frequency dial, link status and playback readout
pub struct FmPanel<'a> {
    fm: &'a BroadcastState,
}

impl<'a> FmPanel<'a> {
    pub fn new(fm: &'a BroadcastState) -> Self {
        Self { fm }
    }

    fn flag(label: &'static str, on: bool) -> Span<'static> {
        if on {
            Span::styled(
                format!(" {label} "),
                Style::default()
                    .fg(palette::STATUS_GREEN)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {label} "), styles::text_muted())
        }
    }
}

impl Widget for FmPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(Span::styled(" FM Link ", styles::text_primary()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let dial_style = if self.fm.is_transmitting {
            Style::default()
                .fg(palette::TRANSMIT_LIVE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(palette::FREQ_DIAL)
                .add_modifier(Modifier::BOLD)
        };

        let mut lines = vec![
            Line::default(),
            Line::from(vec![
                Span::raw("   "),
                Span::styled(format!("{} MHz", self.fm.display()), dial_style),
                Span::styled(
                    if self.fm.is_busy() { "   ⟳ working…" } else { "" },
                    Style::default().fg(palette::STATUS_YELLOW),
                ),
            ]),
            Line::default(),
            Line::from(vec![
                Span::raw("  "),
                Self::flag("TRANSMIT", self.fm.is_transmitting),
                Self::flag("PAIRED", self.fm.is_paired),
                Self::flag("PLAYING", self.fm.is_playing),
            ]),
            Line::default(),
        ];

        if self.fm.is_paired {
            lines.push(Line::from(vec![
                Span::styled("  ♪ ", styles::accent()),
                Span::styled(self.fm.track.title.clone(), styles::text_primary()),
                Span::styled(
                    format!(" — {}", self.fm.track.artist),
                    styles::text_secondary(),
                ),
            ]));
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(
            "  ↑/+ ↓/- tune · s scan · b pair · Space play · t transmit",
            styles::text_muted(),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}
