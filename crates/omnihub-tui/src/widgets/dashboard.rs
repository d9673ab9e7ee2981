//! Dashboard device grid

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use omnihub_app::state::{AppState, InputMode, Tab};
use omnihub_core::{Device, DeviceStatus, PowerState};

use crate::theme::{palette, styles};

/// Scrolling device list with cursor highlight and power-burst flash
pub struct DeviceGrid<'a> {
    state: &'a AppState,
}

impl<'a> DeviceGrid<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn device_line(&self, device: &Device, highlighted: bool) -> Line<'static> {
        let bursting = self
            .state
            .burst
            .as_ref()
            .is_some_and(|b| b.device_id == device.id);

        let cursor = if highlighted { "▸ " } else { "  " };
        let name_style = if bursting {
            Style::default()
                .fg(palette::BURST)
                .add_modifier(Modifier::BOLD)
        } else if highlighted {
            styles::accent_bold()
        } else {
            styles::text_primary()
        };

        let power = match device.power {
            PowerState::On => Span::styled("● ON ", styles::power(true)),
            PowerState::Off => Span::styled("○ OFF", styles::power(false)),
        };
        let status = match device.status {
            DeviceStatus::Online => Span::styled(" online ", styles::text_muted()),
            DeviceStatus::Offline => {
                Span::styled(" offline", Style::default().fg(palette::OFFLINE))
            }
        };

        Line::from(vec![
            Span::raw(cursor),
            Span::raw(format!("{} ", device.icon)),
            Span::styled(format!("{:<20}", device.name), name_style),
            Span::styled(
                format!("{:<14}", device.brand),
                styles::text_secondary(),
            ),
            Span::styled(format!("{:<8}", device.kind.display_name()), styles::text_muted()),
            power,
            status,
        ])
    }

    fn search_line(&self) -> Option<Line<'static>> {
        if self.state.mode != InputMode::Search && self.state.search.is_empty() {
            return None;
        }
        let cursor = if self.state.mode == InputMode::Search {
            "▏"
        } else {
            ""
        };
        Some(Line::from(vec![
            Span::styled("  / ", styles::keybinding()),
            Span::styled(
                format!("{}{}", self.state.search, cursor),
                styles::text_primary(),
            ),
        ]))
    }
}

impl Widget for DeviceGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let devices = self.state.filtered_devices();
        let title = format!(" Devices ({}) ", devices.len());
        let block = styles::glass_block(self.state.tab == Tab::Dashboard)
            .title(Span::styled(title, styles::text_primary()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = Vec::new();
        if let Some(search) = self.search_line() {
            lines.push(search);
            lines.push(Line::default());
        }

        if devices.is_empty() {
            lines.push(Line::from(Span::styled(
                "  No devices match",
                styles::text_muted(),
            )));
        }

        for (i, device) in devices.iter().enumerate() {
            lines.push(self.device_line(device, i == self.state.cursor));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_grid_lists_seed_devices() {
        let state = AppState::seeded();
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(DeviceGrid::new(&state), area);

        assert!(term.buffer_contains("Devices (8)"));
        assert!(term.buffer_contains("Living Room TV"));
        assert!(term.buffer_contains("Kitchen AC"));
        assert!(term.buffer_contains("offline"));
    }

    #[test]
    fn test_grid_shows_search_filter() {
        let mut state = AppState::seeded();
        state.search = "hisense".to_string();
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(DeviceGrid::new(&state), area);

        assert!(term.buffer_contains("Devices (2)"));
        assert!(term.buffer_contains("hisense"));
        assert!(!term.buffer_contains("Cinema Bar"));
    }

    #[test]
    fn test_grid_empty_filter_message() {
        let mut state = AppState::seeded();
        state.search = "zzz".to_string();
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(DeviceGrid::new(&state), area);

        assert!(term.buffer_contains("No devices match"));
    }
}
