//! Remote layout panel for the selected device

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use omnihub_app::remote::LIGHT_COLORS;
use omnihub_app::state::AppState;
use omnihub_app::RemoteState;

use crate::theme::styles;

/// Per-kind remote control surface
pub struct RemotePanel<'a> {
    state: &'a AppState,
}

impl<'a> RemotePanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn value_line(label: &str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {label:<12}"), styles::text_secondary()),
            Span::styled(value, styles::accent_bold()),
        ])
    }

    fn hint_line(hint: &'static str) -> Line<'static> {
        Line::from(Span::styled(format!("  {hint}"), styles::text_muted()))
    }

    fn layout_lines(&self, remote: &RemoteState) -> Vec<Line<'static>> {
        match remote {
            RemoteState::Tv { channel, volume } => vec![
                Self::value_line("Channel", format!("{channel}")),
                Self::value_line("Volume", format!("{volume}")),
                Line::default(),
                Self::hint_line("↑↓←→ nav · Enter ok · +/- vol · ]/[ ch"),
                Self::hint_line("h home · m menu · x exit · p power"),
            ],
            RemoteState::Ac { setpoint } => vec![
                Self::value_line("Setpoint", format!("{setpoint}°C")),
                Line::default(),
                Self::hint_line("+/- temperature · a auto · s swing · t turbo"),
                Self::hint_line("p power"),
            ],
            RemoteState::Decoder => vec![
                Self::hint_line("0-9 keypad · ↑↓←→ nav · Enter ok"),
                Self::hint_line("g guide · v pvr · i info · Backspace back"),
                Self::hint_line("p power"),
            ],
            RemoteState::Light { brightness, color } => vec![
                Self::value_line("Brightness", format!("{brightness}%")),
                Self::value_line(
                    "Color",
                    LIGHT_COLORS[color % LIGHT_COLORS.len()].to_string(),
                ),
                Line::default(),
                Self::hint_line("+/- brightness · c cycle color · w wheel"),
                Self::hint_line("p power"),
            ],
            RemoteState::Soundbar { volume } => vec![
                Self::value_line("Volume", format!("{volume}")),
                Line::default(),
                Self::hint_line("+/- volume · e equalizer · i input"),
                Self::hint_line("p power"),
            ],
        }
    }
}

impl Widget for RemotePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, lines) = match (self.state.selected_device(), &self.state.remote) {
            (Some(device), Some(remote)) => {
                let power = if device.power.is_on() { "ON" } else { "OFF" };
                let title = format!(
                    " {} {} · {} · {} ",
                    device.icon,
                    device.name,
                    device.brand,
                    power
                );
                (title, self.layout_lines(remote))
            }
            _ => (
                " Master Remote ".to_string(),
                vec![
                    Line::default(),
                    Line::from(Span::styled(
                        "  Select a device from the Dashboard (Enter)",
                        styles::text_muted(),
                    )),
                ],
            ),
        };

        let block = styles::glass_block(true).title(Span::styled(title, styles::text_primary()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use omnihub_app::state::AppState;

    #[test]
    fn test_placeholder_without_selection() {
        let state = AppState::seeded();
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(RemotePanel::new(&state), area);

        assert!(term.buffer_contains("Select a device from the Dashboard"));
    }

    #[test]
    fn test_tv_layout_shows_channel_and_volume() {
        let mut state = AppState::seeded();
        state.activate_device("1");
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(RemotePanel::new(&state), area);

        assert!(term.buffer_contains("Living Room TV"));
        assert!(term.buffer_contains("Channel"));
        assert!(term.buffer_contains("12"));
        assert!(term.buffer_contains("Volume"));
        assert!(term.buffer_contains("45"));
    }

    #[test]
    fn test_light_layout_shows_color_name() {
        let mut state = AppState::seeded();
        state.activate_device("7");
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(RemotePanel::new(&state), area);

        assert!(term.buffer_contains("Mood Lights"));
        assert!(term.buffer_contains("Brightness"));
        assert!(term.buffer_contains("80%"));
        assert!(term.buffer_contains("Red"));
    }
}
