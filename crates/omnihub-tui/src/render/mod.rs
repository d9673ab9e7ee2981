//! Main render/view function (View in TEA pattern)


use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use omnihub_app::state::{AppState, InputMode, Tab};

use crate::layout;
use crate::theme::palette;
use crate::widgets;

/// Render the complete UI. Pure: reads state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill the terminal with the deepest background color
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(state), areas.header);
    frame.render_widget(widgets::TabBar::new(state.tab), areas.tabs);

    match state.tab {
        Tab::Dashboard => {
            frame.render_widget(widgets::DeviceGrid::new(state), areas.body);
        }
        Tab::Remotes => {
            // Remote surface on top, protocol log pinned below
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(7)])
                .split(areas.body);
            frame.render_widget(widgets::RemotePanel::new(state), rows[0]);
            frame.render_widget(widgets::TransmitLogView::new(&state.transmit), rows[1]);
        }
        Tab::Fm => {
            frame.render_widget(widgets::FmPanel::new(&state.fm), areas.body);
        }
        Tab::Assistant => {
            frame.render_widget(widgets::AssistantView::new(&state.assistant), areas.body);
        }
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    if state.mode == InputMode::AddDevice {
        let modal = layout::centered_rect(44, 9, area);
        frame.render_widget(widgets::AddDeviceModal::new(&state.add_form), modal);
    }
}
