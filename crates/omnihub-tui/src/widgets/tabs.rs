//! Tab strip for the four top-level panels

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use omnihub_app::state::Tab;

use crate::theme::styles;

/// Numbered tab strip; the number doubles as the keyboard shortcut
pub struct TabBar {
    selected: Tab,
}

impl TabBar {
    pub fn new(selected: Tab) -> Self {
        Self { selected }
    }

    fn titles() -> Vec<Line<'static>> {
        Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                Line::from(vec![
                    Span::styled(format!("{}", i + 1), styles::keybinding()),
                    Span::raw(format!(" {} ", tab.title())),
                ])
            })
            .collect()
    }
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let padded = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };

        Tabs::new(Self::titles())
            .select(self.selected.index())
            .style(styles::text_secondary())
            .highlight_style(styles::accent_bold())
            .divider("│")
            .render(padded, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_all_tab_titles_render() {
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(TabBar::new(Tab::Fm), area);

        assert!(term.buffer_contains("Dashboard"));
        assert!(term.buffer_contains("Master Remote"));
        assert!(term.buffer_contains("FM Link"));
        assert!(term.buffer_contains("AI Hub"));
    }
}
