//! Screen layout: fixed rows for header, tab strip and status bar, with
//! the active panel filling the rest

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub tabs: Rect,
    pub body: Rect,
    pub status: Rect,
}

/// Split the terminal into the standard regions.
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    ScreenAreas {
        header: rows[0],
        tabs: rows[1],
        body: rows[2],
        status: rows[3],
    }
}

/// Centered modal rectangle, clamped to the containing area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_tile_the_screen() {
        let areas = create(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.tabs.height, 1);
        assert_eq!(areas.status.height, 1);
        assert_eq!(areas.body.height, 24 - 3 - 1 - 1);
        assert_eq!(areas.status.y, 23);
    }

    #[test]
    fn test_centered_rect_is_clamped() {
        let area = Rect::new(0, 0, 40, 10);
        let modal = centered_rect(60, 20, area);
        assert!(modal.width <= area.width);
        assert!(modal.height <= area.height);

        let modal = centered_rect(20, 6, area);
        assert_eq!(modal.x, 10);
        assert_eq!(modal.y, 2);
    }
}
