//! Semantic style builders

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

/// Rounded-border card container
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

/// Power indicator style for a device card
pub fn power(is_on: bool) -> Style {
    if is_on {
        Style::default().fg(palette::POWER_ON)
    } else {
        Style::default().fg(palette::POWER_OFF)
    }
}

/// Keybinding hint style for the status bar
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_styles_differ() {
        assert_ne!(power(true), power(false));
    }

    #[test]
    fn test_glass_block_focused_vs_unfocused() {
        let _focused = glass_block(true);
        let _unfocused = glass_block(false);
    }
}
