//! Color palette for the OmniControl glass theme

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Device states ---
pub const POWER_ON: Color = Color::Green;
pub const POWER_OFF: Color = Color::DarkGray;
pub const OFFLINE: Color = Color::Red;
pub const BURST: Color = Color::Yellow;

// --- Broadcast panel ---
pub const FREQ_DIAL: Color = Color::LightCyan;
pub const TRANSMIT_LIVE: Color = Color::LightRed;

// --- Assistant transcript ---
pub const CHAT_USER: Color = Color::Cyan;
pub const CHAT_ASSISTANT: Color = Color::White;
