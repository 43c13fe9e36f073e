//! Palette and semantic styling for the dashboard.
//!
//! Three semantic styles cover everything: regular text, alerts, and the
//! border rules between regions. The content header adds a reverse
//! highlight on top of the regular style.

use ratatui::style::{Color, Modifier, Style};

// ── Palette ───────────────────────────────────────────────────────────

pub const INK: Color = Color::Black;
pub const PAPER: Color = Color::White;
pub const ALERT_RED: Color = Color::Red;
pub const RULE_GRAY: Color = Color::DarkGray;

// ── Semantic Styles ───────────────────────────────────────────────────

/// Navigation, status, and view text.
pub fn regular() -> Style {
    Style::default().fg(INK).bg(PAPER)
}

/// Splash banner, size warnings, and the unknown-view header.
pub fn alert() -> Style {
    Style::default()
        .fg(ALERT_RED)
        .bg(PAPER)
        .add_modifier(Modifier::BOLD)
}

/// Separator rules and the splash border.
pub fn border() -> Style {
    Style::default().fg(RULE_GRAY)
}

/// Header naming the active content view.
pub fn header_active() -> Style {
    Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

/// Title bar label.
pub fn title() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}
