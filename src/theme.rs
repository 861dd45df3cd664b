//! Fixed color palette for the panel.

use ratatui::style::Color;

/// Colors used across the UI.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Regular text.
    pub text: Color,
    /// Secondary text (field labels, footer hints).
    pub muted: Color,
    /// Primary accent: stable badges, enabled actions, borders.
    pub primary: Color,
    /// Danger accent: non-stable badges, unlock action, errors.
    pub danger: Color,
    /// Inert controls (disabled lock button).
    pub disabled: Color,
}

/// The fixed palette.
#[must_use]
pub const fn theme() -> Theme {
    Theme {
        text: Color::Reset,
        muted: Color::DarkGray,
        primary: Color::Green,
        danger: Color::Red,
        disabled: Color::DarkGray,
    }
}
