//! Palette and semantic styling for the remote.

use ratatui::style::{Color, Modifier, Style};

// ── Core Palette ──────────────────────────────────────────────────────

pub const ROKU_PURPLE: Color = Color::Rgb(111, 26, 177); // #6f1ab1
pub const LILAC: Color = Color::Rgb(190, 140, 255); // #be8cff
pub const SOFT_WHITE: Color = Color::Rgb(221, 221, 230); // #dddde6
pub const SUCCESS_GREEN: Color = Color::Rgb(80, 250, 123); // #50fa7b
pub const ERROR_RED: Color = Color::Rgb(255, 99, 99); // #ff6363
pub const AMBER: Color = Color::Rgb(255, 196, 87); // #ffc457

// ── Extended Palette ──────────────────────────────────────────────────

pub const BORDER_GRAY: Color = Color::Rgb(98, 100, 130); // #626482
pub const BG_DARK: Color = Color::Rgb(24, 20, 33); // #181421

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for panels.
pub fn title_style() -> Style {
    Style::default().fg(LILAC).add_modifier(Modifier::BOLD)
}

/// Border of the panel holding focus.
pub fn border_focused() -> Style {
    Style::default().fg(ROKU_PURPLE)
}

pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint text (e.g., "q quit  Esc back").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(LILAC).add_modifier(Modifier::BOLD)
}

/// Description next to a key hint.
pub fn hint_desc() -> Style {
    Style::default().fg(SOFT_WHITE)
}

/// The most recently pressed key in the remote panel.
pub fn key_flash() -> Style {
    Style::default()
        .fg(BG_DARK)
        .bg(LILAC)
        .add_modifier(Modifier::BOLD)
}

/// Text typed into an input field.
pub fn input_text() -> Style {
    Style::default().fg(SOFT_WHITE)
}

/// An app that Enter would launch.
pub fn match_highlight() -> Style {
    Style::default().fg(SUCCESS_GREEN).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(BORDER_GRAY)
}

pub fn status_info() -> Style {
    Style::default().fg(SOFT_WHITE)
}

pub fn status_success() -> Style {
    Style::default().fg(SUCCESS_GREEN)
}

pub fn status_error() -> Style {
    Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD)
}

/// Device indicator in the status line.
pub fn device_badge() -> Style {
    Style::default().fg(AMBER)
}
