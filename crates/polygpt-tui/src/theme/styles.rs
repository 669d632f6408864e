//! Semantic style builders.

use polygpt_core::{MessageStatus, ResponseMode};
use ratatui::style::{Color, Modifier, Style};
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

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---

/// Accent color for the active response mode
pub fn accent_color(mode: ResponseMode) -> Color {
    match mode {
        ResponseMode::Baseline => palette::ACCENT,
        ResponseMode::Quantum => palette::QUANTUM_ACCENT,
    }
}

pub fn accent(mode: ResponseMode) -> Style {
    Style::default().fg(accent_color(mode))
}

pub fn accent_bold(mode: ResponseMode) -> Style {
    accent(mode).add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Highlighted navigation entry
pub fn focused_selected(mode: ResponseMode) -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(accent_color(mode))
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}

/// Rounded card whose border follows the mode accent
pub fn mode_block(mode: ResponseMode) -> Block<'static> {
    glass_block(false).border_style(match mode {
        ResponseMode::Baseline => border_inactive(),
        ResponseMode::Quantum => Style::default().fg(palette::QUANTUM_GLOW),
    })
}

// --- Message status mapping ---

/// Status label and style for an assistant message.
///
/// `quantum` selects the quantum wording for confirmed messages.
pub fn status_indicator(status: MessageStatus, quantum: bool) -> (&'static str, Style) {
    match status {
        MessageStatus::Pending => (
            "Computing...",
            Style::default()
                .fg(palette::STATUS_YELLOW)
                .add_modifier(Modifier::ITALIC),
        ),
        MessageStatus::Confirmed if quantum => (
            "State Collapsed",
            Style::default().fg(palette::QUANTUM_ACCENT),
        ),
        MessageStatus::Confirmed => ("Tx Confirmed", Style::default().fg(palette::STATUS_GREEN)),
        MessageStatus::Failed => ("Reverted", Style::default().fg(palette::STATUS_RED)),
    }
}
