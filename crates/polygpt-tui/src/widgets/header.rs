//! Header bar widget
//!
//! Network status pill on the left, key hints in the middle and the engine
//! label on the right. Sections are dropped from the middle outwards when
//! the terminal is too narrow.

use polygpt_core::ResponseMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::icons::IconSet;
use crate::theme::{palette, styles};

/// Status pill text for each mode
pub fn network_label(mode: ResponseMode) -> &'static str {
    match mode {
        ResponseMode::Baseline => "Polygon Network: Online",
        ResponseMode::Quantum => "Quantum Sync: Active",
    }
}

/// Engine version label for each mode
pub fn engine_label(mode: ResponseMode) -> &'static str {
    match mode {
        ResponseMode::Baseline => "GPT-5 Engine v2.5.1",
        ResponseMode::Quantum => "Q-Inference Engine v5.0-Q",
    }
}

/// Main header showing network state, key hints and engine version
pub struct MainHeader {
    mode: ResponseMode,
    icons: IconSet,
}

impl MainHeader {
    pub fn new(mode: ResponseMode, icons: IconSet) -> Self {
        Self { mode, icons }
    }

    fn pill(&self) -> Line<'static> {
        let color = match self.mode {
            ResponseMode::Baseline => palette::STATUS_GREEN,
            ResponseMode::Quantum => palette::QUANTUM_ACCENT,
        };
        Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.dot(), Style::default().fg(color)),
            Span::raw(" "),
            Span::styled(
                network_label(self.mode).to_uppercase(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ])
    }

    fn hints() -> Line<'static> {
        let mut spans = Vec::new();
        for (key, label) in [
            ("Tab", "View"),
            ("^W", "Wallet"),
            ("^Q", "Quantum"),
            ("^B", "Sidebar"),
            ("Esc", "Quit"),
        ] {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!("] {label}"), styles::text_muted()));
        }
        Line::from(spans)
    }

    fn engine(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(engine_label(self.mode), styles::text_muted()),
            Span::raw(" "),
        ])
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::mode_block(self.mode);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let pill = self.pill();
        let hints = Self::hints();
        let engine = self.engine();
        let pill_width = pill.width() as u16;
        let hints_width = hints.width() as u16;
        let engine_width = engine.width() as u16;

        buf.set_line(inner.x, inner.y, &pill, inner.width);

        if pill_width + engine_width + 2 > inner.width {
            return;
        }
        let engine_x = inner.x + inner.width - engine_width;
        buf.set_line(engine_x, inner.y, &engine, engine_width);

        // Hints are centered in the gap between pill and engine label
        let gap_start = inner.x + pill_width + 2;
        let gap_width = engine_x.saturating_sub(gap_start + 2);
        if hints_width <= gap_width {
            let hints_x = gap_start + (gap_width - hints_width) / 2;
            buf.set_line(hints_x, inner.y, &hints, hints_width);
        }
    }
}
