//! Chat history widget
//!
//! Renders the conversation as aligned bubbles (user on the right, assistant
//! on the left) with a status line under each assistant message. When the
//! conversation is empty a welcome screen with three feature boxes is shown
//! instead.
//!
//! Scrolling is counted in lines from the bottom ([`ChatScroll`]), so new
//! content stays in view while the user is following and stays put while
//! they have scrolled up.

mod wrap;

pub use wrap::wrap_text;

use polygpt_app::state::ChatScroll;
use polygpt_core::{ChatMessage, MessageStatus, ResponseMode};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget, Wrap,
    },
};

use crate::theme::icons::{self, IconSet};
use crate::theme::{palette, styles};

/// Bubbles take at most this share of the panel width
const BUBBLE_WIDTH_PERCENT: usize = 85;

/// Left gutter of assistant bubbles (`│ `)
const GUTTER: &str = "\u{2502} ";

/// Scrollable conversation view
pub struct ChatView<'a> {
    messages: &'a [ChatMessage],
    mode: ResponseMode,
    icons: IconSet,
    spinner_frame: usize,
}

impl<'a> ChatView<'a> {
    pub fn new(messages: &'a [ChatMessage], mode: ResponseMode, icons: IconSet) -> Self {
        Self {
            messages,
            mode,
            icons,
            spinner_frame: 0,
        }
    }

    pub fn with_spinner_frame(mut self, frame: usize) -> Self {
        self.spinner_frame = frame;
        self
    }

    /// Flatten the whole conversation into display lines for `width` columns
    fn build_lines(&self, width: usize) -> Vec<Line<'static>> {
        let bubble_width = (width * BUBBLE_WIDTH_PERCENT / 100).max(8);
        let mut lines = Vec::new();

        for (i, msg) in self.messages.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            if msg.is_user() {
                self.push_user(&mut lines, msg, bubble_width);
            } else {
                self.push_assistant(&mut lines, msg, bubble_width);
            }
        }
        lines
    }

    fn push_user(&self, lines: &mut Vec<Line<'static>>, msg: &ChatMessage, bubble_width: usize) {
        lines.push(
            Line::from(vec![
                Span::styled(msg.formatted_time(), styles::text_muted()),
                Span::raw(" "),
                Span::styled(
                    format!("You {}", self.icons.wallet()),
                    styles::text_secondary().add_modifier(Modifier::BOLD),
                ),
            ])
            .alignment(Alignment::Right),
        );

        let bubble = Style::default()
            .fg(palette::TEXT_BRIGHT)
            .bg(palette::USER_BUBBLE_BG);
        for text in wrap_text(&msg.content, bubble_width.saturating_sub(2)) {
            lines.push(
                Line::from(Span::styled(format!(" {text} "), bubble)).alignment(Alignment::Right),
            );
        }
    }

    fn push_assistant(
        &self,
        lines: &mut Vec<Line<'static>>,
        msg: &ChatMessage,
        bubble_width: usize,
    ) {
        let quantum = msg.is_quantum();
        let msg_mode = ResponseMode::from_quantum(quantum);
        let icon = if quantum {
            self.icons.atom()
        } else {
            self.icons.brand()
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{icon} PolyGPT-5"), styles::accent_bold(msg_mode)),
            Span::raw(" "),
            Span::styled(msg.formatted_time(), styles::text_muted()),
        ]));

        let gutter_style = if quantum {
            Style::default().fg(palette::QUANTUM_ACCENT)
        } else {
            styles::border_inactive()
        };
        let text_style = match (quantum, msg.status) {
            (true, MessageStatus::Pending) => Style::default()
                .fg(palette::QUANTUM_ACCENT)
                .bg(palette::QUANTUM_BUBBLE_BG),
            (true, _) => styles::text_primary().bg(palette::QUANTUM_BUBBLE_BG),
            (false, _) => styles::text_primary().bg(palette::ASSISTANT_BUBBLE_BG),
        };

        if msg.content.is_empty() && msg.is_pending() {
            lines.push(Line::from(vec![
                Span::styled(GUTTER, gutter_style),
                Span::styled(icons::spinner(self.spinner_frame), styles::text_muted()),
            ]));
        } else {
            for text in wrap_text(&msg.content, bubble_width.saturating_sub(2)) {
                lines.push(Line::from(vec![
                    Span::styled(GUTTER, gutter_style),
                    Span::styled(text, text_style),
                ]));
            }
        }

        lines.push(self.status_line(msg));
    }

    fn status_line(&self, msg: &ChatMessage) -> Line<'static> {
        let (label, style) = styles::status_indicator(msg.status, msg.is_quantum());
        let marker = match msg.status {
            MessageStatus::Pending => icons::spinner(self.spinner_frame),
            MessageStatus::Confirmed => self.icons.check(),
            MessageStatus::Failed => self.icons.close(),
        };

        let mut spans = vec![
            Span::raw("  "),
            Span::styled(marker, style),
            Span::raw(" "),
            Span::styled(label.to_uppercase(), style.add_modifier(Modifier::BOLD)),
        ];
        if let Some(hash) = &msg.tx_hash {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(format!("HASH: {hash}"), styles::text_muted()));
        }
        Line::from(spans)
    }

    fn render_welcome(&self, area: Rect, buf: &mut Buffer) {
        let (icon, title, body) = match self.mode {
            ResponseMode::Baseline => (
                self.icons.brand(),
                "Welcome to PolyGPT-5",
                "The world's first GPT-5 class AI integrated with the speed and security of the Polygon blockchain ecosystem.",
            ),
            ResponseMode::Quantum => (
                self.icons.atom(),
                "Quantum-Enhanced PolyGPT-5",
                "You have entered quantum supremacy mode. The AI uses probabilistic reasoning to analyze the most complex requests.",
            ),
        };

        let [_, intro, boxes, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(6),
            Constraint::Length(4),
            Constraint::Fill(1),
        ])
        .areas(area);

        let intro_lines = vec![
            Line::from(Span::styled(icon, styles::accent_bold(self.mode))),
            Line::default(),
            Line::from(Span::styled(
                title,
                styles::accent_bold(self.mode).fg(match self.mode {
                    ResponseMode::Baseline => palette::TEXT_BRIGHT,
                    ResponseMode::Quantum => palette::QUANTUM_ACCENT,
                }),
            )),
            Line::from(Span::styled(body, styles::text_secondary())),
        ];
        Paragraph::new(intro_lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(intro, buf);

        let boxes_area = centered_width(boxes, 72);
        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(boxes_area);
        for ((title, desc), column) in feature_boxes(self.mode).into_iter().zip(columns.iter()) {
            Paragraph::new(vec![
                Line::from(Span::styled(title, styles::accent_bold(self.mode))),
                Line::from(Span::styled(desc, styles::text_muted())),
            ])
            .wrap(Wrap { trim: true })
            .block(styles::glass_block(false).border_style(styles::accent(self.mode)))
            .render(*column, buf);
        }
    }
}

/// Title and description of the three welcome feature boxes
pub fn feature_boxes(mode: ResponseMode) -> [(&'static str, &'static str); 3] {
    match mode {
        ResponseMode::Baseline => [
            ("Verifiable", "Proof of Inference on chain"),
            ("Decentralized", "4000+ Distributed nodes"),
            ("Fast", "Sub-second transitions"),
        ],
        ResponseMode::Quantum => [
            ("Q-Stability", "Coherence at 99.9%"),
            ("Entanglement", "Cross-node quantum linking"),
            ("Collapse", "Probability wave optimization"),
        ],
    }
}

fn centered_width(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

impl StatefulWidget for ChatView<'_> {
    type State = ChatScroll;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = styles::mode_block(self.mode);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.messages.is_empty() {
            state.set_max_offset(0);
            self.render_welcome(inner, buf);
            return;
        }

        // One column reserved for the scrollbar
        let text_area = Rect {
            width: inner.width.saturating_sub(1),
            ..inner
        };
        let lines = self.build_lines(text_area.width as usize);
        let total_lines = lines.len();
        let visible_lines = text_area.height as usize;

        state.set_max_offset(total_lines.saturating_sub(visible_lines));
        let end = total_lines - state.offset_from_bottom;
        let start = end.saturating_sub(visible_lines);

        let visible: Vec<Line> = lines.into_iter().skip(start).take(end - start).collect();
        Paragraph::new(visible).render(text_area, buf);

        if total_lines > visible_lines {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(styles::border_inactive());

            let mut scrollbar_state =
                ScrollbarState::new(total_lines.saturating_sub(visible_lines)).position(start);
            scrollbar.render(inner, buf, &mut scrollbar_state);
        }
    }
}

impl Widget for ChatView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut state = ChatScroll::default();
        StatefulWidget::render(self, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests;
