//! Prompt input bar
//!
//! Single-line prompt with a mode-dependent placeholder and the inference
//! cost in the bottom border. The bar is dimmed while no wallet is
//! connected or a response is streaming.

use polygpt_core::ResponseMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::icons::{self, IconSet};
use crate::theme::{palette, styles};

const CURSOR: &str = "\u{2588}"; // █

/// Placeholder shown while the input is empty
pub fn placeholder(wallet_connected: bool, mode: ResponseMode) -> &'static str {
    match (wallet_connected, mode) {
        (false, _) => "Connect wallet to start...",
        (true, ResponseMode::Baseline) => "Type your prompt...",
        (true, ResponseMode::Quantum) => "Enter quantum prompt...",
    }
}

/// Per-request cost label
pub fn inference_cost(mode: ResponseMode) -> &'static str {
    match mode {
        ResponseMode::Baseline => "0.0002 MATIC",
        ResponseMode::Quantum => "0.005 Q-MATIC",
    }
}

pub struct InputBar<'a> {
    input: &'a str,
    mode: ResponseMode,
    icons: IconSet,
    wallet_connected: bool,
    busy: bool,
    spinner_frame: usize,
}

impl<'a> InputBar<'a> {
    pub fn new(input: &'a str, mode: ResponseMode, icons: IconSet) -> Self {
        Self {
            input,
            mode,
            icons,
            wallet_connected: false,
            busy: false,
            spinner_frame: 0,
        }
    }

    pub fn with_wallet_connected(mut self, connected: bool) -> Self {
        self.wallet_connected = connected;
        self
    }

    pub fn with_busy(mut self, busy: bool, spinner_frame: usize) -> Self {
        self.busy = busy;
        self.spinner_frame = spinner_frame;
        self
    }

    fn enabled(&self) -> bool {
        self.wallet_connected && !self.busy
    }

    /// Tail of the input that fits in `width` columns
    fn visible_input(&self, width: usize) -> &'a str {
        let mut start = 0;
        let mut used = self.input.width();
        for (i, c) in self.input.char_indices() {
            if used <= width {
                break;
            }
            used -= unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            start = i + c.len_utf8();
        }
        &self.input[start..]
    }
}

impl Widget for InputBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cost = Line::from(vec![
            Span::styled(" INFERENCE COST: ", styles::text_muted()),
            Span::styled(inference_cost(self.mode), styles::accent_bold(self.mode)),
            Span::raw(" "),
        ])
        .centered();
        let block = styles::glass_block(self.enabled())
            .border_style(if self.enabled() {
                styles::accent(self.mode)
            } else {
                styles::border_inactive()
            })
            .title_bottom(cost);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        // Right-hand send indicator
        let send = if self.busy {
            icons::spinner(self.spinner_frame)
        } else if self.mode.is_quantum() {
            self.icons.atom()
        } else {
            "\u{27a4}" // ➤
        };
        let send_style = if self.enabled() {
            styles::accent_bold(self.mode)
        } else {
            styles::text_muted()
        };
        buf.set_line(
            inner.x + inner.width - 2,
            inner.y,
            &Line::from(Span::styled(send, send_style)),
            2,
        );

        let prompt_style = if self.enabled() {
            styles::accent_bold(self.mode)
        } else {
            styles::text_muted()
        };
        let text_width = inner.width.saturating_sub(6) as usize;

        let mut spans = vec![Span::styled(
            format!(" {} ", self.icons.chat()),
            prompt_style,
        )];
        if self.input.is_empty() {
            if self.enabled() {
                spans.push(Span::styled(CURSOR, styles::accent(self.mode)));
            }
            spans.push(Span::styled(
                placeholder(self.wallet_connected, self.mode),
                styles::text_muted(),
            ));
        } else {
            let text_style = if self.enabled() {
                Style::default().fg(palette::TEXT_BRIGHT)
            } else {
                styles::text_muted().add_modifier(Modifier::DIM)
            };
            spans.push(Span::styled(self.visible_input(text_width), text_style));
            if self.enabled() {
                spans.push(Span::styled(CURSOR, styles::accent(self.mode)));
            }
        }

        buf.set_line(
            inner.x,
            inner.y,
            &Line::from(spans),
            inner.width.saturating_sub(2),
        );
    }
}
