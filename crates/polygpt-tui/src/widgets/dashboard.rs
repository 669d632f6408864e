//! Network explorer dashboard
//!
//! Four stat cards over the live ledger list.

use polygpt_app::LedgerSimulator;
use polygpt_core::{Block, NetworkStats, ResponseMode};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::icons::IconSet;
use crate::theme::{palette, styles};

const CARD_HEIGHT: u16 = 4;

/// Below this width the cards are laid out two by two
const MIN_WIDTH_FOR_CARD_ROW: u16 = 64;

/// Rows per ledger entry
const ROWS_PER_BLOCK: u16 = 2;

pub const LEDGER_TITLE: &str = "Live Ledger (Quantum-Enhanced Polygon)";

/// Group digits in thousands (`12408` → `12,408`)
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Dashboard for the mock ledger
pub struct Dashboard<'a> {
    ledger: Option<&'a LedgerSimulator>,
    mode: ResponseMode,
    icons: IconSet,
}

impl<'a> Dashboard<'a> {
    pub fn new(ledger: Option<&'a LedgerSimulator>, mode: ResponseMode, icons: IconSet) -> Self {
        Self {
            ledger,
            mode,
            icons,
        }
    }

    fn cards(&self, stats: &NetworkStats) -> [(String, &'static str, String, &'static str, Style); 4] {
        [
            (
                self.icons.activity().to_string(),
                "NETWORK TPS",
                format!("{:.1}", stats.tps),
                "",
                Style::default().fg(palette::STATUS_YELLOW),
            ),
            (
                self.icons.cube().to_string(),
                "ACTIVE NODES",
                format_thousands(stats.active_nodes),
                "",
                Style::default().fg(palette::ACCENT),
            ),
            (
                self.icons.atom().to_string(),
                "QUBIT COHERENCE",
                format!("{:.2}", stats.qubit_coherence),
                "%",
                Style::default().fg(palette::QUANTUM_ACCENT),
            ),
            (
                "\u{224b}".to_string(), // ≋
                "ENTANGLEMENT FLUX",
                format!("{:.1}", stats.entanglement_flux),
                "T/s",
                Style::default().fg(palette::QUANTUM_GLOW),
            ),
        ]
    }

    fn render_cards(&self, stats: &NetworkStats, area: Rect, buf: &mut Buffer) {
        let slots: Vec<Rect> = if area.width >= MIN_WIDTH_FOR_CARD_ROW {
            Layout::horizontal([Constraint::Ratio(1, 4); 4])
                .split(area)
                .to_vec()
        } else {
            let rows = Layout::vertical([Constraint::Length(CARD_HEIGHT); 2]).split(area);
            rows.iter()
                .flat_map(|row| {
                    Layout::horizontal([Constraint::Ratio(1, 2); 2])
                        .split(*row)
                        .to_vec()
                })
                .collect()
        };

        for ((icon, label, value, unit, accent), slot) in self.cards(stats).into_iter().zip(slots) {
            Paragraph::new(vec![
                Line::from(vec![
                    Span::styled(format!("{icon} "), accent),
                    Span::styled(label, styles::text_muted().add_modifier(Modifier::BOLD)),
                ]),
                Line::from(vec![
                    Span::styled(
                        value,
                        Style::default()
                            .fg(palette::TEXT_BRIGHT)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!(" {unit}"), styles::text_muted()),
                ]),
            ])
            .block(styles::glass_block(false))
            .render(slot, buf);
        }
    }

    fn render_ledger(&self, ledger: &LedgerSimulator, area: Rect, buf: &mut Buffer) {
        let stats = ledger.stats();
        let footer = Line::from(vec![
            Span::styled(" Inferences ", styles::text_muted()),
            Span::styled(format_thousands(stats.total_inferences), styles::text_secondary()),
            Span::styled("  Gas ", styles::text_muted()),
            Span::styled(format!("{:.1} gwei ", stats.gas_price), styles::text_secondary()),
        ]);
        let block = styles::mode_block(self.mode)
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.icons.activity(), styles::accent(self.mode)),
                Span::styled(
                    format!(" {} ", LEDGER_TITLE.to_uppercase()),
                    styles::text_muted().add_modifier(Modifier::BOLD),
                ),
            ]))
            .title_bottom(footer.right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        let mut y = inner.y;
        for entry in ledger.blocks() {
            if y + ROWS_PER_BLOCK > inner.y + inner.height {
                break;
            }
            self.render_block_row(entry, Rect::new(inner.x, y, inner.width, ROWS_PER_BLOCK), buf);
            y += ROWS_PER_BLOCK;
        }
    }

    fn render_block_row(&self, block: &Block, area: Rect, buf: &mut Buffer) {
        let left_top = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.cube(), styles::accent(self.mode)),
            Span::raw(" "),
            Span::styled(
                format!("{:<5}", block.short_height()),
                styles::accent_bold(self.mode),
            ),
            Span::raw(" "),
            Span::styled(block.short_hash(), styles::text_primary()),
        ]);
        let left_bottom = Line::from(Span::styled(
            "         State: Superposition Confirmed",
            styles::text_muted().add_modifier(Modifier::ITALIC),
        ));
        let right_top = Line::from(Span::styled(
            format!("{} q-txns ", block.transactions),
            Style::default().fg(palette::QUANTUM_ACCENT),
        ));
        let right_bottom = Line::from(Span::styled(
            format!("{} Validated ", self.icons.check()),
            styles::text_muted(),
        ));

        buf.set_line(area.x, area.y, &left_top, area.width);
        buf.set_line(area.x, area.y + 1, &left_bottom, area.width);

        for (line, row) in [(right_top, area.y), (right_bottom, area.y + 1)] {
            let width = line.width() as u16;
            let left_width = if row == area.y {
                left_top.width() as u16
            } else {
                left_bottom.width() as u16
            };
            if left_width + width + 1 <= area.width {
                buf.set_line(area.x + area.width - width, row, &line, width);
            }
        }
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(ledger) = self.ledger else {
            Paragraph::new(Line::from(Span::styled(
                "Ledger paused",
                styles::text_muted(),
            )))
            .block(styles::glass_block(false))
            .render(area, buf);
            return;
        };

        let cards_height = if area.width >= MIN_WIDTH_FOR_CARD_ROW {
            CARD_HEIGHT
        } else {
            CARD_HEIGHT * 2
        };
        let [cards, ledger_area] =
            Layout::vertical([Constraint::Length(cards_height), Constraint::Min(0)]).areas(area);

        self.render_cards(ledger.stats(), cards, buf);
        self.render_ledger(ledger, ledger_area, buf);
    }
}
