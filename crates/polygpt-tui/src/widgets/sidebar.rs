//! Sidebar widget
//!
//! Brand, wallet button, navigation, quantum mode switch and the
//! verification blurb.

use polygpt_app::Tab;
use polygpt_core::{ResponseMode, WalletIdentity};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::icons::{self, IconSet};
use crate::theme::{palette, styles};

/// Rows reserved for the verification blurb at the bottom
const BLURB_HEIGHT: u16 = 7;

const STANDARD_BLURB: &str =
    "Every response is verified across 4,000+ active validator nodes on the Polygon Layer-2 network.";
const QUANTUM_BLURB: &str = "Every response is computed using 128 neural qubits with 99.9% coherence. Proof of Probability (PoP) consensus enabled.";

/// Left-hand navigation panel
pub struct Sidebar<'a> {
    tab: Tab,
    mode: ResponseMode,
    icons: IconSet,
    wallet: Option<&'a WalletIdentity>,
    connecting: bool,
    spinner_frame: usize,
}

impl<'a> Sidebar<'a> {
    pub fn new(tab: Tab, mode: ResponseMode, icons: IconSet) -> Self {
        Self {
            tab,
            mode,
            icons,
            wallet: None,
            connecting: false,
            spinner_frame: 0,
        }
    }

    /// Wallet button state
    pub fn with_wallet(mut self, wallet: Option<&'a WalletIdentity>, connecting: bool) -> Self {
        self.wallet = wallet;
        self.connecting = connecting;
        self
    }

    pub fn with_spinner_frame(mut self, frame: usize) -> Self {
        self.spinner_frame = frame;
        self
    }

    fn brand_lines(&self) -> Vec<Line<'static>> {
        let (icon, caption) = match self.mode {
            ResponseMode::Baseline => (self.icons.brand(), "NEURAL MODE"),
            ResponseMode::Quantum => (self.icons.atom(), "QUANTUM ENGINE ACTIVE"),
        };
        vec![
            Line::from(vec![
                Span::styled(format!(" {icon} "), styles::accent_bold(self.mode)),
                Span::styled(
                    "PolyGPT-5",
                    Style::default()
                        .fg(palette::TEXT_BRIGHT)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(format!("   {caption}"), styles::text_muted())),
        ]
    }

    fn wallet_lines(&self) -> Vec<Line<'static>> {
        let button = match (self.connecting, self.wallet) {
            (true, _) => Line::from(vec![
                Span::styled(
                    format!(" {} ", icons::spinner(self.spinner_frame)),
                    styles::accent_bold(self.mode),
                ),
                Span::styled("Connecting...", styles::text_secondary()),
            ]),
            (false, Some(wallet)) => Line::from(vec![
                Span::styled(
                    format!(" {} ", self.icons.wallet()),
                    Style::default().fg(palette::STATUS_GREEN),
                ),
                Span::styled(
                    wallet.to_string(),
                    Style::default()
                        .fg(palette::STATUS_GREEN)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            (false, None) => Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    format!(" {} Connect Wallet ", self.icons.wallet()),
                    styles::focused_selected(self.mode),
                ),
            ]),
        };

        vec![
            button,
            Line::from(vec![
                Span::raw("   "),
                Span::styled("Ctrl+W", styles::keybinding()),
                Span::styled(
                    if self.wallet.is_some() {
                        " reconnect"
                    } else {
                        " connect"
                    },
                    styles::text_muted(),
                ),
            ]),
        ]
    }

    fn nav_line(&self, icon: &str, label: &'static str, active: bool, enabled: bool) -> Line<'static> {
        let text = format!(" {icon} {label}");
        let style = if active {
            styles::focused_selected(self.mode)
        } else if enabled {
            styles::text_secondary()
        } else {
            styles::text_muted()
        };
        Line::from(Span::styled(text, style))
    }

    fn section_title(title: &'static str) -> Line<'static> {
        Line::from(Span::styled(
            format!(" {title}"),
            styles::text_muted().add_modifier(Modifier::BOLD),
        ))
    }

    fn quantum_switch(&self) -> Line<'static> {
        let (knob, knob_style) = match self.mode {
            ResponseMode::Quantum => (
                "[ ON]",
                Style::default()
                    .fg(palette::CONTRAST_FG)
                    .bg(palette::QUANTUM_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            ResponseMode::Baseline => ("[OFF]", styles::text_muted()),
        };
        let label_style = if self.mode.is_quantum() {
            styles::accent_bold(self.mode)
        } else {
            styles::text_secondary()
        };
        Line::from(vec![
            Span::styled(format!(" {} Quantum Mode ", self.icons.atom()), label_style),
            Span::styled(knob, knob_style),
        ])
    }

    fn blurb(&self) -> Vec<Line<'static>> {
        let (icon, title, body) = match self.mode {
            ResponseMode::Baseline => (
                self.icons.shield(),
                "STANDARD VERIFICATION",
                STANDARD_BLURB,
            ),
            ResponseMode::Quantum => (self.icons.atom(), "QUANTUM VERIFICATION", QUANTUM_BLURB),
        };
        vec![
            Line::from(Span::styled(
                format!("{icon} {title}"),
                styles::accent_bold(self.mode),
            )),
            Line::from(Span::styled(body, styles::text_secondary())),
        ]
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::mode_block(self.mode);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = self.brand_lines();
        lines.push(Line::default());
        lines.extend(self.wallet_lines());
        lines.push(Line::default());
        lines.push(self.nav_line(
            self.icons.chat(),
            Tab::Chat.label(),
            self.tab == Tab::Chat,
            true,
        ));
        lines.push(self.nav_line(
            self.icons.explorer(),
            Tab::Dashboard.label(),
            self.tab == Tab::Dashboard,
            true,
        ));
        lines.push(Line::default());
        lines.push(Self::section_title("QUANTUM CORE"));
        lines.push(self.quantum_switch());
        lines.push(Line::default());
        lines.push(Self::section_title("RESOURCES"));
        lines.push(self.nav_line(self.icons.globe(), "Node Map", false, false));
        lines.push(self.nav_line(self.icons.settings(), "Settings", false, false));

        let top_height = lines.len() as u16;
        if inner.height >= top_height + BLURB_HEIGHT {
            let [top, blurb] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(BLURB_HEIGHT)])
                    .areas(inner);
            Paragraph::new(lines).render(top, buf);

            let blurb_block = styles::glass_block(false).border_style(styles::accent(self.mode));
            Paragraph::new(self.blurb())
                .wrap(Wrap { trim: true })
                .block(blurb_block)
                .render(blurb, buf);
        } else {
            Paragraph::new(lines).render(inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use polygpt_app::config::IconMode;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_sidebar_baseline() {
        let mut term = TestTerminal::with_size(28, 30);
        let sidebar = Sidebar::new(Tab::Chat, ResponseMode::Baseline, icons());
        term.render_widget(sidebar, term.area());

        assert!(term.buffer_contains("PolyGPT-5"));
        assert!(term.buffer_contains("NEURAL MODE"));
        assert!(term.buffer_contains("Connect Wallet"));
        assert!(term.buffer_contains("DeAI Inference"));
        assert!(term.buffer_contains("Network Explorer"));
        assert!(term.buffer_contains("Node Map"));
        assert!(term.buffer_contains("Settings"));
        assert!(term.buffer_contains("[OFF]"));
        assert!(term.buffer_contains("STANDARD VERIFICATION"));
    }

    #[test]
    fn test_sidebar_quantum() {
        let mut term = TestTerminal::with_size(28, 30);
        let sidebar = Sidebar::new(Tab::Chat, ResponseMode::Quantum, icons());
        term.render_widget(sidebar, term.area());

        assert!(term.buffer_contains("QUANTUM ENGINE ACTIVE"));
        assert!(term.buffer_contains("[ ON]"));
        assert!(term.buffer_contains("QUANTUM VERIFICATION"));
    }

    #[test]
    fn test_sidebar_connected_wallet() {
        let mut term = TestTerminal::with_size(28, 30);
        let wallet = WalletIdentity::new("0x1234abcd...ef01");
        let sidebar =
            Sidebar::new(Tab::Chat, ResponseMode::Baseline, icons()).with_wallet(Some(&wallet), false);
        term.render_widget(sidebar, term.area());

        assert!(term.buffer_contains("0x1234abcd...ef01"));
        assert!(!term.buffer_contains("Connect Wallet"));
        assert!(term.buffer_contains("reconnect"));
    }

    #[test]
    fn test_sidebar_connecting_shows_spinner() {
        let mut term = TestTerminal::with_size(28, 30);
        let sidebar = Sidebar::new(Tab::Chat, ResponseMode::Baseline, icons())
            .with_wallet(None, true)
            .with_spinner_frame(2);
        term.render_widget(sidebar, term.area());

        assert!(term.buffer_contains("Connecting..."));
        assert!(term.buffer_contains(icons::spinner(2)));
    }

    #[test]
    fn test_active_tab_is_highlighted() {
        let mut term = TestTerminal::with_size(28, 30);
        let sidebar = Sidebar::new(Tab::Dashboard, ResponseMode::Baseline, icons());
        term.render_widget(sidebar, term.area());

        let row = (0..30)
            .find(|&y| term.line_contains(y, "Network Explorer"))
            .unwrap();
        let cell = &term.buffer()[(3, row)];
        assert_eq!(cell.bg, palette::ACCENT);
    }

    #[test]
    fn test_short_sidebar_drops_blurb() {
        let mut term = TestTerminal::with_size(28, 18);
        let sidebar = Sidebar::new(Tab::Chat, ResponseMode::Baseline, icons());
        term.render_widget(sidebar, term.area());

        assert!(term.buffer_contains("PolyGPT-5"));
        assert!(!term.buffer_contains("VERIFICATION"));
    }
}
