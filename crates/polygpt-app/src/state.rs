//! Application state (Model in TEA pattern)

use polygpt_core::{ResponseMode, WalletIdentity};

use crate::config::Settings;
use crate::conversation::Conversation;
use crate::ledger::LedgerSimulator;

/// Main content area shown next to the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// DeAI Inference (chat)
    #[default]
    Chat,
    /// Network Explorer (mock ledger dashboard)
    Dashboard,
}

impl Tab {
    pub fn next(self) -> Self {
        match self {
            Tab::Chat => Tab::Dashboard,
            Tab::Dashboard => Tab::Chat,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Chat => "DeAI Inference",
            Tab::Dashboard => "Network Explorer",
        }
    }
}

/// Overall application lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Transient one-line feedback shown under the input bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Chat history scroll position, counted in lines from the bottom
///
/// `0` follows the newest content. `max_offset` is refreshed by the renderer
/// each frame, once it knows how tall the history is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChatScroll {
    pub offset_from_bottom: usize,
    pub max_offset: usize,
}

impl ChatScroll {
    pub fn is_following(&self) -> bool {
        self.offset_from_bottom == 0
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset_from_bottom = self
            .offset_from_bottom
            .saturating_add(lines)
            .min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset_from_bottom = self.offset_from_bottom.saturating_sub(lines);
    }

    pub fn to_top(&mut self) {
        self.offset_from_bottom = self.max_offset;
    }

    pub fn to_bottom(&mut self) {
        self.offset_from_bottom = 0;
    }

    pub fn set_max_offset(&mut self, max_offset: usize) {
        self.max_offset = max_offset;
        self.offset_from_bottom = self.offset_from_bottom.min(max_offset);
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,

    pub tab: Tab,
    pub show_sidebar: bool,
    pub mode: ResponseMode,

    /// Prompt being typed
    pub input: String,

    /// Connected wallet; kept while a reconnect is in flight
    pub wallet: Option<WalletIdentity>,
    pub wallet_connecting: bool,

    pub conversation: Conversation,
    pub chat_scroll: ChatScroll,

    pub notice: Option<Notice>,

    /// Present only while the dashboard is visible
    pub ledger: Option<LedgerSimulator>,

    /// Animation frame counter for spinners
    pub spinner_frame: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            tab: Tab::Chat,
            show_sidebar: settings.ui.show_sidebar,
            mode: ResponseMode::from_quantum(settings.ui.start_in_quantum_mode),
            input: String::new(),
            wallet: None,
            wallet_connecting: false,
            conversation: Conversation::new(),
            chat_scroll: ChatScroll::default(),
            notice: None,
            ledger: None,
            spinner_frame: 0,
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn is_quantum(&self) -> bool {
        self.mode.is_quantum()
    }

    pub fn is_busy(&self) -> bool {
        self.conversation.is_busy()
    }

    pub fn is_wallet_connected(&self) -> bool {
        self.wallet.is_some()
    }

    /// Whether the prompt input currently accepts a submission
    pub fn input_enabled(&self) -> bool {
        self.is_wallet_connected() && !self.is_busy()
    }

    /// Whether anything on screen is animating
    pub fn is_animating(&self) -> bool {
        self.is_busy() || self.wallet_connecting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::new();
        assert_eq!(state.tab, Tab::Chat);
        assert!(state.show_sidebar);
        assert!(!state.is_quantum());
        assert!(!state.input_enabled());
        assert!(state.ledger.is_none());
        assert!(!state.should_quit());
    }

    #[test]
    fn test_settings_seed_ui_flags() {
        let mut settings = Settings::default();
        settings.ui.show_sidebar = false;
        settings.ui.start_in_quantum_mode = true;
        let state = AppState::with_settings(settings);
        assert!(!state.show_sidebar);
        assert!(state.is_quantum());
    }

    #[test]
    fn test_chat_scroll() {
        let mut scroll = ChatScroll::default();
        assert!(scroll.is_following());
        scroll.scroll_up(5);
        assert!(scroll.is_following(), "nothing to scroll before first render");

        scroll.set_max_offset(20);
        scroll.scroll_up(10);
        scroll.scroll_down(3);
        assert_eq!(scroll.offset_from_bottom, 7);
        scroll.set_max_offset(4);
        assert_eq!(scroll.offset_from_bottom, 4);
        scroll.to_top();
        assert_eq!(scroll.offset_from_bottom, 4);
        scroll.scroll_down(100);
        assert!(scroll.is_following());
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Chat.next(), Tab::Dashboard);
        assert_eq!(Tab::Dashboard.next(), Tab::Chat);
    }
}
