//! Key event handlers for each tab

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Tab};

/// Convert key events to messages based on the visible tab
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_global_key(key) {
        return Some(msg);
    }
    match state.tab {
        Tab::Chat => handle_key_chat(key),
        Tab::Dashboard => handle_key_dashboard(key),
    }
}

/// Keys that mean the same thing everywhere
fn handle_global_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Tab | InputKey::BackTab => Some(Message::NextTab),
        InputKey::CharCtrl('w') => Some(Message::ConnectWallet),
        InputKey::CharCtrl('q') => Some(Message::ToggleQuantumMode),
        InputKey::CharCtrl('b') => Some(Message::ToggleSidebar),
        _ => None,
    }
}

/// Chat tab: printable keys go to the prompt input
fn handle_key_chat(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::Submit),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::CharCtrl('u') => Some(Message::InputClear),
        InputKey::Char(c) => Some(Message::InputChar(c)),

        InputKey::Up => Some(Message::ScrollUp),
        InputKey::Down => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home => Some(Message::ScrollToTop),
        InputKey::End => Some(Message::ScrollToBottom),
        _ => None,
    }
}

/// Dashboard tab: no text input, so plain letters work as shortcuts
fn handle_key_dashboard(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('w') => Some(Message::ConnectWallet),
        InputKey::Char('m') => Some(Message::ToggleQuantumMode),
        InputKey::Char('s') => Some(Message::ToggleSidebar),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
