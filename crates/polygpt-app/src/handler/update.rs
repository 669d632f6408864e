//! Main update function - handles state transitions (TEA pattern)

use polygpt_core::prelude::*;
use polygpt_core::{MessageId, WalletIdentity};

use crate::conversation::SubmitError;
use crate::ledger::LedgerSimulator;
use crate::message::Message;
use crate::state::{AppPhase, AppState, Notice, Tab};

use super::{keys, UpdateAction, UpdateResult};

/// Lines moved by PageUp/PageDown
const PAGE_LINES: usize = 10;

/// Process a message and update state
/// Returns an optional action for the event loop to perform
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            if state.is_animating() {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            if state.ledger.take().is_some() {
                UpdateResult::action(UpdateAction::StopLedgerTimer)
            } else {
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Input
        // ─────────────────────────────────────────────────────────
        Message::InputChar(c) => {
            if state.tab != Tab::Chat {
                return UpdateResult::none();
            }
            if !state.is_wallet_connected() {
                state.notice = Some(Notice::warning(SubmitError::NoIdentity.to_string()));
                return UpdateResult::none();
            }
            if !state.is_busy() {
                state.input.push(c);
                state.notice = None;
            }
            UpdateResult::none()
        }

        Message::InputBackspace => {
            if state.input_enabled() {
                state.input.pop();
            }
            UpdateResult::none()
        }

        Message::InputClear => {
            if state.input_enabled() {
                state.input.clear();
            }
            UpdateResult::none()
        }

        Message::Submit => {
            let text = state.input.clone();
            handle_submit(state, &text, true)
        }

        Message::SubmitPrompt { text } => handle_submit(state, &text, false),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::NextTab => UpdateResult::message(Message::ShowTab(state.tab.next())),

        Message::ShowTab(tab) => handle_show_tab(state, tab),

        Message::ToggleSidebar => {
            state.show_sidebar = !state.show_sidebar;
            UpdateResult::none()
        }

        Message::ToggleQuantumMode => {
            state.mode = state.mode.toggled();
            info!("Response mode: {:?}", state.mode);
            UpdateResult::none()
        }

        Message::ScrollUp => {
            state.chat_scroll.scroll_up(1);
            UpdateResult::none()
        }

        Message::ScrollDown => {
            state.chat_scroll.scroll_down(1);
            UpdateResult::none()
        }

        Message::PageUp => {
            state.chat_scroll.scroll_up(PAGE_LINES);
            UpdateResult::none()
        }

        Message::PageDown => {
            state.chat_scroll.scroll_down(PAGE_LINES);
            UpdateResult::none()
        }

        Message::ScrollToTop => {
            state.chat_scroll.to_top();
            UpdateResult::none()
        }

        Message::ScrollToBottom => {
            state.chat_scroll.to_bottom();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Wallet
        // ─────────────────────────────────────────────────────────
        Message::ConnectWallet => {
            if state.wallet_connecting {
                debug!("Wallet connect already in flight, ignoring");
                return UpdateResult::none();
            }
            state.wallet_connecting = true;
            UpdateResult::action(UpdateAction::ConnectWallet)
        }

        Message::WalletConnected(identity) => handle_wallet_connected(state, identity),

        Message::WalletConnectFailed { error } => {
            warn!("Wallet connection failed: {}", error);
            state.wallet_connecting = false;
            state.notice = Some(Notice::error(format!("Wallet connection failed: {error}")));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Response stream
        // ─────────────────────────────────────────────────────────
        Message::StreamFragment { id, text } => {
            if state.conversation.apply_fragment(id, &text) {
                state.chat_scroll.to_bottom();
            } else {
                trace!("Dropping fragment for non-pending message {}", id);
            }
            UpdateResult::none()
        }

        Message::StreamCompleted { id } => {
            if state.conversation.complete(id) {
                debug!("Message {} confirmed", id);
            }
            UpdateResult::none()
        }

        Message::StreamFailed { id, error } => handle_stream_failed(state, id, &error),

        // ─────────────────────────────────────────────────────────
        // Ledger
        // ─────────────────────────────────────────────────────────
        Message::LedgerTick => {
            match state.ledger.as_mut() {
                Some(ledger) => ledger.tick(),
                None => trace!("Ledger tick while dashboard hidden, ignoring"),
            }
            UpdateResult::none()
        }
    }
}

fn handle_submit(state: &mut AppState, text: &str, from_input: bool) -> UpdateResult {
    match state
        .conversation
        .submit(text, state.wallet.as_ref(), state.mode)
    {
        Ok(ticket) => {
            info!(
                id = %ticket.assistant_id,
                mode = ?ticket.mode,
                "Prompt submitted ({} chars)",
                ticket.prompt.chars().count()
            );
            if from_input {
                state.input.clear();
            }
            state.notice = None;
            state.chat_scroll.to_bottom();
            UpdateResult::action(UpdateAction::StartStream(ticket))
        }
        Err(e) => {
            debug!("Submit rejected: {}", e);
            state.notice = Some(match e {
                SubmitError::EmptyPrompt => Notice::info(e.to_string()),
                SubmitError::NoIdentity | SubmitError::Busy => Notice::warning(e.to_string()),
            });
            UpdateResult::none()
        }
    }
}

fn handle_show_tab(state: &mut AppState, tab: Tab) -> UpdateResult {
    if state.tab == tab {
        return UpdateResult::none();
    }
    state.tab = tab;
    debug!("Switched to {}", tab.label());

    match tab {
        Tab::Dashboard => {
            state.ledger = Some(LedgerSimulator::new());
            UpdateResult::action(UpdateAction::StartLedgerTimer)
        }
        Tab::Chat => {
            state.ledger = None;
            UpdateResult::action(UpdateAction::StopLedgerTimer)
        }
    }
}

fn handle_wallet_connected(state: &mut AppState, identity: WalletIdentity) -> UpdateResult {
    info!("Wallet connected: {}", identity);
    state.wallet_connecting = false;
    state.wallet = Some(identity);
    state.notice = None;
    UpdateResult::none()
}

fn handle_stream_failed(state: &mut AppState, id: MessageId, error: &str) -> UpdateResult {
    if state.conversation.fail(id) {
        warn!("Response {} failed: {}", id, error);
        state.notice = Some(Notice::error(format!("Inference failed: {error}")));
        state.chat_scroll.to_bottom();
    }
    UpdateResult::none()
}
