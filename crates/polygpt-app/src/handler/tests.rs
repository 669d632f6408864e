//! Tests for handler module

use polygpt_core::{MessageStatus, ResponseMode, WalletIdentity};

use super::*;
use crate::conversation::FAILURE_NOTICE;
use crate::input_key::InputKey;
use crate::state::{AppState, NoticeLevel, Tab};

fn connected_state() -> AppState {
    let mut state = AppState::new();
    state.wallet = Some(WalletIdentity::new("0xdeadbeef...cafe"));
    state
}

/// Run a message and any follow-ups, collecting the actions produced
fn run(state: &mut AppState, msg: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(msg);
    while let Some(m) = next {
        let result = update(state, m);
        actions.extend(result.action);
        next = result.message;
    }
    actions
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        run(state, Message::Key(InputKey::Char(c)));
    }
}

fn submit_and_take_ticket(state: &mut AppState, text: &str) -> crate::conversation::SubmitTicket {
    type_text(state, text);
    match run(state, Message::Key(InputKey::Enter)).pop() {
        Some(UpdateAction::StartStream(ticket)) => ticket,
        other => panic!("expected StartStream, got {:?}", other),
    }
}

// ─────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_chat_keys_map_to_input_messages() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Char('w')),
        Some(Message::InputChar('w'))
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::Submit)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('u')),
        Some(Message::InputClear)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::PageUp),
        Some(Message::PageUp)
    ));
}

#[test]
fn test_global_shortcuts() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('w')),
        Some(Message::ConnectWallet)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('q')),
        Some(Message::ToggleQuantumMode)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('b')),
        Some(Message::ToggleSidebar)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Tab),
        Some(Message::NextTab)
    ));
    assert!(matches!(handle_key(&state, InputKey::Esc), Some(Message::Quit)));
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_dashboard_letter_shortcuts() {
    let mut state = AppState::new();
    state.tab = Tab::Dashboard;
    assert!(matches!(
        handle_key(&state, InputKey::Char('w')),
        Some(Message::ConnectWallet)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('m')),
        Some(Message::ToggleQuantumMode)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('s')),
        Some(Message::ToggleSidebar)
    ));
    assert!(matches!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit)));
    assert!(handle_key(&state, InputKey::Char('x')).is_none());
    assert!(handle_key(&state, InputKey::Enter).is_none());
}

// ─────────────────────────────────────────────────────────
// Input & submission
// ─────────────────────────────────────────────────────────

#[test]
fn test_typing_requires_wallet() {
    let mut state = AppState::new();
    type_text(&mut state, "hi");
    assert!(state.input.is_empty());
    let notice = state.notice.as_ref().unwrap();
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert_eq!(
        notice.text,
        "Please connect your wallet to authorize AI inference."
    );
}

#[test]
fn test_input_editing() {
    let mut state = connected_state();
    type_text(&mut state, "helo");
    run(&mut state, Message::Key(InputKey::Backspace));
    type_text(&mut state, "lo");
    assert_eq!(state.input, "hello");
    run(&mut state, Message::Key(InputKey::CharCtrl('u')));
    assert!(state.input.is_empty());
}

#[test]
fn test_submit_appends_messages_and_starts_stream() {
    let mut state = connected_state();
    let ticket = submit_and_take_ticket(&mut state, "hello");

    assert_eq!(ticket.prompt, "hello");
    assert_eq!(ticket.mode, ResponseMode::Baseline);
    assert!(state.input.is_empty());
    assert!(state.is_busy());
    assert!(!state.input_enabled());
    assert_eq!(state.conversation.len(), 2);
}

#[test]
fn test_submit_uses_current_mode() {
    let mut state = connected_state();
    run(&mut state, Message::ToggleQuantumMode);
    let ticket = submit_and_take_ticket(&mut state, "explain entanglement");
    assert_eq!(ticket.mode, ResponseMode::Quantum);

    // Toggling afterwards does not touch the pending message
    run(&mut state, Message::ToggleQuantumMode);
    assert!(state.conversation.get(ticket.assistant_id).unwrap().is_quantum());
}

#[test]
fn test_empty_submit_is_rejected_without_mutation() {
    let mut state = connected_state();
    type_text(&mut state, "   ");
    let actions = run(&mut state, Message::Submit);
    assert!(actions.is_empty());
    assert!(state.conversation.is_empty());
    assert_eq!(state.input, "   ");
}

#[test]
fn test_submit_without_wallet_sets_notice() {
    let mut state = AppState::new();
    let actions = run(
        &mut state,
        Message::SubmitPrompt {
            text: "hello".into(),
        },
    );
    assert!(actions.is_empty());
    assert!(state.conversation.is_empty());
    assert!(state.notice.is_some());
}

#[test]
fn test_submit_while_busy_rejected() {
    let mut state = connected_state();
    submit_and_take_ticket(&mut state, "first");

    let actions = run(
        &mut state,
        Message::SubmitPrompt {
            text: "second".into(),
        },
    );
    assert!(actions.is_empty());
    assert_eq!(state.conversation.len(), 2);
    assert_eq!(state.notice.as_ref().unwrap().level, NoticeLevel::Warning);
}

// ─────────────────────────────────────────────────────────
// Streaming
// ─────────────────────────────────────────────────────────

#[test]
fn test_stream_fragments_then_complete() {
    let mut state = connected_state();
    let ticket = submit_and_take_ticket(&mut state, "hello");
    let id = ticket.assistant_id;

    run(
        &mut state,
        Message::StreamFragment {
            id,
            text: "Hel".into(),
        },
    );
    run(
        &mut state,
        Message::StreamFragment {
            id,
            text: "lo there".into(),
        },
    );
    run(&mut state, Message::StreamCompleted { id });

    let msg = state.conversation.get(id).unwrap();
    assert_eq!(msg.content, "Hello there");
    assert_eq!(msg.status, MessageStatus::Confirmed);
    assert!(!state.is_busy());
    assert!(state.input_enabled());
}

#[test]
fn test_stream_failure_sets_notice_and_clears_busy() {
    let mut state = connected_state();
    let ticket = submit_and_take_ticket(&mut state, "hello");

    run(
        &mut state,
        Message::StreamFailed {
            id: ticket.assistant_id,
            error: "HTTP request failed".into(),
        },
    );

    let msg = state.conversation.get(ticket.assistant_id).unwrap();
    assert_eq!(msg.content, FAILURE_NOTICE);
    assert_eq!(msg.status, MessageStatus::Failed);
    assert!(!state.is_busy());
    assert_eq!(state.notice.as_ref().unwrap().level, NoticeLevel::Error);
}

#[test]
fn test_new_content_scrolls_to_bottom() {
    let mut state = connected_state();
    let ticket = submit_and_take_ticket(&mut state, "hello");
    state.chat_scroll.set_max_offset(30);
    run(&mut state, Message::PageUp);
    assert_eq!(state.chat_scroll.offset_from_bottom, 10);

    run(
        &mut state,
        Message::StreamFragment {
            id: ticket.assistant_id,
            text: "more".into(),
        },
    );
    assert!(state.chat_scroll.is_following());
}

// ─────────────────────────────────────────────────────────
// Wallet
// ─────────────────────────────────────────────────────────

#[test]
fn test_connect_wallet_flow() {
    let mut state = AppState::new();
    let actions = run(&mut state, Message::Key(InputKey::CharCtrl('w')));
    assert_eq!(actions, vec![UpdateAction::ConnectWallet]);
    assert!(state.wallet_connecting);

    // A second request while connecting is ignored
    assert!(run(&mut state, Message::ConnectWallet).is_empty());

    run(
        &mut state,
        Message::WalletConnected(WalletIdentity::new("0x11112222...3333")),
    );
    assert!(!state.wallet_connecting);
    assert_eq!(state.wallet.as_ref().unwrap().as_str(), "0x11112222...3333");
    assert!(state.input_enabled());

    // Reconnecting after completion is allowed
    assert_eq!(
        run(&mut state, Message::ConnectWallet),
        vec![UpdateAction::ConnectWallet]
    );
}

#[test]
fn test_submit_works_right_after_connection() {
    let mut state = AppState::new();
    run(&mut state, Message::ConnectWallet);
    run(
        &mut state,
        Message::WalletConnected(WalletIdentity::new("0x11112222...3333")),
    );
    let ticket = submit_and_take_ticket(&mut state, "hello");
    assert_eq!(ticket.prompt, "hello");
}

#[test]
fn test_wallet_failure_clears_connecting() {
    let mut state = AppState::new();
    run(&mut state, Message::ConnectWallet);
    run(
        &mut state,
        Message::WalletConnectFailed {
            error: "rejected".into(),
        },
    );
    assert!(!state.wallet_connecting);
    assert!(state.wallet.is_none());
    assert_eq!(state.notice.as_ref().unwrap().level, NoticeLevel::Error);
}

// ─────────────────────────────────────────────────────────
// Tabs & ledger
// ─────────────────────────────────────────────────────────

#[test]
fn test_dashboard_starts_and_stops_ledger() {
    let mut state = AppState::new();
    let actions = run(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(actions, vec![UpdateAction::StartLedgerTimer]);
    assert_eq!(state.tab, Tab::Dashboard);
    assert!(state.ledger.is_some());

    let actions = run(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(actions, vec![UpdateAction::StopLedgerTimer]);
    assert_eq!(state.tab, Tab::Chat);
    assert!(state.ledger.is_none());
}

#[test]
fn test_show_same_tab_is_noop() {
    let mut state = AppState::new();
    assert!(run(&mut state, Message::ShowTab(Tab::Chat)).is_empty());
}

#[test]
fn test_ledger_tick_advances_only_while_visible() {
    let mut state = AppState::new();
    run(&mut state, Message::LedgerTick);
    assert!(state.ledger.is_none());

    run(&mut state, Message::ShowTab(Tab::Dashboard));
    let before = state.ledger.as_ref().unwrap().newest_height();
    run(&mut state, Message::LedgerTick);
    let after = state.ledger.as_ref().unwrap().newest_height();
    assert_eq!(after, before.map(|h| h + 1));
}

#[test]
fn test_quit_from_dashboard_stops_timer() {
    let mut state = AppState::new();
    run(&mut state, Message::ShowTab(Tab::Dashboard));
    let actions = run(&mut state, Message::Key(InputKey::Char('q')));
    assert_eq!(actions, vec![UpdateAction::StopLedgerTimer]);
    assert!(state.should_quit());
    assert!(state.ledger.is_none());
}

#[test]
fn test_typing_ignored_on_dashboard() {
    let mut state = connected_state();
    run(&mut state, Message::ShowTab(Tab::Dashboard));
    run(&mut state, Message::InputChar('x'));
    assert!(state.input.is_empty());
}

#[test]
fn test_toggles() {
    let mut state = AppState::new();
    run(&mut state, Message::ToggleSidebar);
    assert!(!state.show_sidebar);
    run(&mut state, Message::ToggleQuantumMode);
    assert!(state.is_quantum());
}

#[test]
fn test_tick_animates_only_when_busy() {
    let mut state = AppState::new();
    run(&mut state, Message::Tick);
    assert_eq!(state.spinner_frame, 0);

    run(&mut state, Message::ConnectWallet);
    run(&mut state, Message::Tick);
    assert_eq!(state.spinner_frame, 1);
}
