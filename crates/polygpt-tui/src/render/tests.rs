//! Full-screen rendering tests for `view`

use super::*;
use crate::test_utils::{create_connected_state, create_test_state, TestTerminal};
use polygpt_app::handler::update;
use polygpt_app::message::Message;
use polygpt_app::FAILURE_NOTICE;

fn draw(term: &mut TestTerminal, state: &mut AppState) {
    term.draw_with(|frame| view(frame, state));
}

/// Submit `prompt` and return the pending assistant id
fn submit(state: &mut AppState, prompt: &str) -> polygpt_core::MessageId {
    let result = update(
        state,
        Message::SubmitPrompt {
            text: prompt.to_string(),
        },
    );
    match result.action {
        Some(polygpt_app::UpdateAction::StartStream(ticket)) => ticket.assistant_id,
        other => panic!("expected StartStream, got {other:?}"),
    }
}

#[test]
fn test_initial_screen() {
    let mut term = TestTerminal::with_size(120, 32);
    let mut state = create_test_state();
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("PolyGPT-5"));
    assert!(term.buffer_contains("Connect Wallet"));
    assert!(term.buffer_contains("POLYGON NETWORK: ONLINE"));
    assert!(term.buffer_contains("GPT-5 Engine v2.5.1"));
    assert!(term.buffer_contains("Welcome to PolyGPT-5"));
    assert!(term.buffer_contains("Connect wallet to start..."));
    assert!(term.buffer_contains("0.0002 MATIC"));
}

#[test]
fn test_quantum_mode_relabels_screen() {
    let mut term = TestTerminal::with_size(120, 32);
    let mut state = create_connected_state();
    update(&mut state, Message::ToggleQuantumMode);
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("QUANTUM ENGINE ACTIVE"));
    assert!(term.buffer_contains("QUANTUM SYNC: ACTIVE"));
    assert!(term.buffer_contains("Q-Inference Engine v5.0-Q"));
    assert!(term.buffer_contains("Quantum-Enhanced PolyGPT-5"));
    assert!(term.buffer_contains("Enter quantum prompt..."));
    assert!(term.buffer_contains("0.005 Q-MATIC"));
}

#[test]
fn test_typing_without_wallet_shows_notice() {
    let mut term = TestTerminal::with_size(120, 32);
    let mut state = create_test_state();
    update(&mut state, Message::InputChar('h'));
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Please connect your wallet to authorize AI inference."));
    assert!(term.buffer_contains("Connect wallet to start..."));
}

#[test]
fn test_streaming_conversation() {
    let mut term = TestTerminal::with_size(120, 32);
    let mut state = create_connected_state();
    let id = submit(&mut state, "What is Polygon?");
    update(
        &mut state,
        Message::StreamFragment {
            id,
            text: "A layer-2 ".into(),
        },
    );
    update(
        &mut state,
        Message::StreamFragment {
            id,
            text: "network.".into(),
        },
    );
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("What is Polygon?"));
    assert!(term.buffer_contains("A layer-2 network."));
    assert!(term.buffer_contains("COMPUTING..."));
    assert!(term.buffer_contains("HASH: 0x"));
    assert!(!term.buffer_contains("Welcome to PolyGPT-5"));

    update(&mut state, Message::StreamCompleted { id });
    draw(&mut term, &mut state);
    assert!(term.buffer_contains("TX CONFIRMED"));
}

#[test]
fn test_failed_stream_shows_revert() {
    let mut term = TestTerminal::with_size(120, 32);
    let mut state = create_connected_state();
    let id = submit(&mut state, "hello");
    update(
        &mut state,
        Message::StreamFailed {
            id,
            error: "boom".into(),
        },
    );
    draw(&mut term, &mut state);

    assert!(term.buffer_contains(FAILURE_NOTICE));
    assert!(term.buffer_contains("REVERTED"));
    assert!(term.buffer_contains("Inference failed: boom"));
}

#[test]
fn test_dashboard_tab() {
    let mut term = TestTerminal::with_size(120, 32);
    let mut state = create_test_state();
    update(&mut state, Message::ShowTab(Tab::Dashboard));
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("NETWORK TPS"));
    assert!(term.buffer_contains("LIVE LEDGER"));
    assert!(term.buffer_contains("#320"));
    assert!(!term.buffer_contains("INFERENCE COST"));

    update(&mut state, Message::LedgerTick);
    draw(&mut term, &mut state);
    assert!(term.buffer_contains("#321"));
}

#[test]
fn test_sidebar_toggle() {
    let mut term = TestTerminal::with_size(120, 32);
    let mut state = create_test_state();
    update(&mut state, Message::ToggleSidebar);
    draw(&mut term, &mut state);

    assert!(!term.buffer_contains("Network Explorer"));
    assert!(term.buffer_contains("POLYGON NETWORK: ONLINE"));
}

#[test]
fn test_compact_screen_hides_sidebar() {
    let mut term = TestTerminal::compact();
    let mut state = create_connected_state();
    draw(&mut term, &mut state);

    assert!(!term.buffer_contains("DeAI Inference"));
    assert!(term.buffer_contains("Type your prompt..."));
}

#[test]
fn test_render_updates_scroll_bounds() {
    let mut term = TestTerminal::new();
    let mut state = create_connected_state();
    for i in 0..15 {
        let id = submit(&mut state, &format!("prompt {i}"));
        update(&mut state, Message::StreamCompleted { id });
    }
    assert_eq!(state.chat_scroll.max_offset, 0);

    draw(&mut term, &mut state);
    assert!(state.chat_scroll.max_offset > 0);

    update(&mut state, Message::ScrollToTop);
    draw(&mut term, &mut state);
    assert!(term.buffer_contains("prompt 0"));
    assert!(!term.buffer_contains("prompt 14"));
}
