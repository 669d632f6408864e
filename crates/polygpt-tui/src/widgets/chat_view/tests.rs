//! Tests for chat_view widget module

use super::*;
use crate::test_utils::TestTerminal;
use polygpt_app::config::IconMode;

fn icons() -> IconSet {
    IconSet::new(IconMode::Unicode)
}

fn assistant(mode: ResponseMode, content: &str, status: MessageStatus) -> ChatMessage {
    let mut msg = ChatMessage::assistant_pending(mode, "0xabc123...");
    msg.content = content.to_string();
    msg.status = status;
    msg
}

fn render(messages: &[ChatMessage], mode: ResponseMode, scroll: &mut ChatScroll) -> TestTerminal {
    let mut term = TestTerminal::new();
    let view = ChatView::new(messages, mode, icons());
    term.render_stateful_widget(view, term.area(), scroll);
    term
}

#[test]
fn test_welcome_screen_baseline() {
    let term = render(&[], ResponseMode::Baseline, &mut ChatScroll::default());

    assert!(term.buffer_contains("Welcome to PolyGPT-5"));
    assert!(term.buffer_contains("Verifiable"));
    assert!(term.buffer_contains("Decentralized"));
    assert!(term.buffer_contains("Fast"));
}

#[test]
fn test_welcome_screen_quantum() {
    let term = render(&[], ResponseMode::Quantum, &mut ChatScroll::default());

    assert!(term.buffer_contains("Quantum-Enhanced PolyGPT-5"));
    assert!(term.buffer_contains("Q-Stability"));
    assert!(term.buffer_contains("Entanglement"));
    assert!(term.buffer_contains("Collapse"));
}

#[test]
fn test_user_message_is_right_aligned() {
    let messages = vec![ChatMessage::user("ping")];
    let term = render(&messages, ResponseMode::Baseline, &mut ChatScroll::default());

    let row = (0..24).find(|&y| term.line_contains(y, " ping ")).unwrap();
    let line: String = (0..80)
        .filter_map(|x| term.cell_at(x, row))
        .collect::<Vec<_>>()
        .concat();
    let pos = line.find("ping").unwrap();
    assert!(pos > 40, "user bubble should sit on the right, found at {pos}");
}

#[test]
fn test_assistant_status_labels() {
    let cases = [
        (ResponseMode::Baseline, MessageStatus::Confirmed, "TX CONFIRMED"),
        (ResponseMode::Quantum, MessageStatus::Confirmed, "STATE COLLAPSED"),
        (ResponseMode::Baseline, MessageStatus::Pending, "COMPUTING..."),
        (ResponseMode::Quantum, MessageStatus::Failed, "REVERTED"),
    ];
    for (mode, status, label) in cases {
        let messages = vec![assistant(mode, "answer", status)];
        let term = render(&messages, ResponseMode::Baseline, &mut ChatScroll::default());
        assert!(term.buffer_contains(label), "expected {label}");
        assert!(term.buffer_contains("HASH: 0xabc123..."));
    }
}

#[test]
fn test_empty_pending_shows_spinner() {
    let messages = vec![
        ChatMessage::user("hello"),
        assistant(ResponseMode::Baseline, "", MessageStatus::Pending),
    ];
    let mut term = TestTerminal::new();
    let view = ChatView::new(&messages, ResponseMode::Baseline, icons()).with_spinner_frame(3);
    term.render_stateful_widget(view, term.area(), &mut ChatScroll::default());

    assert!(term.buffer_contains(&format!("{GUTTER}{}", icons::spinner(3))));
}

#[test]
fn test_long_reply_wraps_inside_panel() {
    let long = "word ".repeat(60);
    let messages = vec![assistant(ResponseMode::Baseline, long.trim(), MessageStatus::Confirmed)];
    let term = render(&messages, ResponseMode::Baseline, &mut ChatScroll::default());

    let wrapped_rows = (0..24).filter(|&y| term.line_contains(y, "word word")).count();
    assert!(wrapped_rows >= 3, "expected wrapping, got {wrapped_rows} rows");
}

#[test]
fn test_follows_newest_content() {
    let messages: Vec<ChatMessage> = (0..20)
        .map(|i| ChatMessage::user(format!("message-{i}")))
        .collect();
    let mut scroll = ChatScroll::default();
    let term = render(&messages, ResponseMode::Baseline, &mut scroll);

    assert!(term.buffer_contains("message-19"));
    assert!(!term.buffer_contains("message-0 "));
    assert!(scroll.max_offset > 0);
    assert!(scroll.is_following());
}

#[test]
fn test_scrolled_view_shows_older_content() {
    let messages: Vec<ChatMessage> = (0..20)
        .map(|i| ChatMessage::user(format!("message-{i}")))
        .collect();
    let mut scroll = ChatScroll::default();
    render(&messages, ResponseMode::Baseline, &mut scroll);

    scroll.to_top();
    let term = render(&messages, ResponseMode::Baseline, &mut scroll);

    assert!(term.buffer_contains("message-0 "));
    assert!(!term.buffer_contains("message-19"));
}

#[test]
fn test_scroll_offset_clamped_when_history_shrinks() {
    let mut scroll = ChatScroll {
        offset_from_bottom: 50,
        max_offset: 50,
    };
    let messages = vec![ChatMessage::user("only")];
    let term = render(&messages, ResponseMode::Baseline, &mut scroll);

    assert_eq!(scroll.offset_from_bottom, 0);
    assert!(term.buffer_contains("only"));
}

#[test]
fn test_compact_render_does_not_panic() {
    let messages = vec![
        ChatMessage::user("a fairly long prompt that needs wrapping on small screens"),
        assistant(ResponseMode::Quantum, "reply", MessageStatus::Confirmed),
    ];
    let mut term = TestTerminal::compact();
    let view = ChatView::new(&messages, ResponseMode::Quantum, icons());
    term.render_stateful_widget(view, term.area(), &mut ChatScroll::default());
    assert!(term.buffer_contains("PolyGPT-5"));
}
