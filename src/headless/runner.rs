//! Headless mode runner - single prompt, no TUI
//!
//! Drives the Engine through connect → submit → stream, reporting each step
//! as a [`HeadlessEvent`].

use polygpt_app::{message::Message, Engine, Settings};
use polygpt_core::prelude::*;
use polygpt_core::MessageId;

use super::HeadlessEvent;

/// How a headless session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessOutcome {
    /// Response confirmed
    Completed,
    /// Response reverted (backend or transport error)
    Failed,
    /// Prompt was not accepted
    Rejected,
    /// Quit requested (signal) or channel closed before the end
    Interrupted,
}

impl HeadlessOutcome {
    pub fn is_success(self) -> bool {
        self == HeadlessOutcome::Completed
    }
}

/// Run `prompt` headlessly, printing NDJSON events to stdout
pub async fn run_headless(settings: Settings, prompt: &str) -> Result<HeadlessOutcome> {
    info!("PolyGPT starting in HEADLESS mode");

    let mut engine = Engine::new(settings)?;
    let outcome = run_session(&mut engine, prompt, |event| event.emit()).await;
    engine.shutdown();

    if let Err(e) = &outcome {
        session_error_event(e).emit();
    }

    info!("PolyGPT headless mode exiting ({:?})", outcome);
    outcome
}

/// Drive one prompt through `engine`, handing every event to `emit`
pub async fn run_session<F>(engine: &mut Engine, prompt: &str, mut emit: F) -> Result<HeadlessOutcome>
where
    F: FnMut(HeadlessEvent),
{
    // Connect the mock wallet
    engine.process_message(Message::ConnectWallet);
    while engine.state.wallet_connecting {
        let Some(msg) = engine.msg_rx.recv().await else {
            return Err(Error::ChannelClosed);
        };
        if let Message::WalletConnectFailed { error } = &msg {
            emit(HeadlessEvent::error(
                format!("Wallet connection failed: {error}"),
                true,
            ));
        }
        engine.process_message(msg);
        if engine.should_quit() {
            return Ok(HeadlessOutcome::Interrupted);
        }
    }
    let Some(wallet) = engine.state.wallet.clone() else {
        return Ok(HeadlessOutcome::Rejected);
    };
    emit(HeadlessEvent::wallet_connected(wallet.as_str()));

    // Submit
    engine.process_message(Message::SubmitPrompt {
        text: prompt.to_string(),
    });
    let Some(pending) = engine.state.conversation.pending() else {
        let reason = engine
            .state
            .notice
            .as_ref()
            .map_or_else(|| "Prompt rejected".to_string(), |n| n.text.clone());
        warn!("Headless prompt rejected: {}", reason);
        emit(HeadlessEvent::error(reason, true));
        return Ok(HeadlessOutcome::Rejected);
    };
    let id = pending.id;
    emit(HeadlessEvent::submitted(
        id,
        prompt,
        engine.state.mode,
        pending.tx_hash.clone(),
    ));

    // Stream
    while engine.state.is_busy() {
        let Some(msg) = engine.msg_rx.recv().await else {
            info!("Message channel closed");
            return Ok(HeadlessOutcome::Interrupted);
        };

        let event = stream_event(&msg, id);
        engine.process_message(msg);

        if let Some(event) = event {
            emit(match event {
                HeadlessEvent::Completed { id, .. } => HeadlessEvent::completed(
                    id,
                    engine
                        .state
                        .conversation
                        .get(id)
                        .map_or("", |m| m.content.as_str()),
                ),
                other => other,
            });
        }

        if engine.should_quit() {
            info!("Quit requested");
            return Ok(HeadlessOutcome::Interrupted);
        }
    }

    let confirmed = engine
        .state
        .conversation
        .get(id)
        .is_some_and(|m| m.status == polygpt_core::MessageStatus::Confirmed);
    Ok(if confirmed {
        HeadlessOutcome::Completed
    } else {
        HeadlessOutcome::Failed
    })
}

/// Error event for a session that ended with `Err`
fn session_error_event(e: &Error) -> HeadlessEvent {
    HeadlessEvent::error(e.to_string(), e.is_fatal())
}

/// Event for a stream message addressed to `id`
///
/// `Completed` carries an empty body here; the caller fills it in once the
/// message has been applied.
fn stream_event(msg: &Message, id: MessageId) -> Option<HeadlessEvent> {
    match msg {
        Message::StreamFragment { id: m, text } if *m == id && !text.is_empty() => {
            Some(HeadlessEvent::fragment(id, text))
        }
        Message::StreamCompleted { id: m } if *m == id => Some(HeadlessEvent::completed(id, "")),
        Message::StreamFailed { id: m, error } if *m == id => Some(HeadlessEvent::failed(id, error)),
        _ => None,
    }
}
