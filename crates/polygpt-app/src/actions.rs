//! Action handlers: background tasks spawned in response to `UpdateAction`s
//!
//! Every task talks back to the update loop only through `Message`s.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use polygpt_core::prelude::*;
use polygpt_gemini::IdentityConnector;

use crate::conversation::SubmitTicket;
use crate::handler::UpdateAction;
use crate::ledger::LedgerTimer;
use crate::message::Message;
use crate::stream_client::ResponseStreamClient;

/// Long-lived collaborators the actions need
#[derive(Clone)]
pub struct Services {
    pub stream_client: Arc<ResponseStreamClient>,
    pub connector: Arc<dyn IdentityConnector>,
}

/// Execute an action
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    services: &Services,
    ledger_timer: &mut Option<LedgerTimer>,
    ledger_interval: Duration,
) {
    match action {
        UpdateAction::ConnectWallet => {
            spawn_wallet_connect(services.connector.clone(), msg_tx);
        }

        UpdateAction::StartStream(ticket) => {
            spawn_response_stream(ticket, services.stream_client.clone(), msg_tx);
        }

        UpdateAction::StartLedgerTimer => {
            // Replacing an existing guard drops (and stops) the old one
            *ledger_timer = Some(LedgerTimer::start(ledger_interval, msg_tx));
        }

        UpdateAction::StopLedgerTimer => {
            if let Some(timer) = ledger_timer.take() {
                timer.stop();
            }
        }
    }
}

/// Run the wallet handshake and report the outcome
fn spawn_wallet_connect(connector: Arc<dyn IdentityConnector>, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let msg = match connector.connect().await {
            Ok(identity) => Message::WalletConnected(identity),
            Err(e) => {
                log_task_error("Wallet connection", &e);
                Message::WalletConnectFailed {
                    error: e.to_string(),
                }
            }
        };
        let _ = msg_tx.send(msg).await;
    });
}

/// Stream a response, forwarding each fragment as a message
///
/// Fragments are sent with backpressure: the next fragment is not pulled
/// from the backend until the previous one is queued.
fn spawn_response_stream(
    ticket: SubmitTicket,
    client: Arc<ResponseStreamClient>,
    msg_tx: mpsc::Sender<Message>,
) {
    tokio::spawn(async move {
        let id = ticket.assistant_id;
        let fragment_tx = msg_tx.clone();

        let result = client
            .generate_response(&ticket.prompt, ticket.mode, |text| {
                let tx = fragment_tx.clone();
                async move {
                    let _ = tx.send(Message::StreamFragment { id, text }).await;
                }
            })
            .await;

        let msg = match result {
            Ok(()) => Message::StreamCompleted { id },
            Err(e) => {
                log_task_error(&format!("Response stream for message {id}"), &e);
                Message::StreamFailed {
                    id,
                    error: e.to_string(),
                }
            }
        };
        let _ = msg_tx.send(msg).await;
    });
}

/// Recoverable failures log at warn level, the rest at error level
fn log_task_error(task: &str, e: &Error) {
    if e.is_recoverable() {
        warn!("{} failed: {}", task, e);
    } else {
        error!("{} failed: {}", task, e);
    }
}
