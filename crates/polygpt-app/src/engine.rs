//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the long-lived
//! services (stream client, wallet connector) and the ledger timer guard.
//! Both runners feed it messages and read `state` back.

use std::sync::Arc;

use tokio::sync::mpsc;

use polygpt_core::prelude::*;
use polygpt_gemini::{GeminiBackend, GenerationBackend, IdentityConnector, MockWalletConnector};

use crate::actions::{self, Services};
use crate::config::Settings;
use crate::handler;
use crate::ledger::LedgerTimer;
use crate::message::Message;
use crate::signals;
use crate::state::AppState;
use crate::stream_client::ResponseStreamClient;

/// Capacity of the unified message channel
pub const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for PolyGPT.
///
/// Encapsulates everything shared between TUI and headless runners:
/// - TEA state management
/// - Message channel
/// - Backend and wallet services
/// - Ledger timer lifetime
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, background tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Loaded settings
    pub settings: Settings,

    services: Services,

    /// Running while the dashboard is visible
    ledger_timer: Option<LedgerTimer>,
}

impl Engine {
    /// Create an Engine talking to the real Gemini backend.
    ///
    /// Resolves the API key from the environment, builds the HTTP client and
    /// the mock wallet, and spawns the signal handler. Must be called inside
    /// a tokio runtime.
    pub fn new(settings: Settings) -> Result<Self> {
        let api_key = settings.backend.resolve_api_key();
        if api_key.is_none() {
            warn!(
                "No API key found in ${} or ${}; inference requests will fail",
                settings.backend.api_key_env,
                crate::config::FALLBACK_API_KEY_ENV
            );
        }

        let backend = GeminiBackend::new(settings.backend.gemini_config(api_key))?;
        let connector = MockWalletConnector::new(settings.wallet.connect_latency());

        let engine = Self::with_services(settings, Arc::new(backend), Arc::new(connector));
        signals::spawn_signal_handler(engine.msg_tx.clone());

        info!(
            "Engine ready (model {}, ledger tick {:?})",
            engine.settings.backend.model,
            engine.settings.ledger.tick_interval()
        );
        Ok(engine)
    }

    /// Create an Engine with explicit collaborators (tests, alternative backends)
    pub fn with_services(
        settings: Settings,
        backend: Arc<dyn GenerationBackend>,
        connector: Arc<dyn IdentityConnector>,
    ) -> Self {
        let stream_client = ResponseStreamClient::new(backend).with_temperatures(
            settings.backend.baseline_temperature,
            settings.backend.quantum_temperature,
        );

        let state = AppState::with_settings(settings.clone());
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        Self {
            state,
            msg_tx,
            msg_rx,
            settings,
            services: Services {
                stream_client: Arc::new(stream_client),
                connector,
            },
            ledger_timer: None,
        }
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Follow-up messages are processed immediately; actions are dispatched
    /// as they are produced.
    pub fn process_message(&mut self, msg: Message) {
        let mut msg = Some(msg);
        while let Some(m) = msg {
            let result = handler::update(&mut self.state, m);

            if let Some(action) = result.action {
                actions::handle_action(
                    action,
                    self.msg_tx.clone(),
                    &self.services,
                    &mut self.ledger_timer,
                    self.settings.ledger.tick_interval(),
                );
            }

            msg = result.message;
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn ledger_timer_running(&self) -> bool {
        self.ledger_timer
            .as_ref()
            .is_some_and(LedgerTimer::is_running)
    }

    /// Release background resources before exit.
    pub fn shutdown(&mut self) {
        if let Some(timer) = self.ledger_timer.take() {
            timer.stop();
        }
        self.state.ledger = None;
        info!("Engine shut down");
    }
}
