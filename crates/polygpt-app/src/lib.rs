//! polygpt-app - Application state and orchestration for PolyGPT
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the conversation state machine, the response stream client,
//! the mock ledger simulator, configuration loading, and the Engine that
//! ties them together for the TUI and headless runners.

pub mod actions;
pub mod config;
pub mod conversation;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod ledger;
pub mod message;
pub mod signals;
pub mod state;
pub mod stream_client;

// Re-export primary types
pub use config::Settings;
pub use conversation::{Conversation, SubmitError, SubmitTicket, FAILURE_NOTICE};
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use ledger::{LedgerSimulator, LedgerTimer};
pub use message::Message;
pub use state::{AppState, Tab};
pub use stream_client::{GenerationProfile, ResponseStreamClient};
