//! Headless mode - one-shot prompt with NDJSON output
//!
//! Runs a single prompt through the same Engine the TUI uses, without a
//! terminal UI. Progress is written to stdout as newline-delimited JSON,
//! one event per line, so scripts can consume the stream.
//!
//! # Example Output
//!
//! ```json
//! {"event":"wallet_connected","address":"0x3f9a12bc...7d2e","timestamp":1767225600000}
//! {"event":"submitted","id":2,"prompt":"What is zkEVM?","mode":"baseline","tx_hash":"0x8c1f...","timestamp":1767225600010}
//! {"event":"fragment","id":2,"text":"zkEVM is ","timestamp":1767225600420}
//! {"event":"completed","id":2,"content":"zkEVM is ...","timestamp":1767225601900}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use polygpt_core::{MessageId, ResponseMode};
use serde::Serialize;
use tracing::error;

pub use runner::{run_headless, run_session, HeadlessOutcome};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Mock wallet handshake finished
    WalletConnected { address: String, timestamp: i64 },

    /// Prompt accepted; a pending response exists
    Submitted {
        id: MessageId,
        prompt: String,
        mode: ResponseMode,
        tx_hash: Option<String>,
        timestamp: i64,
    },

    /// Streamed text appended to the response
    Fragment {
        id: MessageId,
        text: String,
        timestamp: i64,
    },

    /// Response confirmed
    Completed {
        id: MessageId,
        content: String,
        timestamp: i64,
    },

    /// Response reverted
    Failed {
        id: MessageId,
        error: String,
        timestamp: i64,
    },

    /// Prompt rejected or session aborted before a response existed
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn wallet_connected(address: &str) -> Self {
        Self::WalletConnected {
            address: address.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn submitted(
        id: MessageId,
        prompt: &str,
        mode: ResponseMode,
        tx_hash: Option<String>,
    ) -> Self {
        Self::Submitted {
            id,
            prompt: prompt.to_string(),
            mode,
            tx_hash,
            timestamp: Self::now(),
        }
    }

    pub fn fragment(id: MessageId, text: &str) -> Self {
        Self::Fragment {
            id,
            text: text.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn completed(id: MessageId, content: &str) -> Self {
        Self::Completed {
            id,
            content: content.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn failed(id: MessageId, error: &str) -> Self {
        Self::Failed {
            id,
            error: error.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Event name as it appears in the `event` field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::WalletConnected { .. } => "wallet_connected",
            Self::Submitted { .. } => "submitted",
            Self::Fragment { .. } => "fragment",
            Self::Completed { .. } => "completed",
            Self::Failed { .. } => "failed",
            Self::Error { .. } => "error",
        }
    }
}
