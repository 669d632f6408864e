//! Core domain type definitions

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Counter for generating unique chat message IDs
static MESSAGE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique, monotonically increasing identifier of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(u64);

impl MessageId {
    /// Allocate the next process-wide message id
    pub fn next() -> Self {
        Self(MESSAGE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// Lifecycle of a chat message
///
/// User messages are born `Confirmed`. Assistant messages start `Pending`
/// and end either `Confirmed` or `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    Pending,
    Confirmed,
    Failed,
}

/// Generation mode selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseMode {
    #[default]
    Baseline,
    Quantum,
}

impl ResponseMode {
    pub fn is_quantum(self) -> bool {
        matches!(self, ResponseMode::Quantum)
    }

    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ResponseMode::Baseline => ResponseMode::Quantum,
            ResponseMode::Quantum => ResponseMode::Baseline,
        }
    }

    pub fn from_quantum(quantum: bool) -> Self {
        if quantum {
            ResponseMode::Quantum
        } else {
            ResponseMode::Baseline
        }
    }
}

/// One turn in the conversation
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: Role,
    /// Accumulated text; grows by concatenation while streaming
    pub content: String,
    pub timestamp: DateTime<Local>,
    pub status: MessageStatus,
    /// Display-only transaction identifier (assistant messages)
    pub tx_hash: Option<String>,
    /// Mode that produced this message (assistant messages)
    pub mode: Option<ResponseMode>,
}

impl ChatMessage {
    /// Create a confirmed user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: MessageId::next(),
            role: Role::User,
            content: content.into(),
            timestamp: Local::now(),
            status: MessageStatus::Confirmed,
            tx_hash: None,
            mode: None,
        }
    }

    /// Create an empty pending assistant message
    pub fn assistant_pending(mode: ResponseMode, tx_hash: impl Into<String>) -> Self {
        Self {
            id: MessageId::next(),
            role: Role::Assistant,
            content: String::new(),
            timestamp: Local::now(),
            status: MessageStatus::Pending,
            tx_hash: Some(tx_hash.into()),
            mode: Some(mode),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == MessageStatus::Pending
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    pub fn is_quantum(&self) -> bool {
        self.mode.is_some_and(ResponseMode::is_quantum)
    }

    /// Format timestamp for display
    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// A synthetic block on the mock ledger
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub height: u64,
    /// 26 random base-36 characters
    pub hash: String,
    pub timestamp: DateTime<Local>,
    pub transactions: u32,
    pub validator: String,
}

impl Block {
    /// Short label shown in the ledger list (`#320` for height 6540320)
    pub fn short_height(&self) -> String {
        format!("#{}", self.height % 1000)
    }

    /// Truncated hash label (`0x` + first 16 chars + `...`)
    pub fn short_hash(&self) -> String {
        let prefix: String = self.hash.chars().take(16).collect();
        format!("0x{}...", prefix)
    }
}

/// Synthetic network statistics shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkStats {
    pub tps: f64,
    pub active_nodes: u64,
    pub total_inferences: u64,
    pub gas_price: f64,
    pub qubit_coherence: f64,
    pub entanglement_flux: f64,
}

impl Default for NetworkStats {
    fn default() -> Self {
        Self {
            tps: 45.2,
            active_nodes: 12_408,
            total_inferences: 1_450_283,
            gas_price: 28.5,
            qubit_coherence: 99.98,
            entanglement_flux: 4.2,
        }
    }
}

/// Opaque display address of a connected (mock) wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletIdentity(String);

impl WalletIdentity {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
