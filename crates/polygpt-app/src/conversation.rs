//! Conversation state machine
//!
//! Owns the ordered message list and enforces the submission rules: a
//! non-blank prompt, a connected wallet, and at most one pending response.
//! Assistant messages move `Pending → Confirmed` or `Pending → Failed`;
//! nothing is ever removed.

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use polygpt_core::random::tx_hash;
use polygpt_core::{ChatMessage, MessageId, MessageStatus, ResponseMode, WalletIdentity};

/// Content shown in place of a response whose stream failed
pub const FAILURE_NOTICE: &str = "Error: Quantum state decoherence. Transaction reverted.";

/// Why a submission was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Prompt is empty")]
    EmptyPrompt,

    #[error("Please connect your wallet to authorize AI inference.")]
    NoIdentity,

    #[error("A response is already being generated")]
    Busy,
}

/// Handed back by a successful submit; describes the stream to start
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitTicket {
    pub assistant_id: MessageId,
    pub prompt: String,
    pub mode: ResponseMode,
}

/// Session-scoped conversation history
#[derive(Debug)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    rng: StdRng,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic transaction hashes, for tests
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            messages: Vec::new(),
            rng,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, id: MessageId) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// True while an assistant response is pending
    pub fn is_busy(&self) -> bool {
        self.pending().is_some()
    }

    /// The pending assistant message, if any
    pub fn pending(&self) -> Option<&ChatMessage> {
        self.messages.iter().rev().find(|m| m.is_pending())
    }

    /// Append a user turn and a pending assistant placeholder
    ///
    /// Rejections leave the conversation untouched.
    pub fn submit(
        &mut self,
        text: &str,
        identity: Option<&WalletIdentity>,
        mode: ResponseMode,
    ) -> Result<SubmitTicket, SubmitError> {
        if text.trim().is_empty() {
            return Err(SubmitError::EmptyPrompt);
        }
        if identity.is_none() {
            return Err(SubmitError::NoIdentity);
        }
        if self.is_busy() {
            return Err(SubmitError::Busy);
        }

        self.messages.push(ChatMessage::user(text));

        let assistant = ChatMessage::assistant_pending(mode, tx_hash(&mut self.rng));
        let assistant_id = assistant.id;
        self.messages.push(assistant);

        Ok(SubmitTicket {
            assistant_id,
            prompt: text.to_string(),
            mode,
        })
    }

    fn pending_mut(&mut self, id: MessageId) -> Option<&mut ChatMessage> {
        self.messages
            .iter_mut()
            .find(|m| m.id == id && m.is_pending())
    }

    /// Append streamed text to the pending message `id`
    ///
    /// Returns `false` (and does nothing) if `id` is not pending.
    pub fn apply_fragment(&mut self, id: MessageId, text: &str) -> bool {
        match self.pending_mut(id) {
            Some(msg) => {
                msg.content.push_str(text);
                true
            }
            None => false,
        }
    }

    /// `Pending → Confirmed`
    pub fn complete(&mut self, id: MessageId) -> bool {
        match self.pending_mut(id) {
            Some(msg) => {
                msg.status = MessageStatus::Confirmed;
                true
            }
            None => false,
        }
    }

    /// `Pending → Failed`, replacing any partial content with [`FAILURE_NOTICE`]
    pub fn fail(&mut self, id: MessageId) -> bool {
        match self.pending_mut(id) {
            Some(msg) => {
                msg.status = MessageStatus::Failed;
                msg.content = FAILURE_NOTICE.to_string();
                true
            }
            None => false,
        }
    }
}
