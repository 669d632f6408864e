//! Message types for the application (TEA pattern)

use polygpt_core::{MessageId, WalletIdentity};

use crate::input_key::InputKey;
use crate::state::Tab;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic UI tick (drives spinners)
    Tick,

    /// Leave the application (Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Input Messages
    // ─────────────────────────────────────────────────────────
    /// Append a character to the prompt input
    InputChar(char),
    /// Delete the last character of the prompt input
    InputBackspace,
    /// Clear the prompt input
    InputClear,
    /// Submit the current prompt input
    Submit,
    /// Submit the given text directly (headless mode)
    SubmitPrompt { text: String },

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Cycle to the next tab
    NextTab,
    /// Show a specific tab
    ShowTab(Tab),
    ToggleSidebar,
    ToggleQuantumMode,
    /// Scroll the chat history towards older messages
    ScrollUp,
    /// Scroll the chat history towards newer messages
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Wallet Messages
    // ─────────────────────────────────────────────────────────
    /// Request a (mock) wallet connection
    ConnectWallet,
    WalletConnected(WalletIdentity),
    WalletConnectFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Response Stream Messages
    // ─────────────────────────────────────────────────────────
    /// One text fragment for the pending assistant message
    StreamFragment { id: MessageId, text: String },
    /// The stream ended normally
    StreamCompleted { id: MessageId },
    /// The stream could not be opened or broke mid-way
    StreamFailed { id: MessageId, error: String },

    // ─────────────────────────────────────────────────────────
    // Ledger Messages
    // ─────────────────────────────────────────────────────────
    /// Advance the mock ledger (ignored while the dashboard is hidden)
    LedgerTick,
}
