//! # polygpt-core - Core Domain Types
//!
//! Foundation crate for PolyGPT. Provides domain types, error handling,
//! random display tokens and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ChatMessage`] - One conversation turn with role, status and content
//! - [`MessageId`] - Process-wide monotonic message identifier
//! - [`ResponseMode`] - Baseline or quantum generation mode
//! - [`Block`], [`NetworkStats`] - Mock ledger data
//! - [`WalletIdentity`] - Display address of the connected mock wallet
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use polygpt_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod random;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use types::{
    Block, ChatMessage, MessageId, MessageStatus, NetworkStats, ResponseMode, Role,
    WalletIdentity,
};
