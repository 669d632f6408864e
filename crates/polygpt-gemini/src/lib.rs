//! # polygpt-gemini - Generation Backend
//!
//! Everything that talks to the outside world (or pretends to):
//!
//! - [`GenerationBackend`] - opens a stream of text fragments for one prompt
//! - [`GeminiBackend`] - `streamGenerateContent` over server-sent events
//! - [`SseDecoder`] - incremental `data:` line decoder
//! - [`IdentityConnector`] / [`MockWalletConnector`] - simulated wallet connection

pub mod backend;
pub mod gemini;
pub mod sse;
pub mod wallet;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use backend::{FragmentStream, GenerationBackend, GenerationRequest};
pub use gemini::{GeminiBackend, GeminiConfig};
pub use sse::SseDecoder;
pub use wallet::{IdentityConnector, MockWalletConnector};
