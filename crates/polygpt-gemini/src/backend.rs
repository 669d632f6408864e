//! Backend abstraction for streamed text generation

use futures_util::future::BoxFuture;
use futures_util::stream::BoxStream;

use polygpt_core::Result;

/// Ordered text fragments of a single response
///
/// The stream ends when the backend has nothing more to say. An `Err` item
/// terminates the response.
pub type FragmentStream = BoxStream<'static, Result<String>>;

/// Everything a backend needs to produce one response
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system_directive: String,
    pub temperature: f64,
    pub prompt: String,
}

/// A source of streamed responses
pub trait GenerationBackend: Send + Sync {
    /// Start generating a response for `request`
    ///
    /// Setup failures (missing credential, rejected request) are returned
    /// before any fragment is produced.
    fn open_stream(&self, request: GenerationRequest) -> BoxFuture<'_, Result<FragmentStream>>;
}
