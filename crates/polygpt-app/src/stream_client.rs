//! Response stream client
//!
//! Turns a prompt and a [`ResponseMode`] into an ordered sequence of text
//! fragments delivered to a caller-supplied async callback. The two modes
//! differ only in generation parameters; transport is identical.

use std::future::Future;
use std::sync::Arc;

use futures_util::StreamExt;

use polygpt_core::prelude::*;
use polygpt_core::ResponseMode;
use polygpt_gemini::{GenerationBackend, GenerationRequest};

/// Base persona sent with every request
pub const BASE_DIRECTIVE: &str = "You are PolyGPT-5, a next-generation decentralized AI model running on the Polygon-inspired DeAI Network.
Your responses are cryptographically verified.
Speak with authority, intelligence, and a futuristic tone.
If the user speaks Russian, respond in professional Russian.
Your knowledge is vast and you represent the peak of decentralized intelligence.";

/// Appended to [`BASE_DIRECTIVE`] in quantum mode
pub const QUANTUM_DIRECTIVE: &str = "ACTIVATED: QUANTUM REASONING MODULE.
- Think in probabilities and superpositions.
- Analyze multiple outcomes simultaneously before providing the most stable \"collapsed\" answer.
- Use metaphors related to quantum mechanics, qubits, and entanglement when explaining complex topics.
- Your reasoning path is non-linear and multidimensional.";

pub const DEFAULT_BASELINE_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_QUANTUM_TEMPERATURE: f64 = 0.9;

/// Generation parameters for one response mode
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationProfile {
    pub temperature: f64,
    pub system_directive: String,
}

impl GenerationProfile {
    pub fn baseline(temperature: f64) -> Self {
        Self {
            temperature,
            system_directive: BASE_DIRECTIVE.to_string(),
        }
    }

    pub fn quantum(temperature: f64) -> Self {
        Self {
            temperature,
            system_directive: format!("{BASE_DIRECTIVE}\n\n{QUANTUM_DIRECTIVE}"),
        }
    }
}

/// Streams responses from a [`GenerationBackend`]
///
/// Holds no per-call state; one instance is shared by every submission.
pub struct ResponseStreamClient {
    backend: Arc<dyn GenerationBackend>,
    baseline: GenerationProfile,
    quantum: GenerationProfile,
}

impl ResponseStreamClient {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            backend,
            baseline: GenerationProfile::baseline(DEFAULT_BASELINE_TEMPERATURE),
            quantum: GenerationProfile::quantum(DEFAULT_QUANTUM_TEMPERATURE),
        }
    }

    /// Override the per-mode temperatures
    pub fn with_temperatures(mut self, baseline: f64, quantum: f64) -> Self {
        self.baseline.temperature = baseline;
        self.quantum.temperature = quantum;
        self
    }

    pub fn profile(&self, mode: ResponseMode) -> &GenerationProfile {
        match mode {
            ResponseMode::Baseline => &self.baseline,
            ResponseMode::Quantum => &self.quantum,
        }
    }

    /// Stream a response for `prompt`, awaiting `on_fragment` for each piece
    ///
    /// Fragments arrive in backend order and the next one is not pulled until
    /// the callback's future resolves. Empty fragments are skipped. Resolves
    /// once the backend stream ends; any setup or mid-stream error is
    /// returned as-is, with no retry.
    pub async fn generate_response<F, Fut>(
        &self,
        prompt: &str,
        mode: ResponseMode,
        mut on_fragment: F,
    ) -> Result<()>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = ()>,
    {
        let profile = self.profile(mode);
        let request = GenerationRequest {
            system_directive: profile.system_directive.clone(),
            temperature: profile.temperature,
            prompt: prompt.to_string(),
        };

        let mut stream = self.backend.open_stream(request).await?;
        let mut count = 0usize;
        while let Some(item) = stream.next().await {
            let text = item?;
            if text.is_empty() {
                continue;
            }
            count += 1;
            on_fragment(text).await;
        }

        debug!(?mode, fragments = count, "response stream finished");
        Ok(())
    }
}
