//! Google Gemini `streamGenerateContent` backend

use std::collections::VecDeque;
use std::time::Duration;

use futures_util::future::BoxFuture;
use futures_util::stream::{self, BoxStream, StreamExt};
use serde::{Deserialize, Serialize};

use polygpt_core::prelude::*;

use crate::backend::{FragmentStream, GenerationBackend, GenerationRequest};
use crate::sse::SseDecoder;

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Max characters of an error body kept in error messages
const ERROR_BODY_LIMIT: usize = 300;

/// Connection settings for [`GeminiBackend`]
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
    /// Resolved credential; `None` when no key was found in the environment
    pub api_key: Option<String>,
    /// Name of the variable the key was expected in (for error messages)
    pub api_key_env: String,
    /// Longest silence allowed between streamed chunks
    pub read_timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            api_key_env: "GEMINI_API_KEY".to_string(),
            read_timeout: Duration::from_secs(120),
        }
    }
}

/// Streams responses from the Gemini REST API
pub struct GeminiBackend {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiBackend {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .read_timeout(config.read_timeout)
            .build()
            .map_err(|e| Error::http(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    pub fn has_credential(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn stream_url(&self) -> String {
        format!(
            "{}/models/{}:streamGenerateContent?alt=sse",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    async fn open(&self, request: GenerationRequest) -> Result<FragmentStream> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| Error::missing_credential(&self.config.api_key_env))?;

        let body = GenerateContentRequest::from_request(&request);
        info!(
            model = %self.config.model,
            temperature = request.temperature,
            "opening generation stream"
        );

        let response = self
            .client
            .post(self.stream_url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = api_error_message(&text);
            warn!("generation request rejected ({}): {}", status, message);
            return Err(Error::api(status.as_u16(), message));
        }

        let bytes = response
            .bytes_stream()
            .map(|chunk| {
                chunk
                    .map(|b| b.to_vec())
                    .map_err(|e| Error::stream(e.to_string()))
            })
            .boxed();

        Ok(decode_fragments(bytes))
    }
}

impl GenerationBackend for GeminiBackend {
    fn open_stream(&self, request: GenerationRequest) -> BoxFuture<'_, Result<FragmentStream>> {
        Box::pin(self.open(request))
    }
}

// ─────────────────────────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_request(request: &'a GenerationRequest) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![TextPart {
                    text: &request.prompt,
                }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![TextPart {
                    text: &request.system_directive,
                }],
            },
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: u16,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

/// Extract the human-readable message from an error response body
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ => body.chars().take(ERROR_BODY_LIMIT).collect(),
    }
}

/// Turn one `data:` payload into fragment text
///
/// Returns `Ok(None)` for chunks that carry no visible text (finish markers,
/// thought parts, usage metadata).
fn parse_chunk(payload: &str) -> Result<Option<String>> {
    let chunk: GenerateContentResponse =
        serde_json::from_str(payload).map_err(|e| Error::decode(e.to_string()))?;

    if let Some(err) = chunk.error {
        return Err(Error::api(err.code, err.message));
    }

    let mut text = String::new();
    for candidate in chunk.candidates {
        if let Some(reason) = candidate.finish_reason.as_deref() {
            if reason != "STOP" && candidate.content.is_none() {
                return Err(Error::stream(format!("response blocked ({reason})")));
            }
        }
        let parts = candidate.content.map(|c| c.parts).unwrap_or_default();
        for part in parts.into_iter().filter(|p| !p.thought) {
            if let Some(t) = part.text {
                text.push_str(&t);
            }
        }
    }

    Ok((!text.is_empty()).then_some(text))
}

struct DecodeState {
    bytes: BoxStream<'static, Result<Vec<u8>>>,
    decoder: SseDecoder,
    ready: VecDeque<String>,
    eof: bool,
    failed: bool,
}

/// Decode a raw SSE byte stream into text fragments
///
/// The first error ends the stream.
pub(crate) fn decode_fragments(bytes: BoxStream<'static, Result<Vec<u8>>>) -> FragmentStream {
    let state = DecodeState {
        bytes,
        decoder: SseDecoder::new(),
        ready: VecDeque::new(),
        eof: false,
        failed: false,
    };

    stream::unfold(state, |mut st| async move {
        if st.failed {
            return None;
        }
        loop {
            if let Some(payload) = st.ready.pop_front() {
                match parse_chunk(&payload) {
                    Ok(Some(text)) => return Some((Ok(text), st)),
                    Ok(None) => continue,
                    Err(e) => {
                        st.failed = true;
                        return Some((Err(e), st));
                    }
                }
            }
            if st.eof {
                return None;
            }
            match st.bytes.next().await {
                Some(Ok(chunk)) => {
                    let payloads = st.decoder.feed(&chunk);
                    st.ready.extend(payloads);
                }
                Some(Err(e)) => {
                    st.failed = true;
                    return Some((Err(e), st));
                }
                None => {
                    st.eof = true;
                    if let Some(rest) = st.decoder.finish() {
                        st.ready.push_back(rest);
                    }
                }
            }
        }
    })
    .boxed()
}
