//! Configuration types for PolyGPT
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Per-section settings structs and enums

use std::time::Duration;

use serde::{Deserialize, Serialize};

use polygpt_gemini::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use polygpt_gemini::GeminiConfig;

/// Variable consulted when the configured key variable is unset
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub wallet: WalletSettings,

    #[serde(default)]
    pub ledger: LedgerSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Generation backend settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BackendSettings {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_baseline_temperature")]
    pub baseline_temperature: f64,

    #[serde(default = "default_quantum_temperature")]
    pub quantum_temperature: f64,

    /// Longest silence allowed while a response is streaming
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            baseline_temperature: default_baseline_temperature(),
            quantum_temperature: default_quantum_temperature(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl BackendSettings {
    /// Look up the API key through `lookup` (normally `std::env::var`)
    ///
    /// Tries `api_key_env` first, then [`FALLBACK_API_KEY_ENV`]. Empty values
    /// count as unset.
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        [self.api_key_env.as_str(), FALLBACK_API_KEY_ENV]
            .into_iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
    }

    /// Look up the API key in the process environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Idle timeout for a streamed response, at least one second
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Build the Gemini client configuration with the given credential
    pub fn gemini_config(&self, api_key: Option<String>) -> GeminiConfig {
        GeminiConfig {
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            api_key,
            api_key_env: self.api_key_env.clone(),
            read_timeout: self.request_timeout(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_baseline_temperature() -> f64 {
    0.7
}

fn default_quantum_temperature() -> f64 {
    0.9
}

fn default_request_timeout_secs() -> u64 {
    120
}

/// Mock wallet settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WalletSettings {
    /// Artificial connection latency
    #[serde(default = "default_connect_latency_ms")]
    pub connect_latency_ms: u64,
}

impl Default for WalletSettings {
    fn default() -> Self {
        Self {
            connect_latency_ms: default_connect_latency_ms(),
        }
    }
}

impl WalletSettings {
    pub fn connect_latency(&self) -> Duration {
        Duration::from_millis(self.connect_latency_ms)
    }
}

fn default_connect_latency_ms() -> u64 {
    1500
}

/// Mock ledger settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LedgerSettings {
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl LedgerSettings {
    /// Tick interval, never shorter than 100ms
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(100))
    }
}

fn default_tick_interval_ms() -> u64 {
    3000
}

/// Icon rendering mode for the TUI
///
/// Controls whether to use Nerd Font glyphs (requires a patched font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    #[default]
    Unicode,
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub icons: IconMode,

    #[serde(default = "default_true")]
    pub show_sidebar: bool,

    #[serde(default)]
    pub start_in_quantum_mode: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            show_sidebar: true,
            start_in_quantum_mode: false,
        }
    }
}

fn default_true() -> bool {
    true
}
