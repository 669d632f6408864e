//! Settings loading and first-run initialization

use std::path::{Path, PathBuf};

use polygpt_core::prelude::*;

use super::types::Settings;

const APP_DIR: &str = "polygpt";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"# PolyGPT Configuration

[backend]
model = "gemini-3-pro-preview"
base_url = "https://generativelanguage.googleapis.com/v1beta"
# Environment variable holding the API key (API_KEY is tried as a fallback)
api_key_env = "GEMINI_API_KEY"
baseline_temperature = 0.7
quantum_temperature = 0.9
request_timeout_secs = 120   # Idle time allowed between streamed chunks

[wallet]
connect_latency_ms = 1500   # Simulated wallet handshake

[ledger]
tick_interval_ms = 3000     # Dashboard refresh while visible

[ui]
icons = "unicode"           # "unicode" or "nerd_fonts"
show_sidebar = true
start_in_quantum_mode = false
"#;

/// `<config_dir>/polygpt/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings from a path the user named explicitly
///
/// Unlike [`load_settings`], a missing file is an error.
pub fn load_settings_strict(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        return Err(Error::config_not_found(config_path));
    }
    Ok(load_settings(config_path))
}

/// Write a commented default config file if none exists
///
/// Returns `true` when a new file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config dir")?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    info!("Created default config at {:?}", config_path);

    Ok(true)
}
