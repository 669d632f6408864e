//! Configuration file parsing for PolyGPT
//!
//! A single TOML file, `<config_dir>/polygpt/config.toml`, holds every
//! setting. Missing sections and keys fall back to defaults.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, load_settings_strict};
pub use types::*;
