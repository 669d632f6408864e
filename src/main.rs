//! PolyGPT - terminal chat client for the PolyGPT-5 decentralized AI demo
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use polygpt_app::config::{self, Settings};
use tracing::{info, warn};

/// PolyGPT - chat with a (mock) decentralized GPT-5 from your terminal
#[derive(Parser, Debug)]
#[command(name = "polygpt", version)]
#[command(about = "Terminal chat client for the PolyGPT-5 decentralized AI demo", long_about = None)]
struct Args {
    /// Path to a config file (default: <config_dir>/polygpt/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start in quantum mode
    #[arg(long)]
    quantum: bool,

    /// Run a single prompt without the TUI, printing NDJSON events
    #[arg(long, requires = "prompt")]
    headless: bool,

    /// Prompt to submit in headless mode
    #[arg(long, value_name = "TEXT", requires = "headless")]
    prompt: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    polygpt_core::logging::init()?;
    info!("PolyGPT {} starting", env!("CARGO_PKG_VERSION"));

    let mut settings = load_settings(args.config.as_deref())?;
    if args.quantum {
        settings.ui.start_in_quantum_mode = true;
    }

    match (args.headless, args.prompt) {
        (true, Some(prompt)) => {
            let outcome = polygpt::run_headless(settings, &prompt).await?;
            if !outcome.is_success() {
                std::process::exit(1);
            }
            Ok(())
        }
        _ => Ok(polygpt::run(settings).await?),
    }
}

/// Explicit `--config` must exist; the default location is created on first run
fn load_settings(explicit: Option<&std::path::Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        return Ok(config::load_settings_strict(path)?);
    }

    let Some(path) = config::default_config_path() else {
        warn!("No config directory on this platform, using defaults");
        return Ok(Settings::default());
    };
    match config::init_config_file(&path) {
        Ok(true) => info!("Wrote default config to {}", path.display()),
        Ok(false) => {}
        Err(e) => warn!("Could not create {}: {}", path.display(), e),
    }
    Ok(config::load_settings(&path))
}
