//! Main TUI runner - entry point and event loop

use polygpt_app::{Engine, Settings};
use polygpt_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI until the user quits or a signal arrives.
///
/// Must be called inside a multi-threaded tokio runtime: terminal polling
/// blocks the calling thread while background tasks keep running.
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let mut engine = Engine::new(settings)?;
    let mut term = ratatui::init();
    info!("TUI started");

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    if let Err(ref e) = result {
        error!("TUI loop failed: {}", e);
    }
    result
}

/// Main event loop: drain background messages, render, poll the terminal
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        engine.drain_pending_messages();
        if engine.should_quit() {
            break;
        }

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
