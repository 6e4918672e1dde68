//! TUI runner: terminal lifecycle and the main event loop

use linklens_app::{Engine, Settings};
use linklens_core::prelude::*;
use ratatui::DefaultTerminal;

use crate::{event, render, terminal};

/// Run the TUI until the user quits.
///
/// The engine is built before the terminal enters raw mode so that an
/// invalid backend URL is reported on a normal screen.
pub async fn run(settings: Settings, initial_url: Option<String>) -> Result<()> {
    let mut engine = Engine::new(settings)?;
    if let Some(url) = initial_url.as_deref() {
        engine.submit_initial_url(url);
    }

    let mut term = terminal::enter();
    info!("Terminal UI started");

    let result = run_loop(&mut term, &mut engine);

    terminal::leave();
    if let Err(e) = &result {
        error!("Event loop failed: {}", e);
    }
    info!("Terminal UI stopped");
    result
}

/// Drain pending results, draw, then wait for the next key or tick
fn run_loop(term: &mut DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        engine.drain_pending_messages();

        term.draw(|frame| render::view(frame, &mut engine.state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }
    Ok(())
}
