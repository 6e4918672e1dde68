//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use linklens_app::{InputKey, Message};
use linklens_core::prelude::*;

/// Poll timeout; also the spinner frame rate
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert a crossterm key event into the app's key representation
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let input = match key.code {
        KeyCode::Char(c) if ctrl => InputKey::CharCtrl(c),
        KeyCode::Char(c) => InputKey::Char(c),
        KeyCode::Enter => InputKey::Enter,
        KeyCode::Esc => InputKey::Esc,
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => InputKey::BackTab,
        KeyCode::Tab => InputKey::Tab,
        KeyCode::BackTab => InputKey::BackTab,
        KeyCode::Backspace => InputKey::Backspace,
        KeyCode::Delete => InputKey::Delete,
        KeyCode::Up => InputKey::Up,
        KeyCode::Down => InputKey::Down,
        KeyCode::Left => InputKey::Left,
        KeyCode::Right => InputKey::Right,
        KeyCode::Home => InputKey::Home,
        KeyCode::End => InputKey::End,
        KeyCode::PageUp => InputKey::PageUp,
        KeyCode::PageDown => InputKey::PageDown,
        _ => return None,
    };
    Some(input)
}

/// Wait up to [`POLL_INTERVAL`] for input.
///
/// Returns `Tick` on timeout so the spinner keeps moving, and `None` for
/// events the app does not handle (resize, mouse, key release).
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        _ => Ok(None),
    }
}
