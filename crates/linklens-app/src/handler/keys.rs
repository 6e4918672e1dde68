//! Key event handlers for each focus region

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, ResultTab};

/// Convert key events to messages based on the focused region
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key.is_force_quit() {
        return Some(Message::Quit);
    }

    match key {
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrev),
        _ => {}
    }

    match state.focus {
        Focus::UrlInput => handle_key_text_input(key, Message::SubmitProfileUrl),
        Focus::ResumeInput => handle_key_text_input(key, Message::SubmitResume),
        Focus::Results => handle_key_results(key),
    }
}

/// Handle key events while a text field has focus
fn handle_key_text_input(key: InputKey, submit: Message) -> Option<Message> {
    match key {
        InputKey::Enter => Some(submit),

        // Leave the field; results keys work again
        InputKey::Esc => Some(Message::FocusOn(Focus::Results)),

        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::CharCtrl('u') => Some(Message::InputClear),
        InputKey::Char(c) => Some(Message::InputChar(c)),

        // Results stay scrollable while typing
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        _ => None,
    }
}

/// Handle key events while the result panel has focus
fn handle_key_results(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        // Tabs
        InputKey::Char(c @ '1'..='4') => ResultTab::from_digit(c).map(Message::SelectTab),
        InputKey::Right | InputKey::Char('l') => Some(Message::NextTab),
        InputKey::Left | InputKey::Char('h') => Some(Message::PrevTab),

        // Scroll
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),

        // Forms
        InputKey::Char('a') => Some(Message::FocusOn(Focus::UrlInput)),
        InputKey::Char('u') => Some(Message::FocusOn(Focus::ResumeInput)),

        _ => None,
    }
}
