//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{analyze, keys::handle_key, tabs, upload, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            if state.is_busy() {
                state.animation_frame = state.animation_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus and form editing
        // ─────────────────────────────────────────────────────────
        Message::FocusOn(focus) => {
            state.focus = focus;
            UpdateResult::none()
        }
        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }
        Message::FocusPrev => {
            state.focus = state.focus.prev();
            UpdateResult::none()
        }
        Message::InputChar(c) => {
            if let Some(field) = state.focused_field_mut() {
                field.input_char(c);
            }
            UpdateResult::none()
        }
        Message::InputBackspace => {
            if let Some(field) = state.focused_field_mut() {
                field.backspace();
            }
            UpdateResult::none()
        }
        Message::InputClear => {
            if let Some(field) = state.focused_field_mut() {
                field.clear();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Workflows
        // ─────────────────────────────────────────────────────────
        Message::SubmitProfileUrl => analyze::handle_submit(state),
        Message::AnalyzeCompleted(response) => analyze::handle_completed(state, *response),
        Message::AnalyzeFailed { error } => analyze::handle_failed(state, error),

        Message::SubmitResume => upload::handle_submit(state),
        Message::UploadCompleted {
            profile_id,
            results,
        } => upload::handle_completed(state, profile_id, *results),
        Message::UploadFailed { profile_id, error } => {
            upload::handle_failed(state, profile_id, error)
        }

        // ─────────────────────────────────────────────────────────
        // Tabs
        // ─────────────────────────────────────────────────────────
        Message::SelectTab(tab) => tabs::handle_select(state, tab),
        Message::NextTab => tabs::handle_next(state),
        Message::PrevTab => tabs::handle_prev(state),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => {
            state.scroll.scroll_up(1);
            UpdateResult::none()
        }
        Message::ScrollDown => {
            state.scroll.scroll_down(1);
            UpdateResult::none()
        }
        Message::ScrollToTop => {
            state.scroll.scroll_to_top();
            UpdateResult::none()
        }
        Message::ScrollToBottom => {
            state.scroll.scroll_to_bottom();
            UpdateResult::none()
        }
        Message::PageUp => {
            state.scroll.page_up();
            UpdateResult::none()
        }
        Message::PageDown => {
            state.scroll.page_down();
            UpdateResult::none()
        }
    }
}
