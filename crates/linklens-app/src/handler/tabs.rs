//! Result tab switching

use linklens_core::prelude::*;

use crate::state::{AppState, ResultTab};

use super::UpdateResult;

/// Select `tab` if it has data; otherwise ignore the request
pub fn handle_select(state: &mut AppState, tab: ResultTab) -> UpdateResult {
    if state.is_tab_available(tab) {
        state.set_tab(tab);
    } else {
        trace!("Tab {:?} has no data yet", tab);
    }
    UpdateResult::none()
}

pub fn handle_next(state: &mut AppState) -> UpdateResult {
    if let Some(tab) = state.next_available_tab() {
        state.set_tab(tab);
    }
    UpdateResult::none()
}

pub fn handle_prev(state: &mut AppState) -> UpdateResult {
    if let Some(tab) = state.prev_available_tab() {
        state.set_tab(tab);
    }
    UpdateResult::none()
}
