//! Profile analysis workflow handlers

use linklens_api::AnalyzeResponse;
use linklens_core::prelude::*;
use linklens_core::{profile_handle, validate_profile_url};

use crate::state::{AppState, ProfileSession, RequestStatus};

use super::{UpdateAction, UpdateResult};

/// Validate the URL field and start an analysis
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.analyze.is_in_flight() {
        debug!("Analyze already in flight, ignoring submit");
        return UpdateResult::none();
    }

    match validate_profile_url(&state.url_input.value, state.settings.behavior.validate_url) {
        Ok(url) => {
            info!(
                "Submitting profile {}",
                profile_handle(&url).unwrap_or(url.as_str())
            );
            state.analyze = RequestStatus::InFlight;
            UpdateResult::action(UpdateAction::AnalyzeProfile { url })
        }
        Err(e) => {
            info!("Rejected profile URL: {}", e);
            state.analyze = RequestStatus::Failed(e.display_message());
            UpdateResult::none()
        }
    }
}

/// Replace the profile session with a fresh analysis.
///
/// Optimization results belong to the previous session and are dropped with
/// it. The active tab is kept even when it loses its data.
pub fn handle_completed(state: &mut AppState, response: AnalyzeResponse) -> UpdateResult {
    let session = ProfileSession::new(response);
    info!(
        "Analysis ready for profile {} (score {})",
        session.profile_id(),
        session.analysis.overall_score
    );

    if state.optimization().is_some() {
        debug!("Dropping optimization results of the previous profile");
    }

    state.session = Some(session);
    state.analyze = RequestStatus::Idle;
    if state.upload.error().is_some() {
        state.upload = RequestStatus::Idle;
    }
    state.scroll.reset();
    UpdateResult::none()
}

/// Record an analysis failure, keeping any previous results
pub fn handle_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Analysis failed: {}", error);
    state.analyze = RequestStatus::Failed(error);
    UpdateResult::none()
}
