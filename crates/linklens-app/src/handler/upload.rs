//! Resume upload workflow handlers

use linklens_core::prelude::*;
use linklens_core::{validate_resume_path, OptimizationResults, MSG_ANALYZE_FIRST};

use crate::state::{AppState, RequestStatus, ResultTab};

use super::{UpdateAction, UpdateResult};

/// Check the upload preconditions and start an upload.
///
/// Checked in order: an analyzed profile exists, a path was entered, the
/// path is a readable file.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.upload.is_in_flight() {
        debug!("Upload already in flight, ignoring submit");
        return UpdateResult::none();
    }

    let Some(profile_id) = state.session.as_ref().map(|s| s.profile_id().to_string()) else {
        info!("Upload rejected: no analyzed profile");
        state.upload = RequestStatus::Failed(MSG_ANALYZE_FIRST.to_string());
        return UpdateResult::none();
    };

    match validate_resume_path(&state.resume_input.value) {
        Ok(path) => {
            info!("Uploading {} for profile {}", path.display(), profile_id);
            state.upload = RequestStatus::InFlight;
            UpdateResult::action(UpdateAction::UploadResume { path, profile_id })
        }
        Err(e) => {
            info!("Upload rejected: {}", e);
            state.upload = RequestStatus::Failed(e.display_message());
            UpdateResult::none()
        }
    }
}

/// Attach optimization results to the session they were requested for
pub fn handle_completed(
    state: &mut AppState,
    profile_id: String,
    results: OptimizationResults,
) -> UpdateResult {
    state.resume_input.clear();
    state.upload = RequestStatus::Idle;

    match state.session.as_mut() {
        Some(session) if session.profile_id() == profile_id => {
            info!("Optimization results ready for profile {}", profile_id);
            session.optimization = Some(results);
            state.set_tab(ResultTab::Optimization);
        }
        _ => warn!(
            "Discarding optimization results for stale profile {}",
            profile_id
        ),
    }
    UpdateResult::none()
}

/// Record an upload failure; existing optimization results stay as they were.
///
/// A failure for an earlier profile is still shown in the upload slot, worded
/// so it is not mistaken for a failure against the current profile.
pub fn handle_failed(state: &mut AppState, profile_id: String, error: String) -> UpdateResult {
    state.resume_input.clear();

    let current = state.session.as_ref().map(|s| s.profile_id());
    if current == Some(profile_id.as_str()) {
        warn!("Upload failed: {}", error);
        state.upload = RequestStatus::Failed(error);
    } else {
        warn!("Upload for stale profile {} failed: {}", profile_id, error);
        state.upload = RequestStatus::Failed(stale_failure_message(&profile_id, &error));
    }
    UpdateResult::none()
}

fn stale_failure_message(profile_id: &str, error: &str) -> String {
    format!("Upload for previous profile {profile_id} failed: {error}")
}
