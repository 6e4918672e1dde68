//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per focus region
//! - `analyze`: Profile URL submission and its completion
//! - `upload`: Resume submission and its completion
//! - `tabs`: Result tab switching

pub(crate) mod analyze;
pub(crate) mod keys;
pub(crate) mod tabs;
pub(crate) mod update;
pub(crate) mod upload;


use std::path::PathBuf;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// POST the URL to `/api/fetch-profile`
    AnalyzeProfile { url: String },

    /// POST the resume to `/api/upload-resume`
    UploadResume { path: PathBuf, profile_id: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
