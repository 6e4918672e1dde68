//! Message types for the application (TEA pattern)

use linklens_api::AnalyzeResponse;
use linklens_core::OptimizationResults;

use crate::input_key::InputKey;
use crate::state::{Focus, ResultTab};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner)
    Tick,

    /// Request to quit
    Quit,

    // ─────────────────────────────────────────────────────────
    // Focus and form editing
    // ─────────────────────────────────────────────────────────
    /// Move focus to a specific region
    FocusOn(Focus),
    /// Tab
    FocusNext,
    /// Shift+Tab
    FocusPrev,
    /// Append a character to the focused field
    InputChar(char),
    /// Delete the last character of the focused field
    InputBackspace,
    /// Clear the focused field
    InputClear,

    // ─────────────────────────────────────────────────────────
    // Analyze workflow
    // ─────────────────────────────────────────────────────────
    /// Submit the URL field
    SubmitProfileUrl,
    /// Backend analysis succeeded
    AnalyzeCompleted(Box<AnalyzeResponse>),
    /// Backend analysis failed; `error` is the display message
    AnalyzeFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Upload workflow
    // ─────────────────────────────────────────────────────────
    /// Submit the resume-path field
    SubmitResume,
    /// Optimization results arrived for `profile_id`
    UploadCompleted {
        profile_id: String,
        results: Box<OptimizationResults>,
    },
    /// Upload for `profile_id` failed
    UploadFailed { profile_id: String, error: String },

    // ─────────────────────────────────────────────────────────
    // Result tabs
    // ─────────────────────────────────────────────────────────
    /// Select a tab directly (ignored when its data is absent)
    SelectTab(ResultTab),
    NextTab,
    PrevTab,

    // ─────────────────────────────────────────────────────────
    // Scroll
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    PageUp,
    PageDown,
}
