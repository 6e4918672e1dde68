//! # linklens-core - Core Domain Types
//!
//! Foundation crate for linklens. Provides the canonical shapes of every
//! backend payload the client displays, error handling, logging setup, and
//! the client-side input checks.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Payloads
//! - [`ProfileData`] - Scraped profile fields plus the backend `profile_id`
//! - [`AnalysisResults`], [`SectionAnalysis`] - Scores and feedback
//! - [`ContentSuggestion`] - Generated post idea
//! - [`OptimizedSections`], [`BrandingPlan`] - Resume-upload results
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Validation (`validation`)
//! - [`validate_profile_url()`] - `linkedin.com/in/` check
//! - [`validate_resume_path()`] - Resume file existence check
//!
//! ## Prelude
//!
//! ```rust
//! use linklens_core::prelude::*;
//! ```

pub mod analysis;
pub mod error;
pub mod logging;
pub mod optimization;
pub mod profile;
pub mod score;
pub mod validation;

/// Prelude for common imports used throughout all linklens crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use analysis::{capitalize, AnalysisResults, ContentSuggestion, SectionAnalysis};
pub use error::{Error, Result, ResultExt};
pub use optimization::{
    BrandingPlan, ExperienceRewrite, FeaturedItem, Guidance, OptimizationResults,
    OptimizedSections, SectionRewrite, SkillsOptimization, WeeklyPlanEntry,
};
pub use profile::{EducationEntry, ExperienceEntry, ProfileData};
pub use score::{format_category, format_percent, format_score, gauge_ratio};
pub use validation::{
    profile_handle, resume_mime_type, validate_profile_url, validate_resume_path,
    MSG_ANALYZE_FIRST, MSG_EMPTY_URL, MSG_INVALID_URL, MSG_NO_RESUME, PROFILE_URL_MARKER,
};
