//! # linklens-api - Backend Client
//!
//! Talks to the profile analyzer backend over HTTP:
//!
//! - `POST /api/fetch-profile` - [`ProfileBackend::fetch_profile`]
//! - `POST /api/upload-resume` - [`ProfileBackend::upload_resume`]
//!
//! Response bodies are decoded through the wire types in [`wire`] and handed
//! out only as canonical `linklens-core` types.

pub mod client;
pub mod error;
pub mod wire;

pub use client::{
    parse_base_url, BackendClient, LocalProfileBackend, ProfileBackend, MSG_FETCH_FAILED,
    MSG_UPLOAD_FAILED,
};
pub use error::ApiError;
pub use wire::AnalyzeResponse;
