//! HTTP client for the analyzer backend
//!
//! [`BackendClient`] is the only place that talks to the backend. Both calls
//! read the full body before decoding so that a transport failure and a
//! malformed 2xx body surface as different errors.

use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;

use linklens_core::{resume_mime_type, OptimizationResults};

use crate::error::ApiError;
use crate::wire::{AnalyzeResponse, AnalyzeResponseWire, ErrorBodyWire, UploadResponseWire};

const FETCH_PROFILE_PATH: &str = "api/fetch-profile";
const UPLOAD_RESUME_PATH: &str = "api/upload-resume";

pub const MSG_FETCH_FAILED: &str = "Failed to fetch profile data";
pub const MSG_UPLOAD_FAILED: &str = "Failed to upload resume";

/// Backend operations used by the app layer
///
/// Implement the `Send` variant [`ProfileBackend`]; [`BackendClient`] does.
#[trait_variant::make(ProfileBackend: Send)]
pub trait LocalProfileBackend {
    /// Submit a profile URL for scraping and analysis
    async fn fetch_profile(&self, linkedin_url: &str) -> Result<AnalyzeResponse, ApiError>;

    /// Upload a resume to optimize the profile identified by `profile_id`
    async fn upload_resume(
        &self,
        path: &Path,
        profile_id: &str,
    ) -> Result<OptimizationResults, ApiError>;
}

#[derive(Debug, Serialize)]
struct FetchProfileRequest<'a> {
    linkedin_url: &'a str,
}

/// reqwest-backed client; cheap to clone
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: Url,
}

impl BackendClient {
    /// Build a client for `base_url`.
    ///
    /// `timeout` of `None` keeps reqwest's default (no overall timeout).
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let base_url = parse_base_url(base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Parse and normalise a base URL so that relative joins keep its path
pub fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let invalid = |reason: String| ApiError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("not a base URL".to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

impl ProfileBackend for BackendClient {
    async fn fetch_profile(&self, linkedin_url: &str) -> Result<AnalyzeResponse, ApiError> {
        let endpoint = self.endpoint(FETCH_PROFILE_PATH)?;
        info!("Analyzing profile {}", linkedin_url);

        let response = self
            .http
            .post(endpoint)
            .json(&FetchProfileRequest { linkedin_url })
            .send()
            .await?;

        let wire: AnalyzeResponseWire = read_json(response, MSG_FETCH_FAILED).await?;
        let analysis = wire.into_canonical()?;
        debug!(
            "Profile {} analyzed: {} sections, {} suggestions",
            analysis.profile.profile_id,
            analysis.analysis.sections.len(),
            analysis.suggestions.len()
        );
        Ok(analysis)
    }

    async fn upload_resume(
        &self,
        path: &Path,
        profile_id: &str,
    ) -> Result<OptimizationResults, ApiError> {
        let endpoint = self.endpoint(UPLOAD_RESUME_PATH)?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ApiError::ReadResume {
                path: path.to_path_buf(),
                source,
            })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume".to_string());
        info!(
            "Uploading resume {} ({} bytes) for profile {}",
            file_name,
            bytes.len(),
            profile_id
        );

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(resume_mime_type(path))?;
        let form = Form::new()
            .part("file", part)
            .text("profile_id", profile_id.to_string());

        let response = self.http.post(endpoint).multipart(form).send().await?;

        let wire: UploadResponseWire = read_json(response, MSG_UPLOAD_FAILED).await?;
        Ok(wire.into_canonical())
    }
}

/// Read the whole body, mapping non-2xx to [`ApiError::Status`]
async fn read_json<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBodyWire>(&body)
            .ok()
            .and_then(ErrorBodyWire::detail)
            .unwrap_or_else(|| fallback.to_string());
        warn!("Backend returned {}: {}", status, message);
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_slice(&body).map_err(|e| ApiError::decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let url = parse_base_url("http://localhost:8001").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8001/");
    }

    #[test]
    fn test_base_url_with_path_prefix_keeps_prefix() {
        let client = BackendClient::new("https://example.com/analyzer", None).unwrap();
        let endpoint = client.endpoint(FETCH_PROFILE_PATH).unwrap();
        assert_eq!(
            endpoint.as_str(),
            "https://example.com/analyzer/api/fetch-profile"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(ApiError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            parse_base_url("ftp://example.com"),
            Err(ApiError::InvalidBaseUrl { .. })
        ));
    }
}
