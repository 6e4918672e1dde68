//! Errors raised while talking to the analyzer backend

use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single backend call
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Connection refused, DNS failure, TLS error, timeout...
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response; `message` is the backend `detail` or a generic fallback
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("{0}")]
    Decode(String),

    #[error("Response missing profile_id")]
    MissingProfileId,

    #[error("Failed to read {path}: {source}")]
    ReadResume {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// HTTP status when the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<ApiError> for linklens_core::Error {
    fn from(err: ApiError) -> Self {
        use linklens_core::Error;
        match err {
            ApiError::InvalidBaseUrl { .. } => Error::config_invalid(err.to_string()),
            ApiError::Transport(e) => Error::transport(e.to_string()),
            ApiError::Status { status, message } => Error::request(Some(status), message),
            ApiError::Decode(message) => Error::decode(message),
            ApiError::MissingProfileId => Error::decode("response missing profile_id"),
            ApiError::ReadResume { .. } => Error::validation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_maps_to_request_error() {
        let err: linklens_core::Error = ApiError::Status {
            status: 400,
            message: "Invalid LinkedIn URL format".into(),
        }
        .into();

        assert!(matches!(
            err,
            linklens_core::Error::Request {
                status: Some(400),
                ..
            }
        ));
        assert_eq!(err.to_string(), "Invalid LinkedIn URL format");
    }

    #[test]
    fn test_decode_error_message() {
        let err: linklens_core::Error = ApiError::decode("missing field `analysis_results`").into();
        assert_eq!(
            err.to_string(),
            "Unexpected response from backend: missing field `analysis_results`"
        );
    }

    #[test]
    fn test_missing_profile_id_is_decode_error() {
        let err: linklens_core::Error = ApiError::MissingProfileId.into();
        assert!(matches!(err, linklens_core::Error::Decode { .. }));
    }

    #[test]
    fn test_status_accessor() {
        let err = ApiError::Status {
            status: 502,
            message: "bad gateway".into(),
        };
        assert_eq!(err.status(), Some(502));
        assert_eq!(ApiError::MissingProfileId.status(), None);
    }
}
