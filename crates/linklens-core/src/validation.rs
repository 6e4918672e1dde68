//! Client-side checks performed before any network call

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Marker every accepted profile URL must contain
pub const PROFILE_URL_MARKER: &str = "linkedin.com/in/";

pub const MSG_EMPTY_URL: &str = "Please enter a LinkedIn profile URL";
pub const MSG_INVALID_URL: &str =
    "Please enter a valid LinkedIn profile URL (e.g., https://www.linkedin.com/in/username)";
pub const MSG_ANALYZE_FIRST: &str = "Please analyze a LinkedIn profile first";
pub const MSG_NO_RESUME: &str = "Please select a resume file to upload";

/// Validate a profile URL, returning it trimmed.
///
/// When `enforce_marker` is false only emptiness is checked and the backend
/// is left to reject malformed URLs.
pub fn validate_profile_url(input: &str, enforce_marker: bool) -> Result<String> {
    let url = input.trim();
    if url.is_empty() {
        return Err(Error::validation(MSG_EMPTY_URL));
    }
    if enforce_marker && !url.contains(PROFILE_URL_MARKER) {
        return Err(Error::validation(MSG_INVALID_URL));
    }
    Ok(url.to_string())
}

/// Extract the public profile handle, e.g. `williamhgates`
pub fn profile_handle(url: &str) -> Option<&str> {
    static HANDLE: OnceLock<Regex> = OnceLock::new();
    let re = HANDLE.get_or_init(|| {
        Regex::new(r"linkedin\.com/in/([^/?#\s]+)").expect("profile handle regex is valid")
    });
    re.captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Validate the resume path entered by the user.
///
/// `~/` is expanded against the home directory.
pub fn validate_resume_path(input: &str) -> Result<PathBuf> {
    let raw = input.trim();
    if raw.is_empty() {
        return Err(Error::validation(MSG_NO_RESUME));
    }

    let path = expand_home(raw);
    if !path.is_file() {
        return Err(Error::validation(format!(
            "Resume file not found: {}",
            path.display()
        )));
    }
    Ok(path)
}

fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

/// MIME type to send for a resume, guessed from its extension
pub fn resume_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("doc") => "application/msword",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_valid_profile_url_is_trimmed() {
        let url = validate_profile_url("  https://www.linkedin.com/in/williamhgates  ", true)
            .unwrap();
        assert_eq!(url, "https://www.linkedin.com/in/williamhgates");
    }

    #[test]
    fn test_url_without_marker_is_rejected() {
        let err = validate_profile_url("https://example.com/williamhgates", true).unwrap_err();
        assert_eq!(err.to_string(), MSG_INVALID_URL);
    }

    #[test]
    fn test_url_without_marker_passes_when_not_enforced() {
        assert!(validate_profile_url("invalid-url", false).is_ok());
    }

    #[test]
    fn test_empty_url_is_rejected_even_when_not_enforced() {
        let err = validate_profile_url("   ", false).unwrap_err();
        assert_eq!(err.to_string(), MSG_EMPTY_URL);
    }

    #[test]
    fn test_profile_handle() {
        assert_eq!(
            profile_handle("https://www.linkedin.com/in/williamhgates/?trk=x"),
            Some("williamhgates")
        );
        assert_eq!(profile_handle("linkedin.com/in/johndoe"), Some("johndoe"));
        assert_eq!(profile_handle("https://example.com"), None);
    }

    #[test]
    fn test_empty_resume_path() {
        let err = validate_resume_path("").unwrap_err();
        assert_eq!(err.to_string(), MSG_NO_RESUME);
    }

    #[test]
    fn test_missing_resume_file() {
        let err = validate_resume_path("/definitely/not/here.pdf").unwrap_err();
        assert!(err.to_string().starts_with("Resume file not found"));
    }

    #[test]
    fn test_existing_resume_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("resume.pdf");
        fs::write(&file, b"%PDF-1.4").unwrap();

        let path = validate_resume_path(file.to_str().unwrap()).unwrap();
        assert_eq!(path, file);
    }

    #[test]
    fn test_directory_is_not_a_resume() {
        let dir = TempDir::new().unwrap();
        assert!(validate_resume_path(dir.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_resume_mime_type() {
        assert_eq!(resume_mime_type(Path::new("cv.PDF")), "application/pdf");
        assert_eq!(resume_mime_type(Path::new("cv.txt")), "text/plain");
        assert_eq!(
            resume_mime_type(Path::new("cv")),
            "application/octet-stream"
        );
    }
}
