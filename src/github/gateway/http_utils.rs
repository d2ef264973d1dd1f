//! Shared HTTP utilities for the gateway.

use url::Url;

use crate::github::error::HatcheryError;

/// Builds a percent-encoded API path from raw segments.
///
/// Segments containing `/` are split so file paths keep their directory
/// separators, while every other reserved character is escaped.
pub(super) fn api_path(segments: &[&str]) -> Result<String, HatcheryError> {
    let mut scratch = Url::parse("http://localhost/")
        .map_err(|error| HatcheryError::InvalidUrl(error.to_string()))?;

    scratch
        .path_segments_mut()
        .map_err(|()| HatcheryError::InvalidUrl("scratch URL cannot be a base".to_owned()))?
        .pop_if_empty()
        .extend(segments.iter().flat_map(|segment| segment.split('/')));

    Ok(scratch.path().to_owned())
}

pub(super) fn extract_github_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}
