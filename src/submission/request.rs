//! Submission request parsed from an issue body.

use super::extract::{repository_description, repository_name};
use super::validation::NameRejection;

/// Repository name and description requested by a submitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    /// Normalised repository name; not yet validated.
    pub repo_name: String,
    /// Description, verbatim from the issue body.
    pub repo_description: String,
}

impl SubmissionRequest {
    /// Extracts the request from an issue body.
    ///
    /// A missing "Description" section yields an empty description.
    ///
    /// # Errors
    ///
    /// Returns [`NameRejection::Missing`] when the body has no
    /// "Repository Name" section.
    pub fn from_body(body: &str) -> Result<Self, NameRejection> {
        let raw_name = repository_name(body).ok_or(NameRejection::Missing)?;
        let repo_description = repository_description(body).unwrap_or_default();

        Ok(Self {
            repo_name: normalise_name(raw_name),
            repo_description: repo_description.to_owned(),
        })
    }
}

/// Replaces the first space in `raw` with a hyphen.
///
/// Only the first space is replaced: `"my cool app"` becomes
/// `"my-cool app"`.
#[must_use]
pub fn normalise_name(raw: &str) -> String {
    raw.replacen(' ', "-", 1)
}
