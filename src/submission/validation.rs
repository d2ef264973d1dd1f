//! Repository name validation: line breaks, reserved names and profanity.

use rustrict::CensorStr;
use thiserror::Error;

/// Reasons a requested repository name is refused.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum NameRejection {
    /// The issue body has no "Repository Name" section.
    #[error("Issue body does not contain a repository name.")]
    Missing,

    /// The name is empty or whitespace only.
    #[error("Repository name is empty.")]
    Empty,

    /// The name spans more than one line.
    #[error("Repository name includes newlines, aborting...")]
    MultiLine,

    /// The name is reserved for the organisation itself.
    #[error("Repository name is on the blacklist.")]
    Reserved,

    /// The profanity filter flagged the name.
    #[error("Repository name was flagged as inappropriate.")]
    Profane,
}

/// Profanity check applied to requested repository names.
pub trait ProfanityFilter: Send + Sync {
    /// Returns true when `text` should be refused.
    fn is_profane(&self, text: &str) -> bool;
}

/// [`ProfanityFilter`] backed by the `rustrict` word list.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustrictFilter;

impl ProfanityFilter for RustrictFilter {
    fn is_profane(&self, text: &str) -> bool {
        text.is_inappropriate()
    }
}

/// Names that may never be requested in `organisation`.
///
/// Covers the organisation profile repositories and the organisation's
/// GitHub Pages site.
#[must_use]
pub fn reserved_names(organisation: &str) -> [String; 4] {
    [
        ".github".to_owned(),
        ".github-private".to_owned(),
        organisation.to_owned(),
        format!("{organisation}.github.io"),
    ]
}

/// Returns true when `name` matches a reserved name of `organisation`.
///
/// GitHub treats repository names case-insensitively, so the comparison
/// ignores ASCII case.
#[must_use]
pub fn is_reserved(name: &str, organisation: &str) -> bool {
    reserved_names(organisation)
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name))
}

/// Checks a normalised name in order: emptiness, line breaks, reserved
/// names, then profanity.
///
/// # Errors
///
/// Returns the first [`NameRejection`] that applies.
pub fn validate_name<F>(name: &str, organisation: &str, filter: &F) -> Result<(), NameRejection>
where
    F: ProfanityFilter + ?Sized,
{
    if name.trim().is_empty() {
        return Err(NameRejection::Empty);
    }

    if name.contains(['\n', '\r']) {
        return Err(NameRejection::MultiLine);
    }

    if is_reserved(name, organisation) {
        tracing::debug!("'{name}' matches a reserved name of {organisation}");
        return Err(NameRejection::Reserved);
    }

    if filter.is_profane(name) {
        return Err(NameRejection::Profane);
    }

    Ok(())
}
