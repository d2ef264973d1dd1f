//! Identity wrappers for the repositories, issues and tokens a run touches.

use url::Url;

use super::error::HatcheryError;

/// Public GitHub REST API base.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Public GitHub web base used for invitation links.
pub const DEFAULT_SERVER_URL: &str = "https://github.com";

/// Repository owner (user or organisation) wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    /// Validates that the owner is non-empty and contains no path separator.
    ///
    /// # Errors
    ///
    /// Returns [`HatcheryError::InvalidRepository`] for blank or nested values.
    pub fn new(value: &str) -> Result<Self, HatcheryError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.contains('/') {
            return Err(HatcheryError::InvalidRepository {
                message: format!("owner '{value}' must be a single non-empty segment"),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Validates that the repository name is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`HatcheryError::InvalidRepository`] for blank values.
    pub fn new(value: &str) -> Result<Self, HatcheryError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(HatcheryError::InvalidRepository {
                message: "repository name must not be empty".to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Issue number within the submissions repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueNumber(u64);

impl IssueNumber {
    /// Rejects zero, which GitHub never assigns.
    ///
    /// # Errors
    ///
    /// Returns [`HatcheryError::InvalidIssueNumber`] when `value` is zero.
    pub const fn new(value: u64) -> Result<Self, HatcheryError> {
        if value == 0 {
            return Err(HatcheryError::InvalidIssueNumber);
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `HatcheryError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, HatcheryError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(HatcheryError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl std::fmt::Debug for PersonalAccessToken {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("PersonalAccessToken(***)")
    }
}

/// Parses an API or server base URL, rejecting non-HTTP schemes.
///
/// # Errors
///
/// Returns [`HatcheryError::InvalidUrl`] when the input does not parse or is
/// not an `http`/`https` URL.
pub fn parse_base_url(input: &str) -> Result<Url, HatcheryError> {
    let parsed = Url::parse(input.trim())
        .map_err(|error| HatcheryError::InvalidUrl(format!("{input}: {error}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(HatcheryError::InvalidUrl(format!(
            "{input}: scheme must be http or https"
        )));
    }

    if parsed.host_str().is_none() {
        return Err(HatcheryError::InvalidUrl(format!(
            "{input}: URL must include a host"
        )));
    }

    Ok(parsed)
}

/// Splits a `GITHUB_REPOSITORY` style `owner/repo` slug.
///
/// # Errors
///
/// Returns [`HatcheryError::InvalidRepository`] unless the slug has exactly
/// two non-empty segments.
pub fn split_repository_slug(
    slug: &str,
) -> Result<(RepositoryOwner, RepositoryName), HatcheryError> {
    let Some((owner, repo)) = slug.trim().split_once('/') else {
        return Err(HatcheryError::InvalidRepository {
            message: format!("'{slug}' must have the form owner/repo"),
        });
    };

    if repo.contains('/') {
        return Err(HatcheryError::InvalidRepository {
            message: format!("'{slug}' must have the form owner/repo"),
        });
    }

    Ok((RepositoryOwner::new(owner)?, RepositoryName::new(repo)?))
}
