//! Explicit description of the environment a submission run operates in.
//!
//! The workflow never reads ambient process state; the binary resolves a
//! [`RunContext`] from configuration and the Actions environment and hands it
//! over at construction time.

use url::Url;

use crate::github::error::HatcheryError;
use crate::github::locator::{
    DEFAULT_SERVER_URL, IssueNumber, RepositoryName, RepositoryOwner, parse_base_url,
};

/// Organisation, submissions repository and issue for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    organisation: RepositoryOwner,
    repository: RepositoryName,
    issue: Option<IssueNumber>,
    server_url: Url,
}

impl RunContext {
    /// Creates a context targeting public GitHub.
    ///
    /// # Errors
    ///
    /// Returns [`HatcheryError::InvalidUrl`] if the default server URL fails
    /// to parse.
    pub fn new(
        organisation: RepositoryOwner,
        repository: RepositoryName,
        issue: Option<IssueNumber>,
    ) -> Result<Self, HatcheryError> {
        Ok(Self {
            organisation,
            repository,
            issue,
            server_url: parse_base_url(DEFAULT_SERVER_URL)?,
        })
    }

    /// Replaces the web server used to build invitation links.
    #[must_use]
    pub fn with_server_url(mut self, server_url: Url) -> Self {
        self.server_url = server_url;
        self
    }

    /// Organisation that owns both the submissions repository and the
    /// repositories created for submitters.
    #[must_use]
    pub const fn organisation(&self) -> &RepositoryOwner {
        &self.organisation
    }

    /// Repository where submission issues are filed.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Issue that triggered the run, if any.
    #[must_use]
    pub const fn issue(&self) -> Option<IssueNumber> {
        self.issue
    }

    /// Web server base URL.
    #[must_use]
    pub const fn server_url(&self) -> &Url {
        &self.server_url
    }

    /// Link a submitter follows to accept the invitation to `repository`.
    #[must_use]
    pub fn invitation_url(&self, repository: &str) -> String {
        format!(
            "{base}/{owner}/{repository}/invitations",
            base = self.server_url.as_str().trim_end_matches('/'),
            owner = self.organisation.as_str(),
        )
    }
}
