//! Gateway for the GitHub operations a submission run performs.
//!
//! The trait keeps the workflow independent of Octocrab so tests can drive it
//! with mocks, while [`OctocrabSubmissionGateway`] performs the real HTTP
//! requests.

mod client;
mod error_mapping;
mod http_utils;
mod submission;

pub use submission::OctocrabSubmissionGateway;

use async_trait::async_trait;

use crate::github::error::HatcheryError;
use crate::github::locator::IssueNumber;
use crate::github::models::{CollaboratorPermission, SubmissionIssue};

/// Operations against the submissions repository and the organisation.
///
/// Every method maps a non-success HTTP status to an error; callers never
/// inspect raw status codes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Fetch an issue from the submissions repository, or `None` when it does
    /// not exist.
    async fn issue(&self, number: IssueNumber) -> Result<Option<SubmissionIssue>, HatcheryError>;

    /// Attach a label to the issue.
    async fn add_label(&self, number: IssueNumber, label: &str) -> Result<(), HatcheryError>;

    /// Post a comment on the issue.
    async fn comment(&self, number: IssueNumber, body: &str) -> Result<(), HatcheryError>;

    /// Close the issue.
    async fn close_issue(&self, number: IssueNumber) -> Result<(), HatcheryError>;

    /// Create a public, auto-initialised repository in the organisation.
    async fn create_repository(&self, name: &str, description: &str)
    -> Result<(), HatcheryError>;

    /// Invite a user to a repository in the organisation.
    async fn add_collaborator(
        &self,
        repository: &str,
        username: &str,
        permission: CollaboratorPermission,
    ) -> Result<(), HatcheryError>;

    /// Commit a file to the default branch of a repository in the
    /// organisation.
    async fn commit_file(
        &self,
        repository: &str,
        path: &str,
        message: &str,
        content: &str,
    ) -> Result<(), HatcheryError>;
}
