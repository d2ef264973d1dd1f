//! Data models for the issues and repositories a submission run touches.

use serde::{Deserialize, Serialize};

/// Submission issue as seen by the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionIssue {
    /// Issue number.
    pub number: u64,
    /// Markdown body; GitHub omits it for issues created without text.
    pub body: Option<String>,
    /// Login of the submitter.
    pub author: Option<String>,
    /// Names of the labels attached to the issue.
    pub labels: Vec<String>,
}

impl SubmissionIssue {
    /// Returns true when a label with exactly this name is attached.
    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|name| name == label)
    }

    /// Borrow the body, treating a missing body as empty.
    #[must_use]
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

/// Access level granted when inviting a collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollaboratorPermission {
    /// Read-only access.
    Pull,
    /// Read and write access.
    #[default]
    Push,
    /// Full administrative access.
    Admin,
}

impl CollaboratorPermission {
    /// Returns the permission name used by the GitHub API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pull => "pull",
            Self::Push => "push",
            Self::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiIssue {
    pub(super) number: u64,
    pub(super) body: Option<String>,
    pub(super) user: Option<ApiUser>,
    #[serde(default)]
    pub(super) labels: Vec<ApiLabel>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) login: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiLabel {
    pub(super) name: Option<String>,
}

impl From<ApiIssue> for SubmissionIssue {
    fn from(value: ApiIssue) -> Self {
        Self {
            number: value.number,
            body: value.body,
            author: value.user.and_then(|user| user.login),
            labels: value
                .labels
                .into_iter()
                .filter_map(|label| label.name)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct CreateRepositoryBody<'a> {
    pub(super) name: &'a str,
    pub(super) description: &'a str,
    pub(super) visibility: &'static str,
    pub(super) has_projects: bool,
    pub(super) auto_init: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct CollaboratorBody {
    pub(super) permission: CollaboratorPermission,
}

#[derive(Debug, Serialize)]
pub(super) struct CommitFileBody<'a> {
    pub(super) message: &'a str,
    pub(super) content: String,
}

#[derive(Debug, Serialize)]
pub(super) struct CommentBody<'a> {
    pub(super) body: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct LabelsBody<'a> {
    pub(super) labels: [&'a str; 1],
}

#[derive(Debug, Serialize)]
pub(super) struct IssueStateBody {
    pub(super) state: &'static str,
}
