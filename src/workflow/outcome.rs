//! Terminal states of a submission run.

use thiserror::Error;

/// Broad category of a failed run; decides which label is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The environment or GitHub misbehaved.
    InternalFailure,
    /// The submitter's request was refused.
    InvalidSubmission,
}

impl FailureKind {
    /// Stable name exposed to comment templates.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InternalFailure => "internal-failure",
            Self::InvalidSubmission => "invalid-submission",
        }
    }
}

/// A run that stopped before provisioning completed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Submission Issue Handling Failure: \"{reason}\"")]
pub struct SubmissionFailure {
    /// Failure category.
    pub kind: FailureKind,
    /// Human-readable reason, also written to the log.
    pub reason: String,
    /// Label applied to the issue.
    pub label: String,
}

/// A repository provisioned for a submitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedRepository {
    /// Repository name inside the organisation.
    pub name: String,
    /// Login of the submitter, invited with push access.
    pub creator: String,
    /// Description the repository was created with.
    pub description: String,
    /// Link the submitter follows to accept the invitation.
    pub invitation_url: String,
}
