//! GitHub access for submission runs.
//!
//! This module wraps Octocrab behind [`SubmissionGateway`] so the workflow can
//! read submission issues, create repositories, and report back on the issue.
//! Errors are mapped into [`HatcheryError`] variants so that callers can
//! surface precise failures without exposing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;

pub use error::HatcheryError;
pub use gateway::{OctocrabSubmissionGateway, SubmissionGateway};
pub use locator::{IssueNumber, PersonalAccessToken, RepositoryName, RepositoryOwner};
pub use models::{CollaboratorPermission, SubmissionIssue};

#[cfg(test)]
pub use gateway::MockSubmissionGateway;
