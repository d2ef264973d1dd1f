//! Hatchery library crate providing issue-driven repository provisioning.
//!
//! A submitter opens an issue in a submissions repository; the workflow reads
//! the requested name and description from the issue form, refuses unsafe
//! names, creates the repository in the organisation, invites the submitter,
//! and reports the outcome back on the issue.

pub mod actions;
pub mod config;
pub mod context;
pub mod github;
pub mod submission;
pub mod workflow;

pub use config::HatcheryConfig;
pub use context::RunContext;
pub use github::{
    HatcheryError, OctocrabSubmissionGateway, PersonalAccessToken, SubmissionGateway,
};
pub use submission::{RustrictFilter, SubmissionRequest};
pub use workflow::{ProvisionedRepository, SubmissionFailure, SubmissionWorkflow, WorkflowConfig};
