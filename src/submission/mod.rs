//! Submission parsing and validation.
//!
//! Turns a submission issue body into a [`SubmissionRequest`], checks the
//! requested name, and describes the metadata committed into the new
//! repository.

pub mod extract;
pub mod metadata;
pub mod request;
pub mod validation;

pub use extract::{extract_subsection, repository_description, repository_name};
pub use metadata::{METADATA_COMMIT_MESSAGE, METADATA_PATH, RepositoryMetadata};
pub use request::{SubmissionRequest, normalise_name};
pub use validation::{NameRejection, ProfanityFilter, RustrictFilter, validate_name};
