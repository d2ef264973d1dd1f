//! `metadata.json` committed into every provisioned repository.

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::github::error::HatcheryError;

/// Path of the metadata file inside the new repository.
pub const METADATA_PATH: &str = "metadata.json";

/// Commit message used when adding the metadata file.
pub const METADATA_COMMIT_MESSAGE: &str = "Create metadata.json";

/// Who requested a repository and what they asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryMetadata {
    /// Login of the submitter.
    pub creator: String,
    /// Repository name as created.
    pub name: String,
    /// Repository description as submitted.
    pub description: String,
}

impl RepositoryMetadata {
    /// Serialises the metadata as JSON indented with four spaces.
    ///
    /// # Errors
    ///
    /// Returns [`HatcheryError::Io`] if serialisation fails.
    pub fn to_pretty_json(&self) -> Result<String, HatcheryError> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);

        self.serialize(&mut serializer)
            .map_err(|error| HatcheryError::Io {
                message: format!("failed to serialise repository metadata: {error}"),
            })?;

        String::from_utf8(buffer).map_err(|error| HatcheryError::Io {
            message: format!("repository metadata is not UTF-8: {error}"),
        })
    }
}
