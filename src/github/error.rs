//! Error types exposed by the GitHub layer and the submission workflow.

use thiserror::Error;

/// Errors surfaced while loading configuration or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HatcheryError {
    /// The authentication token was missing.
    #[error("personal access token is required")]
    MissingToken,

    /// No issue number could be resolved for this run.
    #[error("issue number must be a positive integer")]
    InvalidIssueNumber,

    /// A repository owner or name was empty or malformed.
    #[error("invalid repository identifier: {message}")]
    InvalidRepository {
        /// Description of the rejected identifier.
        message: String,
    },

    /// A URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// A comment template failed to parse or render.
    #[error("comment template error: {message}")]
    Template {
        /// Details reported by the template engine.
        message: String,
    },
}
