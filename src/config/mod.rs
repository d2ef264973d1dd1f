//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.hatchery.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `HATCHERY_TOKEN`, `HATCHERY_OWNER`, ...
//! 4. **Command-line arguments** – `--token`/`-t`, `--owner`/`-o`, ...
//!
//! Values left unset by every layer fall back to the variables the GitHub
//! Actions runner exports (`GITHUB_TOKEN`, `GITHUB_REPOSITORY`,
//! `GITHUB_EVENT_PATH`, `GITHUB_API_URL`, `GITHUB_SERVER_URL`).
//!
//! # Configuration File
//!
//! ```toml
//! owner = "octo-org"
//! repo = "submissions"
//! submission_label = "submission"
//! failure_label = "internal-failure"
//! invalid_label = "invalid"
//! failure_comment = "Failure handling issue: {{ reason }}"
//! ```

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::actions::{self, GITHUB_API_URL, GITHUB_REPOSITORY, GITHUB_SERVER_URL, GITHUB_TOKEN};
use crate::context::RunContext;
use crate::github::error::HatcheryError;
use crate::github::locator::{
    DEFAULT_API_URL, DEFAULT_SERVER_URL, IssueNumber, RepositoryName, RepositoryOwner,
    parse_base_url, split_repository_slug,
};
use crate::workflow::WorkflowConfig;
use crate::workflow::config::{
    DEFAULT_FAILURE_COMMENT, DEFAULT_FAILURE_LABEL, DEFAULT_INVALID_LABEL,
    DEFAULT_SUBMISSION_LABEL, DEFAULT_SUCCESS_COMMENT,
};

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use hatchery::HatcheryConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = HatcheryConfig::load().expect("failed to load configuration");
/// let context = config.run_context().expect("run context required");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "HATCHERY",
    discovery(
        dotfile_name = ".hatchery.toml",
        config_file_name = "hatchery.toml",
        app_name = "hatchery"
    )
)]
pub struct HatcheryConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `HATCHERY_TOKEN` or `GITHUB_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Organisation that owns the submissions repository and receives the
    /// new repositories.
    ///
    /// Defaults to the owner half of `GITHUB_REPOSITORY`.
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository where submission issues are filed.
    ///
    /// Defaults to the repository half of `GITHUB_REPOSITORY`.
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// Issue to handle.
    ///
    /// Defaults to `issue.number` in the payload at `event_path`.
    #[ortho_config(cli_short = 'i')]
    pub issue: Option<u64>,

    /// Event payload to read the issue number from.
    ///
    /// Defaults to `GITHUB_EVENT_PATH`.
    #[ortho_config()]
    pub event_path: Option<String>,

    /// REST API base URL.
    ///
    /// Defaults to `GITHUB_API_URL`, then `https://api.github.com`.
    #[ortho_config()]
    pub api_url: Option<String>,

    /// Web base URL used for invitation links.
    ///
    /// Defaults to `GITHUB_SERVER_URL`, then `https://github.com`.
    #[ortho_config()]
    pub server_url: Option<String>,

    /// Label an issue must carry to be handled.
    #[ortho_config()]
    pub submission_label: String,

    /// Label applied on internal failures.
    #[ortho_config()]
    pub failure_label: String,

    /// Label applied to refused submissions.
    #[ortho_config()]
    pub invalid_label: String,

    /// Jinja template for the success comment.
    #[ortho_config()]
    pub success_comment: String,

    /// Jinja template for the failure comment.
    #[ortho_config()]
    pub failure_comment: String,
}

impl Default for HatcheryConfig {
    fn default() -> Self {
        Self {
            token: None,
            owner: None,
            repo: None,
            issue: None,
            event_path: None,
            api_url: None,
            server_url: None,
            submission_label: DEFAULT_SUBMISSION_LABEL.to_owned(),
            failure_label: DEFAULT_FAILURE_LABEL.to_owned(),
            invalid_label: DEFAULT_INVALID_LABEL.to_owned(),
            success_comment: DEFAULT_SUCCESS_COMMENT.to_owned(),
            failure_comment: DEFAULT_FAILURE_COMMENT.to_owned(),
        }
    }
}

impl HatcheryConfig {
    /// Resolves the token from configuration or the `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`HatcheryError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, HatcheryError> {
        self.token
            .clone()
            .or_else(|| actions::runner_variable(GITHUB_TOKEN))
            .ok_or(HatcheryError::MissingToken)
    }

    /// Resolves the organisation and submissions repository.
    ///
    /// Explicit `owner`/`repo` values win; missing halves come from
    /// `GITHUB_REPOSITORY`.
    ///
    /// # Errors
    ///
    /// Returns [`HatcheryError::Configuration`] when neither source provides
    /// a value, or [`HatcheryError::InvalidRepository`] for malformed input.
    pub fn resolve_repository(&self) -> Result<(RepositoryOwner, RepositoryName), HatcheryError> {
        if let (Some(owner), Some(repo)) = (&self.owner, &self.repo) {
            return Ok((RepositoryOwner::new(owner)?, RepositoryName::new(repo)?));
        }

        let slug = actions::runner_variable(GITHUB_REPOSITORY).ok_or_else(|| {
            HatcheryError::Configuration {
                message: format!(
                    "repository is required (use --owner and --repo or set {GITHUB_REPOSITORY})"
                ),
            }
        })?;
        let (slug_owner, slug_repo) = split_repository_slug(&slug)?;

        let resolved_owner = self
            .owner
            .as_deref()
            .map(RepositoryOwner::new)
            .transpose()?
            .unwrap_or(slug_owner);
        let resolved_repo = self
            .repo
            .as_deref()
            .map(RepositoryName::new)
            .transpose()?
            .unwrap_or(slug_repo);
        Ok((resolved_owner, resolved_repo))
    }

    /// Resolves the issue to handle.
    ///
    /// Returns `Ok(None)` when neither the configuration nor an event payload
    /// names an issue; the workflow reports that as a failure itself.
    ///
    /// # Errors
    ///
    /// Returns [`HatcheryError::InvalidIssueNumber`] for zero, or
    /// [`HatcheryError::Io`] when the event payload cannot be read.
    pub fn resolve_issue(&self) -> Result<Option<IssueNumber>, HatcheryError> {
        if let Some(number) = self.issue {
            return IssueNumber::new(number).map(Some);
        }

        let path = self
            .event_path
            .as_deref()
            .map(Utf8PathBuf::from)
            .or_else(actions::event_path);

        let Some(payload) = path else {
            return Ok(None);
        };

        actions::issue_number_from_event(&payload)?
            .map(IssueNumber::new)
            .transpose()
    }

    /// Resolves the REST API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`HatcheryError::InvalidUrl`] when the value does not parse.
    pub fn resolve_api_url(&self) -> Result<Url, HatcheryError> {
        let value = self
            .api_url
            .clone()
            .or_else(|| actions::runner_variable(GITHUB_API_URL))
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        parse_base_url(&value)
    }

    /// Resolves the web base URL.
    ///
    /// # Errors
    ///
    /// Returns [`HatcheryError::InvalidUrl`] when the value does not parse.
    pub fn resolve_server_url(&self) -> Result<Url, HatcheryError> {
        let value = self
            .server_url
            .clone()
            .or_else(|| actions::runner_variable(GITHUB_SERVER_URL))
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_owned());
        parse_base_url(&value)
    }

    /// Builds the [`RunContext`] for this run.
    ///
    /// # Errors
    ///
    /// Propagates failures from the individual `resolve_*` methods.
    pub fn run_context(&self) -> Result<RunContext, HatcheryError> {
        let (owner, repo) = self.resolve_repository()?;
        let issue = self.resolve_issue()?;
        let server_url = self.resolve_server_url()?;
        Ok(RunContext::new(owner, repo, issue)?.with_server_url(server_url))
    }

    /// Labels and templates for the workflow.
    #[must_use]
    pub fn workflow_config(&self) -> WorkflowConfig {
        WorkflowConfig {
            submission_label: self.submission_label.clone(),
            failure_label: self.failure_label.clone(),
            invalid_label: self.invalid_label.clone(),
            success_comment_template: self.success_comment.clone(),
            failure_comment_template: self.failure_comment.clone(),
        }
    }
}

#[cfg(test)]
mod tests;
