//! End-to-end handling of one submission issue.
//!
//! [`SubmissionWorkflow::run`] walks a fixed sequence of steps and stops at
//! the first failure:
//!
//! 1. fetch the issue named by the [`RunContext`];
//! 2. require the submission label;
//! 3. extract and normalise the requested name and description;
//! 4. refuse multi-line, reserved or profane names;
//! 5. create the repository and invite the submitter;
//! 6. commit `metadata.json`;
//! 7. comment with the invitation link and close the issue.
//!
//! A failure is reported on the issue (comment, close, label) before it is
//! returned. Nothing is retried or rolled back.

pub mod comments;
pub mod config;
pub mod outcome;

pub use config::WorkflowConfig;
pub use outcome::{FailureKind, ProvisionedRepository, SubmissionFailure};

use crate::context::RunContext;
use crate::github::error::HatcheryError;
use crate::github::gateway::SubmissionGateway;
use crate::github::locator::IssueNumber;
use crate::github::models::{CollaboratorPermission, SubmissionIssue};
use crate::submission::{
    METADATA_COMMIT_MESSAGE, METADATA_PATH, NameRejection, ProfanityFilter, RepositoryMetadata,
    SubmissionRequest, validate_name,
};

use comments::{check_template, render_failure_comment, render_success_comment};

/// Drives a single submission issue to success or failure.
pub struct SubmissionWorkflow<'client, Gateway, Filter>
where
    Gateway: SubmissionGateway,
    Filter: ProfanityFilter,
{
    gateway: &'client Gateway,
    filter: Filter,
    context: RunContext,
    config: WorkflowConfig,
}

impl<'client, Gateway, Filter> SubmissionWorkflow<'client, Gateway, Filter>
where
    Gateway: SubmissionGateway,
    Filter: ProfanityFilter,
{
    /// Creates a workflow, checking both comment templates up front.
    ///
    /// # Errors
    ///
    /// Returns [`HatcheryError::Template`] when either template fails to
    /// parse.
    pub fn new(
        gateway: &'client Gateway,
        filter: Filter,
        context: RunContext,
        config: WorkflowConfig,
    ) -> Result<Self, HatcheryError> {
        check_template(&config.success_comment_template)?;
        check_template(&config.failure_comment_template)?;

        Ok(Self {
            gateway,
            filter,
            context,
            config,
        })
    }

    /// Context the workflow was built with.
    #[must_use]
    pub const fn context(&self) -> &RunContext {
        &self.context
    }

    /// Handles the issue named by the context.
    ///
    /// # Errors
    ///
    /// Returns the [`SubmissionFailure`] that stopped the run, after it has
    /// been reported on the issue.
    pub async fn run(&self) -> Result<ProvisionedRepository, SubmissionFailure> {
        match self.provision().await {
            Ok(repository) => {
                tracing::info!(
                    "provisioned {owner}/{name} for {creator}",
                    owner = self.context.organisation().as_str(),
                    name = repository.name,
                    creator = repository.creator,
                );
                Ok(repository)
            }
            Err(failure) => {
                self.report_failure(&failure).await;
                Err(failure)
            }
        }
    }

    async fn provision(&self) -> Result<ProvisionedRepository, SubmissionFailure> {
        let number = self
            .context
            .issue()
            .ok_or_else(|| self.internal("No issue in current context?"))?;

        let issue = self.load_issue(number).await?;
        tracing::debug!("got a valid issue #{}", issue.number);

        if !issue.has_label(&self.config.submission_label) {
            return Err(self.internal(format!(
                "Issue is missing the '{}' label.",
                self.config.submission_label
            )));
        }
        tracing::debug!("submission label is present");

        let request =
            SubmissionRequest::from_body(issue.body_text()).map_err(|error| self.invalid(error))?;
        tracing::debug!(
            "parsed {{ repo_name: {:?}, repo_description: {:?} }}",
            request.repo_name,
            request.repo_description
        );

        validate_name(
            &request.repo_name,
            self.context.organisation().as_str(),
            &self.filter,
        )
        .map_err(|error| self.invalid(error))?;
        tracing::debug!("repository name passed validation");

        let creator = issue
            .author
            .clone()
            .ok_or_else(|| self.internal("Issue has no author to invite."))?;

        self.create_and_invite(&request, &creator).await?;
        tracing::debug!("created repository and invited {creator} as collaborator");

        self.commit_metadata(&request, &creator).await?;

        let repository = ProvisionedRepository {
            invitation_url: self.context.invitation_url(&request.repo_name),
            name: request.repo_name,
            creator,
            description: request.repo_description,
        };

        self.close_with_success(number, &repository).await?;
        Ok(repository)
    }

    async fn load_issue(&self, number: IssueNumber) -> Result<SubmissionIssue, SubmissionFailure> {
        self.gateway
            .issue(number)
            .await
            .map_err(|error| self.internal(format!("Failed to load issue: {error}")))?
            .ok_or_else(|| self.internal("No issue in current context?"))
    }

    async fn create_and_invite(
        &self,
        request: &SubmissionRequest,
        creator: &str,
    ) -> Result<(), SubmissionFailure> {
        let failed = |error: HatcheryError| {
            self.internal(format!(
                "Failed to create repo and invite collaborator: {error}"
            ))
        };

        self.gateway
            .create_repository(&request.repo_name, &request.repo_description)
            .await
            .map_err(failed)?;

        self.gateway
            .add_collaborator(&request.repo_name, creator, CollaboratorPermission::Push)
            .await
            .map_err(failed)
    }

    async fn commit_metadata(
        &self,
        request: &SubmissionRequest,
        creator: &str,
    ) -> Result<(), SubmissionFailure> {
        let metadata = RepositoryMetadata {
            creator: creator.to_owned(),
            name: request.repo_name.clone(),
            description: request.repo_description.clone(),
        };
        let content = metadata
            .to_pretty_json()
            .map_err(|error| self.internal(error.to_string()))?;

        self.gateway
            .commit_file(
                &request.repo_name,
                METADATA_PATH,
                METADATA_COMMIT_MESSAGE,
                &content,
            )
            .await
            .map_err(|error| self.internal(format!("Failed to commit {METADATA_PATH}: {error}")))
    }

    async fn close_with_success(
        &self,
        number: IssueNumber,
        repository: &ProvisionedRepository,
    ) -> Result<(), SubmissionFailure> {
        let comment = render_success_comment(
            &self.config.success_comment_template,
            self.context.organisation().as_str(),
            repository,
        )
        .map_err(|error| self.internal(error.to_string()))?;

        let failed =
            |error: HatcheryError| self.internal(format!("Failed to close the issue: {error}"));

        self.gateway.comment(number, &comment).await.map_err(failed)?;
        self.gateway.close_issue(number).await.map_err(failed)
    }

    /// Comments, closes and labels the issue. Errors here are logged and
    /// never replace the original failure.
    async fn report_failure(&self, failure: &SubmissionFailure) {
        tracing::error!("{}", failure.reason);

        let Some(number) = self.context.issue() else {
            tracing::warn!("no issue to report the failure on");
            return;
        };

        let comment = render_failure_comment(&self.config.failure_comment_template, failure)
            .unwrap_or_else(|error| {
                tracing::warn!("failure comment template did not render: {error}");
                failure.reason.clone()
            });

        if let Err(error) = self.gateway.comment(number, &comment).await {
            tracing::warn!("failed to comment on issue #{}: {error}", number.get());
        }
        if let Err(error) = self.gateway.close_issue(number).await {
            tracing::warn!("failed to close issue #{}: {error}", number.get());
        }
        if let Err(error) = self.gateway.add_label(number, &failure.label).await {
            tracing::warn!(
                "failed to label issue #{} with '{}': {error}",
                number.get(),
                failure.label
            );
        }
    }

    fn internal(&self, reason: impl Into<String>) -> SubmissionFailure {
        SubmissionFailure {
            kind: FailureKind::InternalFailure,
            reason: reason.into(),
            label: self.config.failure_label.clone(),
        }
    }

    fn invalid(&self, rejection: NameRejection) -> SubmissionFailure {
        SubmissionFailure {
            kind: FailureKind::InvalidSubmission,
            reason: rejection.to_string(),
            label: self.config.invalid_label.clone(),
        }
    }
}
