//! Octocrab implementation of the submission gateway.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use http::{StatusCode, Uri};
use octocrab::Octocrab;
use serde::Serialize;
use url::Url;

use crate::context::RunContext;
use crate::github::error::HatcheryError;
use crate::github::locator::{IssueNumber, PersonalAccessToken, RepositoryName, RepositoryOwner};
use crate::github::models::{
    ApiIssue, CollaboratorBody, CollaboratorPermission, CommentBody, CommitFileBody,
    CreateRepositoryBody, IssueStateBody, LabelsBody, SubmissionIssue,
};

use super::SubmissionGateway;
use super::client::build_octocrab_client;
use super::error_mapping::{map_http_error, map_octocrab_error};
use super::http_utils::{api_path, extract_github_message};

#[derive(Debug, Clone, Copy)]
enum Verb {
    Get,
    Post,
    Patch,
    Put,
}

struct RawResponse {
    status: StatusCode,
    body: String,
}

impl RawResponse {
    fn ensure(self, operation: &str, accepted: &[StatusCode]) -> Result<Self, HatcheryError> {
        if accepted.contains(&self.status) {
            return Ok(self);
        }
        Err(map_http_error(
            operation,
            self.status,
            extract_github_message(&self.body),
        ))
    }
}

/// Octocrab-backed gateway bound to one organisation and submissions
/// repository.
pub struct OctocrabSubmissionGateway {
    client: Octocrab,
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl OctocrabSubmissionGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab, owner: RepositoryOwner, repository: RepositoryName) -> Self {
        Self {
            client,
            owner,
            repository,
        }
    }

    /// Builds an Octocrab client for the token and API base, bound to the
    /// organisation and submissions repository of `context`.
    ///
    /// # Errors
    ///
    /// Returns `HatcheryError::InvalidUrl` when the base URI cannot be parsed or
    /// `HatcheryError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        api_base: &Url,
        context: &RunContext,
    ) -> Result<Self, HatcheryError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(
            octocrab,
            context.organisation().clone(),
            context.repository().clone(),
        ))
    }

    fn issue_path(&self, number: IssueNumber, suffix: &[&str]) -> Result<String, HatcheryError> {
        let number_segment = number.get().to_string();
        let mut segments = vec![
            "repos",
            self.owner.as_str(),
            self.repository.as_str(),
            "issues",
            number_segment.as_str(),
        ];
        segments.extend_from_slice(suffix);
        api_path(&segments)
    }

    async fn send<B>(
        &self,
        operation: &str,
        verb: Verb,
        path: &str,
        body: Option<&B>,
    ) -> Result<RawResponse, HatcheryError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let uri: Uri = path
            .parse::<Uri>()
            .map_err(|error| HatcheryError::InvalidUrl(error.to_string()))?;

        tracing::debug!("{operation}: {verb:?} {path}");

        let result = match verb {
            Verb::Get => self.client._get(uri).await,
            Verb::Post => self.client._post(uri, body).await,
            Verb::Patch => self.client._patch(uri, body).await,
            Verb::Put => self.client._put(uri, body).await,
        };
        let response = result.map_err(|error| map_octocrab_error(operation, &error))?;
        let status = response.status();

        let text = self
            .client
            .body_to_string(response)
            .await
            .unwrap_or_else(|_| String::new());

        Ok(RawResponse { status, body: text })
    }
}

#[async_trait]
impl SubmissionGateway for OctocrabSubmissionGateway {
    async fn issue(&self, number: IssueNumber) -> Result<Option<SubmissionIssue>, HatcheryError> {
        let path = self.issue_path(number, &[])?;
        let response = self.send::<()>("get issue", Verb::Get, &path, None).await?;

        if matches!(response.status, StatusCode::NOT_FOUND | StatusCode::GONE) {
            return Ok(None);
        }

        let ok = response.ensure("get issue", &[StatusCode::OK])?;
        let api: ApiIssue = serde_json::from_str(&ok.body).map_err(|error| HatcheryError::Api {
            message: format!("issue response deserialisation failed: {error}"),
        })?;

        Ok(Some(api.into()))
    }

    async fn add_label(&self, number: IssueNumber, label: &str) -> Result<(), HatcheryError> {
        let path = self.issue_path(number, &["labels"])?;
        let body = LabelsBody { labels: [label] };
        self.send("add label", Verb::Post, &path, Some(&body))
            .await?
            .ensure("add label", &[StatusCode::OK])
            .map(drop)
    }

    async fn comment(&self, number: IssueNumber, body: &str) -> Result<(), HatcheryError> {
        let path = self.issue_path(number, &["comments"])?;
        let payload = CommentBody { body };
        self.send("comment on issue", Verb::Post, &path, Some(&payload))
            .await?
            .ensure("comment on issue", &[StatusCode::CREATED])
            .map(drop)
    }

    async fn close_issue(&self, number: IssueNumber) -> Result<(), HatcheryError> {
        let path = self.issue_path(number, &[])?;
        let body = IssueStateBody { state: "closed" };
        self.send("close issue", Verb::Patch, &path, Some(&body))
            .await?
            .ensure("close issue", &[StatusCode::OK])
            .map(drop)
    }

    async fn create_repository(
        &self,
        name: &str,
        description: &str,
    ) -> Result<(), HatcheryError> {
        let path = api_path(&["orgs", self.owner.as_str(), "repos"])?;
        let body = CreateRepositoryBody {
            name,
            description,
            visibility: "public",
            has_projects: false,
            auto_init: true,
        };
        self.send("create repository", Verb::Post, &path, Some(&body))
            .await?
            .ensure("create repository", &[StatusCode::CREATED])
            .map(drop)
    }

    async fn add_collaborator(
        &self,
        repository: &str,
        username: &str,
        permission: CollaboratorPermission,
    ) -> Result<(), HatcheryError> {
        let path = api_path(&[
            "repos",
            self.owner.as_str(),
            repository,
            "collaborators",
            username,
        ])?;
        let body = CollaboratorBody { permission };
        self.send("add collaborator", Verb::Put, &path, Some(&body))
            .await?
            .ensure(
                "add collaborator",
                &[StatusCode::CREATED, StatusCode::NO_CONTENT],
            )
            .map(drop)
    }

    async fn commit_file(
        &self,
        repository: &str,
        path: &str,
        message: &str,
        content: &str,
    ) -> Result<(), HatcheryError> {
        let api = api_path(&["repos", self.owner.as_str(), repository, "contents", path])?;
        let body = CommitFileBody {
            message,
            content: STANDARD.encode(content),
        };
        self.send("commit file", Verb::Put, &api, Some(&body))
            .await?
            .ensure("commit file", &[StatusCode::CREATED, StatusCode::OK])
            .map(drop)
    }
}
