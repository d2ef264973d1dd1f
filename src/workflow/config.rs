//! Labels and comment templates that parameterise a workflow run.

/// Label an issue must carry to be handled.
pub const DEFAULT_SUBMISSION_LABEL: &str = "submission";

/// Label applied when the environment or GitHub misbehaves.
pub const DEFAULT_FAILURE_LABEL: &str = "internal-failure";

/// Label applied when the submitter's request is refused.
pub const DEFAULT_INVALID_LABEL: &str = "invalid";

/// Comment posted once the repository exists.
pub const DEFAULT_SUCCESS_COMMENT: &str = "Success, your repository has been created!\n\n\
You can accept the invite by checking your email or clicking [here]({{ invitation_url }}).";

/// Comment posted before a failed submission is closed.
pub const DEFAULT_FAILURE_COMMENT: &str = "Failure handling issue";

/// Labels and templates used by [`super::SubmissionWorkflow`].
///
/// Comment templates use Jinja syntax. The success template can reference
/// `repository`, `owner`, `creator`, `description` and `invitation_url`;
/// the failure template can reference `reason`, `label` and `kind`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowConfig {
    /// Label an issue must carry to be handled.
    pub submission_label: String,
    /// Label for internal failures.
    pub failure_label: String,
    /// Label for refused submissions.
    pub invalid_label: String,
    /// Template for the success comment.
    pub success_comment_template: String,
    /// Template for the failure comment.
    pub failure_comment_template: String,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            submission_label: DEFAULT_SUBMISSION_LABEL.to_owned(),
            failure_label: DEFAULT_FAILURE_LABEL.to_owned(),
            invalid_label: DEFAULT_INVALID_LABEL.to_owned(),
            success_comment_template: DEFAULT_SUCCESS_COMMENT.to_owned(),
            failure_comment_template: DEFAULT_FAILURE_COMMENT.to_owned(),
        }
    }
}
