//! Comment rendering with `minijinja`.

use minijinja::{Environment, Value, context};

use crate::github::error::HatcheryError;

use super::outcome::{ProvisionedRepository, SubmissionFailure};

const TEMPLATE_NAME: &str = "comment";

fn environment_with(source: &str) -> Result<Environment<'_>, HatcheryError> {
    let mut environment = Environment::new();
    environment.set_auto_escape_callback(|_| minijinja::AutoEscape::None);
    environment
        .add_template(TEMPLATE_NAME, source)
        .map_err(|error| HatcheryError::Template {
            message: format!("invalid template syntax: {error}"),
        })?;
    Ok(environment)
}

fn render(source: &str, values: Value) -> Result<String, HatcheryError> {
    let environment = environment_with(source)?;
    let template =
        environment
            .get_template(TEMPLATE_NAME)
            .map_err(|error| HatcheryError::Template {
                message: error.to_string(),
            })?;

    template
        .render(values)
        .map_err(|error| HatcheryError::Template {
            message: format!("template rendering failed: {error}"),
        })
}

/// Checks that `source` parses as a template.
///
/// # Errors
///
/// Returns [`HatcheryError::Template`] describing the syntax error.
pub fn check_template(source: &str) -> Result<(), HatcheryError> {
    environment_with(source).map(drop)
}

/// Renders the comment posted after a repository is provisioned.
///
/// # Errors
///
/// Returns [`HatcheryError::Template`] when the template fails to parse or
/// render.
pub fn render_success_comment(
    source: &str,
    owner: &str,
    repository: &ProvisionedRepository,
) -> Result<String, HatcheryError> {
    render(
        source,
        context! {
            repository => repository.name.as_str(),
            owner => owner,
            creator => repository.creator.as_str(),
            description => repository.description.as_str(),
            invitation_url => repository.invitation_url.as_str(),
        },
    )
}

/// Renders the comment posted before a failed submission is closed.
///
/// # Errors
///
/// Returns [`HatcheryError::Template`] when the template fails to parse or
/// render.
pub fn render_failure_comment(
    source: &str,
    failure: &SubmissionFailure,
) -> Result<String, HatcheryError> {
    render(
        source,
        context! {
            reason => failure.reason.as_str(),
            label => failure.label.as_str(),
            kind => failure.kind.as_str(),
        },
    )
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{check_template, render_failure_comment, render_success_comment};
    use crate::github::error::HatcheryError;
    use crate::workflow::config::{DEFAULT_FAILURE_COMMENT, DEFAULT_SUCCESS_COMMENT};
    use crate::workflow::outcome::{FailureKind, ProvisionedRepository, SubmissionFailure};

    fn provisioned() -> ProvisionedRepository {
        ProvisionedRepository {
            name: "my-cool-app".to_owned(),
            creator: "octocat".to_owned(),
            description: "A tool.".to_owned(),
            invitation_url: "https://github.com/octo-org/my-cool-app/invitations".to_owned(),
        }
    }

    #[rstest]
    fn default_success_comment_links_the_invitation() {
        let comment = render_success_comment(DEFAULT_SUCCESS_COMMENT, "octo-org", &provisioned())
            .expect("default template should render");

        assert_eq!(
            comment,
            "Success, your repository has been created!\n\nYou can accept the invite by \
             checking your email or clicking \
             [here](https://github.com/octo-org/my-cool-app/invitations)."
        );
    }

    #[rstest]
    fn success_comment_exposes_repository_fields() {
        let comment = render_success_comment(
            "{{ creator }} now owns {{ owner }}/{{ repository }}: {{ description }}",
            "octo-org",
            &provisioned(),
        )
        .expect("template should render");

        assert_eq!(comment, "octocat now owns octo-org/my-cool-app: A tool.");
    }

    #[rstest]
    fn default_failure_comment_is_generic() {
        let failure = SubmissionFailure {
            kind: FailureKind::InvalidSubmission,
            reason: "Repository name is on the blacklist.".to_owned(),
            label: "invalid".to_owned(),
        };

        let comment = render_failure_comment(DEFAULT_FAILURE_COMMENT, &failure)
            .expect("default template should render");

        assert_eq!(comment, "Failure handling issue");
    }

    #[rstest]
    fn failure_comment_can_include_reason_and_kind() {
        let failure = SubmissionFailure {
            kind: FailureKind::InternalFailure,
            reason: "no issue in context".to_owned(),
            label: "internal-failure".to_owned(),
        };

        let comment = render_failure_comment("{{ kind }}: {{ reason }} ({{ label }})", &failure)
            .expect("template should render");

        assert_eq!(
            comment,
            "internal-failure: no issue in context (internal-failure)"
        );
    }

    #[rstest]
    fn markup_is_not_escaped() {
        let failure = SubmissionFailure {
            kind: FailureKind::InvalidSubmission,
            reason: "<b>bold</b> & co".to_owned(),
            label: "invalid".to_owned(),
        };

        let comment =
            render_failure_comment("{{ reason }}", &failure).expect("template should render");

        assert_eq!(comment, "<b>bold</b> & co");
    }

    #[rstest]
    fn rejects_broken_template_syntax() {
        let result = check_template("{% if %}");
        assert!(
            matches!(result, Err(HatcheryError::Template { .. })),
            "expected Template error, got {result:?}"
        );
    }
}
