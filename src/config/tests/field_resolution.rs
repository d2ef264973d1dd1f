//! Tests for field resolution methods (`resolve_token`, `resolve_repository`,
//! `resolve_issue`, `resolve_api_url`, `resolve_server_url`, `run_context`).

use rstest::rstest;

use super::helpers::write_event;
use crate::HatcheryConfig;
use crate::github::error::HatcheryError;
use crate::github::locator::IssueNumber;

#[rstest]
fn resolve_token_returns_value_when_present() {
    let config = HatcheryConfig {
        token: Some("my-token".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.resolve_token().ok(),
        Some("my-token".to_owned()),
        "should return the token"
    );
}

#[rstest]
fn resolve_token_falls_back_to_runner_token() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("runner-token"))]);
    let config = HatcheryConfig::default();

    assert_eq!(
        config.resolve_token().ok(),
        Some("runner-token".to_owned()),
        "should fall back to GITHUB_TOKEN"
    );
}

#[rstest]
fn resolve_token_returns_error_when_none() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", None::<&str>)]);
    let config = HatcheryConfig::default();

    assert_eq!(config.resolve_token(), Err(HatcheryError::MissingToken));
}

#[rstest]
fn resolve_repository_prefers_explicit_values() {
    let _guard = env_lock::lock_env([("GITHUB_REPOSITORY", Some("runner-org/runner-repo"))]);
    let config = HatcheryConfig {
        owner: Some("octo-org".to_owned()),
        repo: Some("submissions".to_owned()),
        ..Default::default()
    };

    let (owner, repo) = config
        .resolve_repository()
        .expect("repository should resolve");

    assert_eq!(owner.as_str(), "octo-org");
    assert_eq!(repo.as_str(), "submissions");
}

#[rstest]
fn resolve_repository_fills_missing_half_from_runner() {
    let _guard = env_lock::lock_env([("GITHUB_REPOSITORY", Some("runner-org/runner-repo"))]);
    let config = HatcheryConfig {
        repo: Some("submissions".to_owned()),
        ..Default::default()
    };

    let (owner, repo) = config
        .resolve_repository()
        .expect("repository should resolve");

    assert_eq!(owner.as_str(), "runner-org");
    assert_eq!(repo.as_str(), "submissions");
}

#[rstest]
fn resolve_repository_requires_a_source() {
    let _guard = env_lock::lock_env([("GITHUB_REPOSITORY", None::<&str>)]);
    let config = HatcheryConfig::default();

    let result = config.resolve_repository();

    assert!(
        matches!(result, Err(HatcheryError::Configuration { ref message }) if message.contains("GITHUB_REPOSITORY")),
        "expected Configuration error, got {result:?}"
    );
}

#[rstest]
fn resolve_repository_rejects_malformed_slug() {
    let _guard = env_lock::lock_env([("GITHUB_REPOSITORY", Some("no-slash"))]);
    let config = HatcheryConfig::default();

    let result = config.resolve_repository();

    assert!(
        matches!(result, Err(HatcheryError::InvalidRepository { .. })),
        "expected InvalidRepository error, got {result:?}"
    );
}

#[rstest]
fn resolve_issue_prefers_explicit_number() {
    let (_dir, path) = write_event(r#"{"issue":{"number":7}}"#);
    let config = HatcheryConfig {
        issue: Some(42),
        event_path: Some(path.to_string()),
        ..Default::default()
    };

    let issue = config.resolve_issue().expect("issue should resolve");

    assert_eq!(issue.map(IssueNumber::get), Some(42));
}

#[rstest]
fn resolve_issue_rejects_zero() {
    let config = HatcheryConfig {
        issue: Some(0),
        ..Default::default()
    };

    assert_eq!(
        config.resolve_issue(),
        Err(HatcheryError::InvalidIssueNumber)
    );
}

#[rstest]
fn resolve_issue_reads_configured_event_payload() {
    let (_dir, path) = write_event(r#"{"action":"opened","issue":{"number":7}}"#);
    let config = HatcheryConfig {
        event_path: Some(path.to_string()),
        ..Default::default()
    };

    let issue = config.resolve_issue().expect("issue should resolve");

    assert_eq!(issue.map(IssueNumber::get), Some(7));
}

#[rstest]
fn resolve_issue_reads_runner_event_payload() {
    let (_dir, path) = write_event(r#"{"issue":{"number":9}}"#);
    let _guard = env_lock::lock_env([("GITHUB_EVENT_PATH", Some(path.as_str()))]);
    let config = HatcheryConfig::default();

    let issue = config.resolve_issue().expect("issue should resolve");

    assert_eq!(issue.map(IssueNumber::get), Some(9));
}

#[rstest]
fn resolve_issue_is_absent_without_sources() {
    let _guard = env_lock::lock_env([("GITHUB_EVENT_PATH", None::<&str>)]);
    let config = HatcheryConfig::default();

    assert_eq!(config.resolve_issue(), Ok(None));
}

#[rstest]
fn resolve_issue_is_absent_for_non_issue_events() {
    let (_dir, path) = write_event(r#"{"ref":"refs/heads/main"}"#);
    let config = HatcheryConfig {
        event_path: Some(path.to_string()),
        ..Default::default()
    };

    assert_eq!(config.resolve_issue(), Ok(None));
}

#[rstest]
#[case::explicit(Some("https://ghe.example.com/api/v3"), Some("https://runner.example.com/api"), "https://ghe.example.com/api/v3")]
#[case::runner(None, Some("https://runner.example.com/api"), "https://runner.example.com/api")]
#[case::default(None, None, "https://api.github.com/")]
fn resolve_api_url_precedence(
    #[case] configured: Option<&str>,
    #[case] runner: Option<&str>,
    #[case] expected: &str,
) {
    let _guard = env_lock::lock_env([("GITHUB_API_URL", runner)]);
    let config = HatcheryConfig {
        api_url: configured.map(str::to_owned),
        ..Default::default()
    };

    let url = config.resolve_api_url().expect("URL should resolve");

    assert_eq!(url.as_str(), expected);
}

#[rstest]
fn resolve_server_url_rejects_invalid_value() {
    let config = HatcheryConfig {
        server_url: Some("not a url".to_owned()),
        ..Default::default()
    };

    let result = config.resolve_server_url();

    assert!(
        matches!(result, Err(HatcheryError::InvalidUrl(_))),
        "expected InvalidUrl error, got {result:?}"
    );
}

#[rstest]
fn run_context_combines_resolved_values() {
    let _guard = env_lock::lock_env([
        ("GITHUB_REPOSITORY", Some("octo-org/submissions")),
        ("GITHUB_EVENT_PATH", None),
        ("GITHUB_SERVER_URL", Some("https://ghe.example.com")),
    ]);
    let config = HatcheryConfig {
        issue: Some(12),
        ..Default::default()
    };

    let context = config.run_context().expect("context should resolve");

    assert_eq!(context.organisation().as_str(), "octo-org");
    assert_eq!(context.repository().as_str(), "submissions");
    assert_eq!(context.issue().map(IssueNumber::get), Some(12));
    assert_eq!(
        context.invitation_url("tool"),
        "https://ghe.example.com/octo-org/tool/invitations"
    );
}
