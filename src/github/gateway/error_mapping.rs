//! Error mapping helpers for the Octocrab gateway.

use http::StatusCode;

use crate::github::error::HatcheryError;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> HatcheryError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return map_http_error(operation, source.status_code, Some(source.message.clone()));
    }

    if is_network_error(error) {
        return HatcheryError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    HatcheryError::Api {
        message: format!("{operation} failed: {error}"),
    }
}

pub(super) fn map_http_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> HatcheryError {
    let message = maybe_message.unwrap_or_else(|| "unknown error".to_owned());
    if is_auth_failure(status) {
        HatcheryError::Authentication {
            message: format!("{operation} failed: GitHub returned {status} {message}"),
        }
    } else {
        HatcheryError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use rstest::rstest;

    use super::map_http_error;
    use crate::github::error::HatcheryError;

    #[rstest]
    #[case::unauthorised(StatusCode::UNAUTHORIZED)]
    #[case::forbidden(StatusCode::FORBIDDEN)]
    fn auth_statuses_map_to_authentication(#[case] status: StatusCode) {
        let error = map_http_error("create repository", status, Some("Bad credentials".to_owned()));
        assert!(
            matches!(error, HatcheryError::Authentication { ref message } if message.contains("Bad credentials")),
            "unexpected mapping: {error:?}"
        );
    }

    #[rstest]
    fn other_statuses_map_to_api_with_fallback_message() {
        let error = map_http_error("commit file", StatusCode::UNPROCESSABLE_ENTITY, None);
        assert_eq!(
            error,
            HatcheryError::Api {
                message: "commit file failed with status 422 Unprocessable Entity: unknown error"
                    .to_owned(),
            }
        );
    }
}
