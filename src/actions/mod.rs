//! GitHub Actions runner integration.
//!
//! Reads the variables the runner exports for every job and the event payload
//! it writes to disk, and formats workflow commands so failures surface as
//! annotations on the run.

use std::env;
use std::io::{self, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;

use crate::github::error::HatcheryError;

/// `owner/repo` slug of the repository running the workflow.
pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";

/// Path of the JSON payload of the triggering event.
pub const GITHUB_EVENT_PATH: &str = "GITHUB_EVENT_PATH";

/// REST API base of the GitHub instance.
pub const GITHUB_API_URL: &str = "GITHUB_API_URL";

/// Web base of the GitHub instance.
pub const GITHUB_SERVER_URL: &str = "GITHUB_SERVER_URL";

/// Token variable conventionally exported to workflow steps.
pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";

/// Reads a runner variable, treating blank values as unset.
#[must_use]
pub fn runner_variable(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// Path of the event payload, when running inside Actions.
#[must_use]
pub fn event_path() -> Option<Utf8PathBuf> {
    runner_variable(GITHUB_EVENT_PATH).map(Utf8PathBuf::from)
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    issue: Option<EventIssue>,
}

#[derive(Debug, Deserialize)]
struct EventIssue {
    number: u64,
}

/// Issue number carried by an event payload file.
///
/// Returns `Ok(None)` for events that are not about an issue.
///
/// # Errors
///
/// Returns [`HatcheryError::Io`] when the file cannot be read or is not a
/// JSON object.
pub fn issue_number_from_event(path: &Utf8Path) -> Result<Option<u64>, HatcheryError> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().ok_or_else(|| HatcheryError::Io {
        message: format!("invalid event path '{path}': no file name"),
    })?;

    let dir =
        Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| HatcheryError::Io {
            message: format!("failed to open event directory '{parent}': {error}"),
        })?;
    let content = dir
        .read_to_string(file_name)
        .map_err(|error| HatcheryError::Io {
            message: format!("failed to read event payload '{path}': {error}"),
        })?;

    parse_issue_number(&content).map_err(|error| HatcheryError::Io {
        message: format!("failed to parse event payload '{path}': {error}"),
    })
}

fn parse_issue_number(payload: &str) -> Result<Option<u64>, serde_json::Error> {
    let event: EventPayload = serde_json::from_str(payload)?;
    Ok(event.issue.map(|issue| issue.number))
}

/// Escapes message data for a workflow command.
#[must_use]
pub fn escape_command_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Writes an `::error::` workflow command, which the runner turns into an
/// annotation.
///
/// # Errors
///
/// Propagates write failures from `writer`.
pub fn write_error_command<W: Write>(writer: &mut W, message: &str) -> io::Result<()> {
    writeln!(writer, "::error::{}", escape_command_data(message))
}
