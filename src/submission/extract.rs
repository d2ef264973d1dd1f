//! Subsection extraction from markdown issue bodies.
//!
//! Issue forms render each field as a level-three heading, a blank line and
//! the submitted value:
//!
//! ```text
//! ### Repository Name
//!
//! my-cool-app
//!
//! ### Description
//!
//! A tool.
//! ```
//!
//! Extraction is a plain forward scan: find the heading, then find the next
//! blank-line-delimited heading or the end of the body.

/// Heading label of the requested repository name.
pub const REPOSITORY_NAME_LABEL: &str = "Repository Name";

/// Heading label of the requested repository description.
pub const DESCRIPTION_LABEL: &str = "Description";

const NEXT_SECTION: &str = "\n\n###";

/// Returns the text under the `### <label>` heading of `body`.
///
/// The heading must start a line and be followed by a blank line. The value
/// runs up to, but excluding, the next blank line that introduces another
/// heading, or to the end of the body. The value is returned verbatim.
///
/// # Example
///
/// ```
/// use hatchery::submission::extract_subsection;
///
/// let body = "### Repository Name\n\nmy-cool-app\n\n### Description\n\nA tool.";
/// assert_eq!(extract_subsection(body, "Repository Name"), Some("my-cool-app"));
/// assert_eq!(extract_subsection(body, "Description"), Some("A tool."));
/// assert_eq!(extract_subsection(body, "Licence"), None);
/// ```
#[must_use]
pub fn extract_subsection<'body>(body: &'body str, label: &str) -> Option<&'body str> {
    let heading = format!("### {label}\n\n");
    let start = find_heading(body, &heading)?.checked_add(heading.len())?;
    let rest = body.get(start..)?;
    let end = rest.find(NEXT_SECTION).unwrap_or(rest.len());
    rest.get(..end)
}

/// Byte offset of the first occurrence of `heading` that starts a line.
fn find_heading(body: &str, heading: &str) -> Option<usize> {
    let mut cursor = 0;
    loop {
        let offset = body.get(cursor..)?.find(heading)?;
        let position = cursor.checked_add(offset)?;
        let at_line_start = position == 0 || body.get(..position)?.ends_with('\n');
        if at_line_start {
            return Some(position);
        }
        // `#` is ASCII, so the next byte is a character boundary.
        cursor = position.checked_add(1)?;
    }
}

/// Raw "Repository Name" subsection of an issue body.
#[must_use]
pub fn repository_name(body: &str) -> Option<&str> {
    extract_subsection(body, REPOSITORY_NAME_LABEL)
}

/// Raw "Description" subsection of an issue body.
#[must_use]
pub fn repository_description(body: &str) -> Option<&str> {
    extract_subsection(body, DESCRIPTION_LABEL)
}
