use crate::{
    constants::{MAX_PROJECT_NAME_LEN, PROJECT_NAME_PATTERN},
    error::{Error, Result},
};
use regex::Regex;

/// Checks that `name` can be used verbatim as a single directory name.
///
/// Rules are applied in order and the first failure is reported.
pub fn validate_project_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("must not be empty".to_string())
    } else if name == "." || name == ".." {
        Some("must not be a relative directory reference".to_string())
    } else if name.contains(['/', '\\']) {
        Some("must not contain path separators".to_string())
    } else if name.chars().any(char::is_control) {
        Some("must not contain control characters".to_string())
    } else if name.len() > MAX_PROJECT_NAME_LEN {
        Some(format!("must be at most {MAX_PROJECT_NAME_LEN} bytes long"))
    } else if !name_pattern()?.is_match(name) {
        Some(
            "must start with a letter, digit or '_' and contain only letters, digits, '_', '-' or '.'"
                .to_string(),
        )
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::InvalidProjectName { name: name.to_string(), reason }),
        None => Ok(()),
    }
}

fn name_pattern() -> Result<Regex> {
    Regex::new(PROJECT_NAME_PATTERN)
        .map_err(|e| Error::Other(anyhow::anyhow!("Invalid project name pattern: {e}")))
}
