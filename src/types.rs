//! Common types used across the flask-starter crate.

use crate::{error::Result, validation::validate_project_name};
use std::fmt::Display;

/// A validated project name, usable as a directory name and inside generated sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Parses a name as entered by the operator.
    ///
    /// Only the line terminator left over from line input is stripped; the rest
    /// of the text is validated and kept verbatim.
    pub fn parse(raw: &str) -> Result<Self> {
        let name = raw
            .strip_suffix("\r\n")
            .or_else(|| raw.strip_suffix('\n'))
            .unwrap_or(raw);
        validate_project_name(name)?;
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
