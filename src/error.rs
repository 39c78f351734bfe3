use crate::constants::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to create directory '{}'. Original error: {source}", .path.display())]
    CreateDirectoryError { path: PathBuf, source: std::io::Error },

    #[error("Failed to write file '{}'. Original error: {source}", .path.display())]
    WriteFileError { path: PathBuf, source: std::io::Error },

    #[error("Failed to read input. Original error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to parse JSON template set. Original error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML template set. Original error: {0}")]
    YamlParseError(#[from] serde_yaml::Error),

    #[error("Template error: {0}.")]
    TemplateError(String),

    /// The project name cannot be used as a directory name.
    #[error("Invalid project name '{name}': {reason}.")]
    InvalidProjectName { name: String, reason: String },

    #[error("Cannot proceed: unsupported template set format '{path}'. Expected .json, .yaml or .yml.")]
    UnsupportedTemplateSetFormat { path: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with this crate's error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_error_names_the_path() {
        let err = Error::WriteFileError {
            path: PathBuf::from("demo/app/exts.py"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().starts_with("Failed to write file 'demo/app/exts.py'."));
    }

    #[test]
    fn invalid_name_message() {
        let err = Error::InvalidProjectName {
            name: String::new(),
            reason: "must not be empty".into(),
        };
        assert_eq!(err.to_string(), "Invalid project name '': must not be empty.");
    }
}
