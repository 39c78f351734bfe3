/// Handles argument parsing and the generation workflow.
pub mod cli;

/// Fixed names, exit codes and verbosity levels.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Asking the operator for the project name.
pub mod prompt;

/// Template rendering functionality.
pub mod renderer;

/// Instructions printed after generation.
pub mod summary;

/// Template sets and their processing.
pub mod template;

/// Common types.
pub mod types;

/// Project name validation.
pub mod validation;
