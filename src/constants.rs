//! Constants used throughout the flask-starter application

/// Prompt shown when the project name is not given on the command line
pub const PROJECT_NAME_PROMPT: &str = "Enter the project name";

/// Context key holding the project name during rendering
pub const PROJECT_NAME_KEY: &str = "project_name";

/// Longest accepted project name, in bytes (one path segment)
pub const MAX_PROJECT_NAME_LEN: usize = 255;

/// Pattern every project name must match
pub const PROJECT_NAME_PATTERN: &str = r"^[A-Za-z0-9_][A-Za-z0-9_.-]*$";

/// Template set file extensions understood by `TemplateSet::load`
pub mod template_set {
    pub const JSON_EXTENSION: &str = "json";
    pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
