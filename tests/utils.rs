#![allow(dead_code)]

use flask_starter::cli::{Args, Runner};
use flask_starter::error::Result;
use flask_starter::prompt::LinePrompter;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Relative paths of the twelve files the built-in Flask set writes.
pub const FLASK_FILES: &[&str] = &[
    "app/__init__.py",
    "app/auth.py",
    "app/models.py",
    "app/exts.py",
    "config.py",
    "manage.py",
    "run.py",
    "wsgi.py",
    "requirements.txt",
    ".env",
    ".gitignore",
    "readMe.md",
];

pub fn args(project_name: Option<&str>, output_dir: &Path) -> Args {
    Args {
        project_name: project_name.map(str::to_string),
        output_dir: output_dir.to_path_buf(),
        verbose: 2,
        dry_run: false,
    }
}

/// Generates `project_name` into `output_dir`, returning the result and what was printed.
pub fn generate(project_name: &str, output_dir: &Path) -> (Result<()>, String) {
    let mut out = Vec::new();
    let result = Runner::new(args(Some(project_name), output_dir))
        .run_with_output(&mut out)
        .map(|_| ());
    (result, String::from_utf8(out).unwrap())
}

/// Same as [`generate`], but the name arrives on the prompt as a line of input.
pub fn generate_from_input(input: &str, output_dir: &Path) -> (Result<()>, String) {
    let mut out = Vec::new();
    let result = Runner::new(args(None, output_dir))
        .with_prompter(LinePrompter::new(input.as_bytes(), std::io::sink()))
        .run_with_output(&mut out)
        .map(|_| ());
    (result, String::from_utf8(out).unwrap())
}

/// Every file below `root`, relative to it.
pub fn relative_files(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

/// Every directory below `root` (excluding `root`), relative to it.
pub fn relative_dirs(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

/// Built-in template body for a generated file, read from the repository.
pub fn template_body(relative: &str) -> String {
    let stored = match relative {
        ".env" => "dot-env".to_string(),
        ".gitignore" => "dot-gitignore".to_string(),
        other => other.to_string(),
    };
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("templates/flask")
        .join(format!("{stored}.j2"));
    std::fs::read_to_string(path).unwrap()
}
