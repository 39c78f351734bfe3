//! Template set definition and loading

use crate::{
    constants::template_set::{JSON_EXTENSION, YAML_EXTENSIONS},
    error::{Error, Result},
    ext::PathExt,
};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::Path};

/// A single file to generate.
///
/// `path` is always rendered. `content` is rendered unless `raw` is set, in which
/// case it is written exactly as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileTemplate {
    pub path: String,
    pub content: String,
    #[serde(default)]
    pub raw: bool,
}

impl FileTemplate {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self { path: path.into(), content: content.into(), raw: false }
    }

    pub fn raw(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self { path: path.into(), content: content.into(), raw: true }
    }
}

/// The folders and files one generation run produces.
///
/// Folders are created first, in order, then files are written in order.
/// File paths are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSet {
    #[serde(default)]
    pub folders: Vec<String>,
    #[serde(default)]
    pub files: Vec<FileTemplate>,
}

impl TemplateSet {
    pub fn new(folders: Vec<String>, files: Vec<FileTemplate>) -> Result<Self> {
        let set = Self { folders, files };
        set.validate()?;
        Ok(set)
    }

    /// Rejects sets that would write the same path twice.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for file in &self.files {
            if !seen.insert(file.path.as_str()) {
                return Err(Error::TemplateError(format!(
                    "duplicate file path '{}' in template set",
                    file.path
                )));
            }
        }
        Ok(())
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let set: TemplateSet = serde_json::from_str(content)?;
        set.validate()?;
        Ok(set)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let set: TemplateSet = serde_yaml::from_str(content)?;
        set.validate()?;
        Ok(set)
    }

    /// Loads a template set from a `.json`, `.yaml` or `.yml` file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();

        let is_json = extension == JSON_EXTENSION;
        let is_yaml = YAML_EXTENSIONS.contains(&extension);
        if !is_json && !is_yaml {
            return Err(Error::UnsupportedTemplateSetFormat {
                path: path.to_str_checked()?.to_string(),
            });
        }

        log::debug!("Loading template set from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_paths_are_rejected() {
        let result = TemplateSet::new(
            vec![],
            vec![FileTemplate::new("a/x.py", "1"), FileTemplate::new("a/x.py", "2")],
        );
        assert!(matches!(result, Err(Error::TemplateError(msg)) if msg.contains("a/x.py")));
    }

    #[test]
    fn parses_yaml_with_defaults() {
        let yaml = r#"
folders:
  - "{{ project_name }}/src"
files:
  - path: "{{ project_name }}/src/main.py"
    content: "print('{{ project_name }}')\n"
  - path: "{{ project_name }}/README.md"
    content: "{{ raw }}"
    raw: true
"#;
        let set = TemplateSet::from_yaml_str(yaml).unwrap();
        assert_eq!(set.folders, vec!["{{ project_name }}/src".to_string()]);
        assert_eq!(set.files.len(), 2);
        assert!(!set.files[0].raw);
        assert!(set.files[1].raw);
    }

    #[test]
    fn parses_json_and_keeps_order() {
        let json = r#"{"files": [
            {"path": "p/b.txt", "content": "b"},
            {"path": "p/a.txt", "content": "a"}
        ]}"#;
        let set = TemplateSet::from_json_str(json).unwrap();
        assert!(set.folders.is_empty());
        let paths: Vec<_> = set.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, ["p/b.txt", "p/a.txt"]);
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let err = TemplateSet::load("templates.toml").unwrap_err();
        assert!(matches!(err, Error::UnsupportedTemplateSetFormat { .. }));
    }

    #[test]
    fn load_reads_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("set.yml");
        std::fs::write(&path, "files:\n  - path: x/y.txt\n    content: hi\n").unwrap();
        let set = TemplateSet::load(&path).unwrap();
        assert_eq!(set.files, vec![FileTemplate::new("x/y.txt", "hi")]);
    }
}
