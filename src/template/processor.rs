use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use indexmap::{map::Entry, IndexMap};
use serde_json::json;

use crate::constants::PROJECT_NAME_KEY;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::renderer::TemplateRenderer;
use crate::types::ProjectName;

use super::operation::Operation;
use super::set::{FileTemplate, TemplateSet};

/// Turns a [`TemplateSet`] into the ordered filesystem operations for one project.
///
/// All rendering happens here, in memory, so a broken template is reported
/// before anything is written.
pub struct TemplateProcessor<'a> {
    engine: &'a dyn TemplateRenderer,
    output_root: PathBuf,
    project_name: &'a ProjectName,
    context: serde_json::Value,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new<P: AsRef<Path>>(
        engine: &'a dyn TemplateRenderer,
        output_root: P,
        project_name: &'a ProjectName,
    ) -> Self {
        let mut context = serde_json::Map::new();
        context.insert(PROJECT_NAME_KEY.to_string(), json!(project_name.as_str()));
        let context = serde_json::Value::Object(context);
        Self { engine, output_root: output_root.as_ref().to_path_buf(), project_name, context }
    }

    /// Renders every folder and file of `set`.
    ///
    /// # Returns
    /// * `Result<Vec<Operation>>` - directory creations in folder order, followed by
    ///   file writes in file order
    pub fn plan(&self, set: &TemplateSet) -> Result<Vec<Operation>> {
        set.validate()?;

        let mut folders = Vec::with_capacity(set.folders.len());
        for folder in &set.folders {
            folders.push(self.render_path(folder)?);
        }

        let mut operations: Vec<Operation> = folders
            .iter()
            .map(|folder| {
                let target = self.output_root.join(folder);
                let target_exists = target.is_dir();
                Operation::CreateDirectory { target, target_exists }
            })
            .collect();

        // Rendered target path -> template, unique and in template order.
        let mut files: IndexMap<PathBuf, &FileTemplate> = IndexMap::new();
        for file in &set.files {
            let rendered = self.render_path(&file.path)?;
            match files.entry(rendered) {
                Entry::Occupied(entry) => {
                    return Err(Error::TemplateError(format!(
                        "'{}' renders to a path that is already generated: '{}'",
                        file.path,
                        entry.key().display()
                    )));
                }
                Entry::Vacant(entry) => {
                    self.check_parent_is_created(entry.key(), &folders)?;
                    entry.insert(file);
                }
            }
        }

        for (rendered, file) in files {
            let content = if file.raw {
                file.content.clone()
            } else {
                self.engine.render(
                    &file.content,
                    &self.context,
                    Some(rendered.to_str_checked()?),
                )?
            };

            let target = self.output_root.join(&rendered);
            let target_exists = target.exists();
            log::debug!("Planned write of {} ({} bytes)", target.display(), content.len());
            operations.push(Operation::Write { target, content, target_exists });
        }

        Ok(operations)
    }

    /// Renders a template path and checks it stays inside the project directory.
    fn render_path(&self, template_path: &str) -> Result<PathBuf> {
        let rendered =
            self.engine.render(template_path, &self.context, Some(template_path))?;

        if rendered.split(['/', '\\']).any(str::is_empty) {
            return Err(Error::TemplateError(format!(
                "'{template_path}' renders to '{rendered}', which has an empty path segment"
            )));
        }

        let rendered = PathBuf::from(rendered);
        if !rendered.is_contained() {
            return Err(Error::TemplateError(format!(
                "'{}' renders to '{}', which leaves the output directory",
                template_path,
                rendered.display()
            )));
        }

        let project_root = Component::Normal(OsStr::new(self.project_name.as_str()));
        if rendered.components().next() != Some(project_root) {
            return Err(Error::TemplateError(format!(
                "'{}' renders to '{}', which is outside the '{}' project directory",
                template_path,
                rendered.display(),
                self.project_name
            )));
        }

        Ok(rendered)
    }

    /// A file may only be written into a folder of the set (or one of its
    /// ancestors) or into a directory that already exists.
    fn check_parent_is_created(&self, file: &Path, folders: &[PathBuf]) -> Result<()> {
        let parent = file.parent().unwrap_or_else(|| Path::new(""));
        let planned = folders.iter().any(|folder| folder.starts_with(parent));
        if planned || self.output_root.join(parent).is_dir() {
            Ok(())
        } else {
            Err(Error::TemplateError(format!(
                "no folder in the template set creates '{}', needed for '{}'",
                parent.display(),
                file.display()
            )))
        }
    }
}
