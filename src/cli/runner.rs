use crate::{
    cli::Args,
    error::Result,
    ioutils::apply,
    prompt::{default_prompter, ProjectNamePrompter},
    renderer::{MiniJinjaRenderer, TemplateRenderer},
    summary::write_summary,
    template::{TemplateProcessor, TemplateSet},
    types::ProjectName,
};
use std::io::Write;

/// Main CLI runner that orchestrates one project generation
pub struct Runner<'a> {
    args: Args,
    templates: TemplateSet,
    prompter: Option<Box<dyn ProjectNamePrompter + 'a>>,
    engine: Box<dyn TemplateRenderer>,
}

impl<'a> Runner<'a> {
    /// Runner for the built-in Flask project, prompting on the process stdin.
    pub fn new(args: Args) -> Self {
        Self {
            args,
            templates: TemplateSet::flask(),
            prompter: None,
            engine: Box::new(MiniJinjaRenderer::new()),
        }
    }

    pub fn with_templates(mut self, templates: TemplateSet) -> Self {
        self.templates = templates;
        self
    }

    pub fn with_prompter(mut self, prompter: impl ProjectNamePrompter + 'a) -> Self {
        self.prompter = Some(Box::new(prompter));
        self
    }

    /// Executes the generation: name, plan, folders, files, summary.
    ///
    /// The summary goes to `out` and is only written when every file was written.
    pub fn run_with_output<W: Write>(mut self, mut out: W) -> Result<ProjectName> {
        let project_name = self.resolve_project_name()?;
        log::info!("Generating project '{project_name}' in {}", self.args.output_dir.display());

        let processor =
            TemplateProcessor::new(self.engine.as_ref(), &self.args.output_dir, &project_name);
        let operations = processor.plan(&self.templates)?;

        apply(&operations, self.args.dry_run)?;

        if self.args.dry_run {
            writeln!(
                out,
                "Dry run: {} operations planned for '{project_name}', nothing was written.",
                operations.len()
            )?;
        } else {
            write_summary(&mut out, &project_name)?;
        }
        Ok(project_name)
    }

    /// Executes the generation, printing the summary to stdout.
    pub fn run(self) -> Result<ProjectName> {
        self.run_with_output(std::io::stdout().lock())
    }

    /// Uses the name from the command line, or asks for one.
    fn resolve_project_name(&mut self) -> Result<ProjectName> {
        let raw = match &self.args.project_name {
            Some(name) => name.clone(),
            None => match self.prompter.as_mut() {
                Some(prompter) => prompter.prompt_project_name()?,
                None => default_prompter().prompt_project_name()?,
            },
        };
        ProjectName::parse(&raw)
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run().map(|_| ())
}
