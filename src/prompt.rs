//! Asking the operator for the project name
//!
//! A terminal gets a `dialoguer` prompt; piped input is read one line at a time.
//! Neither retries: whatever is entered goes straight to validation.

use crate::{constants::PROJECT_NAME_PROMPT, error::Result, ioutils::read_line};
use dialoguer::Input;
use std::io::{BufRead, IsTerminal, Write};

/// Source of the raw, unvalidated project name.
pub trait ProjectNamePrompter {
    fn prompt_project_name(&mut self) -> Result<String>;
}

/// Interactive terminal prompt.
pub struct DialoguerPrompter;

impl ProjectNamePrompter for DialoguerPrompter {
    fn prompt_project_name(&mut self) -> Result<String> {
        Ok(Input::<String>::new()
            .with_prompt(PROJECT_NAME_PROMPT)
            .allow_empty(true)
            .interact_text()?)
    }
}

/// Writes the prompt to `writer` and reads one line from `reader`.
pub struct LinePrompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> ProjectNamePrompter for LinePrompter<R, W> {
    fn prompt_project_name(&mut self) -> Result<String> {
        write!(self.writer, "{PROJECT_NAME_PROMPT}: ")?;
        self.writer.flush()?;
        read_line(&mut self.reader)
    }
}

/// Picks the prompter that fits the current stdin.
pub fn default_prompter() -> Box<dyn ProjectNamePrompter> {
    if std::io::stdin().is_terminal() {
        Box::new(DialoguerPrompter)
    } else {
        log::debug!("stdin is not a terminal, reading the project name as a line");
        Box::new(LinePrompter::new(std::io::stdin().lock(), std::io::stdout()))
    }
}
