//! Status menu: "New Entry" opens the form, "Quit" leaves

use std::io::{BufRead, Write};

use crate::error::AppError;
use crate::store::EntrySink;

use super::form::{EntryForm, read_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuAction {
    NewEntry,
    Quit,
}

impl MenuAction {
    pub(crate) fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "n" | "new" => Some(MenuAction::NewEntry),
            "q" | "quit" => Some(MenuAction::Quit),
            _ => None,
        }
    }
}

pub(crate) struct StatusMenu<'a> {
    form: EntryForm<'a>,
    quiet: bool,
}

impl<'a> StatusMenu<'a> {
    pub(crate) fn new(sink: &'a dyn EntrySink, quiet: bool) -> Self {
        Self {
            form: EntryForm::new(sink),
            quiet,
        }
    }

    /// Run until Quit or end of input. Status lines and store failures go to
    /// `status` and the menu keeps running; terminal failures end it.
    pub(crate) fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
        status: &mut E,
    ) -> Result<(), AppError> {
        loop {
            write!(output, "\n[n] New Entry  [q] Quit\n> ").map_err(AppError::Terminal)?;
            output.flush().map_err(AppError::Terminal)?;

            let Some(key) = read_line(input).map_err(AppError::Terminal)? else {
                return Ok(());
            };
            match MenuAction::from_key(&key) {
                Some(MenuAction::Quit) => return Ok(()),
                Some(MenuAction::NewEntry) => self.open_form(input, output, status)?,
                None => {
                    writeln!(output, "Press n for a new entry or q to quit.")
                        .map_err(AppError::Terminal)?;
                }
            }
        }
    }

    fn open_form<R: BufRead, W: Write, E: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
        status: &mut E,
    ) -> Result<(), AppError> {
        self.form.prompt(input, output).map_err(AppError::Terminal)?;
        let empty = self.form.message().trim().is_empty();

        match self.form.save() {
            Ok(()) if empty || self.quiet => Ok(()),
            Ok(()) => writeln!(status, "Saved.").map_err(AppError::Terminal),
            Err(e) => {
                writeln!(status, "Entry not saved: {e}").map_err(AppError::Terminal)?;
                writeln!(status, "Unsaved text:\n{}", self.form.message())
                    .map_err(AppError::Terminal)
            }
        }
    }
}
