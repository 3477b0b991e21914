//! Entry form: a multi-line message, an optional project tag, and save

use std::io::{BufRead, Write};

use crate::error::StoreError;
use crate::store::EntrySink;
use crate::utils::debug_log;

/// Line that ends the multi-line message
const END_OF_MESSAGE: &str = ".";

pub(crate) struct EntryForm<'a> {
    sink: &'a dyn EntrySink,
    message: String,
    project: String,
}

impl<'a> EntryForm<'a> {
    pub(crate) fn new(sink: &'a dyn EntrySink) -> Self {
        Self {
            sink,
            message: String::new(),
            project: String::new(),
        }
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }

    /// Text kept from a save that failed
    fn has_unsaved(&self) -> bool {
        !self.message.trim().is_empty()
    }

    /// Ask for the message and project tag, replacing the current fields.
    /// When unsaved text is kept, an empty first line keeps both fields as
    /// they are so the entry can be saved again.
    pub(crate) fn prompt<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> std::io::Result<()> {
        let unsaved = self.has_unsaved();
        if unsaved {
            writeln!(output, "Unsaved entry:\n{}", self.message)?;
            writeln!(output, "Press Enter to save it again, or type a new entry.")?;
        }
        writeln!(output, "New Entry (finish with a line containing only \"{END_OF_MESSAGE}\")")?;
        let mut lines = Vec::new();
        loop {
            write!(output, "> ")?;
            output.flush()?;
            let Some(line) = read_line(input)? else {
                writeln!(output)?;
                break;
            };
            if unsaved && lines.is_empty() && line.is_empty() {
                return Ok(());
            }
            if line == END_OF_MESSAGE {
                break;
            }
            lines.push(line);
        }
        self.message = lines.join("\n");

        write!(output, "Project (optional): ")?;
        output.flush()?;
        self.project = read_line(input)?.unwrap_or_default();
        Ok(())
    }

    /// Hand the fields to the sink. Fields are cleared only once the sink
    /// accepted them, so a failed save keeps the typed text.
    pub(crate) fn save(&mut self) -> Result<(), StoreError> {
        let message = self.message.trim();
        let project = Some(self.project.trim()).filter(|p| !p.is_empty());
        debug_log(echo_line(project, message));

        self.sink.save_entry(message, project)?;

        self.message.clear();
        self.project.clear();
        Ok(())
    }
}

/// `project::message`, the line logged for each save
fn echo_line(project: Option<&str>, message: &str) -> String {
    format!("{}::{}", project.unwrap_or(""), message)
}

/// Read one line without its terminator; `None` at end of input
pub(super) fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    let trimmed_len = buf.trim_end_matches(['\n', '\r']).len();
    buf.truncate(trimmed_len);
    Ok(Some(buf))
}
