//! Form front-end
//!
//! A persistent form session: three text fields, an append action, and an
//! on-demand view of the target file. Every interaction re-renders the form,
//! and failures are reported as notices instead of ending the session.

use std::fmt;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::AppError;
use crate::frontend::{prompt, say};
use crate::output::{CsvTable, render_csv_table};
use crate::record::ApplicationRecord;
use crate::utils::parse_timestamp;

const COMMANDS: &str =
    "Commands: [c] company  [i] application id  [t] timestamp  [a] append  [s] show CSV  [q] quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Notice {
    Success(String),
    Info(String),
    Warning(String),
    Error(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Success(msg) => write!(f, "Success: {msg}"),
            Notice::Info(msg) => write!(f, "Info: {msg}"),
            Notice::Warning(msg) => write!(f, "Warning: {msg}"),
            Notice::Error(msg) => write!(f, "Error: {msg}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Company,
    ApplicationId,
    Timestamp,
}

impl Field {
    fn label(self) -> &'static str {
        match self {
            Field::Company => "Company name",
            Field::ApplicationId => "Application ID",
            Field::Timestamp => "Timestamp (ISO8601, leave empty to use current UTC)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Edit(Field),
    Append,
    Show,
    Quit,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        match input.to_ascii_lowercase().as_str() {
            "c" | "company" => Some(Command::Edit(Field::Company)),
            "i" | "id" => Some(Command::Edit(Field::ApplicationId)),
            "t" | "timestamp" => Some(Command::Edit(Field::Timestamp)),
            "a" | "append" => Some(Command::Append),
            "s" | "show" => Some(Command::Show),
            "q" | "quit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// What the target file currently holds
#[derive(Debug, PartialEq, Eq)]
pub(super) enum FileView {
    Missing,
    Empty,
    Rows(CsvTable),
}

pub(super) fn read_file_view(path: &Path) -> Result<FileView, AppError> {
    if !path.exists() {
        return Ok(FileView::Missing);
    }
    let text = fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let table = CsvTable::from_text(&text);
    if table.is_empty() {
        Ok(FileView::Empty)
    } else {
        Ok(FileView::Rows(table))
    }
}

fn missing_file_notice() -> Notice {
    Notice::Info("CSV file does not exist yet. Append a record to create it.".to_string())
}

#[derive(Debug)]
pub(super) struct FormSession {
    path: PathBuf,
    company: String,
    application_id: String,
    timestamp: String,
}

impl FormSession {
    pub(super) fn new(path: PathBuf) -> Self {
        FormSession {
            path,
            company: String::new(),
            application_id: String::new(),
            timestamp: String::new(),
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Company => self.company = value,
            Field::ApplicationId => self.application_id = value,
            Field::Timestamp => self.timestamp = value,
        }
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Company => &self.company,
            Field::ApplicationId => &self.application_id,
            Field::Timestamp => &self.timestamp,
        }
    }

    /// Validate and append the current field values. Field values are kept
    /// afterwards.
    pub(super) fn submit(&self) -> Vec<Notice> {
        if self.company.trim().is_empty() {
            return vec![Notice::Warning("Company name cannot be empty.".to_string())];
        }

        let mut notices = Vec::new();
        let parsed = parse_timestamp(&self.timestamp);
        if let Some(warning) = parsed.warning {
            notices.push(Notice::Warning(format!("{warning}; using current UTC time.")));
        }

        let record = ApplicationRecord::new(
            Some(parsed.value.into()),
            &self.company,
            &self.application_id,
        );
        match record.append_to_csv(&self.path) {
            Ok(()) => notices.push(Notice::Success(format!(
                "Appended record for '{}' to {}",
                self.company,
                self.path.display()
            ))),
            Err(e) => {
                debug!(error = %e, "form append failed");
                notices.push(Notice::Error(format!("Failed to append record: {e}")));
            }
        }
        notices
    }

    fn render<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        say(out, "")?;
        say(out, "Application Records")?;
        say(out, "Add a job application record")?;
        for field in [Field::Company, Field::ApplicationId, Field::Timestamp] {
            say(out, format!("  {}: {}", field.label(), self.value(field)))?;
        }
        say(out, "---")?;
        say(out, format!("CSV file: {}", self.path.display()))?;
        if !self.path.exists() {
            say(out, missing_file_notice())?;
        }
        say(out, COMMANDS)
    }

    fn show<W: Write>(&self, out: &mut W, use_color: bool) -> Result<(), AppError> {
        match read_file_view(&self.path) {
            Ok(FileView::Rows(table)) => say(out, render_csv_table(&table, use_color)),
            Ok(FileView::Empty) => say(out, "CSV is empty"),
            Ok(FileView::Missing) => say(out, missing_file_notice()),
            Err(e) => say(out, Notice::Error(e.to_string())),
        }
    }
}

/// Run the form until `q` or end of input.
pub(super) fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    path: &Path,
    use_color: bool,
) -> Result<(), AppError> {
    let mut session = FormSession::new(path.to_path_buf());

    loop {
        session.render(out)?;
        let Some(line) = prompt(input, out, "> ")? else {
            break;
        };
        if line.is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Some(Command::Edit(field)) => {
                let value = prompt(input, out, &format!("{}: ", field.label()))?;
                session.set(field, value.unwrap_or_default());
            }
            Some(Command::Append) => {
                for notice in session.submit() {
                    say(out, notice)?;
                }
            }
            Some(Command::Show) => session.show(out, use_color)?,
            Some(Command::Quit) => break,
            None => say(out, Notice::Warning(format!("Unknown command \"{line}\"")))?,
        }
    }

    debug!("form session closed");
    Ok(())
}
