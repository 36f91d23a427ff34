//! Application record model
//!
//! One submitted entry and the append-to-file operation.

mod timestamp;

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::AppError;
use crate::output::format_csv_row;

pub(crate) use timestamp::TimestampInput;

/// Header row of the target file, in column order
pub(crate) const CSV_HEADER: [&str; 3] = ["timestamp", "company_name", "application_id"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApplicationRecord {
    timestamp: String,
    company_name: String,
    application_id: String,
}

impl ApplicationRecord {
    /// Build a record. A missing timestamp means "now, UTC".
    pub(crate) fn new(
        timestamp: Option<TimestampInput>,
        company_name: impl ToString,
        application_id: impl ToString,
    ) -> Self {
        let timestamp = timestamp.unwrap_or_else(TimestampInput::now);
        ApplicationRecord {
            timestamp: timestamp.to_iso_utc(),
            company_name: company_name.to_string(),
            application_id: application_id.to_string(),
        }
    }

    pub(crate) fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub(crate) fn company_name(&self) -> &str {
        &self.company_name
    }

    pub(crate) fn application_id(&self) -> &str {
        &self.application_id
    }

    #[allow(dead_code)]
    pub(crate) fn set_timestamp(&mut self, value: impl Into<TimestampInput>) {
        self.timestamp = value.into().to_iso_utc();
    }

    #[allow(dead_code)]
    pub(crate) fn set_company_name(&mut self, value: impl ToString) {
        self.company_name = value.to_string();
    }

    #[allow(dead_code)]
    pub(crate) fn set_application_id(&mut self, value: impl ToString) {
        self.application_id = value.to_string();
    }

    /// Fields in header order
    pub(crate) fn to_csv_row(&self) -> [&str; 3] {
        [&self.timestamp, &self.company_name, &self.application_id]
    }

    /// Append this record to `path`, creating parent directories and the
    /// header row when the file is missing or empty.
    pub(crate) fn append_to_csv(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|source| AppError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
            debug!(dir = %parent.display(), "created parent directory");
        }

        let write_header = fs::metadata(path).map_or(true, |meta| meta.len() == 0);

        let write_err = |source| AppError::Write {
            path: path.to_path_buf(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(write_err)?;

        let mut out = String::new();
        if write_header {
            debug!(path = %path.display(), "writing header row");
            out.push_str(&format_csv_row(&CSV_HEADER));
        }
        out.push_str(&format_csv_row(&self.to_csv_row()));
        file.write_all(out.as_bytes()).map_err(write_err)?;

        Ok(())
    }
}
