//! Line-by-line console front-end

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::error::AppError;
use crate::frontend::{prompt, say};
use crate::record::ApplicationRecord;
use crate::utils::parse_timestamp;

const COMPANY_PROMPT: &str = "Company name (leave empty to finish): ";
const APPLICATION_ID_PROMPT: &str = "Application ID: ";
const TIMESTAMP_PROMPT: &str = "Timestamp (ISO8601, press Enter to use current UTC): ";

/// Ask for one record. `None` once the company name is left blank or input
/// ends, including partway through an entry.
fn prompt_for_record<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<ApplicationRecord>, AppError> {
    let company = prompt(input, out, COMPANY_PROMPT)?.unwrap_or_default();
    if company.is_empty() {
        return Ok(None);
    }

    let Some(application_id) = prompt(input, out, APPLICATION_ID_PROMPT)? else {
        return Ok(None);
    };
    let Some(timestamp_raw) = prompt(input, out, TIMESTAMP_PROMPT)? else {
        return Ok(None);
    };

    let parsed = parse_timestamp(&timestamp_raw);
    if let Some(warning) = parsed.warning {
        say(out, format!("Warning: {warning}; using current UTC time."))?;
    }

    Ok(Some(ApplicationRecord::new(
        Some(parsed.value.into()),
        company,
        application_id,
    )))
}

/// Prompt for records until a blank company name, appending each to `path`.
/// Returns how many records were written.
pub(super) fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    path: &Path,
) -> Result<usize, AppError> {
    say(out, "Entering interactive mode. Provide records one by one.")?;
    say(out, "Leave the company name blank to finish and exit.")?;

    let mut appended = 0;
    while let Some(record) = prompt_for_record(input, out)? {
        record.append_to_csv(path)?;
        appended += 1;
        debug!(
            timestamp = record.timestamp(),
            application_id = record.application_id(),
            "record appended"
        );
        say(
            out,
            format!(
                "Appended record for '{}' to {}",
                record.company_name(),
                path.display()
            ),
        )?;
    }

    say(out, "Finished input. Exiting.")?;
    debug!(appended, "console session finished");
    Ok(appended)
}
