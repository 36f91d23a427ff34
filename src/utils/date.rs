use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use tracing::debug;

use crate::error::AppError;

// Offset-carrying forms, tried before the naive ones
const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Result of reading a user-typed timestamp. `value` is a UTC wall-clock
/// time; `warning` is set when the input was unusable and `value` fell back
/// to the current time.
#[derive(Debug)]
pub(crate) struct ParsedTimestamp {
    pub(crate) value: NaiveDateTime,
    pub(crate) warning: Option<AppError>,
}

/// Parse ISO 8601 text into a UTC wall-clock time.
pub(crate) fn parse_iso8601(s: &str) -> Result<NaiveDateTime, AppError> {
    // A trailing Z is rewritten to an explicit zero offset
    let normalized = match s.strip_suffix('Z') {
        Some(rest) => format!("{rest}+00:00"),
        None => s.to_string(),
    };

    for fmt in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, fmt) {
            return Ok(dt.with_timezone(&Utc).naive_utc());
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, fmt) {
            return Ok(naive);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    Err(AppError::InvalidTimestamp {
        input: s.to_string(),
    })
}

/// Read a timestamp typed by the user. Empty input means now; bad input
/// also means now, with a warning attached. Never fails.
pub(crate) fn parse_timestamp(raw: &str) -> ParsedTimestamp {
    let s = raw.trim();
    if s.is_empty() {
        return ParsedTimestamp {
            value: Utc::now().naive_utc(),
            warning: None,
        };
    }

    match parse_iso8601(s) {
        Ok(value) => ParsedTimestamp {
            value,
            warning: None,
        },
        Err(e) => {
            debug!(input = s, "timestamp fallback to current UTC time");
            ParsedTimestamp {
                value: Utc::now().naive_utc(),
                warning: Some(e),
            }
        }
    }
}
