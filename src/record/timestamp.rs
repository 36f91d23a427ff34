use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Canonical on-disk form: UTC, whole seconds, literal `Z`.
pub(crate) const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Anything a record timestamp can be built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TimestampInput {
    /// A zone-aware instant, already shifted to UTC
    Instant(DateTime<Utc>),
    /// A wall-clock value without zone; taken as UTC
    Naive(NaiveDateTime),
    /// Pre-formatted text, stored as-is
    Text(String),
}

impl TimestampInput {
    pub(crate) fn now() -> Self {
        TimestampInput::Instant(Utc::now())
    }

    /// Render into the stored text form.
    pub(crate) fn to_iso_utc(&self) -> String {
        match self {
            TimestampInput::Instant(dt) => dt.format(CANONICAL_FORMAT).to_string(),
            TimestampInput::Naive(naive) => naive.and_utc().format(CANONICAL_FORMAT).to_string(),
            TimestampInput::Text(text) => text.clone(),
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TimestampInput {
    fn from(dt: DateTime<Tz>) -> Self {
        TimestampInput::Instant(dt.with_timezone(&Utc))
    }
}

impl From<NaiveDateTime> for TimestampInput {
    fn from(naive: NaiveDateTime) -> Self {
        TimestampInput::Naive(naive)
    }
}

impl From<String> for TimestampInput {
    fn from(text: String) -> Self {
        TimestampInput::Text(text)
    }
}

impl From<&str> for TimestampInput {
    fn from(text: &str) -> Self {
        TimestampInput::Text(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};

    fn naive(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn offset_datetime_is_shifted_to_utc() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let dt = tz.from_local_datetime(&naive(2024, 1, 15, 12, 30, 0)).unwrap();
        let input = TimestampInput::from(dt);
        assert_eq!(input.to_iso_utc(), "2024-01-15T10:30:00Z");
    }

    #[test]
    fn negative_offset_can_cross_midnight() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let dt = tz.from_local_datetime(&naive(2023, 12, 31, 22, 0, 0)).unwrap();
        assert_eq!(TimestampInput::from(dt).to_iso_utc(), "2024-01-01T03:00:00Z");
    }

    #[test]
    fn naive_datetime_is_taken_as_utc() {
        let input = TimestampInput::from(naive(2024, 1, 15, 10, 30, 0));
        assert_eq!(input.to_iso_utc(), "2024-01-15T10:30:00Z");
    }

    #[test]
    fn subsecond_precision_is_truncated() {
        let dt = naive(2024, 1, 15, 10, 30, 59)
            .and_utc()
            .checked_add_signed(chrono::TimeDelta::milliseconds(999))
            .unwrap();
        assert_eq!(TimestampInput::from(dt).to_iso_utc(), "2024-01-15T10:30:59Z");
    }

    #[test]
    fn text_is_kept_verbatim() {
        assert_eq!(TimestampInput::from("yesterday-ish").to_iso_utc(), "yesterday-ish");
        assert_eq!(
            TimestampInput::from(String::from("2024-01-15T10:30:00+02:00")).to_iso_utc(),
            "2024-01-15T10:30:00+02:00"
        );
    }

    #[test]
    fn now_has_canonical_shape() {
        let s = TimestampInput::now().to_iso_utc();
        assert_eq!(s.len(), 20);
        assert!(s.ends_with('Z'));
        assert!(NaiveDateTime::parse_from_str(&s, CANONICAL_FORMAT).is_ok());
    }
}
