//! Front-end selection and shared prompt helpers

mod console;
#[cfg(feature = "form")]
mod form;

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::Path;

use tracing::warn;

use crate::config::FrontendPreference;
use crate::error::AppError;

/// Marker set by a form harness to request the form front-end
pub(crate) const FRONTEND_ENV: &str = "APPTRACK_FRONTEND";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Frontend {
    Console,
    Form,
}

/// Whether the form front-end was compiled in
pub(crate) fn form_available() -> bool {
    cfg!(feature = "form")
}

/// The marker wins over the config file. An unrecognised marker means auto.
pub(crate) fn resolve_preference(
    marker: Option<&str>,
    configured: Option<FrontendPreference>,
) -> FrontendPreference {
    match marker {
        Some(raw) => FrontendPreference::parse(raw).unwrap_or_else(|| {
            warn!("Ignoring unrecognised {FRONTEND_ENV}={raw:?} (expected auto, console or form)");
            FrontendPreference::Auto
        }),
        None => configured.unwrap_or_default(),
    }
}

impl Frontend {
    pub(crate) fn select(form_available: bool, preference: FrontendPreference) -> Self {
        match preference {
            FrontendPreference::Form if form_available => Frontend::Form,
            FrontendPreference::Form => {
                warn!("Form front-end requested but not built in; using the console");
                Frontend::Console
            }
            FrontendPreference::Auto | FrontendPreference::Console => Frontend::Console,
        }
    }
}

/// Run the selected front-end against the process's stdin/stdout.
pub(crate) fn run(frontend: Frontend, path: &Path) -> Result<(), AppError> {
    #[cfg(feature = "form")]
    let use_color = std::io::IsTerminal::is_terminal(&std::io::stdout());

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout().lock();

    match frontend {
        #[cfg(feature = "form")]
        Frontend::Form => form::run(&mut input, &mut out, path, use_color),
        _ => console::run(&mut input, &mut out, path).map(|_| ()),
    }
}

/// Print `label` without a newline and read one trimmed line.
/// `None` at end of input.
pub(super) fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>, AppError> {
    write!(out, "{label}").map_err(AppError::Prompt)?;
    out.flush().map_err(AppError::Prompt)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(AppError::Prompt)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub(super) fn say<W: Write>(out: &mut W, line: impl Display) -> Result<(), AppError> {
    writeln!(out, "{line}").map_err(AppError::Prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn form_selected_only_when_available_and_requested() {
        assert_eq!(
            Frontend::select(true, FrontendPreference::Form),
            Frontend::Form
        );
        assert_eq!(
            Frontend::select(false, FrontendPreference::Form),
            Frontend::Console
        );
        assert_eq!(
            Frontend::select(true, FrontendPreference::Auto),
            Frontend::Console
        );
        assert_eq!(
            Frontend::select(true, FrontendPreference::Console),
            Frontend::Console
        );
    }

    #[test]
    fn marker_overrides_config() {
        assert_eq!(
            resolve_preference(Some("form"), Some(FrontendPreference::Console)),
            FrontendPreference::Form
        );
        assert_eq!(
            resolve_preference(Some("console"), Some(FrontendPreference::Form)),
            FrontendPreference::Console
        );
    }

    #[test]
    fn config_used_without_marker() {
        assert_eq!(
            resolve_preference(None, Some(FrontendPreference::Form)),
            FrontendPreference::Form
        );
        assert_eq!(resolve_preference(None, None), FrontendPreference::Auto);
    }

    #[test]
    fn unrecognised_marker_is_auto() {
        assert_eq!(
            resolve_preference(Some("streamlit"), Some(FrontendPreference::Form)),
            FrontendPreference::Auto
        );
    }

    #[test]
    fn form_availability_tracks_feature() {
        assert_eq!(form_available(), cfg!(feature = "form"));
    }

    #[test]
    fn prompt_trims_and_detects_eof() {
        let mut input = Cursor::new("  Acme  \r\n");
        let mut out = Vec::new();
        assert_eq!(
            prompt(&mut input, &mut out, "Company: ").unwrap(),
            Some("Acme".to_string())
        );
        assert_eq!(prompt(&mut input, &mut out, "Company: ").unwrap(), None);
        assert_eq!(String::from_utf8(out).unwrap(), "Company: Company: ");
    }
}
