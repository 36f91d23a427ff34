/// Row terminator for every line written to the target file
pub(crate) const LINE_TERMINATOR: &str = "\r\n";

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Serialize one row, terminator included.
pub(crate) fn format_csv_row(fields: &[&str]) -> String {
    let mut out = fields
        .iter()
        .map(|f| csv_escape(f))
        .collect::<Vec<_>>()
        .join(",");
    out.push_str(LINE_TERMINATOR);
    out
}

/// Split CSV text into records. Accepts LF or CRLF, quoted fields with
/// doubled quotes and embedded newlines. Blank lines are dropped.
#[cfg(any(test, feature = "form"))]
pub(crate) fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    // A record with a single empty unquoted field is a blank line
    let mut row_has_content = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' => {
                in_quotes = true;
                row_has_content = true;
            }
            ',' => {
                row.push(std::mem::take(&mut field));
                row_has_content = true;
            }
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                if row_has_content || !field.is_empty() {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                row_has_content = false;
            }
            _ => {
                field.push(c);
                row_has_content = true;
            }
        }
    }

    if row_has_content || !field.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Header plus data rows, as read back from the target file
#[cfg(feature = "form")]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CsvTable {
    pub(crate) header: Vec<String>,
    pub(crate) rows: Vec<Vec<String>>,
}

#[cfg(feature = "form")]
impl CsvTable {
    pub(crate) fn from_text(text: &str) -> Self {
        let mut records = parse_csv(text).into_iter();
        let header = records.next().unwrap_or_default();
        CsvTable {
            header,
            rows: records.collect(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_plain_field_untouched() {
        assert_eq!(csv_escape("Acme"), "Acme");
        assert_eq!(csv_escape(""), "");
        assert_eq!(csv_escape("2024-01-15T10:30:00Z"), "2024-01-15T10:30:00Z");
    }

    #[test]
    fn escape_quotes_special_characters() {
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_escape("two\nlines"), "\"two\nlines\"");
        assert_eq!(csv_escape("cr\r"), "\"cr\r\"");
    }

    #[test]
    fn format_row_joins_and_terminates() {
        assert_eq!(
            format_csv_row(&["timestamp", "company_name", "application_id"]),
            "timestamp,company_name,application_id\r\n"
        );
        assert_eq!(format_csv_row(&["t", "", "x"]), "t,,x\r\n");
    }

    #[test]
    fn parse_handles_crlf_and_lf() {
        let rows = parse_csv("a,b\r\nc,d\ne,f");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"], vec!["e", "f"]]);
    }

    #[test]
    fn parse_quoted_fields() {
        let rows = parse_csv("\"Acme, Inc.\",\"say \"\"hi\"\"\",\"multi\r\nline\"\r\n");
        assert_eq!(rows, vec![vec!["Acme, Inc.", "say \"hi\"", "multi\r\nline"]]);
    }

    #[test]
    fn parse_keeps_empty_fields() {
        assert_eq!(parse_csv("t,,\r\n"), vec![vec!["t", "", ""]]);
        assert_eq!(parse_csv("\"\"\r\n"), vec![vec![""]]);
    }

    #[test]
    fn parse_skips_blank_lines() {
        let rows = parse_csv("a,b\r\n\r\n\nc,d\r\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn parse_empty_text() {
        assert!(parse_csv("").is_empty());
    }

    #[test]
    fn written_row_parses_back() {
        let fields = ["2024-01-15T10:30:00Z", "Acme, \"Labs\"", "APP\n001"];
        let rows = parse_csv(&format_csv_row(&fields));
        assert_eq!(rows, vec![fields.to_vec()]);
    }

    #[cfg(feature = "form")]
    #[test]
    fn table_splits_header_from_rows() {
        let table = CsvTable::from_text("timestamp,company_name,application_id\r\nt,Acme,1\r\n");
        assert_eq!(table.header, ["timestamp", "company_name", "application_id"]);
        assert_eq!(table.rows, vec![vec!["t", "Acme", "1"]]);
        assert!(!table.is_empty());
    }

    #[cfg(feature = "form")]
    #[test]
    fn table_header_only_is_empty() {
        let table = CsvTable::from_text("timestamp,company_name,application_id\r\n");
        assert!(table.is_empty());
        assert_eq!(table.header.len(), 3);
    }

    #[cfg(feature = "form")]
    #[test]
    fn table_from_empty_file() {
        let table = CsvTable::from_text("");
        assert!(table.is_empty());
        assert!(table.header.is_empty());
    }
}
