use comfy_table::Cell;

use crate::output::csv::CsvTable;
use crate::output::format::{create_styled_table, header_cell};

/// Render the read-back file as a bordered table. Short rows are padded
/// so every row spans the header.
pub(crate) fn render_csv_table(csv: &CsvTable, use_color: bool) -> String {
    let mut table = create_styled_table();
    table.set_header(
        csv.header
            .iter()
            .map(|h| header_cell(h, use_color))
            .collect::<Vec<_>>(),
    );

    let width = csv.header.len();
    for row in &csv.rows {
        let mut cells: Vec<Cell> = row.iter().map(Cell::new).collect();
        while cells.len() < width {
            cells.push(Cell::new(""));
        }
        table.add_row(cells);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv(text: &str) -> CsvTable {
        CsvTable::from_text(text)
    }

    #[test]
    fn renders_header_and_rows() {
        let out = render_csv_table(
            &csv("timestamp,company_name,application_id\r\n2024-01-15T10:30:00Z,Acme,APP-001\r\n"),
            false,
        );
        assert!(out.contains("company_name"));
        assert!(out.contains("Acme"));
        assert!(out.contains("APP-001"));
        assert!(out.contains("2024-01-15T10:30:00Z"));
    }

    #[test]
    fn short_rows_are_padded() {
        let out = render_csv_table(&csv("a,b,c\r\nonly\r\n"), false);
        let body: Vec<&str> = out.lines().filter(|l| l.contains("only")).collect();
        assert_eq!(body.len(), 1);
        // three columns -> four vertical borders
        assert_eq!(body[0].matches('│').count(), 4);
    }
}
