mod csv;
#[cfg(feature = "form")]
mod format;
#[cfg(feature = "form")]
mod table;

pub(crate) use csv::format_csv_row;
#[cfg(feature = "form")]
pub(crate) use csv::CsvTable;
#[cfg(test)]
pub(crate) use csv::parse_csv;
#[cfg(feature = "form")]
pub(crate) use table::render_csv_table;
