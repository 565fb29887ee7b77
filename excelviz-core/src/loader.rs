//! Tabular loaders: dispatch on the intake classification and produce a
//! [`Table`] or halt the cycle with a load error.

use crate::error::VizError;
use crate::intake::{classify, FileFormat, UploadedFile};
use crate::table::Table;
use crate::xlsx;

/// Parse an uploaded file into a table.
///
/// Dispatches to the format-appropriate reader based on the filename suffix.
/// A table with zero data rows is rejected even when the parse itself
/// succeeded; this is a validation policy, not a parser limitation.
pub fn load_table(file: &UploadedFile) -> Result<Table, VizError> {
    let format = classify(&file.name)?;
    let table = match format {
        FileFormat::Csv => read_csv(&file.bytes)?,
        FileFormat::Xlsx => xlsx::read_xlsx(&file.bytes)?,
    };
    if table.row_count() == 0 {
        return Err(VizError::EmptyTable);
    }
    log::info!(
        "loader: {} rows x {} columns from {}",
        table.row_count(),
        table.column_count(),
        file.name
    );
    Ok(table)
}

/// Read CSV bytes into a table. The first record is the header row.
fn read_csv(bytes: &[u8]) -> Result<Table, VizError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row: Vec<String> = (0..headers.len())
            .map(|i| record.get(i).unwrap_or("").trim().to_string())
            .collect();
        rows.push(row);
    }

    Ok(Table::from_rows(headers, rows))
}
