//! Minimal XLSX worksheet reader.
//!
//! An `.xlsx` file is a ZIP archive of XML parts. This reader resolves the
//! shared string table and streams the first worksheet's cells into a header
//! row plus data rows. Styles, formulas, and additional worksheets are
//! ignored; date cells arrive as their underlying serial numbers.

use std::io::{BufReader, Cursor, Read, Seek};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::error::VizError;
use crate::table::Table;

/// Value interpretation for the current cell, from its `t` attribute.
#[derive(Clone, Copy, PartialEq)]
enum CellKind {
    Number,
    SharedString,
    InlineString,
    Boolean,
}

/// Largest row-by-column extent materialized from one worksheet. A single
/// cell parked at a far reference would otherwise size the grid by that
/// reference alone.
const MAX_GRID_CELLS: usize = 10_000_000;

/// Parse XLSX bytes into a table. The first populated row is the header.
pub(crate) fn read_xlsx(bytes: &[u8]) -> Result<Table, VizError> {
    let mut zip = ZipArchive::new(Cursor::new(bytes))?;
    let shared_strings = read_shared_strings(&mut zip)?;
    let sheet_path = first_sheet_path(&zip)
        .ok_or_else(|| VizError::Load("no worksheet found in workbook".to_string()))?;
    let cells = read_sheet_cells(&mut zip, &sheet_path, &shared_strings)?;
    cells_to_table(cells)
}

/// Path of the first worksheet part, in sheet-number order.
fn first_sheet_path<R: Read + Seek>(zip: &ZipArchive<R>) -> Option<String> {
    zip.file_names()
        .filter(|name| name.starts_with("xl/worksheets/sheet") && name.ends_with(".xml"))
        .min()
        .map(str::to_owned)
}

/// Load the shared string table, if present.
///
/// Shared strings live in a separate part and are referenced by index from
/// cells with `t="s"`. Workbooks without text cells omit the part entirely.
fn read_shared_strings<R: Read + Seek>(zip: &mut ZipArchive<R>) -> Result<Vec<String>, VizError> {
    let file = match zip.by_name("xl/sharedStrings.xml") {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut reader = Reader::from_reader(BufReader::new(file));
    let mut buf = Vec::new();
    let mut strings = Vec::new();
    let mut current = String::new();
    let mut in_item = false;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == b"si" => {
                in_item = true;
                current.clear();
            }
            Event::End(e) if e.name().as_ref() == b"si" => {
                in_item = false;
                strings.push(std::mem::take(&mut current));
            }
            Event::Start(e) if in_item && e.name().as_ref() == b"t" => in_text = true,
            Event::End(e) if e.name().as_ref() == b"t" => in_text = false,
            Event::Text(e) if in_text => current.push_str(&e.unescape()?),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(strings)
}

/// Stream one worksheet's cells as (row, col, value) triples.
fn read_sheet_cells<R: Read + Seek>(
    zip: &mut ZipArchive<R>,
    sheet_path: &str,
    shared_strings: &[String],
) -> Result<Vec<(usize, usize, String)>, VizError> {
    let file = zip.by_name(sheet_path)?;
    let mut reader = Reader::from_reader(BufReader::new(file));
    let mut buf = Vec::new();

    let mut cells = Vec::new();
    // Position of the next cell when the `r` reference attribute is absent.
    let mut rows_seen = 0usize;
    let mut cols_seen = 0usize;
    let (mut row, mut col) = (0usize, 0usize);
    let mut kind = CellKind::Number;
    let mut value = String::new();
    let mut in_value = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::End(e) if e.name().as_ref() == b"row" => {
                rows_seen += 1;
                cols_seen = 0;
            }
            Event::Start(e) if e.name().as_ref() == b"c" => {
                (row, col) = match e.try_get_attribute("r")? {
                    Some(attr) => reference_to_index(&attr.unescape_value()?)
                        .unwrap_or((rows_seen, cols_seen)),
                    None => (rows_seen, cols_seen),
                };
                cols_seen += 1;
                kind = match e.try_get_attribute("t")? {
                    Some(attr) => match attr.unescape_value()?.as_ref() {
                        "s" => CellKind::SharedString,
                        "inlineStr" | "str" => CellKind::InlineString,
                        "b" => CellKind::Boolean,
                        _ => CellKind::Number,
                    },
                    None => CellKind::Number,
                };
                value.clear();
            }
            Event::Start(e)
                if e.name().as_ref() == b"v" || e.name().as_ref() == b"t" =>
            {
                in_value = true;
            }
            Event::End(e) if e.name().as_ref() == b"v" || e.name().as_ref() == b"t" => {
                in_value = false;
            }
            Event::Text(e) if in_value => value.push_str(&e.unescape()?),
            Event::End(e) if e.name().as_ref() == b"c" => {
                if !value.is_empty() {
                    let resolved = match kind {
                        CellKind::SharedString => value
                            .trim()
                            .parse::<usize>()
                            .ok()
                            .and_then(|i| shared_strings.get(i).cloned())
                            .unwrap_or_default(),
                        CellKind::Boolean => {
                            if value.trim() == "1" {
                                "TRUE".to_string()
                            } else {
                                "FALSE".to_string()
                            }
                        }
                        _ => value.clone(),
                    };
                    cells.push((row, col, resolved));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(cells)
}

/// Assemble sparse cells into a dense header + rows table.
///
/// The grid spans the first through last populated row; interior rows with no
/// populated cells are kept as blank rows so row indices stay aligned with
/// the source sheet. Sheets whose populated extent exceeds [`MAX_GRID_CELLS`]
/// are rejected rather than materialized.
fn cells_to_table(cells: Vec<(usize, usize, String)>) -> Result<Table, VizError> {
    let Some(max_col) = cells.iter().map(|c| c.1).max() else {
        return Ok(Table::from_rows(Vec::new(), Vec::new()));
    };
    let min_row = cells.iter().map(|c| c.0).min().unwrap_or(0);
    let max_row = cells.iter().map(|c| c.0).max().unwrap_or(0);

    let width = max_col + 1;
    let height = max_row - min_row + 1;
    if height.checked_mul(width).map_or(true, |n| n > MAX_GRID_CELLS) {
        return Err(VizError::Load(format!(
            "worksheet extent of {height} rows x {width} columns is larger than supported"
        )));
    }

    let mut grid = vec![vec![String::new(); width]; height];
    for (row, col, value) in cells {
        grid[row - min_row][col] = value;
    }

    let mut rows = grid.into_iter();
    let headers: Vec<String> = rows
        .next()
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, h)| {
            if h.trim().is_empty() {
                format!("Unnamed: {i}")
            } else {
                h
            }
        })
        .collect();
    Ok(Table::from_rows(headers, rows.collect()))
}

/// Convert an `A1`-style cell reference to zero-based (row, col).
///
/// Column runs longer than `XFD` (the last OOXML column) are rejected, which
/// also keeps the accumulator from overflowing on crafted references.
fn reference_to_index(reference: &str) -> Option<(usize, usize)> {
    let split = reference.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = reference.split_at(split);
    if letters.is_empty() || letters.len() > 3 {
        return None;
    }
    let mut col = 0usize;
    for c in letters.chars() {
        if !c.is_ascii_uppercase() {
            return None;
        }
        col = col * 26 + (c as usize - 'A' as usize + 1);
    }
    let row: usize = digits.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ColumnData;
    use std::io::Write;

    /// Build an in-memory XLSX archive from raw part bodies.
    fn build_xlsx(parts: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        for (name, body) in parts {
            writer.start_file(*name, options).unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    const SHARED: &str =
        "<sst><si><t>name</t></si><si><t>value</t></si><si><t>apple</t></si></sst>";

    const SHEET: &str = concat!(
        "<worksheet><sheetData>",
        r#"<row r="1"><c r="A1" t="s"><v>0</v></c><c r="B1" t="s"><v>1</v></c></row>"#,
        r#"<row r="2"><c r="A2" t="s"><v>2</v></c><c r="B2"><v>3.5</v></c></row>"#,
        r#"<row r="3"><c r="A3" t="inlineStr"><is><t>pear</t></is></c><c r="B3"><v>4</v></c></row>"#,
        "</sheetData></worksheet>",
    );

    #[test]
    fn reads_headers_and_typed_columns() {
        let bytes = build_xlsx(&[
            ("xl/sharedStrings.xml", SHARED),
            ("xl/worksheets/sheet1.xml", SHEET),
        ]);
        let table = read_xlsx(&bytes).unwrap();
        assert_eq!(table.column_names(), vec!["name", "value"]);
        assert_eq!(table.row_count(), 2);
        assert!(matches!(table.column("name"), Some(ColumnData::Text(_))));
        match table.column("value").unwrap() {
            ColumnData::Numeric(v) => assert_eq!(v, &vec![3.5, 4.0]),
            other => panic!("expected numeric column, got {other:?}"),
        }
    }

    #[test]
    fn resolves_inline_strings() {
        let bytes = build_xlsx(&[
            ("xl/sharedStrings.xml", SHARED),
            ("xl/worksheets/sheet1.xml", SHEET),
        ]);
        let table = read_xlsx(&bytes).unwrap();
        assert_eq!(table.column("name").unwrap().display(1), "pear");
    }

    #[test]
    fn works_without_shared_string_part() {
        let sheet = concat!(
            "<worksheet><sheetData>",
            r#"<row r="1"><c r="A1" t="inlineStr"><is><t>n</t></is></c></row>"#,
            r#"<row r="2"><c r="A2"><v>7</v></c></row>"#,
            "</sheetData></worksheet>",
        );
        let bytes = build_xlsx(&[("xl/worksheets/sheet1.xml", sheet)]);
        let table = read_xlsx(&bytes).unwrap();
        assert_eq!(table.column_names(), vec!["n"]);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn header_only_sheet_yields_zero_rows() {
        let sheet = concat!(
            "<worksheet><sheetData>",
            r#"<row r="1"><c r="A1" t="inlineStr"><is><t>n</t></is></c></row>"#,
            "</sheetData></worksheet>",
        );
        let bytes = build_xlsx(&[("xl/worksheets/sheet1.xml", sheet)]);
        let table = read_xlsx(&bytes).unwrap();
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn archive_without_worksheet_is_a_load_error() {
        let bytes = build_xlsx(&[("xl/sharedStrings.xml", SHARED)]);
        let err = read_xlsx(&bytes).unwrap_err();
        assert!(matches!(err, VizError::Load(_)));
    }

    #[test]
    fn garbage_bytes_are_a_zip_error() {
        let err = read_xlsx(b"not a zip archive").unwrap_err();
        assert!(matches!(err, VizError::Zip(_)));
    }

    #[test]
    fn interior_blank_rows_are_kept() {
        let sheet = concat!(
            "<worksheet><sheetData>",
            r#"<row r="1"><c r="A1" t="inlineStr"><is><t>n</t></is></c></row>"#,
            r#"<row r="2"><c r="A2"><v>1</v></c></row>"#,
            r#"<row r="4"><c r="A4"><v>2</v></c></row>"#,
            "</sheetData></worksheet>",
        );
        let bytes = build_xlsx(&[("xl/worksheets/sheet1.xml", sheet)]);
        let table = read_xlsx(&bytes).unwrap();
        assert_eq!(table.row_count(), 3, "the gap row keeps its position");
        let column = table.column("n").unwrap();
        assert_eq!(column.display(0), "1");
        assert_eq!(column.display(1), "", "the gap row renders blank");
        assert_eq!(column.display(2), "2");
    }

    #[test]
    fn far_cell_reference_is_a_load_error_not_an_allocation() {
        // one header cell plus a lone value at the last OOXML cell
        let sheet = concat!(
            "<worksheet><sheetData>",
            r#"<row r="1"><c r="A1" t="inlineStr"><is><t>n</t></is></c></row>"#,
            r#"<row r="1048576"><c r="XFD1048576"><v>1</v></c></row>"#,
            "</sheetData></worksheet>",
        );
        let bytes = build_xlsx(&[("xl/worksheets/sheet1.xml", sheet)]);
        let err = read_xlsx(&bytes).unwrap_err();
        assert!(matches!(err, VizError::Load(_)));
    }

    #[test]
    fn lone_far_cell_parses_without_materializing_the_gap() {
        let sheet = concat!(
            "<worksheet><sheetData>",
            r#"<row r="1048576"><c r="XFD1048576"><v>1</v></c></row>"#,
            "</sheetData></worksheet>",
        );
        let bytes = build_xlsx(&[("xl/worksheets/sheet1.xml", sheet)]);
        let table = read_xlsx(&bytes).unwrap();
        assert_eq!(table.row_count(), 0, "the lone cell becomes the header row");
    }

    #[test]
    fn reference_parsing() {
        assert_eq!(reference_to_index("A1"), Some((0, 0)));
        assert_eq!(reference_to_index("B3"), Some((2, 1)));
        assert_eq!(reference_to_index("AA10"), Some((9, 26)));
        assert_eq!(reference_to_index("XFD1048576"), Some((1048575, 16383)));
        assert_eq!(reference_to_index("10"), None);
        assert_eq!(reference_to_index("AAAA1"), None, "beyond the last column");
    }
}
