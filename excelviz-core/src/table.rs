//! The typed in-memory table derived from an uploaded file.
//!
//! A [`Table`] is an ordered list of named columns of equal length. Each
//! column carries one semantic type (numeric, text, or temporal), inferred
//! from the raw cell strings when the table is built. Tables are derived
//! wholesale from the uploaded bytes on every interaction cycle and never
//! mutated in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::VizError;

/// Date formats tried (per cell, in order) during temporal inference.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// A uniformly typed column of values.
///
/// Blank cells in a numeric column are stored as NaN so row alignment with
/// the other columns is preserved. Temporal inference requires every cell to
/// parse; columns mixing dates and blanks stay text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
    Numeric(Vec<f64>),
    Text(Vec<String>),
    Temporal(Vec<NaiveDate>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Text(v) => v.len(),
            ColumnData::Temporal(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this column qualifies for the line-chart branch.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnData::Numeric(_))
    }

    /// Values as JSON for a Plotly trace. NaN has no JSON representation and
    /// becomes null; dates become ISO strings.
    pub fn values_json(&self) -> Vec<Value> {
        match self {
            ColumnData::Numeric(v) => v
                .iter()
                .map(|n| {
                    if n.is_finite() {
                        serde_json::json!(n)
                    } else {
                        Value::Null
                    }
                })
                .collect(),
            ColumnData::Text(v) => v.iter().map(|s| Value::String(s.clone())).collect(),
            ColumnData::Temporal(v) => v
                .iter()
                .map(|d| Value::String(d.format("%Y-%m-%d").to_string()))
                .collect(),
        }
    }

    /// Cell rendered for the data preview.
    pub fn display(&self, index: usize) -> String {
        match self {
            ColumnData::Numeric(v) => v
                .get(index)
                .map(|n| if n.is_finite() { n.to_string() } else { String::new() })
                .unwrap_or_default(),
            ColumnData::Text(v) => v.get(index).cloned().unwrap_or_default(),
            ColumnData::Temporal(v) => v
                .get(index)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    /// Coerce every cell to a float, for roles that require coordinates.
    ///
    /// Numeric columns pass through (blanks stay NaN). Text columns must
    /// parse cell by cell; the first failure aborts. Temporal columns are
    /// never coordinates.
    pub fn coerce_numeric(&self) -> Result<Vec<f64>, VizError> {
        match self {
            ColumnData::Numeric(v) => Ok(v.clone()),
            ColumnData::Text(v) => v
                .iter()
                .map(|s| {
                    let s = s.trim();
                    if s.is_empty() {
                        Ok(f64::NAN)
                    } else {
                        s.parse::<f64>()
                            .map_err(|_| VizError::Chart(format!("could not convert value '{s}' to a number")))
                    }
                })
                .collect(),
            ColumnData::Temporal(_) => Err(VizError::Chart(
                "date column cannot be used as a numeric value".to_string(),
            )),
        }
    }
}

/// A named column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

/// Ordered row/column structure derived from one uploaded file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table from a header row and raw string rows, inferring one
    /// semantic type per column. Short rows are padded with blanks so every
    /// column ends up with the same length.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Table {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let cells: Vec<&str> = rows
                    .iter()
                    .map(|row| row.get(i).map(String::as_str).unwrap_or(""))
                    .collect();
                Column {
                    name: name.clone(),
                    data: infer_column(&cells),
                }
            })
            .collect();
        Table { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Look up a column by name (first match wins).
    pub fn column(&self, name: &str) -> Option<&ColumnData> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.data)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.data.len()).unwrap_or(0)
    }
}

/// Infer the semantic type of a column from its raw cells.
///
/// Numeric wins if every non-blank cell parses as a float (and at least one
/// cell is non-blank); temporal requires every cell to parse as a date;
/// everything else is text.
fn infer_column(cells: &[&str]) -> ColumnData {
    let non_blank: Vec<&str> = cells
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect();

    if !non_blank.is_empty() && non_blank.iter().all(|c| c.parse::<f64>().is_ok()) {
        let values = cells
            .iter()
            .map(|c| c.trim().parse::<f64>().unwrap_or(f64::NAN))
            .collect();
        return ColumnData::Numeric(values);
    }

    if !cells.is_empty() && non_blank.len() == cells.len() {
        let dates: Option<Vec<NaiveDate>> = non_blank.iter().map(|c| parse_date(c)).collect();
        if let Some(dates) = dates {
            return ColumnData::Temporal(dates);
        }
    }

    ColumnData::Text(cells.iter().map(|c| c.trim().to_string()).collect())
}

fn parse_date(cell: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(cell, format).ok())
}
