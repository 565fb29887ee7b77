//! Chart kinds, role bindings, and Plotly figure construction.
//!
//! Exactly one chart branch runs per interaction cycle, selected by the
//! [`ChartSpec`] variant. Figures are plain Plotly JSON payloads (trace list
//! plus layout) that the web bridge and the HTML exporter both consume.

use serde_json::{json, Value};

use crate::error::VizError;
use crate::table::Table;

/// The four selectable chart kinds, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Map,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::Pie,
        ChartKind::Map,
    ];

    /// Menu label shown in the chart type dropdown.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Line => "Line Chart",
            ChartKind::Bar => "Bar Chart",
            ChartKind::Pie => "Pie Chart",
            ChartKind::Map => "Map",
        }
    }

    pub fn from_label(label: &str) -> Option<ChartKind> {
        ChartKind::ALL.into_iter().find(|k| k.label() == label)
    }
}

/// A chart kind plus its role-to-column bindings.
///
/// Line needs no bindings beyond the multiselected columns. Bar and Pie bind
/// roles from within the selection; Map binds latitude/longitude from the
/// full table column set.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Line,
    Bar { x: String, y: String },
    Pie { values: String, labels: String },
    Map { latitude: String, longitude: String },
}

impl ChartSpec {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartSpec::Line => ChartKind::Line,
            ChartSpec::Bar { .. } => ChartKind::Bar,
            ChartSpec::Pie { .. } => ChartKind::Pie,
            ChartSpec::Map { .. } => ChartKind::Map,
        }
    }

    /// Column names bound to roles; each must exist in the table.
    fn bound_columns(&self) -> Vec<&str> {
        match self {
            ChartSpec::Line => Vec::new(),
            ChartSpec::Bar { x, y } => vec![x, y],
            ChartSpec::Pie { values, labels } => vec![values, labels],
            ChartSpec::Map {
                latitude,
                longitude,
            } => vec![latitude, longitude],
        }
    }
}

/// A renderable Plotly payload: trace list plus layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

impl Figure {
    /// Serialize for the JS bridge: `{"data": [...], "layout": {...}}`.
    pub fn to_json(&self) -> String {
        json!({ "data": self.data, "layout": self.layout }).to_string()
    }
}

/// Build the figures for one cycle.
///
/// Only the Line branch can produce more or fewer than one figure: it emits
/// one chart per numeric selected column and silently skips the rest.
pub fn build_figures(
    table: &Table,
    selected_columns: &[String],
    spec: &ChartSpec,
) -> Result<Vec<Figure>, VizError> {
    for name in spec.bound_columns() {
        if table.column(name).is_none() {
            return Err(VizError::UnknownColumn(name.to_string()));
        }
    }

    match spec {
        ChartSpec::Line => Ok(line_figures(table, selected_columns)),
        ChartSpec::Bar { x, y } => Ok(vec![bar_figure(table, x, y)]),
        ChartSpec::Pie { values, labels } => Ok(vec![pie_figure(table, values, labels)]),
        ChartSpec::Map {
            latitude,
            longitude,
        } => Ok(vec![map_figure(table, latitude, longitude)?]),
    }
}

/// One line chart per numeric selected column, plotted against the row index.
/// Non-numeric selected columns produce no chart and no error.
fn line_figures(table: &Table, selected_columns: &[String]) -> Vec<Figure> {
    selected_columns
        .iter()
        .filter_map(|name| {
            let data = table.column(name)?;
            if !data.is_numeric() {
                return None;
            }
            let x: Vec<Value> = (0..data.len()).map(|i| json!(i)).collect();
            Some(Figure {
                data: vec![json!({
                    "type": "scatter",
                    "mode": "lines",
                    "name": name,
                    "x": x,
                    "y": data.values_json(),
                })],
                layout: json!({ "title": { "text": format!("{name} Line Chart") } }),
            })
        })
        .collect()
}

/// Bar chart of y against x. Any column type is permitted for either axis.
fn bar_figure(table: &Table, x: &str, y: &str) -> Figure {
    let x_values = table.column(x).map(|c| c.values_json()).unwrap_or_default();
    let y_values = table.column(y).map(|c| c.values_json()).unwrap_or_default();
    Figure {
        data: vec![json!({
            "type": "bar",
            "x": x_values,
            "y": y_values,
        })],
        layout: json!({ "title": { "text": format!("Bar Chart: {x} vs. {y}") } }),
    }
}

/// Pie chart of values grouped by labels. The values column is handed to the
/// chart library as-is, with no numeric validation.
fn pie_figure(table: &Table, values: &str, labels: &str) -> Figure {
    let value_list = table
        .column(values)
        .map(|c| c.values_json())
        .unwrap_or_default();
    let label_list = table
        .column(labels)
        .map(|c| c.values_json())
        .unwrap_or_default();
    Figure {
        data: vec![json!({
            "type": "pie",
            "values": value_list,
            "labels": label_list,
        })],
        layout: json!({ "title": { "text": format!("Pie Chart: {values} by {labels}") } }),
    }
}

/// Scatter map with one marker per row, centered on the arithmetic mean of
/// the latitude and longitude columns.
fn map_figure(table: &Table, latitude: &str, longitude: &str) -> Result<Figure, VizError> {
    // column existence is checked by build_figures
    let lat = table
        .column(latitude)
        .ok_or_else(|| VizError::UnknownColumn(latitude.to_string()))?
        .coerce_numeric()?;
    let lon = table
        .column(longitude)
        .ok_or_else(|| VizError::UnknownColumn(longitude.to_string()))?
        .coerce_numeric()?;

    let center_lat = mean(&lat)
        .ok_or_else(|| VizError::Chart(format!("column '{latitude}' has no numeric values")))?;
    let center_lon = mean(&lon)
        .ok_or_else(|| VizError::Chart(format!("column '{longitude}' has no numeric values")))?;

    let coords_json = |values: &[f64]| -> Vec<Value> {
        values
            .iter()
            .map(|v| if v.is_finite() { json!(v) } else { Value::Null })
            .collect()
    };
    let hover_text: Vec<Value> = (0..lat.len()).map(|i| json!(i.to_string())).collect();

    Ok(Figure {
        data: vec![json!({
            "type": "scattermapbox",
            "lat": coords_json(&lat),
            "lon": coords_json(&lon),
            "mode": "markers",
            "marker": { "size": 9, "opacity": 0.6 },
            "text": hover_text,
        })],
        layout: json!({
            "hovermode": "closest",
            "mapbox": {
                "style": "open-street-map",
                "center": { "lat": center_lat, "lon": center_lon },
                "zoom": 10,
            },
        }),
    })
}

/// Arithmetic mean over the finite values, or None if there are none.
fn mean(values: &[f64]) -> Option<f64> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        None
    } else {
        Some(finite.iter().sum::<f64>() / finite.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn sample_table() -> Table {
        Table::from_rows(
            owned(&["amount", "label", "lat", "lon"]),
            vec![
                owned(&["1", "north", "10.0", "20.0"]),
                owned(&["2", "south", "20.0", "30.0"]),
                owned(&["3", "east", "30.0", "40.0"]),
            ],
        )
    }

    #[test]
    fn line_skips_non_numeric_columns_silently() {
        let table = sample_table();
        let figures = build_figures(
            &table,
            &owned(&["amount", "label"]),
            &ChartSpec::Line,
        )
        .unwrap();
        assert_eq!(figures.len(), 1, "only the numeric column charts");
        assert_eq!(
            figures[0].layout["title"]["text"],
            json!("amount Line Chart")
        );
    }

    #[test]
    fn line_with_only_text_columns_builds_nothing() {
        let table = sample_table();
        let figures = build_figures(&table, &owned(&["label"]), &ChartSpec::Line).unwrap();
        assert!(figures.is_empty());
    }

    #[test]
    fn line_x_is_the_row_index() {
        let table = sample_table();
        let figures = build_figures(&table, &owned(&["amount"]), &ChartSpec::Line).unwrap();
        assert_eq!(figures[0].data[0]["x"], json!([0, 1, 2]));
    }

    #[test]
    fn bar_accepts_any_column_types() {
        let table = sample_table();
        let spec = ChartSpec::Bar {
            x: "label".to_string(),
            y: "amount".to_string(),
        };
        let figures = build_figures(&table, &owned(&["label", "amount"]), &spec).unwrap();
        assert_eq!(figures.len(), 1);
        assert_eq!(
            figures[0].layout["title"]["text"],
            json!("Bar Chart: label vs. amount")
        );
        assert_eq!(figures[0].data[0]["x"], json!(["north", "south", "east"]));
    }

    #[test]
    fn pie_performs_no_numeric_validation() {
        let table = sample_table();
        let spec = ChartSpec::Pie {
            values: "label".to_string(),
            labels: "label".to_string(),
        };
        let figures = build_figures(&table, &owned(&["label"]), &spec).unwrap();
        assert_eq!(
            figures[0].layout["title"]["text"],
            json!("Pie Chart: label by label")
        );
    }

    #[test]
    fn map_center_is_the_column_mean() {
        let table = sample_table();
        let spec = ChartSpec::Map {
            latitude: "lat".to_string(),
            longitude: "lon".to_string(),
        };
        let figures = build_figures(&table, &owned(&["amount"]), &spec).unwrap();
        let center = &figures[0].layout["mapbox"]["center"];
        assert_eq!(center["lat"], json!(20.0));
        assert_eq!(center["lon"], json!(30.0));
    }

    #[test]
    fn map_center_is_independent_of_row_order() {
        let reordered = Table::from_rows(
            owned(&["lat", "lon"]),
            vec![
                owned(&["30.0", "40.0"]),
                owned(&["10.0", "20.0"]),
                owned(&["20.0", "30.0"]),
            ],
        );
        let spec = ChartSpec::Map {
            latitude: "lat".to_string(),
            longitude: "lon".to_string(),
        };
        let figures = build_figures(&reordered, &owned(&["lat"]), &spec).unwrap();
        let center = &figures[0].layout["mapbox"]["center"];
        assert_eq!(center["lat"], json!(20.0));
        assert_eq!(center["lon"], json!(30.0));
    }

    #[test]
    fn map_marker_and_zoom_are_fixed() {
        let table = sample_table();
        let spec = ChartSpec::Map {
            latitude: "lat".to_string(),
            longitude: "lon".to_string(),
        };
        let figures = build_figures(&table, &owned(&["amount"]), &spec).unwrap();
        let trace = &figures[0].data[0];
        assert_eq!(trace["marker"]["size"], json!(9));
        assert_eq!(trace["marker"]["opacity"], json!(0.6));
        assert_eq!(trace["text"], json!(["0", "1", "2"]));
        let layout = &figures[0].layout;
        assert_eq!(layout["mapbox"]["zoom"], json!(10));
        assert_eq!(layout["mapbox"]["style"], json!("open-street-map"));
    }

    #[test]
    fn map_with_text_coordinates_is_a_chart_error() {
        let table = sample_table();
        let spec = ChartSpec::Map {
            latitude: "label".to_string(),
            longitude: "lon".to_string(),
        };
        let err = build_figures(&table, &owned(&["label"]), &spec).unwrap_err();
        assert!(matches!(err, VizError::Chart(_)));
    }

    #[test]
    fn bound_columns_must_exist() {
        let table = sample_table();
        let spec = ChartSpec::Bar {
            x: "missing".to_string(),
            y: "amount".to_string(),
        };
        let err = build_figures(&table, &owned(&["amount"]), &spec).unwrap_err();
        assert!(matches!(err, VizError::UnknownColumn(_)));
    }

    #[test]
    fn kind_labels_round_trip() {
        for kind in ChartKind::ALL {
            assert_eq!(ChartKind::from_label(kind.label()), Some(kind));
        }
        assert_eq!(ChartKind::from_label("Radar Chart"), None);
    }
}
