//! Chart projection
//!
//! Reshapes dataset rows into records keyed by a fixed label field plus one
//! numeric entry per selected Y column. Rows keep their original order.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::error::ProjectionError;
use super::model::{CellValue, Dataset};
use super::selection::ChartSelection;
use crate::color::DEFAULT_CHART_COLORS;

/// Key under which a record's X label is published.
pub const LABEL_KEY: &str = "name";

/// One chart-ready row.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedRecord {
    /// String form of the row's X value.
    pub label: String,
    /// `(y_column, value)` in selection order.
    pub values: Vec<(String, f64)>,
}

impl ProjectedRecord {
    pub fn value(&self, column: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, v)| *v)
    }
}

impl Serialize for ProjectedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        map.serialize_entry(LABEL_KEY, &self.label)?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Describes one series for the chart adapters.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SeriesSpec {
    pub column_name: String,
    pub color_token: String,
    pub display_name: String,
}

/// Project `dataset` onto `selection`.
///
/// Returns an empty list when the selection is not renderable. Fails when a
/// selected Y column holds text in any row.
pub fn project(
    dataset: &Dataset,
    selection: &ChartSelection,
) -> Result<Vec<ProjectedRecord>, ProjectionError> {
    let Some(x) = selection.x.as_deref() else {
        return Ok(Vec::new());
    };
    if selection.y.is_empty() {
        return Ok(Vec::new());
    }
    if let Some(col) = selection.y.iter().find(|c| c.as_str() == LABEL_KEY) {
        return Err(ProjectionError::ReservedColumn { column: col.clone() });
    }

    dataset
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let label = row.get(x).map(CellValue::to_string).unwrap_or_default();
            let values = selection
                .y
                .iter()
                .map(|col| match row.get(col) {
                    Some(CellValue::Number(v)) => Ok((col.clone(), *v)),
                    other => Err(ProjectionError::NonNumeric {
                        column: col.clone(),
                        // header is row 1
                        row: index + 2,
                        value: other.map(CellValue::to_string).unwrap_or_default(),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ProjectedRecord { label, values })
        })
        .collect()
}

/// One [`SeriesSpec`] per Y column, cycling through `palette`.
pub fn series_specs(selection: &ChartSelection, palette: &[String]) -> Vec<SeriesSpec> {
    selection
        .y
        .iter()
        .enumerate()
        .map(|(i, col)| {
            let color_token = if palette.is_empty() {
                DEFAULT_CHART_COLORS[i % DEFAULT_CHART_COLORS.len()].to_string()
            } else {
                palette[i % palette.len()].clone()
            };
            SeriesSpec {
                column_name: col.clone(),
                color_token,
                display_name: col.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parser::parse;
    use crate::data::selection::ChartKind;

    fn selection(x: Option<&str>, y: &[&str]) -> ChartSelection {
        ChartSelection {
            x: x.map(str::to_string),
            y: y.iter().map(|s| s.to_string()).collect(),
            kind: ChartKind::Bar,
        }
    }

    #[test]
    fn projects_label_and_values() {
        let ds = parse("a,b\n1,x\n2,y\n3,z").unwrap();
        let records = project(&ds, &selection(Some("a"), &["a"])).unwrap();

        let labels: Vec<&str> = records.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "2", "3"]);
        assert_eq!(records[2].value("a"), Some(3.0));
        assert_eq!(records[0].value("b"), None);
    }

    #[test]
    fn serializes_with_label_key_first() {
        let ds = parse("a,b\n1,x").unwrap();
        let records = project(&ds, &selection(Some("b"), &["a"])).unwrap();
        let json = serde_json::to_string(&records).unwrap();
        assert_eq!(json, r#"[{"name":"x","a":1.0}]"#);
    }

    #[test]
    fn not_renderable_projects_nothing() {
        let ds = parse("a,b\n1,2").unwrap();
        assert!(project(&ds, &selection(None, &["a"])).unwrap().is_empty());
        assert!(project(&ds, &selection(Some("a"), &[])).unwrap().is_empty());
    }

    #[test]
    fn text_in_numeric_column_fails() {
        let ds = parse("m,v\nJan,1\nFeb,n/a").unwrap();
        let err = project(&ds, &selection(Some("m"), &["v"])).unwrap_err();
        assert_eq!(
            err,
            ProjectionError::NonNumeric {
                column: "v".into(),
                row: 3,
                value: "n/a".into()
            }
        );
    }

    #[test]
    fn label_key_column_is_reserved() {
        let ds = parse("name,v\n1,2").unwrap();
        let err = project(&ds, &selection(Some("v"), &["name"])).unwrap_err();
        assert_eq!(err, ProjectionError::ReservedColumn { column: "name".into() });
    }

    #[test]
    fn series_cycle_through_palette() {
        let sel = selection(Some("m"), &["a", "b", "c"]);
        let palette = vec!["red".to_string(), "blue".to_string()];
        let specs = series_specs(&sel, &palette);
        let tokens: Vec<&str> = specs.iter().map(|s| s.color_token.as_str()).collect();
        assert_eq!(tokens, vec!["red", "blue", "red"]);
        assert_eq!(specs[1].display_name, "b");

        let specs = series_specs(&sel, &[]);
        assert_eq!(specs[0].color_token, DEFAULT_CHART_COLORS[0]);
    }
}
