//! Property-based tests for parsing and projection.

use proptest::prelude::*;
use rusty_chart::data::{
    ChartKind, ChartSelection, Dataset, FormatError, numeric_columns, parse, project,
};

fn column_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z][a-z0-9_]{0,6}", 1..6)
        .prop_map(|set| set.into_iter().collect())
}

fn field() -> impl Strategy<Value = String> {
    prop_oneof![
        (-1.0e6f64..1.0e6).prop_map(|v| v.to_string()),
        "[A-Za-z][A-Za-z ]{0,8}[A-Za-z]",
    ]
}

/// Header plus `rows` lines of `width` fields each.
fn csv_text() -> impl Strategy<Value = (Vec<String>, Vec<Vec<String>>)> {
    column_names().prop_flat_map(|names| {
        let width = names.len();
        let rows = prop::collection::vec(prop::collection::vec(field(), width), 1..20);
        (Just(names), rows)
    })
}

fn render(names: &[String], rows: &[Vec<String>]) -> String {
    let mut lines = vec![names.join(",")];
    lines.extend(rows.iter().map(|r| r.join(",")));
    lines.join("\n")
}

fn selection_for(ds: &Dataset, column: &str) -> ChartSelection {
    ChartSelection {
        x: ds.columns().first().map(str::to_string),
        y: vec![column.to_string()],
        kind: ChartKind::Line,
    }
}

proptest! {
    /// Property: well-formed text keeps the header and row count
    #[test]
    fn prop_shape_preserved((names, rows) in csv_text()) {
        let ds = parse(&render(&names, &rows)).unwrap();
        prop_assert_eq!(ds.columns().as_slice(), names.as_slice());
        prop_assert_eq!(ds.len(), rows.len());
    }

    /// Property: numeric columns are exactly those whose first value parsed
    #[test]
    fn prop_numeric_columns_match_first_row((names, rows) in csv_text()) {
        let ds = parse(&render(&names, &rows)).unwrap();
        let expected: Vec<String> = names
            .iter()
            .zip(&rows[0])
            .filter(|(_, v)| v.parse::<f64>().is_ok_and(f64::is_finite))
            .map(|(n, _)| n.clone())
            .collect();
        prop_assert_eq!(numeric_columns(&ds), expected);
    }

    /// Property: a short or long row is reported with its 1-based line number
    #[test]
    fn prop_field_count_row_index(
        (names, rows) in csv_text(),
        bad in any::<prop::sample::Index>(),
        extra in 1usize..3,
    ) {
        let mut rows = rows;
        let i = bad.index(rows.len());
        for _ in 0..extra {
            rows[i].push("1".to_string());
        }
        let err = parse(&render(&names, &rows)).unwrap_err();
        prop_assert_eq!(err, FormatError::FieldCount {
            row: i + 2,
            found: names.len() + extra,
            expected: names.len(),
        });
    }

    /// Property: zero or one line never parses
    #[test]
    fn prop_header_only_fails(names in column_names()) {
        prop_assert_eq!(parse(&names.join(",")).unwrap_err(), FormatError::MissingDataRows);
    }

    /// Property: unrenderable selections project to nothing
    #[test]
    fn prop_unrenderable_is_empty((names, rows) in csv_text(), drop_x in any::<bool>()) {
        let ds = parse(&render(&names, &rows)).unwrap();
        let selection = if drop_x {
            ChartSelection { x: None, y: names.clone(), kind: ChartKind::Bar }
        } else {
            ChartSelection { x: Some(names[0].clone()), y: Vec::new(), kind: ChartKind::Bar }
        };
        prop_assert!(project(&ds, &selection).unwrap().is_empty());
    }

    /// Property: projection keeps row order
    #[test]
    fn prop_projection_preserves_order(values in prop::collection::vec(-1.0e6f64..1.0e6, 1..30)) {
        let mut text = String::from("idx,value");
        for (i, v) in values.iter().enumerate() {
            text.push_str(&format!("\n{i},{v}"));
        }
        let ds = parse(&text).unwrap();
        let records = project(&ds, &selection_for(&ds, "value")).unwrap();

        prop_assert_eq!(records.len(), values.len());
        for (i, (record, v)) in records.iter().zip(&values).enumerate() {
            prop_assert_eq!(&record.label, &i.to_string());
            prop_assert_eq!(record.value("value"), Some(*v));
        }
    }
}

proptest! {
    /// Property: an interior blank line counts as a row, so numbering never drifts
    #[test]
    fn prop_blank_line_is_counted(
        (names, rows) in csv_text(),
        at in any::<prop::sample::Index>(),
    ) {
        prop_assume!(names.len() > 1);
        let i = at.index(rows.len());
        let mut lines = vec![names.join(",")];
        lines.extend(rows.iter().map(|r| r.join(",")));
        // before data row `i`, so never the last line
        lines.insert(i + 1, String::new());

        let err = parse(&lines.join("\n")).unwrap_err();
        prop_assert_eq!(err, FormatError::FieldCount {
            row: i + 2,
            found: 1,
            expected: names.len(),
        });
    }
}
