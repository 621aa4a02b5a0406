//! Worked examples for the parse → infer → project pipeline.

use rusty_chart::data::{
    CellValue, ChartKind, ChartSelection, FormatError, SelectionState, numeric_columns, parse,
    project,
};

#[test]
fn test_example_dataset_shape() {
    let ds = parse("a,b\n1,x\n2,y\n3,z").unwrap();

    assert_eq!(ds.columns().as_slice(), &["a", "b"]);
    let expected = [(1.0, "x"), (2.0, "y"), (3.0, "z")];
    for (row, (a, b)) in ds.rows().iter().zip(expected) {
        assert_eq!(row.get("a"), Some(&CellValue::Number(a)));
        assert_eq!(row.get("b"), Some(&CellValue::Text(b.to_string())));
    }
    assert_eq!(numeric_columns(&ds), vec!["a"]);
}

#[test]
fn test_example_field_count_error() {
    assert_eq!(
        parse("a,b\n1,2,3").unwrap_err(),
        FormatError::FieldCount {
            row: 2,
            found: 3,
            expected: 2
        }
    );
}

#[test]
fn test_example_projection() {
    let ds = parse("a,b\n1,x\n2,y\n3,z").unwrap();
    let selection = ChartSelection {
        x: Some("a".into()),
        y: vec!["a".into()],
        kind: ChartKind::Bar,
    };

    let records = project(&ds, &selection).unwrap();
    let json = serde_json::to_value(&records).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"name": "1", "a": 1.0},
            {"name": "2", "a": 2.0},
            {"name": "3", "a": 3.0},
        ])
    );
}

#[test]
fn test_selection_state_drives_projection() {
    let mut state = SelectionState::default();
    state.set_dataset(parse("month,revenue,profit\nJan,4000,2400\nFeb,3000,1398").unwrap());
    state.set_y(["profit"]);

    let records = project(state.dataset(), state.selection()).unwrap();
    assert_eq!(records[0].label, "Jan");
    assert_eq!(records[0].value("profit"), Some(2400.0));
    assert_eq!(records[1].value("revenue"), None);

    state.clear();
    assert!(project(state.dataset(), state.selection()).unwrap().is_empty());
}

#[test]
fn test_first_row_inference_limitation_surfaces_in_projection() {
    let mut state = SelectionState::default();
    state.set_dataset(parse("id,score\n1,10\n2,absent\n3,30").unwrap());
    assert_eq!(state.selection().y, vec!["id"]);

    state.set_y(["score"]);
    let err = project(state.dataset(), state.selection()).unwrap_err();
    assert_eq!(err.to_string(), "Column 'score' holds non-numeric value 'absent' in row 3");
}
