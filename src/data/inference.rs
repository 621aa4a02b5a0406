use super::model::Dataset;

/// Columns whose value in the first data row is a number, in header order.
///
/// Only the first row is inspected. A column whose first value is text and
/// the rest numbers is not numeric, and the reverse is numeric; projection
/// reports the latter case when it hits a text value.
pub fn numeric_columns(dataset: &Dataset) -> Vec<String> {
    let Some(first) = dataset.rows().first() else {
        return Vec::new();
    };
    dataset
        .columns()
        .iter()
        .filter(|col| first.get(col).is_some_and(|v| v.is_number()))
        .map(str::to_string)
        .collect()
}

/// Whether `column` is classified numeric by [`numeric_columns`].
pub fn is_numeric_column(dataset: &Dataset, column: &str) -> bool {
    dataset
        .rows()
        .first()
        .and_then(|row| row.get(column))
        .is_some_and(|v| v.is_number())
}
