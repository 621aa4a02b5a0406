//! CSV text parsing
//!
//! Splits purely on the delimiter: a comma inside quotes still separates
//! fields. Surrounding quote characters are stripped after the split.
//! Only the outer whitespace of the text is trimmed, so an interior blank
//! line is a one-field row and goes through the field-count check.

use super::error::FormatError;
use super::model::{CellValue, ColumnSet, Dataset, Row};

/// Field separator for uploaded files.
pub const DELIMITER: char = ',';

/// Parse CSV text into a [`Dataset`].
///
/// The first line is the header. Each following line must have exactly as
/// many fields as the header. Every field is stored as a number when it
/// parses as a finite `f64`, otherwise as its trimmed text.
pub fn parse(text: &str) -> Result<Dataset, FormatError> {
    let mut lines = text.trim().split('\n');

    let header = lines.next().unwrap_or_default();
    let names: Vec<String> = split_fields(header)
        .map(|f| clean_field(f).to_string())
        .collect();
    let columns =
        ColumnSet::new(names).map_err(|name| FormatError::DuplicateColumn { name })?;

    let mut rows = Vec::new();
    for (index, line) in lines.enumerate() {
        // header is row 1, first data row is row 2
        let row_no = index + 2;
        rows.push(parse_row(&columns, line, row_no)?);
    }

    if rows.is_empty() {
        return Err(FormatError::MissingDataRows);
    }

    log::debug!("parsed {} rows x {} columns", rows.len(), columns.len());
    Ok(Dataset::new(columns, rows))
}

fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(DELIMITER)
}

fn parse_row(columns: &ColumnSet, line: &str, row_no: usize) -> Result<Row, FormatError> {
    let fields: Vec<&str> = split_fields(line).collect();
    if fields.len() != columns.len() {
        return Err(FormatError::FieldCount {
            row: row_no,
            found: fields.len(),
            expected: columns.len(),
        });
    }

    Ok(columns
        .iter()
        .zip(fields)
        .map(|(name, field)| (name, parse_value(clean_field(field))))
        .collect())
}

/// Trim whitespace (including a `\r` line ending), drop surrounding quote
/// characters, then trim whatever padding sat inside the quotes.
fn clean_field(field: &str) -> &str {
    field.trim().trim_matches('"').trim()
}

/// Locale-invariant numeric parse; anything non-finite stays text.
fn parse_value(field: &str) -> CellValue {
    match parse_number(field) {
        Some(v) => CellValue::Number(v),
        None => CellValue::Text(field.to_string()),
    }
}

/// Decimal with optional sign and exponent. `inf` and `NaN` are rejected.
pub fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
