use std::path::Path;

use super::error::{DataError, DataResult};
use super::model::Dataset;
use super::parser::parse;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a dataset from a `.csv` file.
///
/// The file is read fully into memory before parsing. Files larger than
/// `max_size_mb` are rejected without being read.
pub fn load_file(path: &Path, max_size_mb: u64) -> DataResult<Dataset> {
    check_extension(path)?;

    let size_mb = std::fs::metadata(path)?.len() / (1024 * 1024);
    if size_mb > max_size_mb {
        return Err(DataError::TooLarge {
            size_mb,
            max_mb: max_size_mb,
        });
    }

    let text = std::fs::read_to_string(path)?;
    Ok(parse(&text)?)
}

/// Only `.csv` files are accepted (case-insensitive).
pub fn check_extension(path: &Path) -> DataResult<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => Ok(()),
        other => Err(DataError::UnsupportedExtension {
            extension: other.to_string(),
        }),
    }
}
