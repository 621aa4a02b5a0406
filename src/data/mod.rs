/// Data layer: parsing, type inference, selection and chart projection.
///
/// Architecture:
/// ```text
///      .csv text
///        │
///        ▼
///   ┌──────────┐
///   │  parser   │  split lines/fields → Dataset {columns, rows}
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ inference  │  first-row numeric columns
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ selection  │  X column, Y columns, chart kind
///   └───────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ projection  │  rows → {name, y1, y2, ..} records
///   └────────────┘
/// ```

pub mod error;
pub mod inference;
pub mod loader;
pub mod model;
pub mod parser;
pub mod projection;
pub mod selection;

pub use error::{DataError, DataResult, FormatError, ProjectionError, SelectionError};
pub use inference::numeric_columns;
pub use model::{CellValue, ColumnSet, Dataset, Row, TableColumn, table_columns};
pub use parser::parse;
pub use projection::{LABEL_KEY, ProjectedRecord, SeriesSpec, project, series_specs};
pub use selection::{ChartKind, ChartSelection, SelectionState};
