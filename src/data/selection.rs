use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::SelectionError;
use super::inference::{is_numeric_column, numeric_columns};
use super::model::Dataset;

// ---------------------------------------------------------------------------
// Chart kind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Bar, ChartKind::Line];
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Bar => write!(f, "Bar Chart"),
            ChartKind::Line => write!(f, "Line Chart"),
        }
    }
}

// ---------------------------------------------------------------------------
// Chart selection
// ---------------------------------------------------------------------------

/// User-chosen axes and chart kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSelection {
    /// X column, a member of the dataset's columns.
    pub x: Option<String>,
    /// Y columns, each numeric, in selection order without duplicates.
    pub y: Vec<String>,
    pub kind: ChartKind,
}

impl ChartSelection {
    /// A selection can be charted once X is set and Y is non-empty.
    pub fn is_renderable(&self) -> bool {
        self.x.is_some() && !self.y.is_empty()
    }

    /// Chart subtitle, e.g. `"revenue, profit by month"`.
    pub fn subtitle(&self) -> Option<String> {
        let x = self.x.as_deref()?;
        if self.y.is_empty() {
            return None;
        }
        Some(format!("{} by {x}", self.y.join(", ")))
    }
}

// ---------------------------------------------------------------------------
// Selection state: dataset + selection, replaced together
// ---------------------------------------------------------------------------

/// Owns the current dataset and the selection derived from it.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    dataset: Dataset,
    selection: ChartSelection,
}

impl SelectionState {
    pub fn new(kind: ChartKind) -> Self {
        SelectionState {
            dataset: Dataset::empty(),
            selection: ChartSelection {
                kind,
                ..ChartSelection::default()
            },
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selection(&self) -> &ChartSelection {
        &self.selection
    }

    /// Numeric columns of the current dataset.
    pub fn numeric_columns(&self) -> Vec<String> {
        numeric_columns(&self.dataset)
    }

    /// Replace the dataset and reset X/Y to their defaults: X is the first
    /// column, Y the first numeric column. The chart kind is kept.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.selection.x = dataset.columns().first().map(str::to_string);
        self.selection.y = numeric_columns(&dataset).into_iter().take(1).collect();
        self.dataset = dataset;
    }

    /// Select the X column. Unknown columns leave the selection unchanged.
    pub fn set_x(&mut self, column: &str) -> Result<(), SelectionError> {
        if !self.dataset.columns().contains(column) {
            return Err(SelectionError::UnknownColumn {
                column: column.to_string(),
            });
        }
        self.selection.x = Some(column.to_string());
        Ok(())
    }

    /// Select the Y columns. Members that are not numeric columns are
    /// dropped; repeats keep their first position.
    pub fn set_y<I, S>(&mut self, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut y: Vec<String> = Vec::new();
        for col in columns {
            let col = col.as_ref();
            if !is_numeric_column(&self.dataset, col) {
                log::debug!("dropping non-numeric Y column '{col}'");
                continue;
            }
            if !y.iter().any(|c| c == col) {
                y.push(col.to_string());
            }
        }
        self.selection.y = y;
    }

    /// Add or remove a single Y column, keeping the others.
    pub fn toggle_y(&mut self, column: &str) {
        let mut y = self.selection.y.clone();
        if let Some(pos) = y.iter().position(|c| c == column) {
            y.remove(pos);
        } else {
            y.push(column.to_string());
        }
        self.set_y(y);
    }

    pub fn set_kind(&mut self, kind: ChartKind) {
        self.selection.kind = kind;
    }

    /// Drop the dataset and reset X and Y.
    pub fn clear(&mut self) {
        self.dataset = Dataset::empty();
        self.selection.x = None;
        self.selection.y.clear();
    }
}
