//! The grid data model.
//!
//! `GridModel` holds the rectangular cell data plus the user-entered axis
//! labels. It knows nothing about the view; its size accessors include the
//! header band so they can be compared directly with the view's row and
//! column counts.

use crate::error::{GridError, Result};
use crate::value::CellValue;

/// Rectangular cell data with optional axis labels.
///
/// Data coordinates are zero-based and exclude the header band. Data cell
/// `(row, column)` is shown at view position `(row + 1, column + 1)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridModel {
    data: Vec<Vec<CellValue>>,
    row_labels: Vec<Option<CellValue>>,
    col_labels: Vec<Option<CellValue>>,
}

impl GridModel {
    /// Creates a model from row-major data.
    ///
    /// Fails with [`GridError::RaggedData`] unless every row has the length
    /// of the first.
    pub fn new(data: Vec<Vec<CellValue>>) -> Result<Self> {
        Self::validate(&data)?;
        Ok(Self {
            data,
            row_labels: Vec::new(),
            col_labels: Vec::new(),
        })
    }

    fn validate(data: &[Vec<CellValue>]) -> Result<()> {
        let Some(first) = data.first() else {
            return Ok(());
        };
        let expected = first.len();
        match data.iter().position(|row| row.len() != expected) {
            Some(row) => Err(GridError::ragged(row, expected, data[row].len())),
            None => Ok(()),
        }
    }

    /// Number of rows including the header row. Never less than 1.
    pub fn rows(&self) -> usize {
        self.data.len() + 1
    }

    /// Number of columns including the header column.
    ///
    /// Exactly 1 when there are no data rows, leaving only the corner cell.
    pub fn cols(&self) -> usize {
        self.data.first().map_or(1, |row| row.len() + 1)
    }

    /// Number of data rows.
    pub fn data_rows(&self) -> usize {
        self.data.len()
    }

    /// Number of data columns.
    pub fn data_cols(&self) -> usize {
        self.cols() - 1
    }

    /// Returns `true` if there is no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The cell data, row-major.
    pub fn data(&self) -> &[Vec<CellValue>] {
        &self.data
    }

    /// The value at data position `(row, column)`.
    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.data.get(row).and_then(|r| r.get(column))
    }

    /// Overwrites the value at data position `(row, column)`.
    pub fn set_cell(&mut self, row: usize, column: usize, value: CellValue) -> Result<()> {
        let (rows, columns) = (self.data_rows(), self.data_cols());
        match self.data.get_mut(row).and_then(|r| r.get_mut(column)) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(GridError::OutOfBounds {
                row,
                column,
                rows,
                columns,
            }),
        }
    }

    /// Replaces the data wholesale. Labels are kept.
    pub fn replace_data(&mut self, data: Vec<Vec<CellValue>>) -> Result<()> {
        Self::validate(&data)?;
        self.data = data;
        Ok(())
    }

    /// Labels entered in the header row, indexed by view column.
    pub fn row_labels(&self) -> &[Option<CellValue>] {
        &self.row_labels
    }

    /// Labels entered in the header column, indexed by view row.
    pub fn col_labels(&self) -> &[Option<CellValue>] {
        &self.col_labels
    }

    /// The header-row label stored at `index`, if any.
    pub fn row_label(&self, index: usize) -> Option<&CellValue> {
        self.row_labels.get(index).and_then(Option::as_ref)
    }

    /// The header-column label stored at `index`, if any.
    pub fn col_label(&self, index: usize) -> Option<&CellValue> {
        self.col_labels.get(index).and_then(Option::as_ref)
    }

    /// Stores a header-row label, padding the sequence with empty slots.
    pub fn set_row_label(&mut self, index: usize, value: CellValue) {
        set_padded(&mut self.row_labels, index, value);
    }

    /// Stores a header-column label, padding the sequence with empty slots.
    pub fn set_col_label(&mut self, index: usize, value: CellValue) {
        set_padded(&mut self.col_labels, index, value);
    }
}

fn set_padded(labels: &mut Vec<Option<CellValue>>, index: usize, value: CellValue) {
    if labels.len() <= index {
        labels.resize(index + 1, None);
    }
    labels[index] = Some(value);
}
