use serde::Serialize;
use std::ops::Index;

use crate::error::{NumCsvError, Result};

/// A dense, row-major table of `f64` values.
///
/// Values live in one flat buffer of `rows * cols` entries, so every row has
/// the same length by construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Table {
    /// A zero-filled table.
    pub fn zeros(rows: usize, cols: usize) -> Table {
        Table {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Builds a table from row vectors.
    ///
    /// Every row must be as long as the first; a ragged row is reported as a
    /// `FieldCount` error whose `line` is the 1-based row number.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Table> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(NumCsvError::FieldCount {
                    line: i + 1,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Table {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Callers guarantee `data.len() == rows * cols`.
    pub(crate) fn from_flat(rows: usize, cols: usize, data: Vec<f64>) -> Table {
        debug_assert_eq!(data.len(), rows * cols);
        Table { rows, cols, data }
    }

    /// `(rows, cols)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Panics if `(i, j)` is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[self.offset(i, j)]
    }

    /// Panics if `(i, j)` is out of bounds.
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let k = self.offset(i, j);
        self.data[k] = value;
    }

    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows, "row {i} out of bounds for {} rows", self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Copies column `j` out.
    pub fn column(&self, j: usize) -> Vec<f64> {
        assert!(j < self.cols, "column {j} out of bounds for {} columns", self.cols);
        self.rows_iter().map(|row| row[j]).collect()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows_iter().map(<[f64]>::to_vec).collect()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of bounds for {}x{} table",
            self.rows,
            self.cols
        );
        i * self.cols + j
    }
}

impl Default for Table {
    fn default() -> Self {
        Table { rows: 0, cols: 0, data: vec![] }
    }
}

impl Index<(usize, usize)> for Table {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[self.offset(i, j)]
    }
}
