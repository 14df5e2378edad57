//! Dense string table

use std::fmt;
use std::ops::Index;

/// A rectangular table of strings, row-major
///
/// Rectangularity holds by construction: rows enter the table already padded
/// to the shared width, and the accessors never expose a ragged view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextTable {
    /// Row-major cell storage, `rows * cols` entries
    cells: Vec<String>,
    /// Number of rows
    rows: usize,
    /// Number of columns per row
    cols: usize,
}

impl TextTable {
    /// Create an empty table (0 rows, 0 columns)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from per-row string vectors
    ///
    /// Short rows are padded with empty strings to the widest row.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let num_rows = rows.len();
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut cells = Vec::with_capacity(num_rows * cols);
        for mut row in rows {
            row.resize(cols, String::new());
            cells.append(&mut row);
        }
        Self {
            cells,
            rows: num_rows,
            cols,
        }
    }

    /// Build a table from pre-flattened row-major storage
    pub(crate) fn from_row_major(cells: Vec<String>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { cells, rows, cols }
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Get a cell, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col].as_str())
        } else {
            None
        }
    }

    /// Get one row as a slice, or `None` when out of bounds
    pub fn row(&self, index: usize) -> Option<&[String]> {
        if index < self.rows {
            Some(&self.cells[index * self.cols..(index + 1) * self.cols])
        } else {
            None
        }
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        (0..self.rows).map(move |i| &self.cells[i * self.cols..(i + 1) * self.cols])
    }

    /// Iterate over all cells as `(row, col, text)`
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &str)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, s)| (i / cols, i % cols, s.as_str()))
    }

    /// Consume the table into per-row string vectors
    pub fn into_rows(self) -> Vec<Vec<String>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        let mut rows = Vec::with_capacity(self.rows);
        let mut cells = self.cells.into_iter();
        for _ in 0..self.rows {
            rows.push(cells.by_ref().take(self.cols).collect());
        }
        rows
    }
}

impl Index<(usize, usize)> for TextTable {
    type Output = str;

    fn index(&self, (row, col): (usize, usize)) -> &str {
        match self.get(row, col) {
            Some(s) => s,
            None => panic!(
                "table index ({}, {}) out of bounds ({}x{})",
                row, col, self.rows, self.cols
            ),
        }
    }
}

impl fmt::Display for TextTable {
    /// Tab-separated rows, one line per row
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
