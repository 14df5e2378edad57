//! Row type

use std::collections::BTreeMap;

use crate::cell::{Cell, CellValue};

/// Sparse, ordered cell storage for a single row
///
/// A row can exist with no cells at all: creating a row marks it as touched
/// without giving it content. [`Row::last_cell_index`] is `None` for such a
/// row, which matters for used-range accounting.
#[derive(Debug, Clone, Default)]
pub struct Row {
    /// Column index → cell
    cells: BTreeMap<u16, Cell>,
}

impl Row {
    /// Create a new empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cell by column index
    pub fn cell(&self, col: u16) -> Option<&Cell> {
        self.cells.get(&col)
    }

    /// Get a mutable cell by column index
    pub fn cell_mut(&mut self, col: u16) -> Option<&mut Cell> {
        self.cells.get_mut(&col)
    }

    /// Get the cell at a column index, creating a blank one if absent
    pub fn cell_or_create(&mut self, col: u16) -> &mut Cell {
        self.cells.entry(col).or_default()
    }

    /// Set a cell at a column index
    pub fn set_cell(&mut self, col: u16, cell: Cell) {
        self.cells.insert(col, cell);
    }

    /// Set a cell value at a column index (keeping any existing format)
    pub fn set_value<V: Into<CellValue>>(&mut self, col: u16, value: V) {
        self.cell_or_create(col).value = value.into();
    }

    /// Remove a cell, returning it if present
    ///
    /// The row itself stays alive even when its last cell is removed.
    pub fn remove_cell(&mut self, col: u16) -> Option<Cell> {
        self.cells.remove(&col)
    }

    /// Highest column index holding a cell, or `None` for a cell-less row
    pub fn last_cell_index(&self) -> Option<u16> {
        self.cells.keys().next_back().copied()
    }

    /// Number of cells in the row
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over cells in column order
    pub fn iter(&self) -> impl Iterator<Item = (u16, &Cell)> {
        self.cells.iter().map(|(&col, cell)| (col, cell))
    }

    /// Remove all cells
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}
