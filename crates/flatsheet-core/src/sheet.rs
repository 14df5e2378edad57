//! Sheet type

use std::collections::BTreeMap;

use crate::cell::{Cell, CellValue};
use crate::date::DateSystem;
use crate::error::{Error, Result};
use crate::format::NumberFormat;
use crate::row::Row;
use crate::{MAX_COLS, MAX_ROWS};

/// A single sheet: sparse rows of cells plus the sheet-level settings the
/// model needs (name and date system)
///
/// Rows are touched-on-creation: a row created through [`Sheet::row_or_create`]
/// exists even while it holds no cells, and counts toward
/// [`Sheet::last_row_index`].
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    /// Sheet name
    name: String,
    /// Row index → row
    rows: BTreeMap<u32, Row>,
    /// Date system for interpreting date serials
    date_system: DateSystem,
}

impl Sheet {
    /// Create a new sheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
            date_system: DateSystem::default(),
        }
    }

    /// Create a new sheet with the given name and date system
    pub fn with_date_system<S: Into<String>>(name: S, date_system: DateSystem) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
            date_system,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// Get the date system
    pub fn date_system(&self) -> DateSystem {
        self.date_system
    }

    /// Set the date system
    pub fn set_date_system(&mut self, date_system: DateSystem) {
        self.date_system = date_system;
    }

    // === Row Access ===

    /// Get a row by index
    pub fn row(&self, index: u32) -> Option<&Row> {
        self.rows.get(&index)
    }

    /// Get a mutable row by index
    pub fn row_mut(&mut self, index: u32) -> Option<&mut Row> {
        self.rows.get_mut(&index)
    }

    /// Get the row at an index, creating an empty one if absent
    pub fn row_or_create(&mut self, index: u32) -> &mut Row {
        self.rows.entry(index).or_default()
    }

    /// Remove a row, returning it if present
    pub fn remove_row(&mut self, index: u32) -> Option<Row> {
        self.rows.remove(&index)
    }

    /// Highest row index that has been touched, or `None` for an empty sheet
    pub fn last_row_index(&self) -> Option<u32> {
        self.rows.keys().next_back().copied()
    }

    /// Number of touched rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if no row has ever been touched
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over touched rows in index order
    pub fn rows(&self) -> impl Iterator<Item = (u32, &Row)> {
        self.rows.iter().map(|(&index, row)| (index, row))
    }

    /// Remove all rows
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    // === Cell Access ===

    /// Get a cell by row and column indices
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&Cell> {
        self.rows.get(&row).and_then(|r| r.cell(col))
    }

    /// Get a cell value by indices (blank for absent cells)
    pub fn value_at(&self, row: u32, col: u16) -> CellValue {
        self.cell_at(row, col)
            .map(|c| c.value.clone())
            .unwrap_or(CellValue::Blank)
    }

    // === Cell Modification ===

    /// Set a cell value by row and column indices
    pub fn set_value_at<V: Into<CellValue>>(&mut self, row: u32, col: u16, value: V) -> Result<()> {
        self.validate_cell_position(row, col)?;
        self.row_or_create(row).set_value(col, value);
        Ok(())
    }

    /// Set a complete cell by row and column indices
    pub fn set_cell_at(&mut self, row: u32, col: u16, cell: Cell) -> Result<()> {
        self.validate_cell_position(row, col)?;
        self.row_or_create(row).set_cell(col, cell);
        Ok(())
    }

    /// Set a cell's number format, creating the cell if absent
    pub fn set_format_at(&mut self, row: u32, col: u16, format: NumberFormat) -> Result<()> {
        self.validate_cell_position(row, col)?;
        self.row_or_create(row).cell_or_create(col).format = format;
        Ok(())
    }

    /// Set a cell formula by row and column indices
    pub fn set_formula_at(&mut self, row: u32, col: u16, formula: &str) -> Result<()> {
        self.validate_cell_position(row, col)?;

        // Ensure formula starts with '='
        let formula = if formula.starts_with('=') {
            formula.to_string()
        } else {
            format!("={}", formula)
        };

        self.row_or_create(row).set_value(col, CellValue::formula(formula));
        Ok(())
    }

    /// Store a computed result on an existing formula cell
    pub fn set_formula_result_at(&mut self, row: u32, col: u16, value: CellValue) -> Result<()> {
        let cell = self
            .rows
            .get_mut(&row)
            .and_then(|r| r.cell_mut(col))
            .ok_or(Error::CellNotFound(row, col))?;

        match &mut cell.value {
            CellValue::Formula { cached, .. } => {
                *cached = Some(Box::new(value));
                Ok(())
            }
            _ => Err(Error::NotAFormula(row, col)),
        }
    }

    /// Clear a cell by indices (the containing row stays touched)
    pub fn clear_cell_at(&mut self, row: u32, col: u16) {
        if let Some(r) = self.rows.get_mut(&row) {
            r.remove_cell(col);
        }
    }

    fn validate_cell_position(&self, row: u32, col: u16) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }
        Ok(())
    }
}
