//! # flatsheet
//!
//! Normalize spreadsheet cells to text and extract used ranges as dense
//! string tables.
//!
//! Spreadsheet cells are heterogeneous: text, numbers, date serials,
//! booleans, errors, and formulas whose display depends on the last computed
//! result. Downstream code that wants plain text would have to handle every
//! one of those. Flatsheet does it once:
//!
//! - [`cell_text`] turns any single cell into its canonical string form and
//!   never fails
//! - [`used_range`] scans a sheet and returns a rectangular [`TextTable`] of
//!   those strings, synthesizing empty entries for absent rows and cells
//!   ([`used_range_filled`] materializes them in the sheet instead)
//!
//! Both work over the capability traits in [`source`], implemented here for
//! the in-memory [`Sheet`] model; any other backend can implement
//! [`SheetSource`] to plug in.
//!
//! ## Example
//!
//! ```rust
//! use flatsheet::prelude::*;
//!
//! let mut sheet = Sheet::new("inventory");
//! sheet.set_value_at(0, 0, "item").unwrap();
//! sheet.set_value_at(0, 1, "count").unwrap();
//! sheet.set_value_at(1, 0, "bolts").unwrap();
//! sheet.set_value_at(1, 1, 42.0).unwrap();
//! // Row 2 was never touched; row 3 holds a single flag cell
//! sheet.set_value_at(3, 1, true).unwrap();
//!
//! let table = sheet.text_table();
//! assert_eq!(table.num_rows(), 4);
//! assert_eq!(table.num_cols(), 2);
//! assert_eq!(table.get(1, 1), Some("42"));
//! assert_eq!(table.row(2).unwrap(), &["", ""]);
//! assert_eq!(table.get(3, 1), Some("True"));
//! ```

pub mod extract;
pub mod prelude;
pub mod source;
pub mod stringize;
pub mod table;

// Re-export the operation entry points
pub use extract::{used_range, used_range_filled};
pub use stringize::{cell_text, cell_text_with};

// Re-export the capability traits and the output table
pub use source::{CellSource, RowFill, RowSource, SheetFill, SheetSource};
pub use table::TextTable;

// Re-export core types
pub use flatsheet_core::{
    datetime_to_serial, serial_to_datetime, Cell, CellError, CellKind, CellValue, DateSystem,
    Error, NumberFormat, Result, Row, Sheet, SharedString, MAX_COLS, MAX_ROWS,
};

/// Extension trait adding text extraction directly on sheet sources
pub trait SheetTextExt: SheetSource {
    /// Extract the used range as a dense table of normalized text
    fn text_table(&self) -> TextTable;

    /// Normalize the cell at a position (empty string for absent positions)
    fn cell_text_at(&self, row: u32, col: u16) -> String;
}

impl<S: SheetSource> SheetTextExt for S {
    fn text_table(&self) -> TextTable {
        used_range(self)
    }

    fn cell_text_at(&self, row: u32, col: u16) -> String {
        self.row(row)
            .and_then(|r| r.cell(col))
            .map(|cell| cell_text_with(cell, self.date_system()))
            .unwrap_or_default()
    }
}

/// Extension trait for sheet sources that can materialize positions
pub trait SheetTextFillExt: SheetFill
where
    Self::Row: RowFill,
{
    /// Extract the used range, materializing absent rows and cells in place
    fn text_table_filled(&mut self) -> TextTable;
}

impl<S: SheetFill> SheetTextFillExt for S
where
    S::Row: RowFill,
{
    fn text_table_filled(&mut self) -> TextTable {
        used_range_filled(self)
    }
}
