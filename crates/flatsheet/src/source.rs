//! Document capability traits
//!
//! The narrow surface flatsheet consumes from a sheet backend: type tags,
//! typed value reads, the date-format flag, and row/cell enumeration. The
//! in-memory [`Sheet`] model implements all of it; another backend (a file
//! parser, a bridge to a running spreadsheet application) only needs
//! [`SheetSource`] to use the extraction path, plus [`SheetFill`] if it wants
//! the materializing variant.

use flatsheet_core::{Cell, CellError, CellKind, DateSystem, Row, Sheet};

/// Read access to one cell
pub trait CellSource {
    /// The declared kind of the cell
    fn kind(&self) -> CellKind;

    /// The cached result kind, for formula cells
    ///
    /// [`CellKind::Unknown`] when there is no cached result. Implementations
    /// must not return [`CellKind::Formula`] here.
    fn cached_formula_kind(&self) -> CellKind;

    /// Text content, for text cells and cached text results
    fn as_text(&self) -> Option<&str>;

    /// Numeric content, for number cells and cached number results
    fn as_number(&self) -> Option<f64>;

    /// Boolean content
    fn as_boolean(&self) -> Option<bool>;

    /// Error content
    fn as_error(&self) -> Option<CellError>;

    /// Whether the cell's format marks its numeric value as a date/time
    fn is_date_formatted(&self) -> bool;
}

/// Read access to one row
pub trait RowSource {
    /// The cell type this row yields
    type Cell: CellSource;

    /// Highest column index holding a cell, or `None` for a cell-less row
    fn last_cell_index(&self) -> Option<u16>;

    /// Get a cell by column index
    fn cell(&self, col: u16) -> Option<&Self::Cell>;
}

/// Read access to one sheet
pub trait SheetSource {
    /// The row type this sheet yields
    type Row: RowSource;

    /// Highest touched row index, or `None` for an empty sheet
    fn last_row_index(&self) -> Option<u32>;

    /// Get a row by index
    fn row(&self, index: u32) -> Option<&Self::Row>;

    /// The date system for interpreting date serials
    fn date_system(&self) -> DateSystem {
        DateSystem::Excel1900
    }
}

/// Row access that can materialize missing cells
pub trait RowFill: RowSource {
    /// Get the cell at a column index, creating a blank one if absent
    fn cell_or_create(&mut self, col: u16) -> &mut Self::Cell;
}

/// Sheet access that can materialize missing rows
pub trait SheetFill: SheetSource
where
    Self::Row: RowFill,
{
    /// Get the row at an index, creating an empty one if absent
    fn row_or_create(&mut self, index: u32) -> &mut Self::Row;
}

impl CellSource for Cell {
    fn kind(&self) -> CellKind {
        self.value.kind()
    }

    fn cached_formula_kind(&self) -> CellKind {
        self.value.cached_kind()
    }

    fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    fn as_number(&self) -> Option<f64> {
        self.value.as_number()
    }

    fn as_boolean(&self) -> Option<bool> {
        self.value.as_boolean()
    }

    fn as_error(&self) -> Option<CellError> {
        self.value.as_error()
    }

    fn is_date_formatted(&self) -> bool {
        self.format.is_date_format()
    }
}

impl RowSource for Row {
    type Cell = Cell;

    fn last_cell_index(&self) -> Option<u16> {
        Row::last_cell_index(self)
    }

    fn cell(&self, col: u16) -> Option<&Cell> {
        Row::cell(self, col)
    }
}

impl RowFill for Row {
    fn cell_or_create(&mut self, col: u16) -> &mut Cell {
        Row::cell_or_create(self, col)
    }
}

impl SheetSource for Sheet {
    type Row = Row;

    fn last_row_index(&self) -> Option<u32> {
        Sheet::last_row_index(self)
    }

    fn row(&self, index: u32) -> Option<&Row> {
        Sheet::row(self, index)
    }

    fn date_system(&self) -> DateSystem {
        Sheet::date_system(self)
    }
}

impl SheetFill for Sheet {
    fn row_or_create(&mut self, index: u32) -> &mut Row {
        Sheet::row_or_create(self, index)
    }
}
