//! Cell-related types
//!
//! This module contains:
//! - [`CellValue`] - The value stored in a cell
//! - [`CellKind`] - Type tags for declared and cached-result kinds
//! - [`Cell`] - Complete cell data including value and number format

mod kind;
mod value;

pub use kind::CellKind;
pub use value::{CellError, CellValue, SharedString};

use crate::format::NumberFormat;

/// Complete data for a single cell
///
/// The number format is the one piece of styling this model keeps: it decides
/// whether a numeric value is a date serial.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    /// The cell's value
    pub value: CellValue,
    /// The number format applied to the cell
    pub format: NumberFormat,
}

impl Cell {
    /// Create a new cell with a value and the general format
    pub fn new<V: Into<CellValue>>(value: V) -> Self {
        Self {
            value: value.into(),
            format: NumberFormat::General,
        }
    }

    /// Create a new cell with a value and format
    pub fn with_format<V: Into<CellValue>>(value: V, format: NumberFormat) -> Self {
        Self {
            value: value.into(),
            format,
        }
    }

    /// Create a blank cell
    pub fn blank() -> Self {
        Self::default()
    }

    /// Check if this cell is effectively blank (no value and general format)
    pub fn is_blank(&self) -> bool {
        self.value.is_blank() && self.format == NumberFormat::General
    }

    /// Check if the cell's format marks its numeric value as a date/time
    pub fn is_date_formatted(&self) -> bool {
        self.format.is_date_format()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_cell() {
        let cell = Cell::blank();
        assert!(cell.is_blank());
        assert_eq!(cell.value, CellValue::Blank);

        // A format alone keeps the cell alive
        let cell = Cell::with_format(CellValue::Blank, NumberFormat::date_short());
        assert!(!cell.is_blank());
    }

    #[test]
    fn test_date_formatted() {
        let cell = Cell::new(45000.0);
        assert!(!cell.is_date_formatted());

        let cell = Cell::with_format(45000.0, NumberFormat::date_short());
        assert!(cell.is_date_formatted());
    }
}
