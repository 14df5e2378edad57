//! # flatsheet-core
//!
//! In-memory sheet model for the flatsheet text extraction library.
//!
//! This crate provides the fundamental types flatsheet works over:
//! - [`CellValue`] and [`CellKind`] - cell values and their type tags
//! - [`Cell`] - a value plus the number format applied to it
//! - [`Row`] and [`Sheet`] - sparse document structures with touched-row
//!   semantics (a row can exist without holding any cells)
//! - [`DateSystem`] - Excel serial date conversion, both date systems
//!
//! ## Example
//!
//! ```rust
//! use flatsheet_core::{CellValue, NumberFormat, Sheet};
//!
//! let mut sheet = Sheet::new("Report");
//! sheet.set_value_at(0, 0, "total").unwrap();
//! sheet.set_value_at(0, 1, 45000.0).unwrap();
//! sheet.set_format_at(0, 1, NumberFormat::date_short()).unwrap();
//!
//! assert!(sheet.cell_at(0, 1).unwrap().is_date_formatted());
//! assert_eq!(sheet.value_at(1, 0), CellValue::Blank);
//! ```

pub mod cell;
pub mod date;
pub mod error;
pub mod format;
pub mod row;
pub mod sheet;

// Re-exports for convenience
pub use cell::{Cell, CellError, CellKind, CellValue, SharedString};
pub use date::{datetime_to_serial, serial_to_datetime, DateSystem};
pub use error::{Error, Result};
pub use format::NumberFormat;
pub use row::Row;
pub use sheet::Sheet;

/// Maximum number of rows in a sheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a sheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;
