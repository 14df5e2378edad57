//! Prelude module - common imports for flatsheet users
//!
//! ```rust
//! use flatsheet::prelude::*;
//! ```

pub use crate::{
    // Operations
    cell_text,
    cell_text_with,
    used_range,
    used_range_filled,
    // Model types
    Cell,
    CellError,
    CellKind,
    // Capability traits
    CellSource,
    CellValue,
    DateSystem,
    // Error types
    Error,
    NumberFormat,
    Result,
    Row,
    RowFill,
    RowSource,
    Sheet,
    SheetFill,
    SheetSource,
    // Extension traits
    SheetTextExt,
    SheetTextFillExt,
    SharedString,
    // Output table
    TextTable,
};
