//! Cell type tags

use std::fmt;

/// The type tag a cell reports before any formula result is considered
///
/// Formula cells additionally carry a *cached result kind*: the kind of the
/// value the formula last evaluated to. See [`CellValue::cached_kind`].
///
/// [`CellValue::cached_kind`]: crate::cell::CellValue::cached_kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// String content
    Text,
    /// Numeric content (including dates, which are stored as serial numbers)
    Number,
    /// Boolean content
    Boolean,
    /// No content
    Blank,
    /// Formula with its own cached result kind
    Formula,
    /// Error value (#VALUE!, #REF!, etc.)
    Error,
    /// Anything the model cannot classify
    Unknown,
}

impl CellKind {
    /// Get the name for error messages and logging
    pub fn as_str(&self) -> &'static str {
        match self {
            CellKind::Text => "text",
            CellKind::Number => "number",
            CellKind::Boolean => "boolean",
            CellKind::Blank => "blank",
            CellKind::Formula => "formula",
            CellKind::Error => "error",
            CellKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(CellKind::Text.as_str(), "text");
        assert_eq!(CellKind::Formula.as_str(), "formula");
        assert_eq!(CellKind::Unknown.to_string(), "unknown");
    }
}
