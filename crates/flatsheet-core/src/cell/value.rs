//! Cell value types

use std::fmt;
use std::sync::Arc;

use super::CellKind;

/// Represents the value stored in a cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell (no value)
    Blank,

    /// Boolean value
    Boolean(bool),

    /// Numeric value (all numbers stored as f64, including date serials)
    Number(f64),

    /// String value
    Text(SharedString),

    /// Error value (#VALUE!, #REF!, etc.)
    Error(CellError),

    /// Formula with cached result
    Formula {
        /// Original formula text (e.g., "=SUM(A1:A10)")
        text: String,
        /// Last calculated value (if any)
        cached: Option<Box<CellValue>>,
    },
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: AsRef<str>>(s: S) -> Self {
        CellValue::Text(SharedString::new(s))
    }

    /// Create a new formula value with no cached result
    pub fn formula<S: Into<String>>(text: S) -> Self {
        CellValue::Formula {
            text: text.into(),
            cached: None,
        }
    }

    /// Create a new formula value with a cached result
    pub fn formula_with_cached<S: Into<String>>(text: S, cached: CellValue) -> Self {
        CellValue::Formula {
            text: text.into(),
            cached: Some(Box::new(cached)),
        }
    }

    /// Check if the cell is blank
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Blank)
    }

    /// Check if the cell contains a formula
    pub fn is_formula(&self) -> bool {
        matches!(self, CellValue::Formula { .. })
    }

    /// Check if the cell contains an error
    pub fn is_error(&self) -> bool {
        matches!(self, CellValue::Error(_))
    }

    /// Get the declared kind of this value
    pub fn kind(&self) -> CellKind {
        match self {
            CellValue::Blank => CellKind::Blank,
            CellValue::Boolean(_) => CellKind::Boolean,
            CellValue::Number(_) => CellKind::Number,
            CellValue::Text(_) => CellKind::Text,
            CellValue::Error(_) => CellKind::Error,
            CellValue::Formula { .. } => CellKind::Formula,
        }
    }

    /// Get the cached result kind for a formula cell
    ///
    /// Returns [`CellKind::Unknown`] when the formula has no cached result and
    /// for non-formula values. A cached value that is itself a formula is
    /// malformed and also reports [`CellKind::Unknown`], so this never returns
    /// [`CellKind::Formula`].
    pub fn cached_kind(&self) -> CellKind {
        match self {
            CellValue::Formula {
                cached: Some(v), ..
            } => match v.kind() {
                CellKind::Formula => CellKind::Unknown,
                kind => kind,
            },
            _ => CellKind::Unknown,
        }
    }

    /// Try to get the value as a number
    ///
    /// Looks through a formula's cached result; no cross-type coercion.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Formula {
                cached: Some(v), ..
            } => v.as_number(),
            _ => None,
        }
    }

    /// Try to get the value as a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            CellValue::Boolean(b) => Some(*b),
            CellValue::Formula {
                cached: Some(v), ..
            } => v.as_boolean(),
            _ => None,
        }
    }

    /// Try to get the value as a string slice
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            CellValue::Formula {
                cached: Some(v), ..
            } => v.as_text(),
            _ => None,
        }
    }

    /// Try to get the value as an error code
    pub fn as_error(&self) -> Option<CellError> {
        match self {
            CellValue::Error(e) => Some(*e),
            CellValue::Formula {
                cached: Some(v), ..
            } => v.as_error(),
            _ => None,
        }
    }

    /// Get the formula text if this is a formula cell
    pub fn formula_text(&self) -> Option<&str> {
        match self {
            CellValue::Formula { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Get the cached result if this is a formula cell with one
    pub fn cached_value(&self) -> Option<&CellValue> {
        match self {
            CellValue::Formula {
                cached: Some(v), ..
            } => Some(v),
            _ => None,
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Blank
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Blank => write!(f, ""),
            CellValue::Boolean(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s.as_str()),
            CellValue::Error(e) => write!(f, "{}", e),
            CellValue::Formula {
                cached: Some(v), ..
            } => write!(f, "{}", v),
            CellValue::Formula { text, .. } => write!(f, "{}", text),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::text(s)
    }
}

impl From<CellError> for CellValue {
    fn from(e: CellError) -> Self {
        CellValue::Error(e)
    }
}

/// Excel error values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellError {
    /// #NULL! - Incorrect range operator
    Null,
    /// #DIV/0! - Division by zero
    Div0,
    /// #VALUE! - Wrong type of argument or operand
    Value,
    /// #REF! - Invalid cell reference
    Ref,
    /// #NAME? - Unrecognized formula name
    Name,
    /// #NUM! - Invalid numeric value
    Num,
    /// #N/A - Value not available
    Na,
    /// #GETTING_DATA - External data is loading
    GettingData,
    /// #SPILL! - Dynamic array cannot spill
    Spill,
    /// #CALC! - Calculation error
    Calc,
}

impl CellError {
    /// Get the display string for this error
    pub fn as_str(&self) -> &'static str {
        match self {
            CellError::Null => "#NULL!",
            CellError::Div0 => "#DIV/0!",
            CellError::Value => "#VALUE!",
            CellError::Ref => "#REF!",
            CellError::Name => "#NAME?",
            CellError::Num => "#NUM!",
            CellError::Na => "#N/A",
            CellError::GettingData => "#GETTING_DATA",
            CellError::Spill => "#SPILL!",
            CellError::Calc => "#CALC!",
        }
    }

    /// Parse an error string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "#NULL!" => Some(CellError::Null),
            "#DIV/0!" => Some(CellError::Div0),
            "#VALUE!" => Some(CellError::Value),
            "#REF!" => Some(CellError::Ref),
            "#NAME?" => Some(CellError::Name),
            "#NUM!" => Some(CellError::Num),
            "#N/A" => Some(CellError::Na),
            "#GETTING_DATA" => Some(CellError::GettingData),
            "#SPILL!" => Some(CellError::Spill),
            "#CALC!" => Some(CellError::Calc),
            _ => None,
        }
    }

    /// Get the numeric error code (for BIFF format)
    pub fn code(&self) -> u8 {
        match self {
            CellError::Null => 0x00,
            CellError::Div0 => 0x07,
            CellError::Value => 0x0F,
            CellError::Ref => 0x17,
            CellError::Name => 0x1D,
            CellError::Num => 0x24,
            CellError::Na => 0x2A,
            CellError::GettingData => 0x2B,
            CellError::Spill => 0x2C,
            CellError::Calc => 0x2D,
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Interned string for memory efficiency
///
/// Strings are often repeated across cells (e.g., "Yes", "No", dates).
/// Using Arc<str> allows sharing the same string data across multiple cells.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SharedString(Arc<str>);

impl SharedString {
    /// Create a new shared string
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        SharedString(Arc::from(s.as_ref()))
    }

    /// Get the string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the length of the string
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the string is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SharedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for SharedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SharedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SharedString {
    fn from(s: &str) -> Self {
        SharedString::new(s)
    }
}

impl From<String> for SharedString {
    fn from(s: String) -> Self {
        SharedString::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_conversions() {
        assert_eq!(CellValue::from(42), CellValue::Number(42.0));
        assert_eq!(CellValue::from(3.14), CellValue::Number(3.14));
        assert_eq!(CellValue::from(true), CellValue::Boolean(true));

        let s = CellValue::from("hello");
        assert_eq!(s.as_text(), Some("hello"));
    }

    #[test]
    fn test_cell_value_kind() {
        assert_eq!(CellValue::Blank.kind(), CellKind::Blank);
        assert_eq!(CellValue::Number(1.0).kind(), CellKind::Number);
        assert_eq!(CellValue::text("x").kind(), CellKind::Text);
        assert_eq!(CellValue::Error(CellError::Na).kind(), CellKind::Error);
        assert_eq!(CellValue::formula("=A1").kind(), CellKind::Formula);
    }

    #[test]
    fn test_cached_kind() {
        // No cached result
        assert_eq!(CellValue::formula("=A1").cached_kind(), CellKind::Unknown);

        // Cached scalar results
        let f = CellValue::formula_with_cached("=A1", CellValue::Number(2.0));
        assert_eq!(f.cached_kind(), CellKind::Number);
        let f = CellValue::formula_with_cached("=A1", CellValue::text("hi"));
        assert_eq!(f.cached_kind(), CellKind::Text);
        let f = CellValue::formula_with_cached("=A1", CellValue::Error(CellError::Div0));
        assert_eq!(f.cached_kind(), CellKind::Error);

        // Non-formula values report Unknown
        assert_eq!(CellValue::Number(1.0).cached_kind(), CellKind::Unknown);

        // A nested formula cache is malformed and degrades to Unknown
        let f = CellValue::formula_with_cached("=A1", CellValue::formula("=B1"));
        assert_eq!(f.cached_kind(), CellKind::Unknown);
    }

    #[test]
    fn test_formula_accessors() {
        let f = CellValue::formula_with_cached("=A1", CellValue::Number(2.0));
        assert_eq!(f.formula_text(), Some("=A1"));
        assert_eq!(f.cached_value(), Some(&CellValue::Number(2.0)));

        assert_eq!(CellValue::formula("=B1").cached_value(), None);
        assert_eq!(CellValue::Number(1.0).formula_text(), None);
        assert_eq!(CellValue::Number(1.0).cached_value(), None);
    }

    #[test]
    fn test_accessors_look_through_cached() {
        let f = CellValue::formula_with_cached("=A1*2", CellValue::Number(42.0));
        assert_eq!(f.as_number(), Some(42.0));
        assert_eq!(f.as_text(), None);

        let f = CellValue::formula_with_cached("=A1=B1", CellValue::Boolean(true));
        assert_eq!(f.as_boolean(), Some(true));

        // No coercion between scalar families
        assert_eq!(CellValue::Boolean(true).as_number(), None);
        assert_eq!(CellValue::Number(1.0).as_boolean(), None);
        assert_eq!(CellValue::Blank.as_number(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Blank.to_string(), "");
        assert_eq!(CellValue::Boolean(true).to_string(), "True");
        assert_eq!(CellValue::Boolean(false).to_string(), "False");
        assert_eq!(CellValue::Number(3.5).to_string(), "3.5");
        assert_eq!(CellValue::text("abc").to_string(), "abc");
        assert_eq!(
            CellValue::formula_with_cached("=A1", CellValue::Number(7.0)).to_string(),
            "7"
        );
        assert_eq!(CellValue::formula("=A1").to_string(), "=A1");
    }

    #[test]
    fn test_cell_error_display() {
        assert_eq!(CellError::Div0.to_string(), "#DIV/0!");
        assert_eq!(CellError::Value.to_string(), "#VALUE!");
        assert_eq!(CellError::Na.to_string(), "#N/A");
    }

    #[test]
    fn test_cell_error_parse() {
        assert_eq!(CellError::from_str("#DIV/0!"), Some(CellError::Div0));
        assert_eq!(CellError::from_str("#VALUE!"), Some(CellError::Value));
        assert_eq!(CellError::from_str("#n/a"), Some(CellError::Na)); // Case insensitive
        assert_eq!(CellError::from_str("invalid"), None);
    }
}
