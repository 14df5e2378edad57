//! Cell-to-text normalization

use flatsheet_core::{serial_to_datetime, CellError, CellKind, DateSystem};

use crate::source::CellSource;

/// A cell's content collapsed to one displayable variant
///
/// The resolution step folds the declared kind and the cached result kind
/// together, so formula cells share the scalar rendering arms with plain
/// cells.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ResolvedContent<'a> {
    Text(&'a str),
    Number(f64),
    Boolean(bool),
    Blank,
    Error(CellError),
}

fn resolve<C: CellSource>(cell: &C) -> ResolvedContent<'_> {
    match cell.kind() {
        CellKind::Formula => resolve_as(cell, cell.cached_formula_kind()),
        kind => resolve_as(cell, kind),
    }
}

fn resolve_as<C: CellSource>(cell: &C, kind: CellKind) -> ResolvedContent<'_> {
    match kind {
        CellKind::Text => match cell.as_text() {
            Some(s) => ResolvedContent::Text(s),
            None => ResolvedContent::Blank,
        },
        CellKind::Number => match cell.as_number() {
            Some(n) => ResolvedContent::Number(n),
            None => ResolvedContent::Blank,
        },
        CellKind::Boolean => match cell.as_boolean() {
            Some(b) => ResolvedContent::Boolean(b),
            None => ResolvedContent::Blank,
        },
        CellKind::Error => match cell.as_error() {
            Some(e) => ResolvedContent::Error(e),
            None => ResolvedContent::Blank,
        },
        CellKind::Blank | CellKind::Unknown => ResolvedContent::Blank,
        CellKind::Formula => {
            // The cached result kind of a formula is never itself a formula.
            log::warn!("cell reported a formula as its cached result kind, treating as blank");
            ResolvedContent::Blank
        }
    }
}

/// Normalize one cell to its canonical text form, in the 1900 date system
///
/// Never fails: any cell the model cannot make sense of comes back as the
/// empty string. See [`cell_text_with`] for the dispatch rules.
pub fn cell_text<C: CellSource>(cell: &C) -> String {
    cell_text_with(cell, DateSystem::Excel1900)
}

/// Normalize one cell to its canonical text form
///
/// Dispatch by declared kind, with formula cells dispatched again on their
/// cached result kind:
/// - text comes back verbatim
/// - numbers render with `f64`'s default formatting, unless the cell is
///   date-formatted, in which case the serial renders as
///   `yyyy/MM/dd HH:mm:ss` (falling back to the numeric form for serials
///   chrono cannot represent)
/// - booleans render as `True` / `False`
/// - errors render as their code string (`#DIV/0!` and friends)
/// - blank and unknown cells render as the empty string
pub fn cell_text_with<C: CellSource>(cell: &C, date_system: DateSystem) -> String {
    match resolve(cell) {
        ResolvedContent::Text(s) => s.to_string(),
        ResolvedContent::Number(n) => {
            if cell.is_date_formatted() {
                format_date_serial(n, date_system)
            } else {
                n.to_string()
            }
        }
        ResolvedContent::Boolean(true) => "True".to_string(),
        ResolvedContent::Boolean(false) => "False".to_string(),
        ResolvedContent::Blank => String::new(),
        ResolvedContent::Error(e) => e.to_string(),
    }
}

/// Render a date serial with the fixed `yyyy/MM/dd HH:mm:ss` pattern
///
/// The pattern is fixed rather than derived from the cell's own format
/// string, so every date-formatted cell normalizes the same way.
fn format_date_serial(serial: f64, date_system: DateSystem) -> String {
    match serial_to_datetime(serial, date_system) {
        Some(dt) => dt.format("%Y/%m/%d %H:%M:%S").to_string(),
        None => serial.to_string(),
    }
}
