//! Used-range extraction

use crate::source::{RowFill, RowSource, SheetFill, SheetSource};
use crate::stringize::cell_text_with;
use crate::table::TextTable;

/// Extract the used range of a sheet as a dense string table
///
/// The table spans rows `0..=last_row_index` and columns `0..=max_col`, where
/// `max_col` is the highest touched column index across all existing rows.
/// Absent rows and cells project as empty strings without touching the sheet.
/// An empty sheet yields a table with 0 rows.
///
/// A sheet whose rows exist but hold no cells still yields one column per
/// row: the `max_col` candidate starts at 0, so every row gets at least a
/// column 0 entry.
pub fn used_range<S: SheetSource>(sheet: &S) -> TextTable {
    let last_row = match sheet.last_row_index() {
        Some(index) => index,
        None => return TextTable::empty(),
    };

    let date_system = sheet.date_system();
    let max_col = max_col_index(sheet, last_row);
    let rows = last_row as usize + 1;
    let cols = usize::from(max_col) + 1;

    let mut cells = Vec::with_capacity(rows * cols);
    for row_index in 0..=last_row {
        let row = sheet.row(row_index);
        for col in 0..=max_col {
            let text = row
                .and_then(|r| r.cell(col))
                .map(|cell| cell_text_with(cell, date_system))
                .unwrap_or_default();
            cells.push(text);
        }
    }

    TextTable::from_row_major(cells, rows, cols)
}

/// Extract the used range, materializing absent rows and cells in place
///
/// Returns the same table as [`used_range`] would for the same sheet state.
/// The difference is the side effect: afterwards every position the table
/// covers is backed by a real row and cell in the sheet, so later lookups see
/// no missing positions. Repeated calls return identical tables.
pub fn used_range_filled<S: SheetFill>(sheet: &mut S) -> TextTable
where
    S::Row: RowFill,
{
    let last_row = match sheet.last_row_index() {
        Some(index) => index,
        None => return TextTable::empty(),
    };

    let date_system = sheet.date_system();
    let max_col = max_col_index(sheet, last_row);
    let rows = last_row as usize + 1;
    let cols = usize::from(max_col) + 1;

    let mut rows_created = 0usize;
    let mut cells_created = 0usize;

    let mut cells = Vec::with_capacity(rows * cols);
    for row_index in 0..=last_row {
        if sheet.row(row_index).is_none() {
            rows_created += 1;
        }
        let row = sheet.row_or_create(row_index);
        for col in 0..=max_col {
            if row.cell(col).is_none() {
                cells_created += 1;
            }
            let cell = row.cell_or_create(col);
            cells.push(cell_text_with(&*cell, date_system));
        }
    }

    if rows_created > 0 || cells_created > 0 {
        log::debug!(
            "used_range_filled materialized {} rows and {} cells",
            rows_created,
            cells_created
        );
    }

    TextTable::from_row_major(cells, rows, cols)
}

/// Scan pass: the highest touched column index across existing rows
///
/// Absent rows and rows without cells contribute nothing. The candidate
/// starts at 0, so a range of content-less rows still reports column 0.
fn max_col_index<S: SheetSource>(sheet: &S, last_row: u32) -> u16 {
    let mut max_col = 0;
    for index in 0..=last_row {
        if let Some(row) = sheet.row(index) {
            if let Some(last_cell) = row.last_cell_index() {
                max_col = max_col.max(last_cell);
            }
        }
    }
    max_col
}

#[cfg(test)]
mod tests {
    use super::*;
    use flatsheet_core::{CellValue, DateSystem, NumberFormat, Sheet};

    fn sparse_sheet() -> Sheet {
        // Rows 0 and 2 populated, row 1 never touched, widest row ends at col 3
        let mut sheet = Sheet::new("data");
        sheet.set_value_at(0, 0, "a").unwrap();
        sheet.set_value_at(0, 3, "d").unwrap();
        sheet.set_value_at(2, 1, 9.0).unwrap();
        sheet
    }

    #[test]
    fn test_empty_sheet_yields_zero_rows() {
        let sheet = Sheet::new("empty");
        let table = used_range(&sheet);
        assert!(table.is_empty());
        assert_eq!(table.num_rows(), 0);
        assert_eq!(table.num_cols(), 0);
    }

    #[test]
    fn test_sparse_sheet_shape_and_content() {
        let sheet = sparse_sheet();
        let table = used_range(&sheet);

        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.num_cols(), 4);
        assert_eq!(table.get(0, 0), Some("a"));
        assert_eq!(table.get(0, 1), Some(""));
        assert_eq!(table.get(0, 3), Some("d"));
        // The absent row projects as empty strings
        assert_eq!(table.row(1).unwrap(), &["", "", "", ""]);
        assert_eq!(table.get(2, 1), Some("9"));
    }

    #[test]
    fn test_pure_extraction_does_not_touch_sheet() {
        let sheet = sparse_sheet();
        let _ = used_range(&sheet);
        assert!(sheet.row(1).is_none());
        assert!(sheet.cell_at(0, 1).is_none());
        assert_eq!(sheet.row(0).unwrap().cell_count(), 2);
    }

    #[test]
    fn test_filled_extraction_materializes_positions() {
        let mut sheet = sparse_sheet();
        let table = used_range_filled(&mut sheet);

        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.num_cols(), 4);
        // Every covered position is now backed by a real cell
        for row in 0..3 {
            assert!(sheet.row(row).is_some(), "row {}", row);
            for col in 0..4 {
                assert!(sheet.cell_at(row, col).is_some(), "({}, {})", row, col);
            }
        }
        assert!(sheet.cell_at(1, 0).unwrap().value.is_blank());
    }

    #[test]
    fn test_filled_extraction_is_idempotent() {
        let mut sheet = sparse_sheet();
        let first = used_range_filled(&mut sheet);
        let second = used_range_filled(&mut sheet);
        assert_eq!(first, second);
    }

    #[test]
    fn test_pure_and_filled_agree() {
        let pure = used_range(&sparse_sheet());
        let mut sheet = sparse_sheet();
        let filled = used_range_filled(&mut sheet);
        assert_eq!(pure, filled);
    }

    #[test]
    fn test_content_less_rows_yield_single_column() {
        let mut sheet = Sheet::new("touched");
        sheet.row_or_create(0);
        sheet.row_or_create(2);

        let table = used_range(&sheet);
        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.num_cols(), 1);
        for row in table.rows() {
            assert_eq!(row, &[""]);
        }
    }

    #[test]
    fn test_cell_less_row_does_not_limit_width() {
        let mut sheet = Sheet::new("mixed");
        sheet.set_value_at(0, 5, "wide").unwrap();
        sheet.row_or_create(1);

        let table = used_range(&sheet);
        assert_eq!(table.num_cols(), 6);
        assert_eq!(table.row(1).unwrap().len(), 6);
    }

    #[test]
    fn test_extraction_uses_sheet_date_system() {
        let mut sheet = Sheet::with_date_system("mac", DateSystem::Excel1904);
        sheet.set_value_at(0, 0, 0.0).unwrap();
        sheet
            .set_format_at(0, 0, NumberFormat::date_short())
            .unwrap();

        let table = used_range(&sheet);
        assert_eq!(table.get(0, 0), Some("1904/01/01 00:00:00"));
    }

    #[test]
    fn test_formula_cells_render_cached_results() {
        let mut sheet = Sheet::new("calc");
        sheet.set_value_at(0, 0, 21.0).unwrap();
        sheet.set_formula_at(0, 1, "=A1*2").unwrap();
        sheet
            .set_formula_result_at(0, 1, CellValue::Number(42.0))
            .unwrap();

        let table = used_range(&sheet);
        assert_eq!(table.get(0, 1), Some("42"));
    }
}
