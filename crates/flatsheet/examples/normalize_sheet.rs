//! Example: Build a sheet in memory and extract it as a text table

use flatsheet::prelude::*;

fn main() -> Result<()> {
    let mut sheet = Sheet::new("orders");

    // Header row
    sheet.set_value_at(0, 0, "order")?;
    sheet.set_value_at(0, 1, "shipped")?;
    sheet.set_value_at(0, 2, "paid")?;
    sheet.set_value_at(0, 3, "total")?;

    // Data rows (row 2 left untouched on purpose)
    sheet.set_value_at(1, 0, "A-1001")?;
    sheet.set_value_at(1, 1, 45000.0)?;
    sheet.set_format_at(1, 1, NumberFormat::date_short())?;
    sheet.set_value_at(1, 2, true)?;
    sheet.set_value_at(1, 3, 249.99)?;

    sheet.set_value_at(3, 0, "A-1002")?;
    sheet.set_value_at(3, 2, false)?;
    sheet.set_formula_at(3, 3, "=SUM(D2:D3)")?;
    sheet.set_formula_result_at(3, 3, CellValue::Number(249.99))?;

    let table = sheet.text_table();
    println!(
        "extracted {} rows x {} cols:",
        table.num_rows(),
        table.num_cols()
    );
    println!("{}", table);

    // Single-cell lookups normalize the same way
    println!("\nshipped date of A-1001: {:?}", sheet.cell_text_at(1, 1));

    Ok(())
}
