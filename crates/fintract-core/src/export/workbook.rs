//! Two-sheet workbook export.

use std::path::Path;

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet};
use tracing::debug;

use super::{Result, Table, basic_info_table, products_table};
use crate::models::record::DocumentRecord;

/// Sheet with one row of scalar fields per document.
pub const BASIC_INFO_SHEET: &str = "Basic Info";

/// Sheet with one row per line item.
pub const PRODUCTS_SHEET: &str = "Products";

/// Write the "Basic Info" and "Products" sheets, in that order, to `path`.
pub fn write_workbook(records: &[DocumentRecord], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let basic = basic_info_table(records);
    let sheet = workbook.add_worksheet();
    sheet.set_name(BASIC_INFO_SHEET)?;
    write_table(sheet, &basic, &header)?;

    let products = products_table(records);
    let sheet = workbook.add_worksheet();
    sheet.set_name(PRODUCTS_SHEET)?;
    write_table(sheet, &products, &header)?;

    debug!(
        "Workbook: {} basic info row(s), {} product row(s)",
        basic.rows.len(),
        products.rows.len()
    );

    workbook.save(path)?;
    Ok(())
}

fn write_table(sheet: &mut Worksheet, table: &Table, header: &Format) -> Result<()> {
    for (col, name) in table.headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as ColNum, name, header)?;
    }

    for (row, cells) in table.rows.iter().enumerate() {
        let row = (row + 1) as RowNum;
        for (col, value) in cells.iter().enumerate() {
            // Blank cells stay unwritten
            if !value.is_empty() {
                sheet.write_string(row, col as ColNum, value)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests::record;
    use crate::models::record::FieldKey;
    use calamine::{Data, Reader, Xlsx, open_workbook};
    use pretty_assertions::assert_eq;

    fn read_sheet(workbook: &mut Xlsx<std::io::BufReader<std::fs::File>>, name: &str) -> Vec<Vec<String>> {
        let range = workbook.worksheet_range(name).unwrap();
        range
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Data::String(s) => s.clone(),
                        Data::Empty => String::new(),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_workbook_sheets_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("financial_data.xlsx");

        let records = vec![
            record(
                &[
                    (FieldKey::OrderId, "10294"),
                    (FieldKey::CustomerId, "PLUME"),
                    (FieldKey::TotalPrice, "150.00"),
                ],
                2,
            ),
            record(&[(FieldKey::OrderId, "10309"), (FieldKey::OrderDate, "20240115")], 0),
        ];

        write_workbook(&records, &path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(workbook.sheet_names(), vec![BASIC_INFO_SHEET, PRODUCTS_SHEET]);

        let basic = read_sheet(&mut workbook, BASIC_INFO_SHEET);
        assert_eq!(
            basic[0],
            vec!["order_id", "customer_id", "total_price", "order_date"]
        );
        assert_eq!(basic.len(), 3);
        assert_eq!(basic[1], vec!["10294", "PLUME", "150.00", ""]);
        assert_eq!(basic[2], vec!["10309", "", "", "20240115"]);

        let products = read_sheet(&mut workbook, PRODUCTS_SHEET);
        assert_eq!(products.len(), 3);
        assert_eq!(products[1][4], "10294");
        assert_eq!(products[2][4], "10294");
        assert_eq!(products[2][1], "Product 2");
    }

    #[test]
    fn test_empty_workbook_still_has_both_sheets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");

        write_workbook(&[], &path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(workbook.sheet_names(), vec![BASIC_INFO_SHEET, PRODUCTS_SHEET]);
        assert!(read_sheet(&mut workbook, PRODUCTS_SHEET).is_empty());
    }
}
