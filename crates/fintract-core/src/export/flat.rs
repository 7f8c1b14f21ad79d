//! One-row-per-document CSV export.

use std::io::Write;
use std::path::Path;

use super::{Result, field_columns};
use crate::models::record::DocumentRecord;

/// Column holding the serialized product list.
const PRODUCTS_COLUMN: &str = "products";

/// Write records as CSV to `path`.
pub fn write_csv(records: &[DocumentRecord], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv_to(records, file)
}

/// Write records as CSV to any writer.
///
/// Columns are the matched field keys followed by `products`, which holds
/// the line items as a JSON array.
pub fn write_csv_to<W: Write>(records: &[DocumentRecord], writer: W) -> Result<()> {
    let columns = field_columns(records);
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = columns.iter().map(|k| k.as_str()).collect();
    header.push(PRODUCTS_COLUMN);
    wtr.write_record(&header)?;

    for record in records {
        let mut row: Vec<String> = columns
            .iter()
            .map(|key| record.get(*key).unwrap_or_default().to_string())
            .collect();
        row.push(serde_json::to_string(&record.products)?);
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
