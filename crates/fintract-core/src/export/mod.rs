//! Tabular export of batch results.
//!
//! Two artifacts are produced from the same records:
//!
//! - a workbook with a "Basic Info" sheet (one row per document, scalar
//!   fields only) and a "Products" sheet (one row per line item, tagged
//!   with its document's `order_id`);
//! - a flat CSV with one row per document, where the product list is
//!   written as an opaque JSON blob in a single `products` column.

mod flat;
mod workbook;

pub use flat::{write_csv, write_csv_to};
pub use workbook::{BASIC_INFO_SHEET, PRODUCTS_SHEET, write_workbook};

use std::path::{Path, PathBuf};

use tracing::info;

use crate::batch::BatchResult;
use crate::error::ExportError;
use crate::models::config::OutputConfig;
use crate::models::record::{DocumentRecord, FieldKey, LineItemKey};

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Header row plus string cells. Rows always have as many cells as headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

/// Field keys present in at least one record, in canonical order.
pub fn field_columns(records: &[DocumentRecord]) -> Vec<FieldKey> {
    FieldKey::ALL
        .into_iter()
        .filter(|key| records.iter().any(|r| r.fields.contains_key(key)))
        .collect()
}

/// One row per record with its scalar fields; missing fields are blank.
pub fn basic_info_table(records: &[DocumentRecord]) -> Table {
    let columns = field_columns(records);
    if columns.is_empty() {
        return Table::default();
    }

    Table {
        headers: columns.iter().map(|k| k.as_str().to_string()).collect(),
        rows: records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|key| record.get(*key).unwrap_or_default().to_string())
                    .collect()
            })
            .collect(),
    }
}

/// One row per line item across all records, tagged with the parent `order_id`.
pub fn products_table(records: &[DocumentRecord]) -> Table {
    let rows: Vec<Vec<String>> = records
        .iter()
        .flat_map(|record| {
            let order_id = record.order_id().unwrap_or_default();
            record.products.iter().map(move |item| {
                LineItemKey::ALL
                    .iter()
                    .map(|key| item.get(*key).to_string())
                    .chain(std::iter::once(order_id.to_string()))
                    .collect::<Vec<String>>()
            })
        })
        .collect();

    if rows.is_empty() {
        return Table::default();
    }

    Table {
        headers: LineItemKey::ALL
            .iter()
            .map(|k| k.as_str().to_string())
            .chain(std::iter::once(FieldKey::OrderId.as_str().to_string()))
            .collect(),
        rows,
    }
}

/// Writes the workbook and the CSV file for a batch.
#[derive(Debug, Clone)]
pub struct BatchExporter {
    xlsx_path: PathBuf,
    csv_path: PathBuf,
}

impl BatchExporter {
    pub fn new(xlsx_path: impl Into<PathBuf>, csv_path: impl Into<PathBuf>) -> Self {
        Self {
            xlsx_path: xlsx_path.into(),
            csv_path: csv_path.into(),
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(&config.xlsx_path, &config.csv_path)
    }

    pub fn xlsx_path(&self) -> &Path {
        &self.xlsx_path
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    /// Write both artifacts, workbook first.
    pub fn export(&self, batch: &BatchResult) -> crate::Result<()> {
        write_workbook(&batch.records, &self.xlsx_path)?;
        info!("Wrote workbook to {}", self.xlsx_path.display());

        write_csv(&batch.records, &self.csv_path)?;
        info!("Wrote CSV to {}", self.csv_path.display());

        Ok(())
    }
}

impl Default for BatchExporter {
    fn default() -> Self {
        Self::from_config(&OutputConfig::default())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::record::LineItem;
    use pretty_assertions::assert_eq;

    pub(crate) fn record(fields: &[(FieldKey, &str)], products: usize) -> DocumentRecord {
        DocumentRecord {
            fields: fields
                .iter()
                .map(|(k, v)| (*k, v.to_string()))
                .collect(),
            products: (1..=products)
                .map(|n| LineItem {
                    product_id: n.to_string(),
                    product_name: format!("Product {}", n),
                    quantity: (n * 2).to_string(),
                    unit_price: format!("{}.50", n),
                })
                .collect(),
        }
    }

    #[test]
    fn test_basic_info_union_of_columns() {
        let records = vec![
            record(&[(FieldKey::CustomerId, "ALFKI")], 0),
            record(&[(FieldKey::OrderId, "10643"), (FieldKey::OrderDate, "20240825")], 0),
        ];

        let table = basic_info_table(&records);

        assert_eq!(table.headers, vec!["order_id", "customer_id", "order_date"]);
        assert_eq!(
            table.rows,
            vec![
                vec!["".to_string(), "ALFKI".to_string(), "".to_string()],
                vec!["10643".to_string(), "".to_string(), "20240825".to_string()],
            ]
        );
    }

    #[test]
    fn test_products_tagged_with_order_id() {
        let records = vec![
            record(&[(FieldKey::OrderId, "10294")], 2),
            record(&[(FieldKey::OrderId, "10309")], 0),
            record(&[(FieldKey::CustomerId, "NOORDER")], 1),
        ];

        let table = products_table(&records);

        assert_eq!(
            table.headers,
            vec!["product_id", "product_name", "quantity", "unit_price", "order_id"]
        );
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0], vec!["1", "Product 1", "2", "1.50", "10294"]);
        assert_eq!(table.rows[1][4], "10294");
        assert_eq!(table.rows[2][4], "");
    }

    #[test]
    fn test_empty_batch_gives_empty_tables() {
        assert!(basic_info_table(&[]).is_empty());
        assert!(products_table(&[]).is_empty());
        assert!(products_table(&[record(&[(FieldKey::OrderId, "1")], 0)]).is_empty());
    }

    #[test]
    fn test_exporter_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = BatchExporter::new(dir.path().join("out.xlsx"), dir.path().join("out.csv"));

        let batch = BatchResult::from(vec![record(&[(FieldKey::OrderId, "1")], 1)]);
        exporter.export(&batch).unwrap();

        assert!(exporter.xlsx_path().exists());
        assert!(exporter.csv_path().exists());
    }
}
