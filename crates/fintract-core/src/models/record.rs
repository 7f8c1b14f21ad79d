//! Document and line-item data models.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level scalar field of a document.
///
/// Variant order is the canonical column order used by the exporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    /// Order identifier.
    OrderId,
    /// Customer identifier.
    CustomerId,
    /// Order total, kept as the matched text.
    TotalPrice,
    /// Order date in `YYYYMMDD` form.
    OrderDate,
}

impl FieldKey {
    /// All keys in canonical order.
    pub const ALL: [FieldKey; 4] = [
        FieldKey::OrderId,
        FieldKey::CustomerId,
        FieldKey::TotalPrice,
        FieldKey::OrderDate,
    ];

    /// Column / wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::OrderId => "order_id",
            FieldKey::CustomerId => "customer_id",
            FieldKey::TotalPrice => "total_price",
            FieldKey::OrderDate => "order_date",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribute of a product line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemKey {
    ProductId,
    ProductName,
    Quantity,
    UnitPrice,
}

impl LineItemKey {
    /// All keys in canonical order.
    pub const ALL: [LineItemKey; 4] = [
        LineItemKey::ProductId,
        LineItemKey::ProductName,
        LineItemKey::Quantity,
        LineItemKey::UnitPrice,
    ];

    /// Column / wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineItemKey::ProductId => "product_id",
            LineItemKey::ProductName => "product_name",
            LineItemKey::Quantity => "quantity",
            LineItemKey::UnitPrice => "unit_price",
        }
    }
}

impl fmt::Display for LineItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete product line. All four attributes are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier.
    pub product_id: String,
    /// Product name (rest of the labelled line).
    pub product_name: String,
    /// Ordered quantity.
    pub quantity: String,
    /// Price per unit.
    pub unit_price: String,
}

impl LineItem {
    /// Value of one attribute.
    pub fn get(&self, key: LineItemKey) -> &str {
        match key {
            LineItemKey::ProductId => &self.product_id,
            LineItemKey::ProductName => &self.product_name,
            LineItemKey::Quantity => &self.quantity,
            LineItemKey::UnitPrice => &self.unit_price,
        }
    }
}

/// Line item under construction while scanning a product section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialLineItem {
    product_id: Option<String>,
    product_name: Option<String>,
    quantity: Option<String>,
    unit_price: Option<String>,
}

impl PartialLineItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or overwrite) one attribute.
    pub fn set(&mut self, key: LineItemKey, value: impl Into<String>) {
        let slot = match key {
            LineItemKey::ProductId => &mut self.product_id,
            LineItemKey::ProductName => &mut self.product_name,
            LineItemKey::Quantity => &mut self.quantity,
            LineItemKey::UnitPrice => &mut self.unit_price,
        };
        *slot = Some(value.into());
    }

    /// Number of attributes filled so far.
    pub fn filled(&self) -> usize {
        [
            &self.product_id,
            &self.product_name,
            &self.quantity,
            &self.unit_price,
        ]
        .iter()
        .filter(|v| v.is_some())
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.filled() == 0
    }

    /// Build a [`LineItem`] if every attribute is present.
    pub fn complete(&self) -> Option<LineItem> {
        Some(LineItem {
            product_id: self.product_id.clone()?,
            product_name: self.product_name.clone()?,
            quantity: self.quantity.clone()?,
            unit_price: self.unit_price.clone()?,
        })
    }
}

/// Structured data extracted from one document.
///
/// Serializes as a flat object: matched field keys plus `products`.
/// Unmatched fields are absent rather than null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentRecord {
    /// Matched top-level fields.
    #[serde(flatten)]
    pub fields: BTreeMap<FieldKey, String>,

    /// Completed line items, in the order they were completed.
    pub products: Vec<LineItem>,
}

impl DocumentRecord {
    /// Value of a top-level field, if it matched.
    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.fields.get(&key).map(String::as_str)
    }

    /// Order identifier, if it matched.
    pub fn order_id(&self) -> Option<&str> {
        self.get(FieldKey::OrderId)
    }
}
