//! Regex tables for order document extraction.

use lazy_static::lazy_static;
use regex::Regex;

use super::FieldPattern;
use crate::models::record::{FieldKey, LineItemKey};

lazy_static! {
    // Top-level fields, searched over the whole document
    pub static ref ORDER_ID: Regex = Regex::new(
        r"Order ID[:\s]+(\d+)"
    ).unwrap();

    pub static ref CUSTOMER_ID: Regex = Regex::new(
        r"Customer ID[:\s]+(\w+)"
    ).unwrap();

    pub static ref TOTAL_PRICE: Regex = Regex::new(
        r"Total[:\s]*Price[:\s]*(\d+\.?\d*)"
    ).unwrap();

    pub static ref ORDER_DATE: Regex = Regex::new(
        r"Order Date[:\s]*(\d{8})"
    ).unwrap();

    // Line item attributes, searched per line of a product section
    pub static ref PRODUCT_ID: Regex = Regex::new(
        r"Product ID[:\s]*(\d+)"
    ).unwrap();

    pub static ref PRODUCT_NAME: Regex = Regex::new(
        r"Product Name[:\s]*([^\n]+)"
    ).unwrap();

    pub static ref QUANTITY: Regex = Regex::new(
        r"Quantity[:\s]*(\d+)"
    ).unwrap();

    pub static ref UNIT_PRICE: Regex = Regex::new(
        r"Unit Price[:\s]*(\d+\.?\d*)"
    ).unwrap();

    // From the first "Product" up to the next blank line or end of text
    pub static ref PRODUCT_SECTION: Regex = Regex::new(
        r"(?s)Product.*?(?:\n\n|\z)"
    ).unwrap();

    pub static ref FIELD_PATTERNS: Vec<FieldPattern<FieldKey>> = vec![
        FieldPattern::new(FieldKey::OrderId, ORDER_ID.clone()),
        FieldPattern::new(FieldKey::CustomerId, CUSTOMER_ID.clone()),
        FieldPattern::new(FieldKey::TotalPrice, TOTAL_PRICE.clone()),
        FieldPattern::new(FieldKey::OrderDate, ORDER_DATE.clone()),
    ];

    pub static ref LINE_ITEM_PATTERNS: Vec<FieldPattern<LineItemKey>> = vec![
        FieldPattern::new(LineItemKey::ProductId, PRODUCT_ID.clone()),
        FieldPattern::new(LineItemKey::ProductName, PRODUCT_NAME.clone()),
        FieldPattern::new(LineItemKey::Quantity, QUANTITY.clone()),
        FieldPattern::new(LineItemKey::UnitPrice, UNIT_PRICE.clone()),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pattern_has_one_capture_group() {
        for pattern in FIELD_PATTERNS.iter() {
            assert_eq!(pattern.regex.captures_len(), 2, "{}", pattern.key);
        }
        for pattern in LINE_ITEM_PATTERNS.iter() {
            assert_eq!(pattern.regex.captures_len(), 2, "{}", pattern.key);
        }
    }

    #[test]
    fn test_tables_cover_every_key() {
        let fields: Vec<_> = FIELD_PATTERNS.iter().map(|p| p.key).collect();
        assert_eq!(fields, FieldKey::ALL.to_vec());

        let items: Vec<_> = LINE_ITEM_PATTERNS.iter().map(|p| p.key).collect();
        assert_eq!(items, LineItemKey::ALL.to_vec());
    }

    #[test]
    fn test_total_price_label_variants() {
        assert_eq!(&TOTAL_PRICE.captures("Total Price: 150.00").unwrap()[1], "150.00");
        assert_eq!(&TOTAL_PRICE.captures("TotalPrice 99").unwrap()[1], "99");
        assert_eq!(&TOTAL_PRICE.captures("Total: Price: 12.").unwrap()[1], "12.");
    }

    #[test]
    fn test_order_date_requires_eight_digits() {
        assert!(ORDER_DATE.is_match("Order Date: 20240115"));
        assert!(!ORDER_DATE.is_match("Order Date: 2024-01-15"));
    }
}
