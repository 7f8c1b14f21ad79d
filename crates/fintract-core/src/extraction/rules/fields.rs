//! Top-level field matching.

use std::collections::BTreeMap;

use tracing::trace;

use super::patterns::FIELD_PATTERNS;
use crate::models::record::FieldKey;

/// Match every top-level field pattern against the whole text.
///
/// Each key takes the first capture of its pattern. Values are kept exactly
/// as matched. Keys whose pattern does not match are absent.
pub fn match_fields(text: &str) -> BTreeMap<FieldKey, String> {
    FIELD_PATTERNS
        .iter()
        .filter_map(|pattern| {
            let value = pattern.capture(text)?;
            trace!("Matched {} = {:?}", pattern.key, value);
            Some((pattern.key, value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_match_all_fields() {
        let text = r#"
            Invoice
            Order ID: 10294
            Customer ID: ABC123
            Order Date: 20240115
            Total Price: 150.00
        "#;

        let fields = match_fields(text);

        assert_eq!(fields.len(), 4);
        assert_eq!(fields[&FieldKey::OrderId], "10294");
        assert_eq!(fields[&FieldKey::CustomerId], "ABC123");
        assert_eq!(fields[&FieldKey::TotalPrice], "150.00");
        assert_eq!(fields[&FieldKey::OrderDate], "20240115");
    }

    #[test]
    fn test_unlabelled_text_yields_nothing() {
        assert!(match_fields("").is_empty());
        assert!(match_fields("Thank you for your business.\n\nRegards").is_empty());
    }

    #[test]
    fn test_missing_fields_are_absent() {
        let fields = match_fields("Order ID 77\nShip to: Somewhere");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get(&FieldKey::OrderId).map(String::as_str), Some("77"));
        assert!(!fields.contains_key(&FieldKey::CustomerId));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let fields = match_fields("Order ID: 1\nOrder ID: 2");
        assert_eq!(fields[&FieldKey::OrderId], "1");
    }

    #[test]
    fn test_values_are_not_normalized() {
        let fields = match_fields("Total Price: 0150.50\nCustomer ID:   vinet");
        assert_eq!(fields[&FieldKey::TotalPrice], "0150.50");
        assert_eq!(fields[&FieldKey::CustomerId], "vinet");
    }
}
