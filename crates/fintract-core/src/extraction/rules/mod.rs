//! Rule-based extractors for order documents.

pub mod fields;
pub mod line_items;
pub mod patterns;

pub use fields::match_fields;
pub use line_items::{Grouping, extract_line_items, group_line_items, product_sections};
pub use patterns::*;

use regex::Regex;

/// A labelled regular expression with exactly one capture group.
#[derive(Debug, Clone)]
pub struct FieldPattern<K> {
    /// Key the captured value is stored under.
    pub key: K,
    /// Pattern; group 1 is the value.
    pub regex: Regex,
}

impl<K: Copy> FieldPattern<K> {
    pub fn new(key: K, regex: Regex) -> Self {
        Self { key, regex }
    }

    /// First capture in `text`, unanchored.
    pub fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::FieldKey;

    #[test]
    fn test_capture_first_occurrence() {
        let pattern = FieldPattern::new(FieldKey::OrderId, Regex::new(r"ID (\d+)").unwrap());
        assert_eq!(pattern.capture("ID 12 then ID 34"), Some("12"));
        assert_eq!(pattern.capture("nothing here"), None);
    }
}
