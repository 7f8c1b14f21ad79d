//! Product section location and line-item grouping.
//!
//! A product section starts at the first literal `Product` and runs to the
//! next blank line (or end of text). Within a section, each line is tested
//! against every line-item pattern and matches are folded into a single
//! accumulator. As soon as the accumulator holds all four attributes it is
//! emitted as a [`LineItem`] and reset, so one record may span several
//! lines and a later match for the same attribute overwrites an earlier one.
//!
//! An accumulator that is still partial when its section ends is dropped.
//! The number of dropped records is reported in [`Grouping::dropped_partial`].

use tracing::{debug, trace};

use super::patterns::{LINE_ITEM_PATTERNS, PRODUCT_SECTION};
use crate::models::config::SectionMode;
use crate::models::record::{LineItem, PartialLineItem};

/// Line items grouped from one or more product sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouping {
    /// Completed items, in completion order.
    pub items: Vec<LineItem>,
    /// Partial records discarded at the end of a section.
    pub dropped_partial: usize,
    /// Number of product sections that were grouped.
    pub sections: usize,
}

impl Grouping {
    fn merge(mut self, other: Grouping) -> Self {
        self.items.extend(other.items);
        self.dropped_partial += other.dropped_partial;
        self.sections += other.sections;
        self
    }
}

/// All non-overlapping product sections, in text order.
///
/// The terminating blank line is not part of a section.
pub fn product_sections(text: &str) -> Vec<&str> {
    PRODUCT_SECTION
        .find_iter(text)
        .map(|m| {
            let section = m.as_str();
            section.strip_suffix("\n\n").unwrap_or(section)
        })
        .collect()
}

/// Group the lines of a single product section into line items.
pub fn group_line_items(section: &str) -> Grouping {
    let (items, pending) = section.lines().fold(
        (Vec::new(), PartialLineItem::new()),
        |(mut items, mut current), line| {
            for pattern in LINE_ITEM_PATTERNS.iter() {
                if let Some(value) = pattern.capture(line) {
                    trace!("Line item {} = {:?}", pattern.key, value);
                    current.set(pattern.key, value);
                }
            }

            match current.complete() {
                Some(item) => {
                    items.push(item);
                    (items, PartialLineItem::new())
                }
                None => (items, current),
            }
        },
    );

    let dropped_partial = usize::from(!pending.is_empty());
    if dropped_partial > 0 {
        debug!(
            "Dropping partial line item with {}/4 attributes at end of section",
            pending.filled()
        );
    }

    Grouping {
        items,
        dropped_partial,
        sections: 1,
    }
}

/// Locate product sections in `text` and group their line items.
///
/// With [`SectionMode::First`] only the first section is used; any further
/// sections are ignored. With [`SectionMode::All`] every section is grouped
/// independently and the results are concatenated.
pub fn extract_line_items(text: &str, mode: SectionMode) -> Grouping {
    let sections = product_sections(text);
    debug!("Found {} product section(s)", sections.len());

    match mode {
        SectionMode::First => {
            if sections.len() > 1 {
                debug!("Ignoring {} additional product section(s)", sections.len() - 1);
            }
            sections
                .first()
                .map(|section| group_line_items(section))
                .unwrap_or_default()
        }
        SectionMode::All => sections
            .iter()
            .map(|section| group_line_items(section))
            .fold(Grouping::default(), Grouping::merge),
    }
}
