//! Field segmentation of logical receipt lines.

use std::str::FromStr;

use regex::Captures;
use rust_decimal::Decimal;
use tracing::trace;

use super::patterns::{PRODUCT_LINE, PRODUCT_LINE_GROUPS};
use crate::models::product::ProductRecord;

/// Cuts logical lines into product records.
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter;

impl Segmenter {
    pub fn new() -> Self {
        Self
    }

    /// Extract every product record in `line`, left to right.
    ///
    /// Lines that do not match (headers, totals, store details) give an empty
    /// list.
    pub fn segment(&self, line: &str) -> Vec<ProductRecord> {
        PRODUCT_LINE
            .captures_iter(line)
            .filter(|caps| caps.len() == PRODUCT_LINE_GROUPS)
            .filter_map(|caps| record_from_captures(&caps))
            .collect()
    }
}

/// Extract every product record in `line`.
pub fn segment_line(line: &str) -> Vec<ProductRecord> {
    Segmenter::new().segment(line)
}

fn record_from_captures(caps: &Captures<'_>) -> Option<ProductRecord> {
    let field = |i: usize| caps.get(i).map(|m| m.as_str());

    Some(ProductRecord {
        description: field(1)?.to_string(),
        article_id: parse_or_zero("article_id", field(2)?),
        price: parse_or_zero("price", field(3)?),
        unit_weight: parse_or_zero("unit_weight", field(4)?),
        unit: field(5)?.to_string(),
        total_price: parse_or_zero("total_price", field(6)?),
    })
}

/// Numbers that match the pattern but still fail to parse (e.g. a weight
/// too large for a decimal) become zero; the record is kept.
fn parse_or_zero<T>(field: &str, value: &str) -> T
where
    T: FromStr + Default,
{
    value.parse().unwrap_or_else(|_| {
        trace!("Could not parse {} from {:?}, using zero", field, value);
        T::default()
    })
}
