//! Receipt line-item models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::report::format_fixed;

/// One line item read off a receipt.
///
/// Every record is built from exactly one full pattern match on one logical
/// line. Records are never patched up from partial data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Item name or variant, exactly as printed.
    pub description: String,

    /// Catalog identifier (13 digits on the receipt).
    pub article_id: u64,

    /// Unit price.
    pub price: Decimal,

    /// Quantity or weight per unit.
    pub unit_weight: Decimal,

    /// Unit of measure (`st`, `kg`, ...).
    pub unit: String,

    /// Line total as printed. Not recomputed from price and weight.
    pub total_price: Decimal,
}

impl ProductRecord {
    /// Article identifier padded to the 13 digits printed on the receipt.
    pub fn article_code(&self) -> String {
        format!("{:013}", self.article_id)
    }

    /// Render the record back into the run-together form found on the receipt,
    /// e.g. `LF Lätt CF 13%731869007567716.501 st16.50`.
    pub fn to_receipt_line(&self) -> String {
        format!(
            "{}{}{}{} {}{}",
            self.description,
            self.article_code(),
            format_fixed(self.price, 2),
            self.unit_weight,
            self.unit,
            format_fixed(self.total_price, 2)
        )
    }
}

/// Outcome of running the pipeline over a whole document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Records in page order, then line order.
    pub products: Vec<ProductRecord>,

    /// Number of pages the source reported.
    pub page_count: u32,

    /// Logical lines handed to the segmenter.
    pub lines: usize,

    /// Pages that were invalid or failed to yield rows.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped_pages: Vec<u32>,
}

impl ExtractionResult {
    /// Sum of all line totals.
    pub fn total(&self) -> Decimal {
        self.products.iter().map(|p| p.total_price).sum()
    }
}
