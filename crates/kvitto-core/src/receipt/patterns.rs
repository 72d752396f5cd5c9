//! Regex patterns for receipt line items.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // One product line with every field run together, e.g.
    // "LF Lätt CF 13%731869007567716.501 st16.50" splits into
    // (LF Lätt CF 13%) (7318690075677) (16.50) (1) (st) (16.50)
    // The separator before the unit is ASCII whitespace only.
    pub static ref PRODUCT_LINE: Regex = Regex::new(
        r"^(.*?)([0-9]{13})([0-9]+\.[0-9]{2})([0-9]*\.?[0-9]+)[\t\n\x0C\r ](.*?)([0-9]+\.[0-9]{2})$"
    ).unwrap();
}

/// Number of capture groups (including the whole match) a product line has.
pub const PRODUCT_LINE_GROUPS: usize = 7;
