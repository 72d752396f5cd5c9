//! Aligned text report of extracted products.
//!
//! Layout: an empty leading column, then one right-aligned column per field.
//! Every column is as wide as its widest cell plus one space, and each cell
//! is closed by `|`:
//!
//! ```text
//!  |    Description|     ArticleID| Price| UnitWeight| Unit| Total price|
//!  |               |              |      |           |     |            |
//!  | LF Lätt CF 13%| 7318690075677| 16.50|      1.000|   st|       16.50|
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::product::ProductRecord;

/// Column titles, in output order.
pub const HEADERS: [&str; 6] = [
    "Description",
    "ArticleID",
    "Price",
    "UnitWeight",
    "Unit",
    "Total price",
];

const PADDING: usize = 1;
const SEPARATOR: char = '|';

/// Cell texts for one record, in [`HEADERS`] order.
pub fn record_cells(record: &ProductRecord) -> [String; 6] {
    [
        record.description.clone(),
        record.article_code(),
        format_fixed(record.price, 2),
        format_fixed(record.unit_weight, 3),
        record.unit.clone(),
        format_fixed(record.total_price, 2),
    ]
}

/// Format with exactly `dp` fractional digits, halves rounded away from zero.
///
/// Values are exact decimals, so a written half always rounds up in
/// magnitude: `0.4825` at three places is `"0.483"`. Formatting the same
/// value as a binary float with `%.3f` gives `"0.482"`, because the nearest
/// `f64` lies just below the half.
pub fn format_fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", dp as usize, rounded)
}

/// Render the header, a blank separator row, and one row per record.
pub fn render_table(records: &[ProductRecord]) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(records.len() + 2);

    rows.push(with_leading_column(HEADERS.iter().map(|h| h.to_string())));
    rows.push(vec![String::new(); HEADERS.len() + 1]);
    for record in records {
        rows.push(with_leading_column(record_cells(record)));
    }

    align_right(&rows)
}

fn with_leading_column(cells: impl IntoIterator<Item = String>) -> Vec<String> {
    std::iter::once(String::new()).chain(cells).collect()
}

fn align_right(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                + PADDING
        })
        .collect();

    let mut out = String::new();
    for row in rows {
        for (cell, width) in row.iter().zip(&widths) {
            let pad = width - cell.chars().count();
            out.extend(std::iter::repeat_n(' ', pad));
            out.push_str(cell);
            out.push(SEPARATOR);
        }
        out.push('\n');
    }
    out
}
