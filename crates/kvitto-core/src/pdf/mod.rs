//! PDF row extraction.

mod collector;
mod extractor;

pub use extractor::PdfRowExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// A piece of text as placed by the document on one physical row.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Horizontal origin in page space.
    pub x: f64,
    /// Baseline in page space (larger is higher on the page).
    pub y: f64,
    /// Decoded text.
    pub text: String,
}

impl TextRun {
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
        }
    }
}

/// Runs sharing one baseline, ordered left to right.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextRow {
    /// Baseline of the first run in the row.
    pub y: f64,
    /// Runs in reading order.
    pub runs: Vec<TextRun>,
}

impl TextRow {
    /// Build a row from bare strings, positioned left to right on one baseline.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let runs = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| TextRun::new(i as f64, 0.0, text))
            .collect();
        Self { y: 0.0, runs }
    }

    /// Concatenated text of all runs, in order.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Narrow view of a paginated document: enough to pull text rows per page.
///
/// Pages are numbered from 1.
pub trait RowSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Whether the page exists and can be read at all.
    fn is_valid_page(&self, page: u32) -> bool;

    /// Text rows of a page, top to bottom.
    fn extract_rows(&self, page: u32) -> Result<Vec<TextRow>>;
}

/// Group runs into rows by baseline.
///
/// Runs whose baselines lie within `tolerance` of a row's first run join
/// that row. Rows come out top to bottom, runs left to right; runs with the
/// same x keep their content-stream order.
pub fn group_rows(mut runs: Vec<TextRun>, tolerance: f64) -> Vec<TextRow> {
    runs.sort_by(|a, b| b.y.total_cmp(&a.y));

    let mut rows: Vec<TextRow> = Vec::new();
    for run in runs {
        match rows.last_mut() {
            Some(row) if (row.y - run.y).abs() <= tolerance => row.runs.push(run),
            _ => rows.push(TextRow {
                y: run.y,
                runs: vec![run],
            }),
        }
    }

    for row in &mut rows {
        row.runs.sort_by(|a, b| a.x.total_cmp(&b.x));
    }

    rows
}
