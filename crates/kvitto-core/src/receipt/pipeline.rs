//! Page-by-page extraction over a row source.

use tracing::{debug, info, warn};

use super::rows::RowReconstructor;
use super::segmenter::Segmenter;
use crate::models::config::KvittoConfig;
use crate::models::product::ExtractionResult;
use crate::pdf::{RowSource, TextRow};

/// Runs row repair and segmentation over every page of a document.
#[derive(Debug, Clone)]
pub struct ReceiptExtractor {
    reconstructor: RowReconstructor,
    segmenter: Segmenter,
    /// Maximum pages to process (0 = unlimited).
    max_pages: usize,
}

impl ReceiptExtractor {
    /// Create an extractor from configuration.
    pub fn new(config: &KvittoConfig) -> Self {
        Self {
            reconstructor: RowReconstructor::from_config(&config.receipt),
            segmenter: Segmenter::new(),
            max_pages: config.pdf.max_pages,
        }
    }

    /// Set the page limit (0 = unlimited).
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Extract all product records from `source`, in page order.
    pub fn extract<S: RowSource + ?Sized>(&self, source: &S) -> ExtractionResult {
        self.extract_with_progress(source, |_, _| {})
    }

    /// Like [`extract`](Self::extract), calling `on_page(page, total)` before
    /// each page is read.
    ///
    /// Invalid pages and pages whose rows cannot be read contribute nothing;
    /// they are listed in `skipped_pages` and the run continues.
    pub fn extract_with_progress<S, F>(&self, source: &S, mut on_page: F) -> ExtractionResult
    where
        S: RowSource + ?Sized,
        F: FnMut(u32, u32),
    {
        let page_count = source.page_count();
        let mut result = ExtractionResult {
            page_count,
            ..Default::default()
        };

        let last_page = match self.max_pages {
            0 => page_count,
            n => page_count.min(u32::try_from(n).unwrap_or(u32::MAX)),
        };
        if last_page < page_count {
            info!("Processing first {} of {} pages", last_page, page_count);
        }

        for page in 1..=last_page {
            on_page(page, last_page);

            if !source.is_valid_page(page) {
                debug!("Skipping invalid page {}", page);
                result.skipped_pages.push(page);
                continue;
            }

            match source.extract_rows(page) {
                Ok(rows) => self.extract_page(page, &rows, &mut result),
                Err(e) => {
                    warn!("Failed to read rows from page {}: {}", page, e);
                    result.skipped_pages.push(page);
                }
            }
        }

        info!(
            "Extracted {} products from {} lines on {} pages",
            result.products.len(),
            result.lines,
            page_count
        );
        result
    }

    /// Extract from rows that were already read, one entry per page.
    pub fn extract_pages<I>(&self, pages: I) -> ExtractionResult
    where
        I: IntoIterator<Item = Vec<TextRow>>,
    {
        let mut result = ExtractionResult::default();
        for (i, rows) in pages.into_iter().enumerate() {
            let page = i as u32 + 1;
            result.page_count = page;
            self.extract_page(page, &rows, &mut result);
        }
        result
    }

    fn extract_page(&self, page: u32, rows: &[TextRow], result: &mut ExtractionResult) {
        let lines = self.reconstructor.reconstruct(rows);
        let before = result.products.len();

        for line in &lines {
            result.products.extend(self.segmenter.segment(line));
        }
        result.lines += lines.len();

        debug!(
            "Page {}: {} rows, {} lines, {} products",
            page,
            rows.len(),
            lines.len(),
            result.products.len() - before
        );
    }
}

impl Default for ReceiptExtractor {
    fn default() -> Self {
        Self::new(&KvittoConfig::default())
    }
}
