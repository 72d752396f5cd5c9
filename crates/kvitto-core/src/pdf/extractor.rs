//! PDF text row extraction using lopdf and pdf-extract.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use lopdf::Document;
use tracing::{debug, trace};

use super::collector::RunCollector;
use super::{Result, RowSource, TextRow, group_rows};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// Row source backed by a lopdf document.
pub struct PdfRowExtractor {
    document: Option<Document>,
    row_tolerance: f64,
}

impl PdfRowExtractor {
    /// Create an extractor with no document loaded.
    pub fn new() -> Self {
        Self {
            document: None,
            row_tolerance: PdfConfig::default().row_tolerance,
        }
    }

    /// Set the baseline tolerance used to group runs into rows.
    pub fn with_row_tolerance(mut self, tolerance: f64) -> Self {
        self.row_tolerance = tolerance;
        self
    }

    /// Read and load a PDF file.
    pub fn open(path: &Path, config: &PdfConfig) -> crate::Result<Self> {
        let data = std::fs::read(path)?;
        let mut extractor = Self::new().with_row_tolerance(config.row_tolerance);
        extractor.load(&data)?;
        Ok(extractor)
    }

    /// Load a PDF from bytes.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Receipts are sometimes "protected" with an empty user password
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");
        }

        debug!("Loaded PDF with {} pages", doc.get_pages().len());
        self.document = Some(doc);
        Ok(())
    }

    fn document(&self) -> Result<&Document> {
        self.document
            .as_ref()
            .ok_or_else(|| PdfError::Parse("No document loaded".to_string()))
    }
}

impl Default for PdfRowExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl RowSource for PdfRowExtractor {
    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn is_valid_page(&self, page: u32) -> bool {
        let Some(doc) = self.document.as_ref() else {
            return false;
        };
        doc.get_pages()
            .get(&page)
            .and_then(|id| doc.get_object(*id).ok())
            .is_some_and(|obj| obj.as_dict().is_ok())
    }

    fn extract_rows(&self, page: u32) -> Result<Vec<TextRow>> {
        let doc = self.document()?;
        if !doc.get_pages().contains_key(&page) {
            return Err(PdfError::InvalidPage(page));
        }

        // pdf-extract panics on some malformed font and content objects
        let mut collector = RunCollector::new();
        panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::output_doc_page(doc, &mut collector, page)
        }))
        .map_err(|_| PdfError::TextExtraction(format!("page {}: malformed content", page)))?
        .map_err(|e| PdfError::TextExtraction(format!("page {}: {}", page, e)))?;

        let runs = collector.into_runs();
        trace!("Page {}: {} glyphs", page, runs.len());

        let rows = group_rows(runs, self.row_tolerance);
        debug!("Page {}: {} rows", page, rows.len());
        Ok(rows)
    }
}
