//! Core library for grocery receipt extraction.
//!
//! This crate provides:
//! - PDF text row extraction (lopdf, pdf-extract)
//! - Repair of receipt rows split across physical lines
//! - Line-item segmentation into product records
//! - An aligned text report of the results

pub mod error;
pub mod models;
pub mod pdf;
pub mod receipt;
pub mod report;

#[cfg(any(test, feature = "fixtures"))]
#[doc(hidden)]
pub mod testing;

pub use error::{KvittoError, PdfError, Result};
pub use models::config::{KvittoConfig, PdfConfig, ReceiptConfig};
pub use models::product::{ExtractionResult, ProductRecord};
pub use pdf::{PdfRowExtractor, RowSource, TextRow, TextRun};
pub use receipt::{ReceiptExtractor, RowReconstructor, Segmenter, segment_line};
pub use report::render_table;
