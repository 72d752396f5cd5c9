//! Data models shared by the extraction pipeline and its callers.

pub mod config;
pub mod product;

pub use config::{KvittoConfig, PdfConfig, ReceiptConfig};
pub use product::{ExtractionResult, ProductRecord};
