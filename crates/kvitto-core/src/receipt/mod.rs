//! Receipt line-item extraction.
//!
//! Rows from a [`RowSource`](crate::pdf::RowSource) are repaired into logical
//! lines by [`RowReconstructor`], and each line is cut into
//! [`ProductRecord`](crate::models::ProductRecord)s by [`Segmenter`].

pub mod patterns;
mod pipeline;
mod rows;
mod segmenter;

pub use pipeline::ReceiptExtractor;
pub use rows::RowReconstructor;
pub use segmenter::{Segmenter, segment_line};
