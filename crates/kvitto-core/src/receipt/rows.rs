//! Repair of receipt rows split by the PDF text layer.
//!
//! A product line should end with its total price. When the renderer pushes
//! that price onto the next physical row, the first row ends with the unit
//! instead (`...1 st`), so it is held back and joined with what follows.

use tracing::trace;

use crate::models::config::ReceiptConfig;
use crate::pdf::TextRow;

/// Turns one page's physical rows into logical lines.
#[derive(Debug, Clone)]
pub struct RowReconstructor {
    unit_suffixes: Vec<String>,
}

impl RowReconstructor {
    /// Create a reconstructor that carries rows ending in any of `unit_suffixes`.
    pub fn new<I, S>(unit_suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            unit_suffixes: unit_suffixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a reconstructor from configuration.
    pub fn from_config(config: &ReceiptConfig) -> Self {
        Self::new(config.unit_suffixes.iter().cloned())
    }

    /// Whether `line` stops where a unit would be, with no price after it.
    pub fn ends_with_unit(&self, line: &str) -> bool {
        self.unit_suffixes
            .iter()
            .any(|suffix| !suffix.is_empty() && line.ends_with(suffix.as_str()))
    }

    /// Rebuild the logical lines of a single page.
    ///
    /// The carried fragment lives only for this call, so nothing leaks from
    /// one page into the next. A fragment still carried when the page ends
    /// is dropped.
    pub fn reconstruct(&self, rows: &[TextRow]) -> Vec<String> {
        let mut lines = Vec::with_capacity(rows.len());
        let mut carry = String::new();

        for row in rows {
            let mut candidate = std::mem::take(&mut carry);
            for run in &row.runs {
                candidate.push_str(&run.text);
            }

            if self.ends_with_unit(&candidate) {
                trace!("Carrying incomplete row: {:?}", candidate);
                carry = candidate;
                continue;
            }

            lines.push(candidate);
        }

        if !carry.is_empty() {
            trace!("Dropping unfinished row at end of page: {:?}", carry);
        }

        lines
    }
}

impl Default for RowReconstructor {
    fn default() -> Self {
        Self::from_config(&ReceiptConfig::default())
    }
}
