//! Positioned glyph collection on top of pdf-extract's font decoding.

use pdf_extract::{MediaBox, OutputDev, OutputError, Transform};

use super::TextRun;

/// `OutputDev` that records every decoded glyph as a run at its origin.
///
/// pdf-extract resolves the font encoding (`/Encoding`, `/Differences`,
/// `ToUnicode`, CID codes), so runs arrive as Unicode text.
#[derive(Debug, Default)]
pub(crate) struct RunCollector {
    runs: Vec<TextRun>,
}

impl RunCollector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn into_runs(self) -> Vec<TextRun> {
        self.runs
    }
}

impl OutputDev for RunCollector {
    fn begin_page(
        &mut self,
        _page_num: u32,
        _media_box: &MediaBox,
        _art_box: Option<(f64, f64, f64, f64)>,
    ) -> Result<(), OutputError> {
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), OutputError> {
        Ok(())
    }

    fn output_character(
        &mut self,
        trm: &Transform,
        _width: f64,
        _spacing: f64,
        _font_size: f64,
        char: &str,
    ) -> Result<(), OutputError> {
        // unmapped CIDs decode to nothing
        if !char.is_empty() {
            self.runs.push(TextRun::new(trm.m31, trm.m32, char));
        }
        Ok(())
    }

    fn begin_word(&mut self) -> Result<(), OutputError> {
        Ok(())
    }

    fn end_word(&mut self) -> Result<(), OutputError> {
        Ok(())
    }

    fn end_line(&mut self) -> Result<(), OutputError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_glyphs_land_at_matrix_origin() {
        let mut collector = RunCollector::new();
        let trm = Transform::row_major(10.0, 0.0, 0.0, 10.0, 120.0, 700.0);

        collector.output_character(&trm, 0.6, 0.0, 10.0, "7").unwrap();
        collector.output_character(&trm, 0.0, 0.0, 10.0, "").unwrap();

        assert_eq!(collector.into_runs(), vec![TextRun::new(120.0, 700.0, "7")]);
    }
}
