//! Tabular sinks: persist a [`TabularDocument`].

use std::path::PathBuf;

use palette_grid::TabularDocument;
use rust_xlsxwriter::{Color, Format, FormatPattern, Workbook};

use crate::error::PipelineError;

/// Destination for a tabular export.
pub trait TableSink {
    /// Human-readable destination, used in logs and errors
    fn destination(&self) -> String;

    /// Persist `document`
    fn write_table(&self, document: &TabularDocument) -> Result<(), PipelineError>;
}

/// Writes an `.xlsx` workbook with a single sheet.
#[derive(Debug, Clone)]
pub struct XlsxFileSink {
    path: PathBuf,
}

impl XlsxFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TableSink for XlsxFileSink {
    fn destination(&self) -> String {
        self.path.display().to_string()
    }

    fn write_table(&self, document: &TabularDocument) -> Result<(), PipelineError> {
        let mut workbook =
            build_workbook(document).map_err(|e| PipelineError::sink_write(self.destination(), e))?;
        workbook
            .save(&self.path)
            .map_err(|e| PipelineError::sink_write(self.destination(), e))
    }
}

/// Encode a document as xlsx bytes.
pub fn encode_xlsx(document: &TabularDocument) -> Result<Vec<u8>, String> {
    let mut workbook = build_workbook(document)?;
    workbook.save_to_buffer().map_err(|e| e.to_string())
}

fn build_workbook(document: &TabularDocument) -> Result<Workbook, String> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(document.sheet_name())
        .map_err(|e| e.to_string())?;

    for cell in document.cells() {
        let col = u16::try_from(cell.col)
            .map_err(|_| format!("column {} exceeds the sheet width", cell.col))?;
        let value = cell.value as f64;
        let written = match cell.fill {
            Some(fill) => {
                let format = Format::new()
                    .set_background_color(Color::RGB(fill.to_rgb_u32()))
                    .set_pattern(FormatPattern::Solid);
                worksheet.write_number_with_format(cell.row, col, value, &format)
            }
            None => worksheet.write_number(cell.row, col, value),
        };
        written.map_err(|e| e.to_string())?;
    }

    Ok(workbook)
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette_grid::{export, IndexGrid, Palette};

    fn document() -> TabularDocument {
        let palette = Palette::from_hex(&["#FF0000", "#00FF00"]).unwrap();
        let grid = IndexGrid::new(vec![0, 1, 1, 1], 2, 2, palette).unwrap();
        export(&grid)
    }

    #[test]
    fn test_encode_xlsx_is_zip() {
        let bytes = encode_xlsx(&document()).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let sink = XlsxFileSink::new("/nonexistent/pixelcut/out.xlsx");
        let err = sink.write_table(&document()).unwrap_err();
        assert!(matches!(err, PipelineError::SinkWrite { .. }));
    }
}
