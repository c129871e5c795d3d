use std::path::{Path, PathBuf};

use palette_grid::{export, render, IndexGrid, PaletteMapper, RasterImage};

use crate::error::PipelineError;
use crate::services::decoder::decode_path;
use crate::services::image_sink::ImageSink;
use crate::services::sheet_sink::TableSink;

/// Outcome of one export
#[derive(Debug)]
pub struct ExportOutcome {
    /// Where the export was written
    pub destination: String,
    /// Whether it succeeded
    pub result: Result<(), PipelineError>,
}

impl ExportOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of the image and table exports of one conversion.
///
/// Both exports are always attempted; a failure in one does not prevent the
/// other.
#[derive(Debug)]
pub struct ExportReport {
    pub image: ExportOutcome,
    pub table: ExportOutcome,
}

impl ExportReport {
    /// Whether both exports succeeded
    pub fn is_ok(&self) -> bool {
        self.image.is_ok() && self.table.is_ok()
    }

    /// Collapse into the first failure, image before table
    pub fn into_result(self) -> Result<(), PipelineError> {
        self.image.result?;
        self.table.result
    }
}

/// Result from running the conversion pipeline
#[derive(Debug)]
pub struct Conversion {
    /// The classified grid
    pub grid: IndexGrid,
    /// What happened to each export
    pub report: ExportReport,
}

/// Default output paths next to the input: `<input>_<preset>.png` and
/// `<input>_<preset>.xlsx`
pub fn default_output_paths(input: &Path, preset: &str) -> (PathBuf, PathBuf) {
    let base = input.as_os_str().to_string_lossy();
    (
        PathBuf::from(format!("{base}_{preset}.png")),
        PathBuf::from(format!("{base}_{preset}.xlsx")),
    )
}

/// Conversion pipeline that orchestrates downsample → classify → export
pub struct ConversionPipeline {
    mapper: PaletteMapper,
}

impl ConversionPipeline {
    pub fn new(mapper: PaletteMapper) -> Self {
        Self { mapper }
    }

    /// Downsample and classify `image` without exporting.
    pub fn quantize(&self, image: &RasterImage) -> Result<IndexGrid, PipelineError> {
        let small = self.mapper.downsample(image)?;
        tracing::info!(
            width = image.width(),
            height = image.height(),
            scale = self.mapper.scale_factor(),
            grid_width = small.width(),
            grid_height = small.height(),
            "Downsampled"
        );

        let grid = self.mapper.classifier().classify(&small);
        tracing::info!(
            cells = grid.cell_count(),
            palette = self.mapper.palette().len(),
            "Classified"
        );
        Ok(grid)
    }

    /// Quantize `image` and hand the results to both sinks.
    ///
    /// Quantization errors are returned before any sink is touched. Export
    /// errors are collected in the returned [`ExportReport`].
    pub fn run(
        &self,
        image: &RasterImage,
        image_sink: &dyn ImageSink,
        table_sink: &dyn TableSink,
    ) -> Result<Conversion, PipelineError> {
        let grid = self.quantize(image)?;

        let image = ExportOutcome {
            destination: image_sink.destination(),
            result: image_sink.write_image(&render(&grid)),
        };
        log_outcome("image", &image);

        let table = ExportOutcome {
            destination: table_sink.destination(),
            result: table_sink.write_table(&export(&grid)),
        };
        log_outcome("table", &table);

        Ok(Conversion {
            grid,
            report: ExportReport { image, table },
        })
    }

    /// Decode `input` and run the pipeline on it.
    pub fn run_file(
        &self,
        input: &Path,
        image_sink: &dyn ImageSink,
        table_sink: &dyn TableSink,
    ) -> Result<Conversion, PipelineError> {
        let image = decode_path(input)?;
        tracing::info!(
            input = %input.display(),
            width = image.width(),
            height = image.height(),
            "Decoded"
        );
        self.run(&image, image_sink, table_sink)
    }
}

fn log_outcome(kind: &str, outcome: &ExportOutcome) {
    match &outcome.result {
        Ok(()) => tracing::info!(kind, destination = %outcome.destination, "Exported"),
        Err(e) => {
            tracing::warn!(kind, destination = %outcome.destination, error = %e, "Export failed")
        }
    }
}
