pub mod decoder;
pub mod image_sink;
pub mod pipeline;
pub mod sheet_sink;

pub use decoder::{decode_bytes, decode_path};
pub use image_sink::{ImageSink, PngFileSink};
pub use pipeline::{
    default_output_paths, Conversion, ConversionPipeline, ExportOutcome, ExportReport,
};
pub use sheet_sink::{TableSink, XlsxFileSink};
