//! Export pipeline: print projection → layout → raster → pages → document → sink.
//!
//! The pipeline is atomic from the caller's point of view. Nothing reaches the
//! download sink until the whole document has been assembled in memory, so any
//! failure before that point leaves no artifact behind.

pub mod paginate;
pub mod pdf;
pub mod pipeline;
pub mod raster;
pub mod sink;

pub use paginate::{paginate, PageSize, PageSlice};
pub use pdf::{DocumentAssembler, PdfAssembler, Placement};
pub use pipeline::{ExportReceipt, Exporter};
pub use raster::{GlyphRasterizer, Rasterizer, RASTER_SCALE};
pub use sink::{sanitize_filename, DownloadSink, FileSink, FALLBACK_FILENAME};

use thiserror::Error;

/// The one message a user sees for any export failure.
pub const EXPORT_FAILED_MESSAGE: &str = "Failed to generate PDF. Please try again.";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("render target unavailable: {0}")]
    RenderTarget(String),

    #[error("no font configured for rasterization")]
    FontMissing,

    #[error("invalid font: {0}")]
    InvalidFont(String),

    #[error("rasterization failed: {0}")]
    Rasterize(String),

    #[error("document assembly failed: {0}")]
    Assemble(String),

    #[error("download failed: {0}")]
    Download(#[from] std::io::Error),
}

impl ExportError {
    pub fn user_message(&self) -> &'static str {
        EXPORT_FAILED_MESSAGE
    }
}
