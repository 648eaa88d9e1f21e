use bytes::Bytes;
use image::RgbImage;
use serde::Serialize;
use tracing::{info, instrument};

use crate::export::paginate::{paginate, PageSize};
use crate::export::pdf::{DocumentAssembler, Placement};
use crate::export::raster::Rasterizer;
use crate::export::sink::{sanitize_filename, DownloadSink};
use crate::export::ExportError;
use crate::layout::layout_document;
use crate::models::resume::ResumeData;
use crate::preview::render_print;

/// What a successful export produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReceipt {
    pub filename: String,
    pub location: String,
    pub pages: usize,
    pub bytes: usize,
}

/// Drives one export through its collaborators.
pub struct Exporter<R, A, S> {
    rasterizer: R,
    assembler: A,
    sink: S,
    page: PageSize,
}

impl<R, A, S> Exporter<R, A, S>
where
    R: Rasterizer,
    A: DocumentAssembler,
    S: DownloadSink,
{
    pub fn new(rasterizer: R, assembler: A, sink: S) -> Self {
        Self {
            rasterizer,
            assembler,
            sink,
            page: PageSize::A4,
        }
    }

    /// Renders `data` and hands the finished document to the sink.
    ///
    /// The single suspend points are rasterization and delivery; the caller
    /// cancels by dropping the future.
    #[instrument(skip_all, fields(name = %data.personal_info.name))]
    pub async fn export(&self, data: &ResumeData) -> Result<ExportReceipt, ExportError> {
        let canvas = layout_document(&render_print(data));
        let bitmap = self.rasterizer.rasterize(&canvas).await?;
        let (blob, pages) = self.assemble(&bitmap)?;

        let filename = sanitize_filename(&data.personal_info.name);
        let bytes = blob.len();
        let location = self.sink.download(blob, &filename).await?;

        info!(%filename, pages, bytes, "export complete");
        Ok(ExportReceipt {
            filename,
            location,
            pages,
            bytes,
        })
    }

    /// Slices `bitmap` into page bands and serializes them, returning the blob
    /// and its page count.
    pub fn assemble(&self, bitmap: &RgbImage) -> Result<(Bytes, usize), ExportError> {
        let width = bitmap.width();
        let slices = paginate(bitmap.height(), self.page.page_height_px(width));
        if slices.is_empty() {
            return Err(ExportError::RenderTarget(format!(
                "bitmap is {}x{}",
                width,
                bitmap.height()
            )));
        }

        let pt_per_px = self.page.width_pt() / width as f32;
        let mut handle = self.assembler.new_document(self.page)?;
        for slice in &slices {
            let band = image::imageops::crop_imm(bitmap, 0, slice.top_px, width, slice.height_px).to_image();
            let placement = Placement {
                x_pt: 0.0,
                y_pt: 0.0,
                width_pt: self.page.width_pt(),
                height_pt: slice.height_px as f32 * pt_per_px,
            };
            handle = self.assembler.add_image_page(handle, &band, placement)?;
        }

        let blob = self.assembler.serialize(handle)?;
        Ok((blob, slices.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{FileSink, PdfAssembler, EXPORT_FAILED_MESSAGE};
    use crate::layout::Canvas;
    use async_trait::async_trait;
    use image::Rgb;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Produces a blank bitmap at scale 2 of the canvas, or a fixed height.
    struct BlankRasterizer {
        height_override: Option<u32>,
    }

    #[async_trait]
    impl Rasterizer for BlankRasterizer {
        async fn rasterize(&self, canvas: &Canvas) -> Result<RgbImage, ExportError> {
            let height = self.height_override.unwrap_or(canvas.height_px * 2);
            Ok(RgbImage::from_pixel(canvas.width_px * 2, height, Rgb([255, 255, 255])))
        }
    }

    struct BrokenRasterizer;

    #[async_trait]
    impl Rasterizer for BrokenRasterizer {
        async fn rasterize(&self, _canvas: &Canvas) -> Result<RgbImage, ExportError> {
            Err(ExportError::RenderTarget("surface failed to materialize".into()))
        }
    }

    /// Records heights of every placed band.
    #[derive(Default)]
    struct RecordingAssembler {
        bands: Mutex<Vec<u32>>,
    }

    impl DocumentAssembler for RecordingAssembler {
        type Handle = usize;

        fn new_document(&self, _page: PageSize) -> Result<usize, ExportError> {
            Ok(0)
        }

        fn add_image_page(&self, handle: usize, image: &RgbImage, _p: Placement) -> Result<usize, ExportError> {
            self.bands.lock().unwrap().push(image.height());
            Ok(handle + 1)
        }

        fn serialize(&self, handle: usize) -> Result<Bytes, ExportError> {
            Ok(Bytes::from(vec![0u8; handle]))
        }
    }

    #[derive(Default)]
    struct MemorySink {
        calls: AtomicUsize,
        last: Mutex<Option<(String, Bytes)>>,
    }

    #[async_trait]
    impl DownloadSink for MemorySink {
        async fn download(&self, blob: Bytes, filename: &str) -> Result<String, ExportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some((filename.to_string(), blob));
            Ok(format!("memory://{filename}"))
        }
    }

    #[tokio::test]
    async fn test_export_sample_to_single_page_pdf() {
        let exporter = Exporter::new(
            BlankRasterizer { height_override: Some(1000) },
            PdfAssembler,
            MemorySink::default(),
        );
        let receipt = exporter.export(&ResumeData::sample()).await.unwrap();

        assert_eq!(receipt.filename, "Alex_Johnson.pdf");
        assert_eq!(receipt.pages, 1);
        let (name, blob) = exporter.sink.last.lock().unwrap().clone().unwrap();
        assert_eq!(name, "Alex_Johnson.pdf");
        assert_eq!(blob.len(), receipt.bytes);
        assert_eq!(lopdf::Document::load_mem(&blob).unwrap().get_pages().len(), 1);
    }

    #[tokio::test]
    async fn test_tall_content_continues_on_next_page() {
        // Page height at width 1588 is 2246; 2246 + 500 spills onto a second page.
        let exporter = Exporter::new(
            BlankRasterizer { height_override: Some(2746) },
            RecordingAssembler::default(),
            MemorySink::default(),
        );
        let receipt = exporter.export(&ResumeData::sample()).await.unwrap();

        assert_eq!(receipt.pages, 2);
        assert_eq!(*exporter.assembler.bands.lock().unwrap(), vec![2246, 500]);
    }

    #[tokio::test]
    async fn test_empty_name_uses_fallback_filename() {
        let exporter = Exporter::new(
            BlankRasterizer { height_override: None },
            RecordingAssembler::default(),
            MemorySink::default(),
        );
        let receipt = exporter.export(&ResumeData::default()).await.unwrap();
        assert_eq!(receipt.filename, "resume.pdf");
    }

    #[tokio::test]
    async fn test_raster_failure_offers_nothing_for_download() {
        let exporter = Exporter::new(BrokenRasterizer, PdfAssembler, MemorySink::default());
        let err = exporter.export(&ResumeData::sample()).await.unwrap_err();

        assert_eq!(err.user_message(), EXPORT_FAILED_MESSAGE);
        assert_eq!(exporter.sink.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_zero_height_bitmap_fails_before_sink() {
        let exporter = Exporter::new(
            BlankRasterizer { height_override: Some(0) },
            PdfAssembler,
            MemorySink::default(),
        );
        let result = exporter.export(&ResumeData::sample()).await;
        assert!(matches!(result, Err(ExportError::RenderTarget(_))));
        assert_eq!(exporter.sink.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_export_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(
            BlankRasterizer { height_override: None },
            PdfAssembler,
            FileSink::new(dir.path()),
        );
        let receipt = exporter.export(&ResumeData::sample()).await.unwrap();

        let bytes = std::fs::read(dir.path().join(&receipt.filename)).unwrap();
        assert_eq!(bytes.len(), receipt.bytes);
    }
}
