//! Rasterization of the laid-out canvas into an RGB bitmap.

use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;
use swash::scale::{Render, ScaleContext, Source, StrikeWith};
use swash::shape::ShapeContext;
use swash::zeno::{Format, Vector};
use swash::FontRef;
use tracing::debug;

use crate::export::ExportError;
use crate::layout::{Canvas, DrawOp};
use crate::preview::document::{Color, FontWeight};

/// Device pixels per logical pixel.
pub const RASTER_SCALE: u32 = 2;

/// Turns a render target into a bitmap at `RASTER_SCALE`.
#[async_trait]
pub trait Rasterizer: Send + Sync {
    async fn rasterize(&self, canvas: &Canvas) -> Result<RgbImage, ExportError>;
}

/// Paints canvas ops with one outline font, shaped and scaled by swash.
#[derive(Clone)]
pub struct GlyphRasterizer {
    font_data: Bytes,
    scale: u32,
}

impl GlyphRasterizer {
    pub fn new(font_data: impl Into<Bytes>) -> Result<Self, ExportError> {
        let font_data = font_data.into();
        if FontRef::from_index(&font_data, 0).is_none() {
            return Err(ExportError::InvalidFont("not a TrueType/OpenType font".into()));
        }
        Ok(Self {
            font_data,
            scale: RASTER_SCALE,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ExportError> {
        let bytes = std::fs::read(path)
            .map_err(|e| ExportError::InvalidFont(format!("{}: {e}", path.display())))?;
        Self::new(bytes)
    }
}

fn wght(weight: FontWeight) -> f32 {
    match weight {
        FontWeight::Regular => 400.0,
        FontWeight::Medium => 500.0,
        FontWeight::Bold => 700.0,
    }
}

/// Shapes `text` and alpha-blends each glyph onto `img`. `y` is the top of the line box.
#[allow(clippy::too_many_arguments)]
fn draw_text(
    img: &mut RgbImage,
    font: FontRef<'_>,
    shape_context: &mut ShapeContext,
    scale_context: &mut ScaleContext,
    text: &str,
    (x, y): (f32, f32),
    size: f32,
    weight: f32,
    color: Color,
) {
    let mut shaper = shape_context
        .builder(font)
        .size(size)
        .variations(&[("wght", weight)])
        .build();
    shaper.add_str(text);

    let mut scaler = scale_context
        .builder(font)
        .size(size)
        .variations(&[("wght", weight)])
        .build();

    let mut pen_x = x;
    let baseline = y + size;

    shaper.shape_with(|cluster| {
        for glyph in cluster.glyphs {
            let rendered = Render::new(&[
                Source::ColorOutline(0),
                Source::ColorBitmap(StrikeWith::BestFit),
                Source::Outline,
            ])
            .format(Format::Alpha)
            .offset(Vector::new(glyph.x, glyph.y))
            .render(&mut scaler, glyph.id);

            if let Some(mask) = rendered {
                let left = (pen_x + mask.placement.left as f32) as i32;
                let top = (baseline - mask.placement.top as f32) as i32;
                let width = mask.placement.width;

                for py in 0..mask.placement.height {
                    for px in 0..width {
                        let alpha = mask.data[(py * width + px) as usize];
                        let (dx, dy) = (left + px as i32, top + py as i32);
                        if alpha == 0 || dx < 0 || dy < 0 || dx as u32 >= img.width() || dy as u32 >= img.height() {
                            continue;
                        }
                        let a = alpha as f32 / 255.0;
                        let dest = img.get_pixel_mut(dx as u32, dy as u32);
                        for (channel, src) in dest.0.iter_mut().zip([color.0, color.1, color.2]) {
                            *channel = (src as f32 * a + *channel as f32 * (1.0 - a)) as u8;
                        }
                    }
                }
            }

            pen_x += glyph.advance;
        }
    });
}

fn rgb(color: Color) -> Rgb<u8> {
    Rgb([color.0, color.1, color.2])
}

/// Synchronous paint of `canvas`; runs on the blocking pool.
fn paint(font_data: &[u8], scale: u32, canvas: &Canvas) -> Result<RgbImage, ExportError> {
    let font = FontRef::from_index(font_data, 0)
        .ok_or_else(|| ExportError::InvalidFont("font data no longer parses".into()))?;
    let mut shape_context = ShapeContext::new();
    let mut scale_context = ScaleContext::new();

    let s = scale as f32;
    let device = |v: f32| (v * s).round() as i32;
    let extent = |v: f32| ((v * s).round() as u32).max(1);

    let mut img = RgbImage::from_pixel(
        canvas.width_px * scale,
        canvas.height_px * scale,
        rgb(canvas.background),
    );

    for op in &canvas.ops {
        match op {
            DrawOp::Text {
                x,
                y,
                size_px,
                weight,
                color,
                text,
            } => draw_text(
                &mut img,
                font,
                &mut shape_context,
                &mut scale_context,
                text,
                (x * s, y * s),
                size_px * s,
                wght(*weight),
                *color,
            ),
            DrawOp::Rule { x, y, width, color } => {
                let rect = Rect::at(device(*x), device(*y)).of_size(extent(*width), scale);
                draw_filled_rect_mut(&mut img, rect, rgb(*color));
            }
            DrawOp::Outline {
                x,
                y,
                width,
                height,
                color,
            } => {
                let rect = Rect::at(device(*x), device(*y)).of_size(extent(*width), extent(*height));
                draw_hollow_rect_mut(&mut img, rect, rgb(*color));
            }
        }
    }
    Ok(img)
}

#[async_trait]
impl Rasterizer for GlyphRasterizer {
    async fn rasterize(&self, canvas: &Canvas) -> Result<RgbImage, ExportError> {
        if canvas.width_px == 0 || canvas.height_px == 0 {
            return Err(ExportError::RenderTarget(format!(
                "canvas is {}x{}",
                canvas.width_px, canvas.height_px
            )));
        }

        let font_data = self.font_data.clone();
        let scale = self.scale;
        let canvas = canvas.clone();
        let img = tokio::task::spawn_blocking(move || paint(&font_data, scale, &canvas))
            .await
            .map_err(|e| ExportError::Rasterize(e.to_string()))??;

        debug!(width = img.width(), height = img.height(), "rasterized canvas");
        Ok(img)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_font_bytes_are_rejected() {
        let err = GlyphRasterizer::new(b"not a font".to_vec()).err();
        assert!(matches!(err, Some(ExportError::InvalidFont(_))));
    }

    #[test]
    fn test_missing_font_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = GlyphRasterizer::from_file(&dir.path().join("missing.ttf")).err();
        assert!(matches!(err, Some(ExportError::InvalidFont(_))));
    }

    const FIXTURE_FONT: &[u8] =
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/DejaVuSans.ttf"));

    fn canvas(width_px: u32, height_px: u32, ops: Vec<DrawOp>) -> Canvas {
        Canvas {
            width_px,
            height_px,
            background: Color::WHITE,
            ops,
        }
    }

    #[tokio::test]
    async fn test_output_is_scaled_canvas() {
        let rasterizer = GlyphRasterizer::new(FIXTURE_FONT).unwrap();
        let img = rasterizer.rasterize(&canvas(120, 80, Vec::new())).await.unwrap();

        assert_eq!((img.width(), img.height()), (240, 160));
        assert!(img.pixels().all(|p| *p == Rgb([0xff, 0xff, 0xff])));
    }

    #[tokio::test]
    async fn test_text_darkens_pixels_inside_its_box() {
        let rasterizer = GlyphRasterizer::new(FIXTURE_FONT).unwrap();
        let text = DrawOp::Text {
            x: 10.0,
            y: 10.0,
            size_px: 20.0,
            weight: FontWeight::Bold,
            color: Color::BLACK,
            text: "Ada Lovelace".into(),
        };
        let img = rasterizer.rasterize(&canvas(200, 60, vec![text])).await.unwrap();

        // Line box at scale 2: x from 20, y from 20 to 20 + 2 * 20 * 1.4.
        let inked = (20..img.width())
            .flat_map(|x| (20..76).map(move |y| (x, y)))
            .filter(|&(x, y)| img.get_pixel(x, y).0[0] < 128)
            .count();
        assert!(inked > 50, "only {inked} dark pixels");
        assert_eq!(*img.get_pixel(2, 2), Rgb([0xff, 0xff, 0xff]));
        assert_eq!(*img.get_pixel(398, 118), Rgb([0xff, 0xff, 0xff]));
    }

    #[tokio::test]
    async fn test_rule_fills_scaled_band() {
        let rasterizer = GlyphRasterizer::new(FIXTURE_FONT).unwrap();
        let rule = DrawOp::Rule {
            x: 10.0,
            y: 30.0,
            width: 50.0,
            color: Color::BLACK,
        };
        let img = rasterizer.rasterize(&canvas(100, 50, vec![rule])).await.unwrap();

        assert_eq!(*img.get_pixel(20, 60), Rgb([0, 0, 0]));
        assert_eq!(*img.get_pixel(119, 61), Rgb([0, 0, 0]));
        assert_eq!(*img.get_pixel(20, 62), Rgb([0xff, 0xff, 0xff]));
        assert_eq!(*img.get_pixel(120, 60), Rgb([0xff, 0xff, 0xff]));
    }

    #[tokio::test]
    async fn test_zero_sized_canvas_is_a_render_target_error() {
        let rasterizer = GlyphRasterizer::new(FIXTURE_FONT).unwrap();

        let err = rasterizer.rasterize(&canvas(0, 40, Vec::new())).await.unwrap_err();
        assert!(matches!(err, ExportError::RenderTarget(_)));
        let err = rasterizer.rasterize(&canvas(40, 0, Vec::new())).await.unwrap_err();
        assert!(matches!(err, ExportError::RenderTarget(_)));
    }

    #[test]
    fn test_weights_map_to_wght_axis() {
        assert_eq!(wght(FontWeight::Regular), 400.0);
        assert_eq!(wght(FontWeight::Bold), 700.0);
    }
}
