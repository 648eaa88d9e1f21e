//! Slicing a tall bitmap into consecutive page-height bands.

use serde::Serialize;

/// Physical page size in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageSize {
    pub width_mm: f32,
    pub height_mm: f32,
}

const POINTS_PER_MM: f32 = 72.0 / 25.4;

impl PageSize {
    pub const A4: PageSize = PageSize {
        width_mm: 210.0,
        height_mm: 297.0,
    };

    pub fn width_pt(self) -> f32 {
        self.width_mm * POINTS_PER_MM
    }

    pub fn height_pt(self) -> f32 {
        self.height_mm * POINTS_PER_MM
    }

    /// Height in bitmap pixels of one page when the bitmap spans the page width.
    pub fn page_height_px(self, bitmap_width_px: u32) -> u32 {
        (bitmap_width_px as f32 * self.height_mm / self.width_mm).round() as u32
    }
}

/// One page's band of the source bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSlice {
    pub index: usize,
    pub top_px: u32,
    pub height_px: u32,
}

/// Splits `height_px` into `ceil(height_px / page_height_px)` contiguous bands.
///
/// Every band but the last is exactly one page tall; the last holds the
/// remainder. Returns no bands for an empty bitmap or a zero page height.
pub fn paginate(height_px: u32, page_height_px: u32) -> Vec<PageSlice> {
    if height_px == 0 || page_height_px == 0 {
        return Vec::new();
    }
    (0..height_px.div_ceil(page_height_px))
        .map(|i| {
            let top_px = i * page_height_px;
            PageSlice {
                index: i as usize,
                top_px,
                height_px: page_height_px.min(height_px - top_px),
            }
        })
        .collect()
}
