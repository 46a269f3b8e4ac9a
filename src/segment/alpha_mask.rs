//! Transparency mask of a raster
//!
//! The mask classifies every row and column of an image as blank (every
//! pixel has alpha 0) or not, and keeps per-pixel transparency for point
//! queries. Only alpha exactly 0 counts as transparent; there is no
//! tolerance.

use image::DynamicImage;
use log::debug;

use crate::raster::errors::SliceResult;
use crate::raster::RasterImage;
use super::rectangle::Rectangle;

/// Blank row/column flags of one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    /// Row-major, `true` where alpha == 0
    transparent: Vec<bool>,
    blank_rows: Vec<bool>,
    blank_cols: Vec<bool>,
}

impl AlphaMask {
    /// Compute the mask of a raster in a single pass over its pixels
    pub fn compute(image: &RasterImage) -> Self {
        let width = image.width();
        let height = image.height();

        let mut transparent = Vec::with_capacity(width as usize * height as usize);
        let mut blank_rows = vec![true; height as usize];
        let mut blank_cols = vec![true; width as usize];

        for (y, row) in image.raw_rows().enumerate() {
            for (x, pixel) in row.chunks_exact(4).enumerate() {
                let is_clear = pixel[3] == 0;
                transparent.push(is_clear);
                if !is_clear {
                    blank_rows[y] = false;
                    blank_cols[x] = false;
                }
            }
        }

        debug!("Alpha mask {}x{}: {} blank rows, {} blank columns",
               width, height,
               blank_rows.iter().filter(|&&b| b).count(),
               blank_cols.iter().filter(|&&b| b).count());

        AlphaMask {
            width,
            height,
            transparent,
            blank_rows,
            blank_cols,
        }
    }

    /// Compute the mask of a decoded image
    ///
    /// Fails with `UnsupportedFormat` when the image has no alpha channel.
    pub fn from_dynamic(image: DynamicImage) -> SliceResult<Self> {
        let raster = RasterImage::from_dynamic(image)?;
        Ok(Self::compute(&raster))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `blank_rows()[y]` is true iff every pixel of row `y` has alpha 0
    pub fn blank_rows(&self) -> &[bool] {
        &self.blank_rows
    }

    /// `blank_cols()[x]` is true iff every pixel of column `x` has alpha 0
    pub fn blank_cols(&self) -> &[bool] {
        &self.blank_cols
    }

    /// Whether the pixel at (x, y) has alpha 0
    ///
    /// Coordinates outside the canvas are reported as transparent.
    pub fn is_transparent(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return true;
        }
        self.transparent[y as usize * self.width as usize + x as usize]
    }

    /// Whether any pixel inside `rect` has alpha > 0
    pub fn has_content(&self, rect: &Rectangle) -> bool {
        let stride = self.width as usize;
        (rect.y0()..rect.y1().min(self.height)).any(|y| {
            let row = y as usize * stride;
            let start = row + rect.x0() as usize;
            let end = row + rect.x1().min(self.width) as usize;
            start < end && self.transparent[start..end].iter().any(|&clear| !clear)
        })
    }
}
