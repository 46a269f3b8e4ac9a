//! Raster image wrapper
//!
//! A `RasterImage` is an RGBA pixel buffer that is guaranteed to have come
//! from a source carrying an alpha channel and to have a non-zero size.
//! The slicing core only reads from it.

use image::{DynamicImage, RgbaImage};

use super::errors::{SliceError, SliceResult};

/// Read-only RGBA raster with a meaningful alpha channel
#[derive(Debug, Clone)]
pub struct RasterImage {
    pixels: RgbaImage,
}

impl RasterImage {
    /// Wrap a decoded image
    ///
    /// Fails with `UnsupportedFormat` when the source color type has no
    /// alpha channel, and with `InvalidDimensions` when either side is 0.
    pub fn from_dynamic(image: DynamicImage) -> SliceResult<Self> {
        let color = image.color();
        if !color.has_alpha() {
            return Err(SliceError::UnsupportedFormat(format!(
                "image has no alpha channel (color type {:?})",
                color
            )));
        }

        Self::from_rgba(image.to_rgba8())
    }

    /// Wrap an RGBA buffer directly
    pub fn from_rgba(pixels: RgbaImage) -> SliceResult<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(SliceError::InvalidDimensions(width, height));
        }

        Ok(RasterImage { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Raw RGBA bytes of each row, top to bottom
    ///
    /// Every slice is `width * 4` bytes long; the alpha of pixel `x` sits at
    /// index `x * 4 + 3`.
    pub fn raw_rows(&self) -> std::slice::ChunksExact<'_, u8> {
        let stride = self.width() as usize * 4;
        self.pixels.as_raw().chunks_exact(stride)
    }

    /// Underlying pixel buffer
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba};

    #[test]
    fn test_rgb_image_is_rejected() {
        let rgb = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([10, 20, 30])));
        let result = RasterImage::from_dynamic(rgb);
        assert!(matches!(result, Err(SliceError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_grayscale_alpha_is_accepted() {
        let gray = DynamicImage::ImageLumaA8(image::GrayAlphaImage::new(3, 2));
        let raster = RasterImage::from_dynamic(gray).unwrap();
        assert_eq!((raster.width(), raster.height()), (3, 2));
        assert_eq!(raster.pixels().get_pixel(2, 1)[3], 0);
    }

    #[test]
    fn test_zero_sized_image_is_rejected() {
        let result = RasterImage::from_rgba(RgbaImage::new(0, 5));
        assert!(matches!(result, Err(SliceError::InvalidDimensions(0, 5))));
    }

    #[test]
    fn test_raw_rows_expose_alpha() {
        let mut pixels = RgbaImage::new(3, 2);
        pixels.put_pixel(1, 1, Rgba([1, 2, 3, 200]));
        let raster = RasterImage::from_rgba(pixels).unwrap();

        let rows: Vec<&[u8]> = raster.raw_rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].len(), 12);
        assert_eq!(rows[1][1 * 4 + 3], 200);
        assert_eq!(rows[0][1 * 4 + 3], 0);
    }
}
