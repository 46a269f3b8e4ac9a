//! Raster decoding
//!
//! Decoders turn container bytes into a `RasterImage`. Images without an
//! alpha channel are rejected here, before any segmentation happens.

use std::fs;
use std::path::Path;

use log::{debug, info};

use super::errors::{SliceError, SliceResult};
use super::raster_image::RasterImage;

/// Decoder for a raster container format
pub trait RasterDecoder {
    /// Decode an in-memory container
    ///
    /// # Arguments
    /// * `bytes` - Encoded image data
    ///
    /// # Returns
    /// The decoded raster, or `DecodeError`, `UnsupportedFormat` (no alpha
    /// channel) or `InvalidDimensions`
    fn decode(&self, bytes: &[u8]) -> SliceResult<RasterImage>;

    /// Read a file from disk and decode it
    fn decode_file(&self, path: &Path) -> SliceResult<RasterImage> {
        info!("Reading raster from {}", path.display());
        let bytes = fs::read(path)?;
        debug!("Read {} bytes", bytes.len());
        self.decode(&bytes)
    }
}

/// Decoder backed by the `image` crate
///
/// The container format is guessed from the bytes, so any format enabled in
/// the `image` crate decodes, as long as it carries alpha.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageDecoder;

impl ImageDecoder {
    pub fn new() -> Self {
        ImageDecoder
    }
}

impl RasterDecoder for ImageDecoder {
    fn decode(&self, bytes: &[u8]) -> SliceResult<RasterImage> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| SliceError::DecodeError(e.to_string()))?;
        debug!("Decoded {}x{} image ({:?})", image.width(), image.height(), image.color());
        RasterImage::from_dynamic(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(image: DynamicImage) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_decode_rgba_png() {
        let mut pixels = RgbaImage::new(4, 2);
        pixels.put_pixel(3, 1, Rgba([9, 9, 9, 128]));
        let bytes = png_bytes(DynamicImage::ImageRgba8(pixels));

        let raster = ImageDecoder::new().decode(&bytes).unwrap();
        assert_eq!((raster.width(), raster.height()), (4, 2));
        assert_eq!(raster.pixels().get_pixel(3, 1)[3], 128);
        assert_eq!(raster.pixels().get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_decode_rgb_png_is_unsupported() {
        let bytes = png_bytes(DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([1, 1, 1]))));
        let result = ImageDecoder::new().decode(&bytes);
        assert!(matches!(result, Err(SliceError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_decode_garbage() {
        let result = ImageDecoder::new().decode(b"definitely not an image");
        assert!(matches!(result, Err(SliceError::DecodeError(_))));
    }
}
