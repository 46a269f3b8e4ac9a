//! Region encoding
//!
//! Encoders copy the pixels of one rectangle out of a raster and write them
//! into a standalone container.

use std::io::Cursor;

use image::{imageops, DynamicImage, ImageFormat};
use log::debug;

use crate::segment::Rectangle;
use super::errors::{SliceError, SliceResult};
use super::raster_image::RasterImage;

/// Encoder for cropped regions
pub trait RasterEncoder {
    /// Encode the pixels of `region` as a standalone container
    ///
    /// # Arguments
    /// * `image` - Source raster
    /// * `region` - Rectangle to copy, must lie within the image
    ///
    /// # Returns
    /// The encoded bytes, or `EncodeError`
    fn encode_region(&self, image: &RasterImage, region: &Rectangle) -> SliceResult<Vec<u8>>;

    /// MIME type of the produced container
    fn mime_type(&self) -> &'static str;
}

/// PNG encoder backed by the `image` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct PngRegionEncoder;

impl PngRegionEncoder {
    pub fn new() -> Self {
        PngRegionEncoder
    }
}

impl RasterEncoder for PngRegionEncoder {
    fn encode_region(&self, image: &RasterImage, region: &Rectangle) -> SliceResult<Vec<u8>> {
        if !region.fits_within(image.width(), image.height()) {
            return Err(SliceError::EncodeError(format!(
                "region {} exceeds {}x{} image",
                region, image.width(), image.height()
            )));
        }

        let cropped = imageops::crop_imm(
            image.pixels(),
            region.x0(),
            region.y0(),
            region.width(),
            region.height(),
        )
        .to_image();

        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(cropped)
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| SliceError::EncodeError(e.to_string()))?;

        let bytes = buffer.into_inner();
        debug!("Encoded region {} into {} PNG bytes", region, bytes.len());
        Ok(bytes)
    }

    fn mime_type(&self) -> &'static str {
        "image/png"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_encoded_region_keeps_pixels() {
        let mut pixels = RgbaImage::new(6, 5);
        pixels.put_pixel(2, 3, Rgba([200, 100, 50, 255]));
        pixels.put_pixel(4, 3, Rgba([1, 2, 3, 7]));
        let raster = RasterImage::from_rgba(pixels).unwrap();
        let region = Rectangle::new(2, 3, 5, 4).unwrap();

        let bytes = PngRegionEncoder::new().encode_region(&raster, &region).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();

        assert_eq!(decoded.dimensions(), (3, 1));
        assert_eq!(decoded.get_pixel(0, 0), &Rgba([200, 100, 50, 255]));
        assert_eq!(decoded.get_pixel(2, 0), &Rgba([1, 2, 3, 7]));
        assert_eq!(decoded.get_pixel(1, 0)[3], 0);
    }

    #[test]
    fn test_region_outside_image() {
        let raster = RasterImage::from_rgba(RgbaImage::new(4, 4)).unwrap();
        let region = Rectangle::new(2, 2, 5, 4).unwrap();
        let result = PngRegionEncoder::new().encode_region(&raster, &region);
        assert!(matches!(result, Err(SliceError::EncodeError(_))));
    }
}
