//! Raster input and output
//!
//! This module provides the raster image type the segmentation core reads,
//! together with the decoder and encoder that move pixels in and out of
//! PNG containers.

pub mod errors;
mod raster_image;
pub mod decoder;
pub mod encoder;

pub use errors::{SliceError, SliceResult};
pub use raster_image::RasterImage;
pub use decoder::{ImageDecoder, RasterDecoder};
pub use encoder::{PngRegionEncoder, RasterEncoder};
