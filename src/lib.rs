pub mod raster;
pub mod segment;
pub mod document;
pub mod config;
pub mod batch;
pub mod utils;
pub mod cli;
pub mod commands;
pub mod api;

pub use crate::api::{AlphaSlice, ExportedDocument};

pub use raster::{RasterImage, SliceError, SliceResult};
pub use segment::{AlphaMask, Interval, Rectangle, SegmentMode};
pub use batch::{BatchSummary, ProcessOutcome};
pub use config::SliceConfig;
