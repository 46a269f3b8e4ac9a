use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info, warn};

use crate::batch::{self, BatchSummary, ProcessOutcome};
use crate::config::SliceConfig;
use crate::document::DocumentExporter;
use crate::raster::errors::{SliceError, SliceResult};
use crate::raster::{ImageDecoder, PngRegionEncoder, RasterDecoder, RasterImage};
use crate::segment::{self, AlphaMask, Rectangle, SegmentMode};
use crate::utils::progress::ProgressTracker;

/// One SVG document ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    /// Where the document goes
    pub path: PathBuf,
    /// Source pixels covered by the document
    pub region: Rectangle,
    /// 1-based region number in split mode, `None` for a crop
    pub index: Option<usize>,
    /// SVG text
    pub svg: String,
}

/// Main interface to the alphaslice library
pub struct AlphaSlice {
    config: SliceConfig,
    decoder: Box<dyn RasterDecoder>,
    exporter: DocumentExporter,
}

impl AlphaSlice {
    /// Create an instance with PNG decoding and encoding
    ///
    /// # Arguments
    /// * `config` - Input extensions and output naming rules
    pub fn new(config: SliceConfig) -> Self {
        AlphaSlice {
            config,
            decoder: Box::new(ImageDecoder::new()),
            exporter: DocumentExporter::new(Box::new(PngRegionEncoder::new())),
        }
    }

    /// Regions of an image for the given mode
    ///
    /// An empty result means the image has no visible content.
    pub fn regions(&self, image: &RasterImage, mode: SegmentMode) -> Vec<Rectangle> {
        let mask = AlphaMask::compute(image);
        segment::segment(&mask, mode)
    }

    /// Build the documents for an image without touching the file system
    ///
    /// # Arguments
    /// * `input_path` - Path of the source image, used for naming only
    /// * `image` - Decoded source image
    /// * `mode` - Crop to the bounding box or split into grid regions
    ///
    /// # Returns
    /// The documents in region order, empty if the image has no content
    pub fn export_documents(&self,
                            input_path: &Path,
                            image: &RasterImage,
                            mode: SegmentMode) -> SliceResult<Vec<ExportedDocument>> {
        let regions = self.regions(image, mode);
        let naming = &self.config.naming;

        regions
            .into_iter()
            .enumerate()
            .map(|(i, region)| {
                let (path, index) = match mode {
                    SegmentMode::Crop => (naming.crop_path(input_path), None),
                    SegmentMode::Split => (naming.region_path(input_path, i + 1), Some(i + 1)),
                };
                let svg = self.exporter.export(image, &region)?;
                Ok(ExportedDocument { path, region, index, svg })
            })
            .collect()
    }

    /// Decode a file and return its regions without writing anything
    pub fn inspect_file(&self, input_path: &Path, mode: SegmentMode) -> SliceResult<Vec<Rectangle>> {
        let image = self.decoder.decode_file(input_path)?;
        Ok(self.regions(&image, mode))
    }

    /// Decode, segment, export and write one image
    ///
    /// Errors are captured in the returned outcome so that a caller looping
    /// over many files can keep going.
    pub fn process_file(&self, input_path: &Path, mode: SegmentMode) -> ProcessOutcome {
        info!("Processing '{}'", input_path.display());

        match self.try_process_file(input_path, mode) {
            Ok(paths) if paths.is_empty() => {
                match mode {
                    SegmentMode::Crop => warn!("No visible content in {}", input_path.display()),
                    SegmentMode::Split => warn!("No opaque regions found in {}", input_path.display()),
                }
                ProcessOutcome::NoContent
            },
            Ok(paths) => ProcessOutcome::Written(paths),
            Err(e) => {
                error!("Skipping {}: {}", input_path.display(), e);
                ProcessOutcome::Failed(e)
            },
        }
    }

    /// Write every document of one image, or none of them
    ///
    /// If a write fails, documents already written for this image are
    /// removed again before the error is returned.
    fn try_process_file(&self, input_path: &Path, mode: SegmentMode) -> SliceResult<Vec<PathBuf>> {
        let image = self.decoder.decode_file(input_path)?;
        let documents = self.export_documents(input_path, &image, mode)?;

        if let Some(document) = documents.iter().find(|d| same_file(&d.path, input_path)) {
            return Err(SliceError::GenericError(format!(
                "Refusing to overwrite source image {} with {}",
                input_path.display(), document.path.display()
            )));
        }

        if let Some(dir) = &self.config.naming.output_dir {
            if !documents.is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let mut written = Vec::with_capacity(documents.len());
        for document in documents {
            if let Err(e) = fs::write(&document.path, document.svg.as_bytes()) {
                remove_partial(&written);
                return Err(e.into());
            }
            info!("Wrote {} ({}x{})",
                  document.path.display(), document.region.width(), document.region.height());
            written.push(document.path);
        }

        Ok(written)
    }

    /// Process a single image or every matching image in a directory
    ///
    /// # Returns
    /// Per-batch counts, or an error if the input path cannot be read
    pub fn process_path(&self, input: &Path, mode: SegmentMode) -> SliceResult<BatchSummary> {
        let files = batch::collect_inputs(input, &self.config)?;
        let mut summary = BatchSummary::default();

        let progress = if files.len() > 1 {
            Some(ProgressTracker::new(files.len() as u64, "Slicing images"))
        } else {
            None
        };

        let mut seen_outputs = HashSet::new();

        for file in &files {
            if let Some(progress) = &progress {
                progress.set_message(&file.display().to_string());
            }

            let outcome = self.process_file(file, mode);
            if let ProcessOutcome::Written(paths) = &outcome {
                for path in paths {
                    if !seen_outputs.insert(path.clone()) {
                        warn!("{} was written twice in this batch, output of {} replaced it",
                              path.display(), file.display());
                        summary.replaced += 1;
                    }
                }
            }
            summary.record(&outcome);

            if let Some(progress) = &progress {
                progress.increment(1);
            }
        }

        if let Some(progress) = &progress {
            progress.finish();
        }

        info!("Done: {} images, {} documents written, {} without content, {} failed",
              summary.total(), summary.documents, summary.empty, summary.failed);
        if summary.replaced > 0 {
            warn!("{} documents replaced an earlier output of the same batch", summary.replaced);
        }
        Ok(summary)
    }
}

/// Whether two paths name the same file, resolving them when they exist
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Best-effort removal of documents written before a failure
fn remove_partial(paths: &[PathBuf]) {
    for path in paths {
        match fs::remove_file(path) {
            Ok(()) => warn!("Removed partial output {}", path.display()),
            Err(e) => error!("Failed to remove partial output {}: {}", path.display(), e),
        }
    }
}

impl Default for AlphaSlice {
    fn default() -> Self {
        AlphaSlice::new(SliceConfig::defaults())
    }
}
