//! Batch bookkeeping
//!
//! Inputs are gathered from a file or a directory, processed one by one,
//! and each result is folded into a `BatchSummary`. A failing image never
//! stops the batch.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::SliceConfig;
use crate::raster::errors::{SliceError, SliceResult};

/// Result of processing one input image
#[derive(Debug)]
pub enum ProcessOutcome {
    /// Documents were produced at these paths
    Written(Vec<PathBuf>),
    /// The image has no visible content or no regions
    NoContent,
    /// Processing failed; other images are unaffected
    Failed(SliceError),
}

/// Counts over a batch of processed images
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Images that produced at least one document
    pub processed: usize,
    /// Documents written in total
    pub documents: usize,
    /// Images without content
    pub empty: usize,
    /// Images that failed
    pub failed: usize,
    /// Documents that replaced an earlier document of the same batch
    pub replaced: usize,
}

impl BatchSummary {
    /// Fold one outcome into the summary
    pub fn record(&mut self, outcome: &ProcessOutcome) {
        match outcome {
            ProcessOutcome::Written(paths) => {
                self.processed += 1;
                self.documents += paths.len();
            },
            ProcessOutcome::NoContent => self.empty += 1,
            ProcessOutcome::Failed(_) => self.failed += 1,
        }
    }

    /// Number of images seen
    pub fn total(&self) -> usize {
        self.processed + self.empty + self.failed
    }

    /// True when there was at least one image and every one of them failed
    pub fn all_failed(&self) -> bool {
        self.failed > 0 && self.failed == self.total()
    }
}

/// Resolve the list of images to process
///
/// A file is returned as is. A directory is scanned (not recursively) for
/// regular files with a configured extension, sorted by file name. An empty
/// directory is not an error.
pub fn collect_inputs(input: &Path, config: &SliceConfig) -> SliceResult<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    if !input.is_dir() {
        return Err(SliceError::GenericError(format!(
            "Input path does not exist: {}",
            input.display()
        )));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(input)? {
        let path = entry?.path();
        if path.is_file() && config.accepts(&path) {
            files.push(path);
        } else {
            debug!("Skipping {}", path.display());
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if files.is_empty() {
        warn!("No {} files found in {}",
              config.extensions.join("/").to_uppercase(), input.display());
    }

    Ok(files)
}
