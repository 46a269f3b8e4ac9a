//! Region listing command
//!
//! Prints the regions that would be exported for each input, one line per
//! region, without writing any document.

use clap::ArgMatches;
use log::{info, warn};

use crate::api::AlphaSlice;
use crate::batch;
use crate::commands::command_traits::Command;
use crate::commands::options::SliceOptions;
use crate::raster::errors::{SliceError, SliceResult};
use crate::segment::SegmentMode;

/// Command for reporting detected regions
pub struct ListCommand {
    /// Resolved input, mode and configuration
    options: SliceOptions,
}

impl ListCommand {
    /// Create a new list command
    pub fn new(args: &ArgMatches) -> SliceResult<Self> {
        info!("Creating list command from arguments");
        Ok(ListCommand {
            options: SliceOptions::from_args(args)?,
        })
    }

    /// Lines describing the regions of every input
    ///
    /// Each line is `<file>\t<n>\t<x0>,<y0>,<x1>,<y1>\t<width>x<height>`.
    /// Files without content or that fail to decode produce no lines.
    pub fn report(&self) -> SliceResult<Vec<String>> {
        let api = AlphaSlice::new(self.options.config.clone());
        let files = batch::collect_inputs(&self.options.input, &self.options.config)?;
        let mut lines = Vec::new();
        let mut failures = 0;

        for file in &files {
            let regions = match api.inspect_file(file, self.options.mode) {
                Ok(regions) => regions,
                Err(e) => {
                    warn!("Skipping {}: {}", file.display(), e);
                    failures += 1;
                    continue;
                },
            };

            if regions.is_empty() {
                warn!("No content in {}", file.display());
            }

            for (i, region) in regions.iter().enumerate() {
                let number = match self.options.mode {
                    SegmentMode::Crop => 0,
                    SegmentMode::Split => i + 1,
                };
                let (x0, y0, x1, y1) = region.as_tuple();
                lines.push(format!("{}\t{}\t{},{},{},{}\t{}x{}",
                                   file.display(), number, x0, y0, x1, y1,
                                   region.width(), region.height()));
            }
        }

        if failures > 0 && failures == files.len() {
            return Err(SliceError::GenericError(format!("all {} input images failed", failures)));
        }

        Ok(lines)
    }
}

impl Command for ListCommand {
    fn execute(&self) -> SliceResult<()> {
        for line in self.report()? {
            println!("{}", line);
        }
        Ok(())
    }
}
