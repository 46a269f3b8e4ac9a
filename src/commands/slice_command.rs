//! Slicing command
//!
//! This module implements the command that crops each input image to its
//! visible content, or splits it into grid regions, and writes one SVG
//! document per region.

use clap::ArgMatches;
use log::{error, info};

use crate::api::AlphaSlice;
use crate::commands::command_traits::Command;
use crate::commands::options::SliceOptions;
use crate::raster::errors::{SliceError, SliceResult};

/// Command for writing SVG documents from transparent images
pub struct SliceCommand {
    /// Resolved input, mode and configuration
    options: SliceOptions,
}

impl SliceCommand {
    /// Create a new slice command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new SliceCommand instance or an error
    pub fn new(args: &ArgMatches) -> SliceResult<Self> {
        info!("Creating slice command from arguments");
        Ok(SliceCommand {
            options: SliceOptions::from_args(args)?,
        })
    }
}

impl Command for SliceCommand {
    fn execute(&self) -> SliceResult<()> {
        info!("Executing slice command in {:?} mode", self.options.mode);

        let api = AlphaSlice::new(self.options.config.clone());
        let summary = api.process_path(&self.options.input, self.options.mode)?;

        if summary.all_failed() {
            error!("All {} images failed", summary.failed);
            return Err(SliceError::GenericError(format!(
                "all {} input images failed", summary.failed
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::build_cli;
    use image::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::TempDir;

    fn command_for(input: &std::path::Path) -> SliceCommand {
        let input = input.to_string_lossy().to_string();
        let args = build_cli()
            .try_get_matches_from(["alphaslice", input.as_str()])
            .unwrap();
        SliceCommand::new(&args).unwrap()
    }

    #[test]
    fn test_all_inputs_failing_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.png"), b"broken").unwrap();
        fs::write(dir.path().join("b.png"), b"also broken").unwrap();

        let result = command_for(dir.path()).execute();
        assert!(matches!(result, Err(SliceError::GenericError(_))));
    }

    #[test]
    fn test_some_inputs_failing_is_ok() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.png"), b"broken").unwrap();
        let mut pixels = RgbaImage::new(3, 3);
        pixels.put_pixel(1, 1, Rgba([9, 9, 9, 255]));
        pixels.save(dir.path().join("b.png")).unwrap();

        command_for(dir.path()).execute().unwrap();
        assert!(dir.path().join("b.svg").exists());
        assert!(!dir.path().join("a.svg").exists());
    }
}
