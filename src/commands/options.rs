//! Options shared by all commands

use clap::ArgMatches;
use log::info;
use std::path::{Path, PathBuf};

use crate::config::SliceConfig;
use crate::raster::errors::{SliceError, SliceResult};
use crate::segment::SegmentMode;

/// Input, mode and configuration resolved from the command line
#[derive(Debug, Clone)]
pub struct SliceOptions {
    /// File or directory to process
    pub input: PathBuf,
    /// Crop or split
    pub mode: SegmentMode,
    /// Configuration after CLI overrides
    pub config: SliceConfig,
}

impl SliceOptions {
    /// Resolve options from CLI arguments
    ///
    /// The config file (if any) is loaded first, then `--output-dir`
    /// overrides the configured output directory.
    pub fn from_args(args: &ArgMatches) -> SliceResult<Self> {
        let input = args.get_one::<String>("input")
            .map(PathBuf::from)
            .ok_or_else(|| SliceError::GenericError("Missing input path".to_string()))?;
        info!("Input: {}", input.display());

        let mode = if args.get_flag("split") { SegmentMode::Split } else { SegmentMode::Crop };
        info!("Mode: {:?}", mode);

        let config_path = args.get_one::<String>("config").map(Path::new);
        let mut config = SliceConfig::load(config_path)?;

        if let Some(dir) = args.get_one::<String>("output-dir") {
            config.naming.output_dir = Some(PathBuf::from(dir));
        }
        info!("Output directory: {:?}", config.naming.output_dir);

        Ok(SliceOptions { input, mode, config })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::build_cli;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_overrides_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("slice.toml");
        fs::write(&config_path, "output_dir = \"from-file\"\nindex_separator = \"#\"\n").unwrap();
        let config_arg = config_path.to_string_lossy().to_string();

        let args = build_cli()
            .try_get_matches_from(["alphaslice", "in.png", "--config", config_arg.as_str()])
            .unwrap();
        let options = SliceOptions::from_args(&args).unwrap();
        assert_eq!(options.mode, SegmentMode::Crop);
        assert_eq!(options.config.naming.output_dir, Some(PathBuf::from("from-file")));
        assert_eq!(options.config.naming.separator, "#");

        let args = build_cli()
            .try_get_matches_from(["alphaslice", "in.png", "--split", "--config", config_arg.as_str(), "-o", "cli"])
            .unwrap();
        let options = SliceOptions::from_args(&args).unwrap();
        assert_eq!(options.mode, SegmentMode::Split);
        assert_eq!(options.config.naming.output_dir, Some(PathBuf::from("cli")));
        assert_eq!(options.input, PathBuf::from("in.png"));
    }
}
