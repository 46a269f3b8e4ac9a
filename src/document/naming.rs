//! Output file naming
//!
//! A cropped image is written next to its source with the extension
//! replaced; split regions get the source stem, a separator and their
//! 1-based region number. When an output directory is configured only the
//! file name is kept and placed there.

use std::path::{Path, PathBuf};

/// Rules for deriving output paths from an input path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNaming {
    /// Extension of written documents, without the dot
    pub extension: String,
    /// Text placed between the stem and the region number
    pub separator: String,
    /// Directory for outputs; `None` writes next to the input
    pub output_dir: Option<PathBuf>,
}

impl Default for OutputNaming {
    fn default() -> Self {
        OutputNaming {
            extension: "svg".to_string(),
            separator: "_".to_string(),
            output_dir: None,
        }
    }
}

impl OutputNaming {
    /// Path for the single document of a cropped image
    ///
    /// `art/logo.png` becomes `art/logo.svg`.
    pub fn crop_path(&self, input: &Path) -> PathBuf {
        self.relocate(input.with_extension(&self.extension))
    }

    /// Path for region `index` (1-based) of a split image
    ///
    /// `art/sheet.png` with index 3 becomes `art/sheet_3.svg`.
    pub fn region_path(&self, input: &Path, index: usize) -> PathBuf {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        let file_name = format!("{}{}{}.{}", stem, self.separator, index, self.extension);
        let parent = input.parent().unwrap_or_else(|| Path::new(""));
        self.relocate(parent.join(file_name))
    }

    fn relocate(&self, path: PathBuf) -> PathBuf {
        match (&self.output_dir, path.file_name()) {
            (Some(dir), Some(name)) => dir.join(name),
            _ => path,
        }
    }
}
