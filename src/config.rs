//! Configuration loading
//!
//! Settings come from three layers: the defaults embedded from
//! `alphaslice_defaults.toml`, an optional user TOML file, and command-line
//! flags applied by the caller. Later layers override earlier ones.

use std::fs;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use log::debug;

use crate::document::OutputNaming;
use crate::raster::errors::{SliceError, SliceResult};

lazy_static! {
    // Parse the embedded defaults once
    static ref DEFAULT_CONFIG: SliceConfig = {
        let content = include_str!("../alphaslice_defaults.toml");
        let mut config = SliceConfig::builtin();
        if let Err(e) = config.merge_str(content) {
            eprintln!("Warning: Failed to parse built-in defaults: {}", e);
        }
        config
    };
}

/// Settings for a slicing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceConfig {
    /// Lowercase input extensions considered when scanning a directory
    pub extensions: Vec<String>,
    /// Output naming rules
    pub naming: OutputNaming,
}

impl SliceConfig {
    /// Defaults from the embedded configuration file
    pub fn defaults() -> Self {
        DEFAULT_CONFIG.clone()
    }

    /// Hard-coded settings used if the embedded file cannot be parsed
    fn builtin() -> Self {
        SliceConfig {
            extensions: vec!["png".to_string()],
            naming: OutputNaming::default(),
        }
    }

    /// Defaults overridden by a TOML file
    pub fn from_file(path: &Path) -> SliceResult<Self> {
        let content = fs::read_to_string(path)?;
        let mut config = Self::defaults();
        config.merge_str(&content)?;
        debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Defaults, or defaults overridden by `path` when given
    pub fn load(path: Option<&Path>) -> SliceResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::defaults()),
        }
    }

    /// Override settings with the keys present in a TOML string
    ///
    /// Unknown keys are ignored; known keys with the wrong type are an error.
    /// The output extension may not be one of the input extensions. On error
    /// `self` is left unchanged.
    pub fn merge_str(&mut self, content: &str) -> SliceResult<()> {
        let value: toml::Value = content
            .parse()
            .map_err(|e| SliceError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let mut merged = self.clone();
        merged.merge_value(&value)?;
        merged.validate()?;
        *self = merged;
        Ok(())
    }

    fn merge_value(&mut self, value: &toml::Value) -> SliceResult<()> {
        if let Some(list) = value.get("extensions") {
            let list = list
                .as_array()
                .ok_or_else(|| type_error("extensions", "an array of strings"))?;
            let mut extensions = Vec::with_capacity(list.len());
            for item in list {
                let ext = item
                    .as_str()
                    .ok_or_else(|| type_error("extensions", "an array of strings"))?;
                extensions.push(ext.trim_start_matches('.').to_lowercase());
            }
            self.extensions = extensions;
        }

        if let Some(ext) = Self::string_key(value, "output_extension")? {
            self.naming.extension = ext.trim_start_matches('.').to_string();
        }

        if let Some(separator) = Self::string_key(value, "index_separator")? {
            self.naming.separator = separator;
        }

        if let Some(dir) = Self::string_key(value, "output_dir")? {
            self.naming.output_dir = Some(PathBuf::from(dir));
        }

        Ok(())
    }

    /// Reject settings under which outputs could replace inputs
    fn validate(&self) -> SliceResult<()> {
        let output = self.naming.extension.to_lowercase();
        if self.extensions.iter().any(|ext| *ext == output) {
            return Err(SliceError::ConfigError(format!(
                "output_extension '{}' is also an input extension", self.naming.extension
            )));
        }
        Ok(())
    }

    fn string_key(value: &toml::Value, key: &str) -> SliceResult<Option<String>> {
        match value.get(key) {
            None => Ok(None),
            Some(v) => v
                .as_str()
                .map(|s| Some(s.to_string()))
                .ok_or_else(|| type_error(key, "a string")),
        }
    }

    /// Whether a file's extension is one of the configured input extensions
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(std::ffi::OsStr::to_str)
            .map(|ext| {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|allowed| *allowed == ext)
            })
            .unwrap_or(false)
    }
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

fn type_error(key: &str, expected: &str) -> SliceError {
    SliceError::ConfigError(format!("'{}' must be {}", key, expected))
}
