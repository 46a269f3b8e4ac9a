//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod options;
pub mod slice_command;
pub mod list_command;

pub use command_traits::{Command, CommandFactory};
pub use options::SliceOptions;
pub use slice_command::SliceCommand;
pub use list_command::ListCommand;

use clap::ArgMatches;
use crate::raster::errors::SliceResult;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
#[derive(Debug, Default)]
pub struct AlphasliceCommandFactory;

impl AlphasliceCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        AlphasliceCommandFactory
    }
}

impl CommandFactory for AlphasliceCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> SliceResult<Box<dyn Command>> {
        if args.get_flag("list") {
            Ok(Box::new(ListCommand::new(args)?))
        } else {
            // Default to writing documents
            Ok(Box::new(SliceCommand::new(args)?))
        }
    }
}
