//! Command-line interface definition

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the argument parser
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("alphaslice")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Crop or split transparent PNGs into standalone SVG documents")
        .arg(
            Arg::new("input")
                .help("Input PNG file or directory of PNG files")
                .default_value(".")
                .index(1),
        )
        .arg(
            Arg::new("split")
                .short('s')
                .long("split")
                .help("Split into one document per region separated by blank rows/columns")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("Only print the detected regions, write nothing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .help("Directory for the written documents (default: next to each input)")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Also write log records to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}
