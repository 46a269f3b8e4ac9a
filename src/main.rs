use std::path::Path;
use std::process;
use log::{error, LevelFilter};

use alphaslice::cli::build_cli;
use alphaslice::commands::{AlphasliceCommandFactory, CommandFactory};
use alphaslice::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Info };

    match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(Path::new(log_file), level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        },
        None => Logger::init_console_logger(level),
    }

    let factory = AlphasliceCommandFactory::new();

    match factory.create_command(&matches) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
