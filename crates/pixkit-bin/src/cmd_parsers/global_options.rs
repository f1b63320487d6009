/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub override_files: bool,
    pub jpeg_quality:   u8
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            override_files: false,
            jpeg_quality:   90
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if options.value_source("all-yes") == Some(ValueSource::CommandLine) {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }

    if let Some(quality) = options.get_one::<u8>("quality") {
        cmd_options.jpeg_quality = *quality;
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let flag = |name: &str| options.get_flag(name);

    let log_level = if flag("debug") {
        Level::Debug
    } else if flag("trace") {
        Level::Trace
    } else if flag("warn") {
        Level::Warn
    } else if flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::parse_options;

    #[test]
    fn defaults() {
        let matches = create_cmd_args()
            .try_get_matches_from(["pixkit", "-i", "a.png", "-o", "b.png"])
            .unwrap();
        let options = parse_options(&matches);

        assert!(!options.override_files);
        assert_eq!(options.jpeg_quality, 90);
    }

    #[test]
    fn yes_and_quality() {
        let matches = create_cmd_args()
            .try_get_matches_from(["pixkit", "-i", "a.png", "-o", "b.jpg", "-y", "--quality", "40"])
            .unwrap();
        let options = parse_options(&matches);

        assert!(options.override_files);
        assert_eq!(options.jpeg_quality, 40);
    }
}
