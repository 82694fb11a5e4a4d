/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};
use qoiconv_encoder::ChannelDescriptor;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CmdOptions {
    /// `None` reads from stdin
    pub input:            Option<OsString>,
    /// `None` writes to stdout
    pub output:           Option<OsString>,
    pub check_input_tty:  bool,
    pub check_output_tty: bool,
    pub descriptor:       ChannelDescriptor
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            input:            None,
            output:           None,
            check_input_tty:  true,
            check_output_tty: true,
            descriptor:       ChannelDescriptor::SourceParity
        }
    }
}

impl Default for CmdOptions {
    fn default() -> Self {
        CmdOptions::new()
    }
}

fn flag_set(options: &ArgMatches, id: &str) -> bool {
    options.value_source(id) == Some(ValueSource::CommandLine)
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(input) = options.get_one::<OsString>("in") {
        info!("Reading from {:?}", input);
        cmd_options.input = Some(input.clone());
        cmd_options.check_input_tty = false;
    }
    if let Some(output) = options.get_one::<OsString>("out") {
        info!("Writing to {:?}", output);
        cmd_options.output = Some(output.clone());
        cmd_options.check_output_tty = false;
    }

    if flag_set(options, "no-tty-check") {
        info!("Disabling tty checks");
        cmd_options.check_input_tty = false;
        cmd_options.check_output_tty = false;
    }
    if flag_set(options, "tty-check") {
        info!("Forcing tty checks");
        cmd_options.check_input_tty = true;
        cmd_options.check_output_tty = true;
    }

    if flag_set(options, "alpha-descriptor") {
        info!("Channel descriptor follows alpha presence");
        cmd_options.descriptor = ChannelDescriptor::AlphaPresence;
    }
    cmd_options
}

/// Pick the log level from the logging flags, `Warn` when none is given
pub fn log_level(options: &ArgMatches) -> Level {
    if flag_set(options, "debug") {
        Level::Debug
    } else if flag_set(options, "trace") {
        Level::Trace
    } else if flag_set(options, "warn") {
        Level::Warn
    } else if flag_set(options, "info") {
        Level::Info
    } else {
        Level::Warn
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = log_level(options);

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {}", err);
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
