/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use clap::error::ErrorKind;
use log::error;

use crate::errors::CliErrors;
use crate::workflow::convert_from_cmd;

mod cmd_args;
mod cmd_parsers;
mod errors;
mod file_io;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();

    let options = match cmd.try_get_matches() {
        Ok(options) => options,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let err = CliErrors::from(err);
                eprint!("{}", err);
                exit(err.exit_code());
            }
        }
    };

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    if let Err(err) = convert_from_cmd(&parsed_opts) {
        error!("{}", err);
        exit(err.exit_code());
    }
}
