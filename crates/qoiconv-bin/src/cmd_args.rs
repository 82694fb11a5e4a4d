/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("qoiconv")
        .about("Convert an image into the Quite Ok Image format")
        .long_about("Read an image from a file or stdin and write it as QOI to a file or stdout.\nSupported inputs: PNG, JPEG, BMP, GIF, TGA, PNM and HDR.")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .value_name("FILE")
            .help("Input file to read data from, default is stdin")
            .long_help("Input file to read data from, default is stdin.\nDisables the tty check on input unless -T is given")
            .action(ArgAction::Set)
            .value_parser(value_parser!(OsString)))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .value_name("FILE")
            .help("Output file to write data to, default is stdout")
            .long_help("Output file to write data to, default is stdout.\nThe file is created or truncated.\nDisables the tty check on output unless -T is given")
            .action(ArgAction::Set)
            .value_parser(value_parser!(OsString)))
        .arg(Arg::new("no-tty-check")
            .short('t')
            .long("no-tty-check")
            .action(ArgAction::SetTrue)
            .conflicts_with("tty-check")
            .help_heading("TERMINAL")
            .help("Allow reading from and writing to a terminal"))
        .arg(Arg::new("tty-check")
            .short('T')
            .long("tty-check")
            .action(ArgAction::SetTrue)
            .help_heading("TERMINAL")
            .help("Refuse terminal input and output even when -i or -o is given"))
        .arg(Arg::new("alpha-descriptor")
            .long("alpha-descriptor")
            .action(ArgAction::SetTrue)
            .help_heading("ENCODING")
            .help("Write channel descriptor 4 only for sources with alpha")
            .long_help("Write channel descriptor 4 for gray+alpha and RGBA sources and 3 otherwise.\nBy default the descriptor is derived from the parity of the source channel count"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the encoding options"))
}
