/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;
use std::fmt::{Debug, Display, Formatter};

use qoiconv_encoder::QoiEncodeErrors;

/// Exit code for I/O and decoding failures
pub const EXIT_FAILURE: i32 = 1;
/// Exit code when refusing to touch a terminal
pub const EXIT_REFUSED_TTY: i32 = 2;
/// Exit code for bad command line usage
pub const EXIT_BAD_USAGE: i32 = 3;

/// Everything that can stop a conversion
pub enum CliErrors {
    /// Command line could not be parsed
    Invocation(clap::Error),
    OpenInput(OsString, std::io::Error),
    OpenOutput(OsString, std::io::Error),
    /// Input is a terminal and the check is enabled
    TtyInput,
    /// Output is a terminal and the check is enabled
    TtyOutput,
    ReadInput(std::io::Error),
    /// The image loader rejected the input, carries its reason
    Decode(String),
    Encode(QoiEncodeErrors),
    Flush(std::io::Error)
}

impl CliErrors {
    /// Process exit code reported for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            CliErrors::Invocation(_) => EXIT_BAD_USAGE,
            CliErrors::TtyInput | CliErrors::TtyOutput => EXIT_REFUSED_TTY,
            _ => EXIT_FAILURE
        }
    }
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CliErrors::Invocation(err) => write!(f, "{}", err.render()),
            CliErrors::OpenInput(path, err) => {
                write!(f, "failed to open input file {:?}: {}", path, err)
            }
            CliErrors::OpenOutput(path, err) => {
                write!(f, "failed to open output file {:?}: {}", path, err)
            }
            CliErrors::TtyInput => write!(f, "refusing to read from tty input"),
            CliErrors::TtyOutput => write!(f, "refusing to write tty output"),
            CliErrors::ReadInput(err) => write!(f, "failed to read input: {}", err),
            CliErrors::Decode(reason) => write!(f, "Failed to read file: {}", reason),
            CliErrors::Encode(err) => write!(f, "failed to encode image: {:?}", err),
            CliErrors::Flush(err) => write!(f, "failed to flush output: {}", err)
        }
    }
}

impl Display for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for CliErrors {}

impl From<QoiEncodeErrors> for CliErrors {
    fn from(value: QoiEncodeErrors) -> Self {
        CliErrors::Encode(value)
    }
}

impl From<clap::Error> for CliErrors {
    fn from(value: clap::Error) -> Self {
        CliErrors::Invocation(value)
    }
}
