/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{BufWriter, Read, Write};

use log::{debug, info};
use qoiconv_encoder::{ChannelDescriptor, QoiEncoder};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CliErrors;
use crate::file_io::{ImageBytes, InputEndpoint, IntoPixels, OutputEndpoint};

/// Open both endpoints, refuse terminals, then convert
pub(crate) fn convert_from_cmd(cmd_opts: &CmdOptions) -> Result<(), CliErrors> {
    info!("Opening input and output");

    let input = InputEndpoint::open(cmd_opts.input.as_deref())?;
    let output = OutputEndpoint::open(cmd_opts.output.as_deref())?;

    if cmd_opts.check_input_tty && input.is_terminal() {
        return Err(CliErrors::TtyInput);
    }
    if cmd_opts.check_output_tty && output.is_terminal() {
        return Err(CliErrors::TtyOutput);
    }

    let written = convert(input, output, cmd_opts.descriptor)?;
    info!("Wrote {} bytes", written);

    Ok(())
}

/// Read an entire encoded image from `input` and write it to `output` as QOI.
///
/// Returns the number of QOI bytes written.
pub(crate) fn convert<R: Read, W: Write>(
    mut input: R, output: W, descriptor: ChannelDescriptor
) -> Result<usize, CliErrors> {
    let mut data = Vec::with_capacity(1 << 20);
    input
        .read_to_end(&mut data)
        .map_err(CliErrors::ReadInput)?;
    debug!("Read {} bytes of input", data.len());

    let image = ImageBytes::new(data).into_pixels()?;

    let mut writer = BufWriter::new(output);
    let mut encoder = QoiEncoder::new(&image.pixels, image.encoder_options());
    encoder.set_channel_descriptor(descriptor);

    let written = encoder.encode(&mut writer)?;

    writer.flush().map_err(CliErrors::Flush)?;

    Ok(written)
}
