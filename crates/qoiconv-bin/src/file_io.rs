/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fs::{File, OpenOptions};
use std::io::{stdin, stdout, IsTerminal, Read, Stdin, Stdout, Write};

use log::{info, trace};
use qoiconv_encoder::SourceChannels;
use zune_core::bit_depth::BitDepth;
use zune_core::options::EncoderOptions;

use crate::errors::CliErrors;

/// Where the encoded image is read from
pub enum InputEndpoint {
    Stdin(Stdin),
    File(File)
}

impl InputEndpoint {
    /// Open `path`, or stdin when no path is given
    pub fn open(path: Option<&OsStr>) -> Result<InputEndpoint, CliErrors> {
        match path {
            Some(path) => {
                let file =
                    File::open(path).map_err(|e| CliErrors::OpenInput(path.to_owned(), e))?;
                Ok(InputEndpoint::File(file))
            }
            None => Ok(InputEndpoint::Stdin(stdin()))
        }
    }

    pub fn is_terminal(&self) -> bool {
        match self {
            InputEndpoint::Stdin(s) => s.is_terminal(),
            InputEndpoint::File(f) => f.is_terminal()
        }
    }
}

impl Read for InputEndpoint {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            InputEndpoint::Stdin(s) => s.read(buf),
            InputEndpoint::File(f) => f.read(buf)
        }
    }
}

/// Where the QOI bytes are written to
pub enum OutputEndpoint {
    Stdout(Stdout),
    File(File)
}

impl OutputEndpoint {
    /// Create or truncate `path`, or use stdout when no path is given
    pub fn open(path: Option<&OsStr>) -> Result<OutputEndpoint, CliErrors> {
        match path {
            Some(path) => {
                let file = OpenOptions::new()
                    .write(true)
                    .truncate(true)
                    .create(true)
                    .open(path)
                    .map_err(|e| CliErrors::OpenOutput(path.to_owned(), e))?;
                Ok(OutputEndpoint::File(file))
            }
            None => Ok(OutputEndpoint::Stdout(stdout()))
        }
    }

    pub fn is_terminal(&self) -> bool {
        match self {
            OutputEndpoint::Stdout(s) => s.is_terminal(),
            OutputEndpoint::File(f) => f.is_terminal()
        }
    }
}

impl Write for OutputEndpoint {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            OutputEndpoint::Stdout(s) => s.write(buf),
            OutputEndpoint::File(f) => f.write(buf)
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            OutputEndpoint::Stdout(s) => s.flush(),
            OutputEndpoint::File(f) => f.flush()
        }
    }
}

/// Pixels produced by the image loader, in the layout the encoder takes
pub struct DecodedImage {
    pub width:    usize,
    pub height:   usize,
    pub channels: SourceChannels,
    pub pixels:   Vec<u8>
}

impl DecodedImage {
    pub fn encoder_options(&self) -> EncoderOptions {
        EncoderOptions::new(
            self.width,
            self.height,
            self.channels.colorspace(),
            BitDepth::Eight
        )
    }
}

/// Anything that can be turned into interleaved 8 bit pixels
pub trait IntoPixels {
    fn into_pixels(self) -> Result<DecodedImage, CliErrors>;
}

/// An encoded image held in memory, format is sniffed from its content
pub struct ImageBytes {
    data: Vec<u8>
}

impl ImageBytes {
    pub fn new(data: Vec<u8>) -> ImageBytes {
        ImageBytes { data }
    }
}

impl IntoPixels for ImageBytes {
    fn into_pixels(self) -> Result<DecodedImage, CliErrors> {
        let image =
            image::load_from_memory(&self.data).map_err(|e| CliErrors::Decode(e.to_string()))?;

        let color = image.color();
        let (width, height) = (image.width() as usize, image.height() as usize);

        info!("Image dimensions: {}x{}", width, height);
        trace!("Decoded color type: {:?}", color);

        if width == 0 || height == 0 {
            return Err(CliErrors::Decode(format!(
                "image has zero dimensions ({width}x{height})"
            )));
        }
        // keep the native channel count, narrow everything to 8 bits
        let (channels, pixels) = match (color.has_color(), color.has_alpha()) {
            (false, false) => (SourceChannels::Luma, image.into_luma8().into_raw()),
            (false, true) => (SourceChannels::LumaAlpha, image.into_luma_alpha8().into_raw()),
            (true, false) => (SourceChannels::Rgb, image.into_rgb8().into_raw()),
            (true, true) => (SourceChannels::Rgba, image.into_rgba8().into_raw())
        };
        info!("Source layout: {:?}", channels);

        Ok(DecodedImage {
            width,
            height,
            channels,
            pixels
        })
    }
}
