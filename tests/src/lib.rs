/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use qoiconv_encoder::{ChannelDescriptor, QoiEncoder};
use serde::Deserialize;
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod reference;
#[cfg(test)]
mod scenarios;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(clippy::upper_case_acronyms)]
pub enum JsonColorspace {
    Luma,
    LumaA,
    RGB,
    RGBA
}

impl JsonColorspace {
    pub fn to_colorspace(self) -> ColorSpace {
        match self {
            Self::Luma => ColorSpace::Luma,
            Self::LumaA => ColorSpace::LumaA,
            Self::RGB => ColorSpace::RGB,
            Self::RGBA => ColorSpace::RGBA
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonDescriptor {
    #[default]
    Parity,
    Alpha
}

impl JsonDescriptor {
    pub fn to_descriptor(self) -> ChannelDescriptor {
        match self {
            Self::Parity => ChannelDescriptor::SourceParity,
            Self::Alpha => ChannelDescriptor::AlphaPresence
        }
    }
}

fn one() -> usize {
    1
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:       String,
    pub width:      usize,
    pub height:     usize,
    pub colorspace: JsonColorspace,
    #[serde(default)]
    pub descriptor: JsonDescriptor,
    /// Pixel pattern, repeated `repeat` times
    pub pixels:     Vec<u8>,
    #[serde(default = "one")]
    pub repeat:     usize,
    pub expected:   Vec<u8>,
    pub comment:    Option<String>
}

impl TestEntry {
    pub fn pixel_data(&self) -> Vec<u8> {
        self.pixels.repeat(self.repeat)
    }
}

pub fn vectors_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("vectors")
}

/// Encode `pixels` into a fresh vector
pub fn encode(
    pixels: &[u8], width: usize, height: usize, colorspace: ColorSpace,
    descriptor: ChannelDescriptor
) -> Vec<u8> {
    let options = EncoderOptions::new(width, height, colorspace, BitDepth::Eight);
    let mut encoder = QoiEncoder::new(pixels, options);
    encoder.set_channel_descriptor(descriptor);

    let mut output = Vec::with_capacity(encoder.max_size());
    let written = encoder.encode(&mut output).unwrap();
    assert_eq!(written, output.len());

    output
}

/// Deterministic pixel bytes with flat stretches, so every chunk type shows up
pub fn synthetic_image(len: usize, mut seed: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);

    while out.len() < len {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;

        let value = (seed >> 24) as u8;
        match seed & 7 {
            // long flat stretch
            0 => out.extend(std::iter::repeat(value).take(((seed >> 8) & 0x1ff) as usize)),
            // small step from the last byte
            1..=3 => {
                let last = out.last().copied().unwrap_or(0);
                out.push(last.wrapping_add(value & 3));
            }
            _ => out.push(value)
        }
    }
    out.truncate(len);
    out
}
