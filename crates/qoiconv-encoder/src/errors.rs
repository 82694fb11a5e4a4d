/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during encoding
use core::fmt::{Debug, Display, Formatter};

use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZByteIoError;
use zune_core::colorspace::ColorSpace;

/// Errors encountered during encoding
///
/// Everything except [`IoError`](QoiEncodeErrors::IoError) is reported
/// before the first byte reaches the sink.
pub enum QoiEncodeErrors {
    /// Unsupported colorspace
    ///
    /// The first argument is the colorspace encountered
    /// The second argument is list of supported colorspaces
    UnsupportedColorspace(ColorSpace, &'static [ColorSpace]),
    /// Only 8 bit samples can be encoded
    UnsupportedDepth(BitDepth),
    /// Too large dimensions
    ///
    /// The dimension cannot be stored in the 32 bit header field,
    /// or the pixel count overflows
    TooLargeDimensions(usize),
    /// Width is zero
    ///
    /// A zero height with a non-zero width is not reported here,
    /// [`EncoderOptions::height`](zune_core::options::EncoderOptions::height)
    /// panics on it before validation can return
    ZeroDimensions,
    /// Pixel buffer length does not match the dimensions
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we expected
    /// - 2nd argument is the number of bytes found
    LengthMismatch(usize, usize),
    /// The sink failed to accept a write
    IoError(ZByteIoError)
}

impl Debug for QoiEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            QoiEncodeErrors::UnsupportedColorspace(found, supported) => {
                writeln!(f, "Cannot encode image with colorspace {found:?} into QOI, supported ones are {supported:?}")
            }
            QoiEncodeErrors::UnsupportedDepth(depth) => {
                writeln!(
                    f,
                    "Cannot encode image with depth {depth:?} into QOI, only 8 bit samples are supported"
                )
            }
            QoiEncodeErrors::TooLargeDimensions(found) => {
                writeln!(
                    f,
                    "Too large image dimensions {found}, QOI can only encode images less than {}",
                    u32::MAX
                )
            }
            QoiEncodeErrors::ZeroDimensions => {
                writeln!(f, "Image width and height must be greater than zero")
            }
            QoiEncodeErrors::LengthMismatch(expected, found) => {
                writeln!(
                    f,
                    "Expected {expected} bytes of pixel data but found {found}"
                )
            }
            QoiEncodeErrors::IoError(v) => {
                writeln!(f, "I/O error {:?}", v)
            }
        }
    }
}

impl Display for QoiEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QoiEncodeErrors {}

impl From<ZByteIoError> for QoiEncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        Self::IoError(value)
    }
}
