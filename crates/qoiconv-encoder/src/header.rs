/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_core::bytestream::{ZByteIoError, ZByteWriterTrait, ZWriter};

use crate::constants::QOI_MAGIC;
use crate::pixel::SourceChannels;

/// How the channel byte of the header is derived from the source layout
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ChannelDescriptor {
    /// `(source channels % 2) + 3`.
    ///
    /// Gray and RGB sources get 4, gray+alpha and RGBA sources get 3.
    /// Output matches files written by earlier releases.
    #[default]
    SourceParity,
    /// 4 when the source carries alpha, 3 otherwise
    AlphaPresence
}

impl ChannelDescriptor {
    pub const fn descriptor(self, channels: SourceChannels) -> u8 {
        match self {
            ChannelDescriptor::SourceParity => (channels.count() % 2) as u8 + 3,
            ChannelDescriptor::AlphaPresence => {
                if channels.has_alpha() {
                    4
                } else {
                    3
                }
            }
        }
    }
}

/// Colorspace byte of the header
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[allow(non_camel_case_types)]
pub enum QoiColorspace {
    /// sRGB with linear alpha
    #[default]
    sRGB = 0,
    /// All channels linear
    Linear = 1
}

/// The fixed 14 byte header preceding the chunk stream
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct QoiHeader {
    pub width:      u32,
    pub height:     u32,
    pub channels:   u8,
    pub colorspace: QoiColorspace
}

impl QoiHeader {
    pub fn new(
        width: u32, height: u32, channels: SourceChannels, descriptor: ChannelDescriptor
    ) -> QoiHeader {
        QoiHeader {
            width,
            height,
            channels: descriptor.descriptor(channels),
            colorspace: QoiColorspace::sRGB
        }
    }

    /// Write magic, big endian dimensions, channel and colorspace bytes
    pub fn write<T: ZByteWriterTrait>(&self, stream: &mut ZWriter<T>) -> Result<(), ZByteIoError> {
        stream.write_u32_be_err(QOI_MAGIC)?;
        stream.write_u32_be_err(self.width)?;
        stream.write_u32_be_err(self.height)?;
        stream.write_u8_err(self.channels)?;
        stream.write_u8_err(self.colorspace as u8)?;

        Ok(())
    }
}
