/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Canonical pixels and the reader expanding source samples into them
use core::slice::ChunksExact;

use zune_core::colorspace::ColorSpace;

use crate::constants::QOI_CACHE_SIZE;

/// A single pixel in canonical RGBA form.
///
/// Every source layout is widened to this before encoding,
/// see [`SourceChannels`] for how narrower layouts are expanded.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct PixelSample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8
}

impl PixelSample {
    /// Pixel the encoder compares the first source pixel against
    pub const START: PixelSample = PixelSample::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> PixelSample {
        PixelSample { r, g, b, a }
    }

    /// Slot this pixel occupies in the 64 entry color cache
    ///
    /// The formula is fixed by the format, changing it breaks
    /// every decoder out there.
    #[inline(always)]
    pub const fn cache_index(&self) -> usize {
        (self.r as usize * 3 + self.g as usize * 5 + self.b as usize * 7 + self.a as usize * 11)
            % QOI_CACHE_SIZE
    }

    /// Per channel difference from `previous`.
    ///
    /// Subtraction wraps at the byte boundary and the result is read
    /// as a signed byte, so `0 - 255` is `1` and `255 - 0` is `-1`.
    #[inline(always)]
    pub const fn wrapping_delta(&self, previous: &PixelSample) -> PixelDelta {
        PixelDelta {
            r: self.r.wrapping_sub(previous.r) as i8,
            g: self.g.wrapping_sub(previous.g) as i8,
            b: self.b.wrapping_sub(previous.b) as i8,
            a: self.a.wrapping_sub(previous.a) as i8
        }
    }
}

/// Signed wraparound differences between two pixels
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PixelDelta {
    pub r: i8,
    pub g: i8,
    pub b: i8,
    pub a: i8
}

impl PixelDelta {
    /// Red minus green, computed without wrapping
    pub const fn r_minus_g(&self) -> i16 {
        self.r as i16 - self.g as i16
    }
    /// Blue minus green, computed without wrapping
    pub const fn b_minus_g(&self) -> i16 {
        self.b as i16 - self.g as i16
    }
}

/// Interleaved sample layouts the encoder accepts.
///
/// The discriminant is the number of bytes a single source pixel occupies.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SourceChannels {
    /// One gray sample, expanded to `(v, v, v, 255)`
    Luma = 1,
    /// Gray then alpha, expanded to `(v, v, v, a)`
    LumaAlpha = 2,
    /// Red, green, blue, expanded to `(r, g, b, 255)`
    Rgb = 3,
    /// Red, green, blue, alpha, taken as is
    Rgba = 4
}

impl SourceChannels {
    /// Map a zune colorspace to a source layout
    ///
    /// Returns `None` for colorspaces the sample reader cannot expand
    pub const fn from_colorspace(colorspace: ColorSpace) -> Option<SourceChannels> {
        match colorspace {
            ColorSpace::Luma => Some(SourceChannels::Luma),
            ColorSpace::LumaA => Some(SourceChannels::LumaAlpha),
            ColorSpace::RGB => Some(SourceChannels::Rgb),
            ColorSpace::RGBA => Some(SourceChannels::Rgba),
            _ => None
        }
    }

    /// Map a raw channel count to a source layout
    pub const fn from_count(count: usize) -> Option<SourceChannels> {
        match count {
            1 => Some(SourceChannels::Luma),
            2 => Some(SourceChannels::LumaAlpha),
            3 => Some(SourceChannels::Rgb),
            4 => Some(SourceChannels::Rgba),
            _ => None
        }
    }

    pub const fn colorspace(self) -> ColorSpace {
        match self {
            SourceChannels::Luma => ColorSpace::Luma,
            SourceChannels::LumaAlpha => ColorSpace::LumaA,
            SourceChannels::Rgb => ColorSpace::RGB,
            SourceChannels::Rgba => ColorSpace::RGBA
        }
    }

    /// Bytes per source pixel
    pub const fn count(self) -> usize {
        self as usize
    }

    pub const fn has_alpha(self) -> bool {
        matches!(self, SourceChannels::LumaAlpha | SourceChannels::Rgba)
    }

    /// Expand one source pixel into canonical form.
    ///
    /// `chunk` must hold exactly [`count`](Self::count) bytes.
    #[inline(always)]
    pub fn expand(self, chunk: &[u8]) -> PixelSample {
        debug_assert_eq!(chunk.len(), self.count());

        match self {
            SourceChannels::Luma => PixelSample::new(chunk[0], chunk[0], chunk[0], 255),
            SourceChannels::LumaAlpha => PixelSample::new(chunk[0], chunk[0], chunk[0], chunk[1]),
            SourceChannels::Rgb => PixelSample::new(chunk[0], chunk[1], chunk[2], 255),
            SourceChannels::Rgba => PixelSample::new(chunk[0], chunk[1], chunk[2], chunk[3])
        }
    }
}

/// Iterator yielding canonical pixels from an interleaved buffer
///
/// Each step consumes exactly `channels.count()` bytes. Trailing bytes
/// that do not form a whole pixel are never yielded.
pub struct SampleReader<'a> {
    chunks:   ChunksExact<'a, u8>,
    channels: SourceChannels
}

impl<'a> SampleReader<'a> {
    pub fn new(data: &'a [u8], channels: SourceChannels) -> SampleReader<'a> {
        SampleReader {
            chunks: data.chunks_exact(channels.count()),
            channels
        }
    }
}

impl<'a> Iterator for SampleReader<'a> {
    type Item = PixelSample;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().map(|chunk| self.channels.expand(chunk))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<'a> ExactSizeIterator for SampleReader<'a> {}
