/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::{ZByteWriterTrait, ZWriter};
use zune_core::colorspace::ColorSpace;
use zune_core::log::{debug, trace};
use zune_core::options::EncoderOptions;

use crate::constants::{QOI_END_MARKER, QOI_HEADER_SIZE, QOI_PADDING};
use crate::header::{ChannelDescriptor, QoiHeader};
use crate::pixel::{SampleReader, SourceChannels};
use crate::state::EncoderState;
use crate::QoiEncodeErrors;

const SUPPORTED_COLORSPACES: [ColorSpace; 4] = [
    ColorSpace::Luma,
    ColorSpace::LumaA,
    ColorSpace::RGB,
    ColorSpace::RGBA
];

/// Quite Ok Image Encoder
///
/// Accepts interleaved 8 bit gray, gray+alpha, RGB or RGBA pixels
/// and writes a complete QOI file: header, chunk stream and end marker.
///
/// # Example
/// - Encode a 100 by 100 RGB image
///
/// ```
/// use qoiconv_encoder::zune_core::bit_depth::BitDepth;
/// use qoiconv_encoder::zune_core::colorspace::ColorSpace;
/// use qoiconv_encoder::zune_core::options::EncoderOptions;
/// use qoiconv_encoder::QoiEncoder;
/// use qoiconv_encoder::QoiEncodeErrors;
///
/// const W:usize=100;
/// const H:usize=100;
///
/// fn main()->Result<(), QoiEncodeErrors>{
///     let pixels = std::array::from_fn::<u8,{W * H * 3},_>(|i| (i%256) as u8);
///     let mut encoder = QoiEncoder::new(&pixels,EncoderOptions::new(W,H,ColorSpace::RGB,BitDepth::Eight));
///     let mut sink = vec![];
///     let written = encoder.encode(&mut sink)?;
///     assert_eq!(written, sink.len());
///     assert_eq!(&sink[..4], b"qoif");
///     Ok(())
///}
/// ```
pub struct QoiEncoder<'a> {
    // raw pixels, interleaved
    pixel_data: &'a [u8],
    options:    EncoderOptions,
    descriptor: ChannelDescriptor
}

impl<'a> QoiEncoder<'a> {
    /// Create a new encoder which will encode the pixels
    ///
    /// # Arguments
    /// - data: Pixel data, size must be equal to `width*height*colorspace channels`
    /// - options: Encoder details for data, this contains width, height and number of color components
    #[allow(clippy::redundant_field_names)]
    pub fn new(data: &'a [u8], options: EncoderOptions) -> QoiEncoder<'a> {
        QoiEncoder {
            pixel_data: data,
            options:    options,
            descriptor: ChannelDescriptor::default()
        }
    }

    /// Choose how the channel byte of the header is derived,
    /// see [`ChannelDescriptor`]
    pub fn set_channel_descriptor(&mut self, descriptor: ChannelDescriptor) {
        self.descriptor = descriptor;
    }

    pub const fn channel_descriptor(&self) -> ChannelDescriptor {
        self.descriptor
    }

    /// Return the maximum size for which the encoder can safely
    /// encode the image without fearing for an out of space error
    ///
    /// Sources without alpha never need a five byte RGBA chunk,
    /// so they are bounded by four bytes per pixel.
    pub fn max_size(&self) -> usize {
        let per_pixel = match SourceChannels::from_colorspace(self.options.colorspace()) {
            Some(channels) if !channels.has_alpha() => 4,
            _ => 5
        };
        self.options
            .width()
            .saturating_mul(self.options.height())
            .saturating_mul(per_pixel)
            .saturating_add(QOI_HEADER_SIZE + QOI_PADDING)
    }

    /// Check options against the pixel buffer and build the header.
    ///
    /// Nothing is written, a rejected image leaves the sink untouched.
    fn validate(&self) -> Result<(QoiHeader, SourceChannels), QoiEncodeErrors> {
        let colorspace = self.options.colorspace();

        let channels = SourceChannels::from_colorspace(colorspace).ok_or(
            QoiEncodeErrors::UnsupportedColorspace(colorspace, &SUPPORTED_COLORSPACES)
        )?;

        if self.options.depth() != BitDepth::Eight {
            return Err(QoiEncodeErrors::UnsupportedDepth(self.options.depth()));
        }
        // check width first, `EncoderOptions::height` asserts on zero
        if self.options.width() == 0 {
            return Err(QoiEncodeErrors::ZeroDimensions);
        }
        let (width, height) = (self.options.width(), self.options.height());

        let header_width = u32::try_from(width)
            .map_err(|_| QoiEncodeErrors::TooLargeDimensions(width))?;
        let header_height = u32::try_from(height)
            .map_err(|_| QoiEncodeErrors::TooLargeDimensions(height))?;

        let expected_len = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(channels.count()))
            .ok_or(QoiEncodeErrors::TooLargeDimensions(width.max(height)))?;

        if self.pixel_data.len() != expected_len {
            return Err(QoiEncodeErrors::LengthMismatch(
                expected_len,
                self.pixel_data.len()
            ));
        }
        let header = QoiHeader::new(header_width, header_height, channels, self.descriptor);

        Ok((header, channels))
    }

    /// Encode the image writing it to `sink`
    ///
    /// # Arguments.
    /// - sink: Where encoded bytes go, anything implementing [`ZByteWriterTrait`]
    ///
    /// # Returns
    /// - Ok(size): Actual bytes written
    /// - Err: The error encountered during encoding
    ///
    /// # Panics
    /// If width is non-zero and height is zero, since
    /// [`EncoderOptions::height`] asserts the height is non-zero.
    pub fn encode<T: ZByteWriterTrait>(&mut self, sink: T) -> Result<usize, QoiEncodeErrors> {
        let (header, channels) = self.validate()?;

        trace!("Image width: {:?}", header.width);
        trace!("Image height: {:?}", header.height);
        trace!("Source layout: {:?}", channels);
        trace!("Channel descriptor: {}", header.channels);

        let mut stream = ZWriter::new(sink);
        stream.reserve(self.max_size())?;

        header.write(&mut stream)?;

        let mut state = EncoderState::new();

        for pixel in SampleReader::new(self.pixel_data, channels) {
            state.push(pixel, |op| op.write(&mut stream))?;
        }
        state.finish(|op| op.write(&mut stream))?;

        stream.write_u64_be_err(QOI_END_MARKER)?;

        let len = stream.bytes_written();
        debug!("Finished encoding image, {} bytes", len);

        Ok(len)
    }
}
