/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Checks against the `qoi` crate

use qoiconv_encoder::ChannelDescriptor;
use zune_core::colorspace::ColorSpace;

use crate::{encode, synthetic_image};

const DIMENSIONS: [(usize, usize); 4] = [(1, 1), (7, 3), (64, 64), (333, 17)];

fn decode_rgba(data: &[u8]) -> Vec<u8> {
    qoi::Decoder::new(data)
        .unwrap()
        .with_channels(qoi::Channels::Rgba)
        .decode_to_vec()
        .unwrap()
}

fn widen(pixels: &[u8], channels: usize) -> Vec<u8> {
    pixels
        .chunks_exact(channels)
        .flat_map(|px| match px {
            [v] => [*v, *v, *v, 255],
            [v, a] => [*v, *v, *v, *a],
            [r, g, b] => [*r, *g, *b, 255],
            [r, g, b, a] => [*r, *g, *b, *a],
            _ => unreachable!()
        })
        .collect()
}

#[test]
fn chunk_stream_matches_qoi_crate() {
    for (seed, (w, h)) in DIMENSIONS.iter().enumerate() {
        for (colorspace, channels) in [(ColorSpace::RGB, 3), (ColorSpace::RGBA, 4)] {
            let pixels = synthetic_image(w * h * channels, 0xdead_beef ^ seed as u32);

            let ours = encode(&pixels, *w, *h, colorspace, ChannelDescriptor::AlphaPresence);
            let theirs = qoi::encode_to_vec(&pixels, *w as u32, *h as u32).unwrap();

            // identical headers when the descriptor follows alpha presence
            assert_eq!(ours, theirs, "{w}x{h} {colorspace:?}");
        }
    }
}

#[test]
fn default_descriptor_only_changes_header() {
    let (w, h) = (64, 64);
    let pixels = synthetic_image(w * h * 4, 42);

    let ours = encode(&pixels, w, h, ColorSpace::RGBA, ChannelDescriptor::SourceParity);
    let theirs = qoi::encode_to_vec(&pixels, w as u32, h as u32).unwrap();

    assert_eq!(ours[12], 3);
    assert_eq!(theirs[12], 4);
    assert_eq!(ours[..12], theirs[..12]);
    assert_eq!(ours[13..], theirs[13..]);
}

#[test]
fn round_trips_every_layout() {
    for (seed, (w, h)) in DIMENSIONS.iter().enumerate() {
        for (colorspace, channels) in [
            (ColorSpace::Luma, 1),
            (ColorSpace::LumaA, 2),
            (ColorSpace::RGB, 3),
            (ColorSpace::RGBA, 4)
        ] {
            let pixels = synthetic_image(w * h * channels, 0x1234_5678 ^ seed as u32);
            let encoded = encode(&pixels, *w, *h, colorspace, ChannelDescriptor::AlphaPresence);

            assert_eq!(
                decode_rgba(&encoded),
                widen(&pixels, channels),
                "{w}x{h} {colorspace:?}"
            );
        }
    }
}

#[test]
fn header_fields_survive_decoding() {
    let pixels = synthetic_image(333 * 17 * 3, 7);
    let encoded = encode(&pixels, 333, 17, ColorSpace::RGB, ChannelDescriptor::SourceParity);

    let header = qoi::decode_header(&encoded).unwrap();
    assert_eq!(header.width, 333);
    assert_eq!(header.height, 17);
    assert_eq!(header.channels, qoi::Channels::Rgba);
    assert_eq!(header.colorspace, qoi::ColorSpace::Srgb);
}
