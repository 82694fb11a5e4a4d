/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::convert::Infallible;

use qoiconv_encoder::{
    ChannelDescriptor, EncoderState, Opcode, PixelSample, SampleReader, SourceChannels
};
use zune_core::colorspace::ColorSpace;

use crate::{encode, synthetic_image};

fn opcodes(pixels: &[u8], channels: SourceChannels) -> Vec<Opcode> {
    let mut state = EncoderState::new();
    let mut ops = Vec::new();

    for px in SampleReader::new(pixels, channels) {
        state
            .push(px, |op| {
                ops.push(op);
                Ok::<(), Infallible>(())
            })
            .unwrap();
    }
    state
        .finish(|op| {
            ops.push(op);
            Ok::<(), Infallible>(())
        })
        .unwrap();
    ops
}

#[test]
fn output_size_is_header_chunks_and_marker() {
    for (colorspace, channels) in [
        (ColorSpace::Luma, SourceChannels::Luma),
        (ColorSpace::LumaA, SourceChannels::LumaAlpha),
        (ColorSpace::RGB, SourceChannels::Rgb),
        (ColorSpace::RGBA, SourceChannels::Rgba)
    ] {
        let (w, h) = (50, 31);
        let pixels = synthetic_image(w * h * channels.count(), 99);

        let chunk_bytes: usize = opcodes(&pixels, channels)
            .iter()
            .map(Opcode::encoded_len)
            .sum();
        let encoded = encode(&pixels, w, h, colorspace, ChannelDescriptor::SourceParity);

        assert_eq!(encoded.len(), 14 + chunk_bytes + 8, "{colorspace:?}");
        assert_eq!(encoded[encoded.len() - 8..], [0, 0, 0, 0, 0, 0, 0, 1]);
    }
}

#[test]
fn identical_pixels_split_into_full_runs() {
    let px = [3_u8, 4, 5];

    for n in [1_usize, 61, 62, 63, 124, 125, 1000] {
        // the first pixel is spelled out, the rest are run pixels
        let pixels = px.repeat(n + 1);
        let ops = opcodes(&pixels, SourceChannels::Rgb);

        let mut expected = vec![Opcode::Run(62); n / 62];
        if n % 62 != 0 {
            expected.push(Opcode::Run((n % 62) as u8));
        }
        assert_eq!(ops[1..], expected, "run of {n}");
    }
}

#[test]
fn cache_holds_latest_pixel_per_slot() {
    let pixels = synthetic_image(4 * 4096, 2024);
    let mut state = EncoderState::new();
    // only pixels spelled out as DIFF, LUMA, RGB or RGBA claim a slot
    let mut model = [PixelSample::new(0, 0, 0, 0); 64];

    for px in SampleReader::new(&pixels, SourceChannels::Rgba) {
        let mut spelled_out = false;
        state
            .push(px, |op| {
                spelled_out |= !matches!(op, Opcode::Run(_) | Opcode::Index(_));
                Ok::<(), Infallible>(())
            })
            .unwrap();

        if spelled_out {
            model[px.cache_index()] = px;
        }
        assert_eq!(state.cache(), &model);
    }
}

#[test]
fn header_is_big_endian() {
    let pixels = vec![0_u8; 258 * 2];
    let encoded = encode(&pixels, 258, 2, ColorSpace::Luma, ChannelDescriptor::SourceParity);

    assert_eq!(&encoded[..4], b"qoif");
    assert_eq!(encoded[4..8], [0, 0, 1, 2]);
    assert_eq!(encoded[8..12], [0, 0, 0, 2]);
    assert_eq!(encoded[13], 0);
}
