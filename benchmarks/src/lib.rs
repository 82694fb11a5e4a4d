/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// A smooth gradient with a flat band and a noisy band,
/// `channels` interleaved 8 bit samples per pixel
pub fn sample_image(width: usize, height: usize, channels: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(width * height * channels);
    let mut seed = 0x2545_f491_u32;

    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let value = if y < height / 3 {
                    ((x + y + c * 40) / 2) as u8
                } else if y < 2 * height / 3 {
                    200
                } else {
                    seed ^= seed << 13;
                    seed ^= seed >> 17;
                    seed ^= seed << 5;
                    (seed >> 24) as u8
                };
                out.push(value);
            }
        }
    }
    out
}
