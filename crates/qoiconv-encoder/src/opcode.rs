/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! QOI chunks and their byte layout
use zune_core::bytestream::{ZByteIoError, ZByteWriterTrait, ZWriter};

use crate::constants::{
    QOI_CACHE_SIZE, QOI_MAX_RUN, QOI_OP_DIFF, QOI_OP_INDEX, QOI_OP_LUMA, QOI_OP_RGB, QOI_OP_RGBA,
    QOI_OP_RUN
};
use crate::pixel::{PixelDelta, PixelSample};

/// One unit of the compressed stream.
///
/// Payloads hold the unbiased values, biasing and bit packing
/// happen in [`write`](Opcode::write).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Opcode {
    /// `11xxxxxx`, run of `1..=62` copies of the previous pixel
    Run(u8),
    /// `00xxxxxx`, position in the color cache
    Index(u8),
    /// `01rrggbb`, each difference in `-2..=1`
    Diff { dr: i8, dg: i8, db: i8 },
    /// `10gggggg rrrrbbbb`, green difference in `-32..=31`,
    /// red and blue relative to green in `-8..=7`
    Luma { dg: i8, dr_dg: i8, db_dg: i8 },
    /// `0xFE r g b`, alpha unchanged from the previous pixel
    Rgb { r: u8, g: u8, b: u8 },
    /// `0xFF r g b a`
    Rgba(PixelSample)
}

impl Opcode {
    /// Choose the narrowest literal or delta chunk able to express
    /// `current` given `previous`.
    ///
    /// Only called on a cache miss, runs and index hits are decided by
    /// the caller before reaching here.
    pub fn for_delta(current: PixelSample, previous: PixelSample) -> Opcode {
        let delta = current.wrapping_delta(&previous);

        match delta {
            PixelDelta { a: 0, r: -2..=1, g: -2..=1, b: -2..=1 } => Opcode::Diff {
                dr: delta.r,
                dg: delta.g,
                db: delta.b
            },
            PixelDelta { a: 0, g: -32..=31, .. }
                if (-8..=7).contains(&delta.r_minus_g())
                    && (-8..=7).contains(&delta.b_minus_g()) =>
            {
                // both fit in an i8 since they are within -8..=7
                Opcode::Luma {
                    dg:    delta.g,
                    dr_dg: delta.r_minus_g() as i8,
                    db_dg: delta.b_minus_g() as i8
                }
            }
            PixelDelta { a: 0, .. } => Opcode::Rgb {
                r: current.r,
                g: current.g,
                b: current.b
            },
            _ => Opcode::Rgba(current)
        }
    }

    /// Number of bytes this chunk occupies in the stream
    pub const fn encoded_len(&self) -> usize {
        match self {
            Opcode::Run(_) | Opcode::Index(_) | Opcode::Diff { .. } => 1,
            Opcode::Luma { .. } => 2,
            Opcode::Rgb { .. } => 4,
            Opcode::Rgba(_) => 5
        }
    }

    /// Pack this chunk and write it to `stream`.
    ///
    /// # Panics
    /// In debug builds, if a payload is outside the range its chunk
    /// can carry. The encoder never constructs such a chunk.
    pub fn write<T: ZByteWriterTrait>(self, stream: &mut ZWriter<T>) -> Result<(), ZByteIoError> {
        match self {
            Opcode::Run(run) => {
                debug_assert!((1..=QOI_MAX_RUN).contains(&run), "run {run} out of range");

                stream.write_u8_err(QOI_OP_RUN | (run - 1))
            }
            Opcode::Index(index) => {
                debug_assert!(usize::from(index) < QOI_CACHE_SIZE, "index {index} out of range");

                stream.write_u8_err(QOI_OP_INDEX | index)
            }
            Opcode::Diff { dr, dg, db } => {
                debug_assert!(
                    (-2..=1).contains(&dr) && (-2..=1).contains(&dg) && (-2..=1).contains(&db),
                    "diff ({dr},{dg},{db}) out of range"
                );
                let bias = |d: i8| (d + 2) as u8;

                stream.write_u8_err(QOI_OP_DIFF | bias(dr) << 4 | bias(dg) << 2 | bias(db))
            }
            Opcode::Luma { dg, dr_dg, db_dg } => {
                debug_assert!((-32..=31).contains(&dg), "luma green {dg} out of range");
                debug_assert!(
                    (-8..=7).contains(&dr_dg) && (-8..=7).contains(&db_dg),
                    "luma ({dr_dg},{db_dg}) out of range"
                );

                stream.write_const_bytes(&[
                    QOI_OP_LUMA | (dg + 32) as u8,
                    ((dr_dg + 8) as u8) << 4 | (db_dg + 8) as u8
                ])
            }
            Opcode::Rgb { r, g, b } => stream.write_const_bytes(&[QOI_OP_RGB, r, g, b]),
            Opcode::Rgba(px) => stream.write_const_bytes(&[QOI_OP_RGBA, px.r, px.g, px.b, px.a])
        }
    }
}
