/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::constants::{QOI_CACHE_SIZE, QOI_MAX_RUN};
use crate::opcode::Opcode;
use crate::pixel::PixelSample;

/// Running state of a single pixel stream encode.
///
/// Created fresh for every image, it tracks the previous pixel,
/// the length of the pending run and the 64 slot color cache.
///
/// Pixels go in through [`push`](Self::push), chunks come out through
/// the `emit` callback in stream order. Call [`finish`](Self::finish)
/// after the last pixel to flush a pending run.
#[derive(Clone, Debug)]
pub struct EncoderState {
    previous: PixelSample,
    run:      u8,
    cache:    [PixelSample; QOI_CACHE_SIZE]
}

impl Default for EncoderState {
    fn default() -> Self {
        EncoderState::new()
    }
}

impl EncoderState {
    pub const fn new() -> EncoderState {
        EncoderState {
            previous: PixelSample::START,
            run:      0,
            cache:    [PixelSample::new(0, 0, 0, 0); QOI_CACHE_SIZE]
        }
    }

    /// Feed the next pixel in raster order.
    ///
    /// Emits zero, one or two chunks: a run flush and/or the chunk
    /// describing `pixel`.
    #[inline]
    pub fn push<E, F>(&mut self, pixel: PixelSample, mut emit: F) -> Result<(), E>
    where
        F: FnMut(Opcode) -> Result<(), E>
    {
        if pixel == self.previous {
            self.run += 1;

            if self.run == QOI_MAX_RUN {
                emit(Opcode::Run(self.run))?;
                self.run = 0;
            }
            return Ok(());
        }

        if self.run > 0 {
            emit(Opcode::Run(self.run))?;
            self.run = 0;
        }

        let index = pixel.cache_index();

        if self.cache[index] == pixel {
            emit(Opcode::Index(index as u8))?;
        } else {
            self.cache[index] = pixel;
            emit(Opcode::for_delta(pixel, self.previous))?;
        }
        self.previous = pixel;

        Ok(())
    }

    /// Flush a pending run, consuming the state
    pub fn finish<E, F>(self, mut emit: F) -> Result<(), E>
    where
        F: FnMut(Opcode) -> Result<(), E>
    {
        if self.run > 0 {
            emit(Opcode::Run(self.run))?;
        }
        Ok(())
    }

    /// The last pixel that was not part of a run
    pub const fn previous(&self) -> PixelSample {
        self.previous
    }

    /// Length of the run not yet flushed
    pub const fn pending_run(&self) -> u8 {
        self.run
    }

    pub const fn cache(&self) -> &[PixelSample; QOI_CACHE_SIZE] {
        &self.cache
    }
}
