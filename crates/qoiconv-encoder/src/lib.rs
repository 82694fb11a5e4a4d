/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Encoding raw pixels into the Quite Ok Image format
//!
//! [Format Specification](https://qoiformat.org/qoi-specification.pdf)
//!
//! # Features
//! - Gray, gray+alpha, RGB and RGBA 8 bit sources
//! - Streams to any [`ZByteWriterTrait`](zune_core::bytestream::ZByteWriterTrait) sink
//! - `no_std`
//!
//! # Layout
//! - [`QoiEncoder`] validates options and frames the output
//! - [`EncoderState`] turns pixels into [`Opcode`]s
//! - [`Opcode::write`] and [`QoiHeader::write`] produce the bytes
//!
//! ## `no_std`
//! You can use `no_std` with alloc feature to compile for `no_std` endpoints

#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;
extern crate core;

pub use encoder::*;
pub use errors::*;
pub use header::*;
pub use opcode::*;
pub use pixel::*;
pub use state::*;
pub use zune_core;

mod constants;
mod encoder;
mod errors;
mod header;
mod opcode;
mod pixel;
mod state;
