/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

// 00xxxxxx
pub const QOI_OP_INDEX: u8 = 0x00;
// 01xxxxxx
pub const QOI_OP_DIFF: u8 = 0x40;
// 10xxxxxx
pub const QOI_OP_LUMA: u8 = 0x80;
// 11xxxxxx
pub const QOI_OP_RUN: u8 = 0xc0;
// 11111110
pub const QOI_OP_RGB: u8 = 0xfe;
// 11111111
pub const QOI_OP_RGBA: u8 = 0xff;

pub const QOI_MAGIC: u32 = u32::from_be_bytes(*b"qoif");
pub const QOI_HEADER_SIZE: usize = 14;
/// End marker, seven zero bytes followed by `0x01`
pub const QOI_END_MARKER: u64 = 0x01;
pub const QOI_PADDING: usize = 8;

/// Number of slots in the running color cache
pub const QOI_CACHE_SIZE: usize = 64;
/// Longest run a single RUN opcode can carry.
///
/// 63 and 64 would collide with the RGB and RGBA tags.
pub const QOI_MAX_RUN: u8 = 62;
