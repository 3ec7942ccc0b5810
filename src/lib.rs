/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! YUV to RGB565 conversion for decoded video frames.
//!
//! A [`ColorConverter`] is configured once with a source [`ColorFormat`] and converts
//! cropped regions of raw frames into packed little endian RGB565. Supported sources are
//! I420 planar, CbYCrY packed, three vendor flavours of semi-planar 4:2:0 and QCOM 64x32
//! tiled NV12. Color math is fixed point BT.601 limited range and matches legacy hardware
//! output bit for bit.
//!
//! Enable the `rayon` feature to convert rows in parallel.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod built_coefficients;
mod cbycry_to_rgb565;
mod clip_table;
mod color_converter;
mod images;
mod numerics;
mod nv12_tile;
mod nv_aligned_to_rgb565;
mod yuv420_to_rgb565;
mod yuv_error;
mod yuv_nv_to_rgb565;
mod yuv_support;

pub use clip_table::{ClipTable, CLIP_MAX, CLIP_MIN, CLIP_TABLE_SIZE};
pub use color_converter::ColorConverter;
pub use images::{CropRect, PackedStride, Rgb565ImageMut, YuvSourceImage};
pub use nv12_tile::{
    nv12_tile_to_rgb565, tiled_block_index, Nv12TileLayout, NV12_TILE_BLOCK_GROUP_SIZE,
    NV12_TILE_BLOCK_HEIGHT, NV12_TILE_BLOCK_SIZE, NV12_TILE_BLOCK_WIDTH,
};
pub use nv_aligned_to_rgb565::nv_aligned_to_rgb565;
pub use yuv_error::{MismatchedSize, StrideError, UnsupportedGeometry, YuvError};
pub use yuv_support::{ColorFormat, SourceLayout};
