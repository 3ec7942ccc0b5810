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

#![no_main]

use libfuzzer_sys::fuzz_target;
use yuv565::{nv12_tile_to_rgb565, nv_aligned_to_rgb565, ClipTable, Nv12TileLayout, PackedStride};

fuzz_target!(|data: (u8, u8, u8, u8, u8, u8)| {
    fuzz_nv12_tile(data.0, data.1, data.2, data.3);
    fuzz_nv_aligned(data.0, data.1, data.2, data.4, data.5);
});

fn fuzz_nv12_tile(i_width: u8, i_height: u8, padding: u8, value: u8) {
    if i_width == 0 || i_height == 0 {
        return;
    }
    let width = i_width as u32 * 2;
    let height = i_height as u32;
    let layout = Nv12TileLayout::new(width, height).unwrap();
    let src = vec![value; layout.min_source_len()];
    let dst_skip = (width as usize + padding as usize) * 2;
    let Ok(stride) = PackedStride::new(width, 0, dst_skip) else {
        return;
    };
    let mut dst = vec![0u8; dst_skip * height as usize];
    let clip = ClipTable::new();
    nv12_tile_to_rgb565(&clip, &src, &mut dst, &stride, height).unwrap();
    // Shortened buffers must be rejected, not read past
    let _ = nv12_tile_to_rgb565(&clip, &src[..src.len() - 1], &mut dst, &stride, height);
}

fn fuzz_nv_aligned(i_width: u8, i_height: u8, padding: u8, y_value: u8, uv_value: u8) {
    if i_width == 0 || i_height == 0 {
        return;
    }
    let width = i_width as u32;
    let height = i_height as u32;
    let aligned_width = width + padding as u32;
    let dst_skip = (aligned_width as usize).div_ceil(2) * 4;
    let stride = PackedStride::aligned(width, aligned_width, 0, dst_skip).unwrap();
    let mut src = vec![y_value; width as usize * height as usize];
    src.resize(src.len() + (height as usize).div_ceil(2) * width as usize + 1, uv_value);
    let mut dst = vec![0u8; dst_skip * height as usize];
    let clip = ClipTable::new();
    nv_aligned_to_rgb565(&clip, &src, &mut dst, &stride, height).unwrap();
}
