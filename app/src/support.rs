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
use yuv565::{
    Nv12TileLayout, YuvError, NV12_TILE_BLOCK_HEIGHT, NV12_TILE_BLOCK_WIDTH,
};

/// Eight vertical SMPTE-like bars: white, yellow, cyan, green, magenta, red, blue, black
const BARS: [[u8; 3]; 8] = [
    [235, 235, 235],
    [235, 235, 16],
    [16, 235, 235],
    [16, 235, 16],
    [235, 16, 235],
    [235, 16, 16],
    [16, 16, 235],
    [16, 16, 16],
];

/// BT.601 limited range forward transform of a full range RGB triple, 8 bit fixed point
fn rgb_to_yuv(rgb: [u8; 3]) -> [u8; 3] {
    let r = rgb[0] as i32;
    let g = rgb[1] as i32;
    let b = rgb[2] as i32;
    let y = ((66 * r + 129 * g + 25 * b + 128) >> 8) + 16;
    let u = ((-38 * r - 74 * g + 112 * b + 128) >> 8) + 128;
    let v = ((112 * r - 94 * g - 18 * b + 128) >> 8) + 128;
    [
        y.clamp(0, 255) as u8,
        u.clamp(0, 255) as u8,
        v.clamp(0, 255) as u8,
    ]
}

/// Full resolution Y plane plus 2x2 subsampled U and V planes of a color bar frame
pub struct BarsFrame {
    pub width: usize,
    pub height: usize,
    pub y: Vec<u8>,
    pub u: Vec<u8>,
    pub v: Vec<u8>,
}

impl BarsFrame {
    pub fn new(width: usize, height: usize) -> BarsFrame {
        let bar_width = width.div_ceil(BARS.len());
        let mut y = vec![0u8; width * height];
        let chroma_width = width / 2;
        let chroma_height = height / 2;
        let mut u = vec![0u8; chroma_width * chroma_height];
        let mut v = vec![0u8; chroma_width * chroma_height];
        for (row, y_row) in y.chunks_exact_mut(width).enumerate() {
            // Luma ramps down over the lower quarter to show gradients
            let fade = if row >= height * 3 / 4 {
                ((height - row) * 255 / (height / 4).max(1)) as i32
            } else {
                255
            };
            for (x, dst) in y_row.iter_mut().enumerate() {
                let yuv = rgb_to_yuv(BARS[(x / bar_width).min(BARS.len() - 1)]);
                *dst = (16 + ((yuv[0] as i32 - 16) * fade) / 255) as u8;
            }
        }
        for cy in 0..chroma_height {
            for cx in 0..chroma_width {
                let yuv = rgb_to_yuv(BARS[(cx * 2 / bar_width).min(BARS.len() - 1)]);
                u[cy * chroma_width + cx] = yuv[1];
                v[cy * chroma_width + cx] = yuv[2];
            }
        }
        BarsFrame {
            width,
            height,
            y,
            u,
            v,
        }
    }

    /// Y, U, V planes back to back
    pub fn to_i420(&self) -> Vec<u8> {
        let mut dst = Vec::with_capacity(self.y.len() + self.u.len() * 2);
        dst.extend_from_slice(&self.y);
        dst.extend_from_slice(&self.u);
        dst.extend_from_slice(&self.v);
        dst
    }

    /// Y plane followed by interleaved chroma, U first when `u_first`
    pub fn to_semi_planar(&self, u_first: bool) -> Vec<u8> {
        let mut dst = Vec::with_capacity(self.y.len() + self.u.len() * 2);
        dst.extend_from_slice(&self.y);
        let chroma_width = self.width / 2;
        for (u_row, v_row) in self
            .u
            .chunks_exact(chroma_width)
            .zip(self.v.chunks_exact(chroma_width))
        {
            for (&u, &v) in u_row.iter().zip(v_row.iter()) {
                if u_first {
                    dst.extend_from_slice(&[u, v]);
                } else {
                    dst.extend_from_slice(&[v, u]);
                }
            }
            // Semi-planar rows are as wide as the luma row
            dst.resize(dst.len() + self.width - chroma_width * 2, 128);
        }
        dst
    }

    /// Packed Cb, Y0, Cr, Y1 quads
    pub fn to_cbycry(&self) -> Vec<u8> {
        let chroma_width = self.width / 2;
        let mut dst = Vec::with_capacity(self.y.len() * 2);
        for (row, y_row) in self.y.chunks_exact(self.width).enumerate() {
            let chroma_row = (row / 2) * chroma_width;
            for (x, y_pair) in y_row.chunks_exact(2).enumerate() {
                dst.extend_from_slice(&[
                    self.u[chroma_row + x],
                    y_pair[0],
                    self.v[chroma_row + x],
                    y_pair[1],
                ]);
            }
        }
        dst
    }
}

/// Expands little endian RGB565 into 8 bit RGB, replicating high bits into the low ones
pub fn rgb565_to_rgb8(src: &[u8]) -> Vec<u8> {
    let mut dst = Vec::with_capacity(src.len() / 2 * 3);
    for px in src.chunks_exact(2) {
        let px = u16::from_le_bytes([px[0], px[1]]);
        let r = ((px >> 11) & 0x1F) as u8;
        let g = ((px >> 5) & 0x3F) as u8;
        let b = (px & 0x1F) as u8;
        dst.extend_from_slice(&[(r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2)]);
    }
    dst
}

/// Rearranges a U-first semi-planar frame into 64x32 tiled NV12
pub fn tile_nv12(linear: &[u8], width: usize, height: usize) -> Result<Vec<u8>, YuvError> {
    let layout = Nv12TileLayout::new(width as u32, height as u32)?;
    let mut tiled = vec![0u8; layout.min_source_len()];
    for y in 0..height {
        let by = y / NV12_TILE_BLOCK_HEIGHT;
        let row = y % NV12_TILE_BLOCK_HEIGHT;
        for x in 0..width {
            let bx = x / NV12_TILE_BLOCK_WIDTH;
            let col = x % NV12_TILE_BLOCK_WIDTH;
            tiled[layout.luma_block_offset(bx, by) + row * NV12_TILE_BLOCK_WIDTH + col] =
                linear[y * width + x];
            let uv_dst =
                layout.chroma_block_offset(bx, by) + (row / 2) * NV12_TILE_BLOCK_WIDTH + (col & !1);
            let uv_src = width * height + (y / 2) * width + (x & !1);
            tiled[uv_dst..uv_dst + 2].copy_from_slice(&linear[uv_src..uv_src + 2]);
        }
    }
    Ok(tiled)
}
