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
#![forbid(unsafe_code)]
use crate::built_coefficients::INVERSE_BT601_LIMITED_LEGACY_8PREC;
use crate::clip_table::ClipTable;
use crate::yuv_support::{get_yuv_range, CbCrInverseTransform, YuvChromaRange};

pub(crate) const PRECISION: u32 = 8;

#[inline(always)]
/// Packs saturated 8 bit channels into RGB565
pub(crate) const fn pack_rgb565(r: u8, g: u8, b: u8) -> u16 {
    (((r >> 3) as u16) << 11) | (((g >> 2) as u16) << 5) | ((b >> 3) as u16)
}

#[inline(always)]
/// Stores two pixels sharing one chroma sample as a single little endian 32 bit word
pub(crate) fn store_rgb565_pair(dst: &mut [u8], left: u16, right: u16) {
    let word = ((right as u32) << 16) | left as u32;
    dst[0..4].copy_from_slice(&word.to_le_bytes());
}

#[inline(always)]
pub(crate) fn store_rgb565(dst: &mut [u8], px: u16) {
    dst[0..2].copy_from_slice(&px.to_le_bytes());
}

/// Chroma contribution shared by a pixel pair
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct ChromaTerms {
    pub(crate) u_b: i32,
    pub(crate) uv_g: i32,
    pub(crate) v_r: i32,
}

/// Fixed point BT.601 limited range YUV to RGB565 with table saturation.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Rgb565Kernel<'a> {
    clip: &'a ClipTable,
    transform: CbCrInverseTransform<i32>,
    bias_y: i32,
    bias_uv: i32,
}

impl<'a> Rgb565Kernel<'a> {
    pub(crate) fn new(clip: &'a ClipTable) -> Rgb565Kernel<'a> {
        let range: YuvChromaRange = get_yuv_range(8);
        Rgb565Kernel {
            clip,
            transform: INVERSE_BT601_LIMITED_LEGACY_8PREC,
            bias_y: range.bias_y as i32,
            bias_uv: range.bias_uv as i32,
        }
    }

    #[inline(always)]
    pub(crate) fn chroma(&self, u: u8, v: u8) -> ChromaTerms {
        let u = u as i32 - self.bias_uv;
        let v = v as i32 - self.bias_uv;
        ChromaTerms {
            u_b: u * self.transform.cb_coef,
            uv_g: -v * self.transform.g_coeff_1 - u * self.transform.g_coeff_2,
            v_r: v * self.transform.cr_coef,
        }
    }

    /// Channel intermediates before saturation, ordered `r, g, b`.
    ///
    /// Division truncates toward zero, an arithmetic shift would floor negative values.
    #[inline(always)]
    pub(crate) fn intermediates(&self, y: u8, chroma: &ChromaTerms) -> (i32, i32, i32) {
        const SCALE: i32 = 1 << PRECISION;
        let tmp = (y as i32 - self.bias_y) * self.transform.y_coef;
        let r = (tmp + chroma.v_r) / SCALE;
        let g = (tmp + chroma.uv_g) / SCALE;
        let b = (tmp + chroma.u_b) / SCALE;
        (r, g, b)
    }

    #[inline(always)]
    pub(crate) fn pixel(&self, y: u8, chroma: &ChromaTerms) -> u16 {
        let (r, g, b) = self.intermediates(y, chroma);
        pack_rgb565(self.clip.clip(r), self.clip.clip(g), self.clip.clip(b))
    }

    /// Converts one pixel pair, storing a paired word when both pixels exist
    #[inline(always)]
    pub(crate) fn store_pair(&self, dst: &mut [u8], y0: u8, y1: u8, u: u8, v: u8) {
        let chroma = self.chroma(u, v);
        store_rgb565_pair(dst, self.pixel(y0, &chroma), self.pixel(y1, &chroma));
    }

    /// Converts the trailing pixel of an odd width row
    #[inline(always)]
    pub(crate) fn store_single(&self, dst: &mut [u8], y0: u8, u: u8, v: u8) {
        let chroma = self.chroma(u, v);
        store_rgb565(dst, self.pixel(y0, &chroma));
    }
}
