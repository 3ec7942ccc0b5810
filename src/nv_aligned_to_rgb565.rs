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
use crate::clip_table::ClipTable;
use crate::numerics::Rgb565Kernel;
use crate::yuv_error::{check_destination_size, check_overflow_v3, check_source_size};
use crate::yuv_support::YuvNVOrder;
use crate::{PackedStride, YuvError};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

/// Convert semi-planar YUV 4:2:0 (V first) into a destination padded to `stride.aligned_width()`.
///
/// Only the first `stride.width()` pixels of every destination row are written,
/// padding columns keep their previous content. No crop is supported.
pub fn nv_aligned_to_rgb565(
    clip: &ClipTable,
    src: &[u8],
    dst: &mut [u8],
    stride: &PackedStride,
    height: u32,
) -> Result<(), YuvError> {
    if height == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    let width = stride.width() as usize;
    let height = height as usize;
    let dst_skip = stride.dst_skip();
    check_overflow_v3(width, height, 2)?;

    let order = YuvNVOrder::VU;
    let uv_width = (width + 1) & !1;
    let uv_origin = width * height;
    let uv_end = uv_origin + ((height - 1) / 2) * width + uv_width;
    check_source_size(src, uv_end.max(width * height))?;
    let dst_len = (height - 1)
        .checked_mul(dst_skip)
        .and_then(|v| v.checked_add(width * 2))
        .ok_or(YuvError::PointerOverflow)?;
    check_destination_size(dst, dst_len)?;

    let kernel = Rgb565Kernel::new(clip);
    let u_position = order.get_u_position();
    let v_position = order.get_v_position();

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst.par_chunks_mut(dst_skip).take(height).enumerate();
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst.chunks_mut(dst_skip).take(height).enumerate();
    }
    iter.for_each(|(y, rgb)| {
        let rgb = &mut rgb[..width * 2];
        let y_src = &src[y * width..(y + 1) * width];
        let uv_src = &src[uv_origin + (y / 2) * width..][..uv_width];

        for ((rgb, y_src), uv_src) in rgb
            .chunks_exact_mut(4)
            .zip(y_src.chunks_exact(2))
            .zip(uv_src.chunks_exact(2))
        {
            kernel.store_pair(
                rgb,
                y_src[0],
                y_src[1],
                uv_src[u_position],
                uv_src[v_position],
            );
        }

        if width & 1 != 0 {
            let rgb = rgb.chunks_exact_mut(4).into_remainder();
            let y_src = y_src.chunks_exact(2).remainder();
            let uv_src = &uv_src[uv_width - 2..];
            kernel.store_single(rgb, y_src[0], uv_src[u_position], uv_src[v_position]);
        }
    });

    Ok(())
}
