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
use crate::yuv_error::{check_destination_size, check_overflow_v2, check_source_size};
use crate::{PackedStride, YuvError};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

pub const NV12_TILE_BLOCK_WIDTH: usize = 64;
pub const NV12_TILE_BLOCK_HEIGHT: usize = 32;
pub const NV12_TILE_BLOCK_SIZE: usize = NV12_TILE_BLOCK_WIDTH * NV12_TILE_BLOCK_HEIGHT;
/// Luma section is padded to a whole number of block groups
pub const NV12_TILE_BLOCK_GROUP_SIZE: usize = NV12_TILE_BLOCK_SIZE * 4;

/// Physical block slot of the frame space block `(bx, by)` in a grid of `nbx` x `nby` blocks.
///
/// Blocks are laid out in a zigzag, for `nbx = 8` and `nby = 7`:
///
/// ```text
///  by \ bx   0   1   2   3   4   5   6   7
///     0      0   1   6   7   8   9  14  15
///     1      2   3   4   5  10  11  12  13
///     2     16  17  22  23  24  25  30  31
///     3     18  19  20  21  26  27  28  29
///     4     32  33  38  39  40  41  46  47
///     5     34  35  36  37  42  43  44  45
///     6     48  49  50  51  52  53  54  55
/// ```
///
/// The last row of a grid with an odd row count is stored linearly.
#[inline]
pub const fn tiled_block_index(bx: usize, by: usize, nbx: usize, nby: usize) -> usize {
    if by & 1 == 0 {
        let base = by * nbx;
        if nby & 1 != 0 && by == nby - 1 {
            base + bx
        } else {
            base + bx + ((bx + 2) & !3)
        }
    } else {
        let base = (by & !1) * nbx + 2;
        base + bx + (bx & !3)
    }
}

/// Block grid of a 64x32 tiled NV12 frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Nv12TileLayout {
    width: usize,
    height: usize,
    /// Block columns actually covering the frame
    abx: usize,
    /// Block columns rounded up to even
    nbx: usize,
    nby_y: usize,
    nby_uv: usize,
    size_y: usize,
    min_source_len: usize,
}

impl Nv12TileLayout {
    pub fn new(width: u32, height: u32) -> Result<Nv12TileLayout, YuvError> {
        if width == 0 || height == 0 {
            return Err(YuvError::ZeroBaseSize);
        }
        let width = width as usize;
        let height = height as usize;
        let abx = (width - 1) / NV12_TILE_BLOCK_WIDTH + 1;
        let nbx = (abx + 1) & !1;
        let nby_y = (height - 1) / NV12_TILE_BLOCK_HEIGHT + 1;
        let nby_uv = (height / 2).saturating_sub(1) / NV12_TILE_BLOCK_HEIGHT + 1;

        check_overflow_v2(nbx * nby_y, NV12_TILE_BLOCK_SIZE)?;
        let size_y = (nbx * nby_y * NV12_TILE_BLOCK_SIZE).div_ceil(NV12_TILE_BLOCK_GROUP_SIZE)
            * NV12_TILE_BLOCK_GROUP_SIZE;
        check_overflow_v2(nbx * nby_uv, NV12_TILE_BLOCK_SIZE)?;

        let mut layout = Nv12TileLayout {
            width,
            height,
            abx,
            nbx,
            nby_y,
            nby_uv,
            size_y,
            min_source_len: 0,
        };
        layout.min_source_len = layout.furthest_source_byte();
        log::trace!(
            "NV12 tile layout {}x{}: {}x{} luma blocks, {} chroma block rows, luma section {} bytes",
            width,
            height,
            nbx,
            nby_y,
            nby_uv,
            size_y
        );
        Ok(layout)
    }

    /// End of the furthest byte any block of the frame reads
    fn furthest_source_byte(&self) -> usize {
        let mut end = 0usize;
        for by in 0..self.nby_y {
            let block_height = self.block_height(by);
            for bx in 0..self.abx {
                let block_width = self.block_width(bx);
                let luma_end = self.luma_block_offset(bx, by)
                    + (block_height - 1) * NV12_TILE_BLOCK_WIDTH
                    + block_width;
                let chroma_end = self.chroma_block_offset(bx, by)
                    + ((block_height - 1) / 2) * NV12_TILE_BLOCK_WIDTH
                    + ((block_width + 1) & !1);
                end = end.max(luma_end).max(chroma_end);
            }
        }
        end
    }

    #[inline]
    fn block_width(&self, bx: usize) -> usize {
        (self.width - bx * NV12_TILE_BLOCK_WIDTH).min(NV12_TILE_BLOCK_WIDTH)
    }

    #[inline]
    fn block_height(&self, by: usize) -> usize {
        (self.height - by * NV12_TILE_BLOCK_HEIGHT).min(NV12_TILE_BLOCK_HEIGHT)
    }

    /// Byte offset of the luma block covering frame block `(bx, by)`
    #[inline]
    pub fn luma_block_offset(&self, bx: usize, by: usize) -> usize {
        tiled_block_index(bx, by, self.nbx, self.nby_y) * NV12_TILE_BLOCK_SIZE
    }

    /// Byte offset of the interleaved UV rows serving frame block `(bx, by)`.
    ///
    /// Two luma block rows share one chroma block, odd rows start half a block in.
    #[inline]
    pub fn chroma_block_offset(&self, bx: usize, by: usize) -> usize {
        let half = if by & 1 != 0 {
            NV12_TILE_BLOCK_SIZE / 2
        } else {
            0
        };
        self.size_y
            + tiled_block_index(bx, by / 2, self.nbx, self.nby_uv) * NV12_TILE_BLOCK_SIZE
            + half
    }

    pub fn block_columns(&self) -> usize {
        self.nbx
    }

    pub fn luma_block_rows(&self) -> usize {
        self.nby_y
    }

    pub fn chroma_block_rows(&self) -> usize {
        self.nby_uv
    }

    /// Luma section size including group padding, chroma starts here
    pub fn luma_size(&self) -> usize {
        self.size_y
    }

    pub fn min_source_len(&self) -> usize {
        self.min_source_len
    }
}

/// Convert 64x32 tiled NV12 (QCOM 2m8ka) to RGB565.
///
/// The whole `stride.width()` x `height` frame is converted, no crop is supported.
/// Destination rows are `stride.dst_skip()` bytes apart.
pub fn nv12_tile_to_rgb565(
    clip: &ClipTable,
    src: &[u8],
    dst: &mut [u8],
    stride: &PackedStride,
    height: u32,
) -> Result<(), YuvError> {
    let layout = Nv12TileLayout::new(stride.width(), height)?;
    let dst_skip = stride.dst_skip();
    let block_row_bytes = dst_skip
        .checked_mul(NV12_TILE_BLOCK_HEIGHT)
        .ok_or(YuvError::PointerOverflow)?;
    let dst_len = (layout.height - 1)
        .checked_mul(dst_skip)
        .and_then(|v| v.checked_add(layout.width * 2))
        .ok_or(YuvError::PointerOverflow)?;
    check_source_size(src, layout.min_source_len)?;
    check_destination_size(dst, dst_len)?;

    let kernel = Rgb565Kernel::new(clip);

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst
            .par_chunks_mut(block_row_bytes)
            .take(layout.nby_y)
            .enumerate();
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst.chunks_mut(block_row_bytes).take(layout.nby_y).enumerate();
    }
    iter.for_each(|(by, rgb_blocks)| {
        let block_height = layout.block_height(by);
        for bx in 0..layout.abx {
            let block_width = layout.block_width(bx);
            let y_block = layout.luma_block_offset(bx, by);
            let uv_block = layout.chroma_block_offset(bx, by);

            for row in 0..block_height {
                let y_src = &src[y_block + row * NV12_TILE_BLOCK_WIDTH..][..block_width];
                let uv_src = &src[uv_block + (row / 2) * NV12_TILE_BLOCK_WIDTH..]
                    [..(block_width + 1) & !1];
                let rgb = &mut rgb_blocks[row * dst_skip + bx * NV12_TILE_BLOCK_WIDTH * 2..]
                    [..block_width * 2];

                for ((rgb, y_src), uv_src) in rgb
                    .chunks_exact_mut(4)
                    .zip(y_src.chunks_exact(2))
                    .zip(uv_src.chunks_exact(2))
                {
                    kernel.store_pair(rgb, y_src[0], y_src[1], uv_src[0], uv_src[1]);
                }

                if block_width & 1 != 0 {
                    let rgb = rgb.chunks_exact_mut(4).into_remainder();
                    let y_src = y_src.chunks_exact(2).remainder();
                    let uv_src = &uv_src[block_width - 1..];
                    kernel.store_single(rgb, y_src[0], uv_src[0], uv_src[1]);
                }
            }
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yuv_nv_to_rgb565::qcom_yvu420_semi_planar_to_rgb565;
    use crate::{Rgb565ImageMut, YuvSourceImage};
    use rand::Rng;

    #[test]
    fn test_zigzag_block_numbering() {
        assert_eq!(tiled_block_index(0, 0, 8, 7), 0);
        assert_eq!(tiled_block_index(1, 0, 8, 7), 1);
        assert_eq!(tiled_block_index(2, 0, 8, 7), 6);
        assert_eq!(tiled_block_index(7, 0, 8, 7), 15);
        assert_eq!(tiled_block_index(0, 1, 8, 7), 2);
        assert_eq!(tiled_block_index(4, 1, 8, 7), 10);
        assert_eq!(tiled_block_index(2, 2, 8, 7), 22);
        assert_eq!(tiled_block_index(3, 3, 8, 7), 21);
        assert_eq!(tiled_block_index(2, 6, 8, 7), 50);
        // Even row count keeps the zigzag on the last even row
        assert_eq!(tiled_block_index(2, 6, 8, 8), 54);
    }

    #[test]
    fn test_layout_sizes() {
        let layout = Nv12TileLayout::new(130, 70).unwrap();
        assert_eq!(layout.block_columns(), 4);
        assert_eq!(layout.luma_block_rows(), 3);
        assert_eq!(layout.chroma_block_rows(), 2);
        assert_eq!(layout.luma_size(), 3 * NV12_TILE_BLOCK_GROUP_SIZE);

        // One block pair of luma is padded to a full group
        let layout = Nv12TileLayout::new(64, 32).unwrap();
        assert_eq!(layout.block_columns(), 2);
        assert_eq!(layout.luma_size(), NV12_TILE_BLOCK_GROUP_SIZE);
        assert_eq!(
            layout.min_source_len(),
            NV12_TILE_BLOCK_GROUP_SIZE + 15 * NV12_TILE_BLOCK_WIDTH + 64
        );

        let layout = Nv12TileLayout::new(2, 1).unwrap();
        assert_eq!(layout.chroma_block_rows(), 1);
        assert!(matches!(
            Nv12TileLayout::new(0, 16),
            Err(YuvError::ZeroBaseSize)
        ));
    }

    fn tile_nv12(linear: &[u8], width: usize, height: usize, layout: &Nv12TileLayout) -> Vec<u8> {
        let mut tiled = vec![0u8; layout.min_source_len()];
        for y in 0..height {
            let by = y / NV12_TILE_BLOCK_HEIGHT;
            let row = y % NV12_TILE_BLOCK_HEIGHT;
            for x in 0..width {
                let bx = x / NV12_TILE_BLOCK_WIDTH;
                let col = x % NV12_TILE_BLOCK_WIDTH;
                tiled[layout.luma_block_offset(bx, by) + row * NV12_TILE_BLOCK_WIDTH + col] =
                    linear[y * width + x];
                let uv_dst = layout.chroma_block_offset(bx, by)
                    + (row / 2) * NV12_TILE_BLOCK_WIDTH
                    + (col & !1);
                let uv_src = width * height + (y / 2) * width + (x & !1);
                tiled[uv_dst] = linear[uv_src];
                tiled[uv_dst + 1] = linear[uv_src + 1];
            }
        }
        tiled
    }

    #[test]
    fn test_tiled_frame_matches_linear_semi_planar() {
        let clip = ClipTable::new();
        let mut rng = rand::rng();
        // 67 wide leaves a 3 pixel last block column
        for (width, height) in [(130usize, 70usize), (67, 33)] {
            let linear: Vec<u8> = (0..width * height * 2).map(|_| rng.random()).collect();
            let layout = Nv12TileLayout::new(width as u32, height as u32).unwrap();
            let tiled = tile_nv12(&linear, width, height, &layout);

            let mut expected = vec![0u8; width * height * 2];
            qcom_yvu420_semi_planar_to_rgb565(
                &clip,
                &YuvSourceImage::full(&linear, width as u32, height as u32),
                &mut Rgb565ImageMut::full(&mut expected, width as u32, height as u32),
            )
            .unwrap();

            let stride = PackedStride::new(width as u32, 0, (width * 2 + 3) & !3).unwrap();
            let mut dst = vec![0u8; stride.dst_skip() * height];
            nv12_tile_to_rgb565(&clip, &tiled, &mut dst, &stride, height as u32).unwrap();
            for (row, expected) in dst
                .chunks_exact(stride.dst_skip())
                .zip(expected.chunks_exact(width * 2))
            {
                assert_eq!(&row[..width * 2], expected);
            }
        }
    }

    #[test]
    fn test_hand_placed_samples_land_on_frame_pixels() {
        let clip = ClipTable::new();
        let (width, height) = (130usize, 70usize);
        let layout = Nv12TileLayout::new(width as u32, height as u32).unwrap();
        let luma_size = 3 * NV12_TILE_BLOCK_GROUP_SIZE;
        assert_eq!(layout.luma_size(), luma_size);
        assert_eq!(layout.luma_block_offset(2, 1), 4 * NV12_TILE_BLOCK_SIZE);
        assert_eq!(layout.luma_block_offset(2, 2), 10 * NV12_TILE_BLOCK_SIZE);
        assert_eq!(layout.chroma_block_offset(0, 1), luma_size + 1024);
        assert_eq!(
            layout.chroma_block_offset(2, 2),
            luma_size + tiled_block_index(2, 1, 4, 2) * NV12_TILE_BLOCK_SIZE
        );
        assert_eq!(layout.chroma_block_offset(2, 2), 32768);

        let mut tiled = vec![128u8; layout.min_source_len()];
        // Frame pixels (128, 40) and (129, 40): block (2, 1), row 8
        tiled[8192 + 8 * 64] = 81;
        tiled[8192 + 8 * 64 + 1] = 200;
        // Block (2, 1) chroma: slot 6 of the chroma plane, upper half block, chroma row 4
        tiled[38144] = 90;
        tiled[38145] = 240;
        // Frame pixel (128, 64): block (2, 2) sits in slot 10, chroma in slot 4
        tiled[20480] = 145;
        tiled[32768] = 54;
        tiled[32769] = 34;

        let dst_skip = 260;
        let stride = PackedStride::new(width as u32, 0, dst_skip).unwrap();
        let mut dst = vec![0u8; dst_skip * height];
        nv12_tile_to_rgb565(&clip, &tiled, &mut dst, &stride, height as u32).unwrap();

        let kernel = Rgb565Kernel::new(&clip);
        let pixel_at = |x: usize, y: usize| {
            u16::from_le_bytes([dst[y * dst_skip + x * 2], dst[y * dst_skip + x * 2 + 1]])
        };
        let chroma = kernel.chroma(90, 240);
        assert_eq!(pixel_at(128, 40), kernel.pixel(81, &chroma));
        assert_eq!(pixel_at(129, 40), kernel.pixel(200, &chroma));
        assert_eq!(pixel_at(128, 41), kernel.pixel(128, &chroma));
        assert_eq!(pixel_at(128, 64), kernel.pixel(145, &kernel.chroma(54, 34)));
        assert_eq!(pixel_at(0, 0), kernel.pixel(128, &kernel.chroma(128, 128)));
    }

    #[test]
    fn test_oversized_stride_is_rejected() {
        let clip = ClipTable::new();
        let stride = PackedStride::new(2, 0, usize::MAX & !3).unwrap();
        let layout = Nv12TileLayout::new(2, 2).unwrap();
        let src = vec![0u8; layout.min_source_len()];
        let mut dst = vec![0u8; 64];
        assert!(matches!(
            nv12_tile_to_rgb565(&clip, &src, &mut dst, &stride, 2),
            Err(YuvError::PointerOverflow)
        ));
    }

    #[test]
    fn test_padded_destination_rows() {
        let clip = ClipTable::new();
        let (width, height) = (6usize, 3usize);
        let layout = Nv12TileLayout::new(width as u32, height as u32).unwrap();
        let mut tiled = vec![128u8; layout.min_source_len()];
        tiled[..NV12_TILE_BLOCK_SIZE].fill(235);
        let dst_skip = 16;
        let stride = PackedStride::new(width as u32, 0, dst_skip).unwrap();
        let mut dst = vec![0x42u8; dst_skip * height];
        nv12_tile_to_rgb565(&clip, &tiled, &mut dst, &stride, height as u32).unwrap();
        for row in dst.chunks_exact(dst_skip) {
            assert!(row[..width * 2].iter().all(|&x| x == 0xFF));
            assert!(row[width * 2..].iter().all(|&x| x == 0x42));
        }
    }

    #[test]
    fn test_short_buffers_are_rejected() {
        let clip = ClipTable::new();
        let layout = Nv12TileLayout::new(64, 32).unwrap();
        let stride = PackedStride::new(64, 0, 128).unwrap();
        let src = vec![0u8; layout.min_source_len() - 1];
        let mut dst = vec![0u8; 128 * 32];
        assert!(matches!(
            nv12_tile_to_rgb565(&clip, &src, &mut dst, &stride, 32),
            Err(YuvError::SourceMinimumSizeMismatch(_))
        ));
        let src = vec![0u8; layout.min_source_len()];
        let mut dst = vec![0u8; 128 * 32 - 1];
        assert!(matches!(
            nv12_tile_to_rgb565(&clip, &src, &mut dst, &stride, 32),
            Err(YuvError::DestinationMinimumSizeMismatch(_))
        ));
    }
}
