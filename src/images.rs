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
use crate::yuv_error::{check_destination_size, check_region, StrideError};
use crate::{MismatchedSize, YuvError};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

/// Inclusive crop rectangle, `right` and `bottom` are the last column and row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> CropRect {
        CropRect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Crop covering the whole `width` x `height` image
    pub const fn full(width: u32, height: u32) -> CropRect {
        CropRect {
            left: 0,
            top: 0,
            right: width.saturating_sub(1),
            bottom: height.saturating_sub(1),
        }
    }

    /// Meaningful only when `right >= left`
    #[inline]
    pub const fn width(&self) -> u32 {
        self.right.wrapping_sub(self.left).wrapping_add(1)
    }

    /// Meaningful only when `bottom >= top`
    #[inline]
    pub const fn height(&self) -> u32 {
        self.bottom.wrapping_sub(self.top).wrapping_add(1)
    }
}

#[derive(Debug, Clone)]
/// Non-mutable view into a YUV buffer with its crop rectangle.
///
/// `width` and `height` describe the full frame and act as stride basis.
pub struct YuvSourceImage<'a> {
    pub data: &'a [u8],
    pub width: u32,
    pub height: u32,
    pub crop: CropRect,
}

impl<'a> YuvSourceImage<'a> {
    pub fn new(data: &'a [u8], width: u32, height: u32, crop: CropRect) -> YuvSourceImage<'a> {
        YuvSourceImage {
            data,
            width,
            height,
            crop,
        }
    }

    /// Whole frame, no crop
    pub fn full(data: &'a [u8], width: u32, height: u32) -> YuvSourceImage<'a> {
        YuvSourceImage::new(data, width, height, CropRect::full(width, height))
    }

    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_region(self.width, self.height, &self.crop)
    }

    /// Offset of the first cropped sample in a plane of one byte per sample
    #[inline]
    pub(crate) fn crop_origin(&self) -> usize {
        self.crop.top as usize * self.width as usize + self.crop.left as usize
    }

    #[inline]
    pub(crate) fn luma_plane_size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Bytes of `len` starting at `offset`, asserted in bounds on debug builds.
    ///
    /// Callers verify the furthest byte up front, so release builds only keep the slice check.
    #[inline(always)]
    pub(crate) fn span(&self, offset: usize, len: usize) -> &'a [u8] {
        debug_assert!(
            offset + len <= self.data.len(),
            "Source span {}..{} is outside of {} bytes",
            offset,
            offset + len,
            self.data.len()
        );
        &self.data[offset..offset + len]
    }
}

#[derive(Debug)]
/// Mutable view into an RGB565 buffer, two bytes per pixel, little endian.
pub struct Rgb565ImageMut<'a> {
    pub data: &'a mut [u8],
    pub width: u32,
    pub height: u32,
    pub crop: CropRect,
}

impl<'a> Rgb565ImageMut<'a> {
    pub fn new(data: &'a mut [u8], width: u32, height: u32, crop: CropRect) -> Rgb565ImageMut<'a> {
        Rgb565ImageMut {
            data,
            width,
            height,
            crop,
        }
    }

    pub fn full(data: &'a mut [u8], width: u32, height: u32) -> Rgb565ImageMut<'a> {
        Rgb565ImageMut::new(data, width, height, CropRect::full(width, height))
    }

    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.width as usize * 2
    }

    /// Regions are valid and the buffer reaches the last cropped pixel
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_region(self.width, self.height, &self.crop)?;
        let last_pixel = self.crop.bottom as usize * self.width as usize + self.crop.right as usize;
        check_destination_size(self.data, (last_pixel + 1) * 2)
    }

    /// Calls `process` with every cropped destination row and its index inside the crop.
    ///
    /// With `rayon` enabled rows are processed in parallel.
    pub(crate) fn for_each_crop_row<F>(&mut self, process: F)
    where
        F: Fn(usize, &mut [u8]) + Send + Sync,
    {
        let row_bytes = self.row_bytes();
        let start = self.crop.left as usize * 2;
        let end = start + self.crop.width() as usize * 2;
        let crop_height = self.crop.height() as usize;
        let rows = &mut self.data[self.crop.top as usize * row_bytes..];
        let iter;
        #[cfg(feature = "rayon")]
        {
            iter = rows.par_chunks_mut(row_bytes).take(crop_height).enumerate();
        }
        #[cfg(not(feature = "rayon"))]
        {
            iter = rows.chunks_mut(row_bytes).take(crop_height).enumerate();
        }
        iter.for_each(|(row, rgb)| {
            process(row, &mut rgb[start..end]);
        });
    }
}

/// Destination stride contract for the uncropped tiled and aligned paths.
///
/// Can only be obtained through [`PackedStride::new`] or [`PackedStride::aligned`],
/// which enforce `src_skip == 0`, `dst_skip >= 2 * aligned_width` and `dst_skip % 4 == 0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PackedStride {
    width: u32,
    aligned_width: u32,
    dst_skip: usize,
}

impl PackedStride {
    /// Stride for a frame whose destination rows are exactly `width` pixels of payload
    pub fn new(width: u32, src_skip: usize, dst_skip: usize) -> Result<PackedStride, YuvError> {
        PackedStride::aligned(width, width, src_skip, dst_skip)
    }

    /// Stride for a frame padded to `aligned_width` columns in the destination
    pub fn aligned(
        width: u32,
        aligned_width: u32,
        src_skip: usize,
        dst_skip: usize,
    ) -> Result<PackedStride, YuvError> {
        if width == 0 {
            return Err(YuvError::ZeroBaseSize);
        }
        if src_skip != 0 {
            return Err(YuvError::InvalidStride(StrideError::SourceSkip(src_skip)));
        }
        if aligned_width < width {
            return Err(YuvError::InvalidStride(StrideError::AlignedWidthTooSmall(
                MismatchedSize {
                    expected: width as usize,
                    received: aligned_width as usize,
                },
            )));
        }
        let min_skip = aligned_width as usize * 2;
        if dst_skip < min_skip {
            return Err(YuvError::InvalidStride(StrideError::DestinationTooNarrow(
                MismatchedSize {
                    expected: min_skip,
                    received: dst_skip,
                },
            )));
        }
        if dst_skip & 3 != 0 {
            return Err(YuvError::InvalidStride(StrideError::DestinationUnaligned(
                dst_skip,
            )));
        }
        Ok(PackedStride {
            width,
            aligned_width,
            dst_skip,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn aligned_width(&self) -> u32 {
        self.aligned_width
    }

    /// Destination bytes per row
    #[inline]
    pub fn dst_skip(&self) -> usize {
        self.dst_skip
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnsupportedGeometry;

    #[test]
    fn test_crop_dimensions() {
        let crop = CropRect::new(2, 4, 9, 5);
        assert_eq!(crop.width(), 8);
        assert_eq!(crop.height(), 2);
        let full = CropRect::full(16, 8);
        assert_eq!(full, CropRect::new(0, 0, 15, 7));
        assert_eq!(full.width(), 16);
        assert_eq!(full.height(), 8);
    }

    #[test]
    fn test_destination_must_reach_last_cropped_pixel() {
        let mut data = vec![0u8; 4 * 4 * 2 - 1];
        let image = Rgb565ImageMut::full(&mut data, 4, 4);
        assert!(matches!(
            image.check_constraints(),
            Err(YuvError::DestinationMinimumSizeMismatch(MismatchedSize {
                expected: 32,
                received: 31
            }))
        ));
        let image = Rgb565ImageMut::new(&mut data, 4, 4, CropRect::new(0, 0, 2, 3));
        assert!(image.check_constraints().is_ok());
    }

    #[test]
    fn test_crop_rows_cover_only_the_crop() {
        let mut data = vec![0u8; 6 * 4 * 2];
        let mut image = Rgb565ImageMut::new(&mut data, 6, 4, CropRect::new(2, 1, 4, 2));
        image.for_each_crop_row(|row, rgb| {
            assert_eq!(rgb.len(), 6);
            rgb.fill(row as u8 + 1);
        });
        for y in 0..4 {
            for x in 0..6 {
                let px = &data[(y * 6 + x) * 2..(y * 6 + x) * 2 + 2];
                let expected = if (1..=2).contains(&y) && (2..=4).contains(&x) {
                    y as u8
                } else {
                    0
                };
                assert_eq!(px, &[expected, expected], "Pixel {}x{}", x, y);
            }
        }
    }

    #[test]
    fn test_source_rejects_out_of_bounds_crop() {
        let data = [0u8; 16];
        let image = YuvSourceImage::new(&data, 4, 2, CropRect::new(0, 0, 4, 1));
        assert!(matches!(
            image.check_constraints(),
            Err(YuvError::UnsupportedGeometry(
                UnsupportedGeometry::CropOutOfBounds { .. }
            ))
        ));
    }

    #[test]
    fn test_packed_stride_contract() {
        assert!(PackedStride::new(64, 0, 128).is_ok());
        assert!(matches!(
            PackedStride::new(64, 1, 128),
            Err(YuvError::InvalidStride(StrideError::SourceSkip(1)))
        ));
        assert!(matches!(
            PackedStride::new(64, 0, 126),
            Err(YuvError::InvalidStride(StrideError::DestinationTooNarrow(_)))
        ));
        assert!(matches!(
            PackedStride::new(3, 0, 10),
            Err(YuvError::InvalidStride(StrideError::DestinationUnaligned(10)))
        ));
        assert!(matches!(
            PackedStride::aligned(8, 6, 0, 16),
            Err(YuvError::InvalidStride(StrideError::AlignedWidthTooSmall(_)))
        ));
        let stride = PackedStride::aligned(6, 8, 0, 16).unwrap();
        assert_eq!(stride.width(), 6);
        assert_eq!(stride.aligned_width(), 8);
        assert_eq!(stride.dst_skip(), 16);
    }
}
