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
use crate::cbycry_to_rgb565::cbycry_to_rgb565;
use crate::clip_table::ClipTable;
use crate::nv12_tile::nv12_tile_to_rgb565;
use crate::nv_aligned_to_rgb565::nv_aligned_to_rgb565;
use crate::yuv420_to_rgb565::yuv420_to_rgb565;
use crate::yuv_nv_to_rgb565::{
    qcom_yvu420_semi_planar_to_rgb565, ti_yuv420_packed_semi_planar_to_rgb565,
    yuv420_semi_planar_to_rgb565,
};
use crate::yuv_support::{ColorFormat, SourceLayout};
use crate::{
    CropRect, PackedStride, Rgb565ImageMut, UnsupportedGeometry, YuvError, YuvSourceImage,
};

type CroppedRoutine =
    fn(&ClipTable, &YuvSourceImage, &mut Rgb565ImageMut) -> Result<(), YuvError>;

impl SourceLayout {
    /// Crop aware conversion routine, `None` for layouts converting whole frames only
    #[inline]
    fn cropped_routine(self) -> Option<CroppedRoutine> {
        match self {
            SourceLayout::Yuv420Planar => Some(yuv420_to_rgb565),
            SourceLayout::CbYCrY => Some(cbycry_to_rgb565),
            SourceLayout::QcomYvu420SemiPlanar => Some(qcom_yvu420_semi_planar_to_rgb565),
            SourceLayout::Yuv420SemiPlanar => Some(yuv420_semi_planar_to_rgb565),
            SourceLayout::TiYuv420PackedSemiPlanar => {
                Some(ti_yuv420_packed_semi_planar_to_rgb565)
            }
            SourceLayout::Nv12Tile64x32 => None,
        }
    }
}

/// Converts decoded YUV frames of one fixed source format into RGB565.
///
/// The clipping table is built once at construction, the converter itself is immutable
/// and may be shared between threads.
///
/// # Example
///
/// ```
/// use yuv565::{ColorConverter, ColorFormat, CropRect};
///
/// let converter = ColorConverter::new(ColorFormat::Yuv420Planar, ColorFormat::Rgb565);
/// assert!(converter.is_valid());
///
/// let (width, height) = (4u32, 2u32);
/// let mut src = vec![16u8; 8];
/// src.extend_from_slice(&[128; 4]);
/// let mut dst = vec![0xFFu8; 16];
/// converter
///     .convert(
///         &src,
///         width,
///         height,
///         CropRect::full(width, height),
///         &mut dst,
///         width,
///         height,
///         CropRect::full(width, height),
///     )
///     .unwrap();
/// assert!(dst.iter().all(|&x| x == 0));
/// ```
#[derive(Debug, Clone)]
pub struct ColorConverter {
    source: ColorFormat,
    destination: ColorFormat,
    layout: Option<SourceLayout>,
    clip: ClipTable,
}

impl ColorConverter {
    pub fn new(source: ColorFormat, destination: ColorFormat) -> ColorConverter {
        let source = source.canonical();
        ColorConverter {
            source,
            destination: destination.canonical(),
            layout: SourceLayout::from_format(source),
            clip: ClipTable::new(),
        }
    }

    pub fn source(&self) -> ColorFormat {
        self.source
    }

    pub fn destination(&self) -> ColorFormat {
        self.destination
    }

    /// Layout selected for the source format, if it is one of the supported ones
    pub fn layout(&self) -> Option<SourceLayout> {
        self.layout
    }

    pub fn clip_table(&self) -> &ClipTable {
        &self.clip
    }

    /// True when the destination is RGB565 and the source layout is known
    pub fn is_valid(&self) -> bool {
        self.destination == ColorFormat::Rgb565 && self.layout.is_some()
    }

    #[inline]
    fn check_destination_format(&self) -> Result<(), YuvError> {
        if self.destination != ColorFormat::Rgb565 {
            log::debug!(
                "Rejecting conversion {:?} -> {:?}, destination must be RGB565",
                self.source,
                self.destination
            );
            return Err(YuvError::UnsupportedFormat {
                source: self.source,
                destination: self.destination,
            });
        }
        Ok(())
    }

    /// Converts the `src_crop` region of `src` into the `dst_crop` region of `dst`.
    ///
    /// Widths and heights are those of the full frames, crops are inclusive.
    /// Pixels outside of the destination crop are never written.
    ///
    /// # Errors
    ///
    /// [`YuvError::UnsupportedFormat`] when the destination is not RGB565,
    /// [`YuvError::UnsupportedGeometry`] when the crops cannot be converted by the layout,
    /// and size errors for buffers too small for the declared geometry.
    ///
    /// # Panics
    ///
    /// Panics when the source format has no conversion routine, which [`Self::is_valid`]
    /// reports up front.
    #[allow(clippy::too_many_arguments)]
    pub fn convert(
        &self,
        src: &[u8],
        src_width: u32,
        src_height: u32,
        src_crop: CropRect,
        dst: &mut [u8],
        dst_width: u32,
        dst_height: u32,
        dst_crop: CropRect,
    ) -> Result<(), YuvError> {
        self.check_destination_format()?;
        let image = YuvSourceImage::new(src, src_width, src_height, src_crop);
        let mut rgb565 = Rgb565ImageMut::new(dst, dst_width, dst_height, dst_crop);
        self.convert_frame(&image, &mut rgb565)
    }

    /// Same as [`Self::convert`] for already described regions.
    ///
    /// # Panics
    ///
    /// Panics when the source format has no conversion routine.
    pub fn convert_frame(
        &self,
        image: &YuvSourceImage,
        rgb565: &mut Rgb565ImageMut,
    ) -> Result<(), YuvError> {
        self.check_destination_format()?;
        let Some(layout) = self.layout else {
            panic!(
                "Unknown color conversion from {:?}, check is_valid() before converting",
                self.source
            );
        };
        log::debug!(
            "Converting {}x{} {:?} crop {:?} into {}x{} RGB565 crop {:?}",
            image.width,
            image.height,
            layout,
            image.crop,
            rgb565.width,
            rgb565.height,
            rgb565.crop
        );

        let result = match layout.cropped_routine() {
            Some(routine) => routine(&self.clip, image, rgb565),
            None => self.convert_tiled_frame(image, rgb565),
        };
        if let Err(err) = &result {
            log::debug!("{:?} conversion rejected: {}", layout, err);
        }
        result
    }

    /// Tiled frames are converted whole, destination rows are `rgb565.width` pixels apart
    fn convert_tiled_frame(
        &self,
        image: &YuvSourceImage,
        rgb565: &mut Rgb565ImageMut,
    ) -> Result<(), YuvError> {
        let dst_skip = rgb565.row_bytes();
        let stride = PackedStride::new(image.width, 0, dst_skip).map_err(|err| match err {
            YuvError::InvalidStride(stride) => UnsupportedGeometry::Stride(stride).into(),
            err => err,
        })?;
        nv12_tile_to_rgb565(&self.clip, image.data, rgb565.data, &stride, image.height)
    }

    /// Converts a whole 64x32 tiled NV12 frame with a caller chosen destination stride
    pub fn convert_nv12_tile(
        &self,
        src: &[u8],
        dst: &mut [u8],
        stride: &PackedStride,
        height: u32,
    ) -> Result<(), YuvError> {
        nv12_tile_to_rgb565(&self.clip, src, dst, stride, height)
    }

    /// Converts a whole semi-planar frame into a destination padded to an aligned width
    pub fn convert_nv_aligned(
        &self,
        src: &[u8],
        dst: &mut [u8],
        stride: &PackedStride,
        height: u32,
    ) -> Result<(), YuvError> {
        nv_aligned_to_rgb565(&self.clip, src, dst, stride, height)
    }
}
