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
use crate::yuv_error::{check_cropped_geometry, check_source_size};
use crate::yuv_support::YuvNVOrder;
use crate::{Rgb565ImageMut, YuvError, YuvSourceImage};

/// Vendor flavours of YUV 4:2:0 semi-planar storage
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum SemiPlanarVariant {
    /// Qualcomm, U first, chroma crop halved vertically
    Qcom = 0,
    /// Standard OMX semi-planar, V first, chroma offset by the full luma crop
    Standard = 1,
    /// TI packed, U first, buffer starts at the crop origin
    TiPacked = 2,
}

impl From<u8> for SemiPlanarVariant {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => SemiPlanarVariant::Qcom,
            1 => SemiPlanarVariant::Standard,
            2 => SemiPlanarVariant::TiPacked,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl SemiPlanarVariant {
    #[inline]
    const fn order(&self) -> YuvNVOrder {
        match self {
            SemiPlanarVariant::Qcom | SemiPlanarVariant::TiPacked => YuvNVOrder::UV,
            SemiPlanarVariant::Standard => YuvNVOrder::VU,
        }
    }

    #[inline]
    fn luma_origin(&self, image: &YuvSourceImage) -> usize {
        match self {
            SemiPlanarVariant::Qcom | SemiPlanarVariant::Standard => image.crop_origin(),
            SemiPlanarVariant::TiPacked => 0,
        }
    }

    #[inline]
    fn chroma_origin(&self, image: &YuvSourceImage) -> usize {
        let width = image.width as usize;
        let top = image.crop.top as usize;
        let left = image.crop.left as usize;
        match self {
            SemiPlanarVariant::Qcom => image.luma_plane_size() + (top / 2) * width + left,
            SemiPlanarVariant::Standard => image.luma_plane_size() + top * width + left,
            SemiPlanarVariant::TiPacked => width * (image.height as usize - top / 2),
        }
    }
}

fn yuv_nv_to_rgb565_impl<const VARIANT: u8>(
    clip: &ClipTable,
    image: &YuvSourceImage,
    rgb565: &mut Rgb565ImageMut,
) -> Result<(), YuvError> {
    let variant: SemiPlanarVariant = VARIANT.into();
    check_cropped_geometry(image, rgb565)?;

    let order = variant.order();
    let width = image.width as usize;
    let crop_width = image.crop.width() as usize;
    let crop_height = image.crop.height() as usize;
    let uv_width = crop_width.div_ceil(2) * 2;

    let y_origin = variant.luma_origin(image);
    let uv_origin = variant.chroma_origin(image);

    let y_end = y_origin + (crop_height - 1) * width + crop_width;
    let uv_end = uv_origin + ((crop_height - 1) / 2) * width + uv_width;
    check_source_size(image.data, y_end.max(uv_end))?;

    let kernel = Rgb565Kernel::new(clip);
    let u_position = order.get_u_position();
    let v_position = order.get_v_position();

    rgb565.for_each_crop_row(|row, rgb| {
        let y_src = image.span(y_origin + row * width, crop_width);
        let uv_src = image.span(uv_origin + (row / 2) * width, uv_width);

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

        if crop_width & 1 != 0 {
            let rgb = rgb.chunks_exact_mut(4).into_remainder();
            let y_src = y_src.chunks_exact(2).remainder();
            let uv_src = &uv_src[uv_width - 2..];
            kernel.store_single(rgb, y_src[0], uv_src[u_position], uv_src[v_position]);
        }
    });

    Ok(())
}

/// Convert Qualcomm YVU 4:2:0 semi-planar to RGB565.
///
/// Despite its name the interleaved chroma plane stores U at even and V at odd offsets.
/// Chroma starts at `width * height + (crop_top / 2) * width + crop_left`.
pub(crate) fn qcom_yvu420_semi_planar_to_rgb565(
    clip: &ClipTable,
    image: &YuvSourceImage,
    rgb565: &mut Rgb565ImageMut,
) -> Result<(), YuvError> {
    yuv_nv_to_rgb565_impl::<{ SemiPlanarVariant::Qcom as u8 }>(clip, image, rgb565)
}

/// Convert standard YUV 4:2:0 semi-planar to RGB565.
///
/// V is stored at even and U at odd chroma offsets.
/// Chroma starts at `width * height + crop_top * width + crop_left`.
pub(crate) fn yuv420_semi_planar_to_rgb565(
    clip: &ClipTable,
    image: &YuvSourceImage,
    rgb565: &mut Rgb565ImageMut,
) -> Result<(), YuvError> {
    yuv_nv_to_rgb565_impl::<{ SemiPlanarVariant::Standard as u8 }>(clip, image, rgb565)
}

/// Convert TI packed YUV 4:2:0 semi-planar to RGB565.
///
/// The buffer must already point at the crop origin: luma is read from offset 0 and chroma
/// from `width * (height - crop_top / 2)`.
pub(crate) fn ti_yuv420_packed_semi_planar_to_rgb565(
    clip: &ClipTable,
    image: &YuvSourceImage,
    rgb565: &mut Rgb565ImageMut,
) -> Result<(), YuvError> {
    yuv_nv_to_rgb565_impl::<{ SemiPlanarVariant::TiPacked as u8 }>(clip, image, rgb565)
}
