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
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Eq)]
/// Integral YUV to RGB coefficients, scaled by `1 << precision`
pub struct CbCrInverseTransform<T> {
    pub y_coef: T,
    pub cr_coef: T,
    pub cb_coef: T,
    pub g_coeff_1: T,
    pub g_coeff_2: T,
}

impl<T> CbCrInverseTransform<T> {
    pub const fn new(
        y_coef: T,
        cr_coef: T,
        cb_coef: T,
        g_coeff_1: T,
        g_coeff_2: T,
    ) -> CbCrInverseTransform<T> {
        CbCrInverseTransform {
            y_coef,
            cr_coef,
            cb_coef,
            g_coeff_1,
            g_coeff_2,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Eq)]
pub struct YuvChromaRange {
    pub bias_y: u32,
    pub bias_uv: u32,
}

/// Limited (TV) range offsets: Y starts at 16 << (depth - 8), UV is centered at 1 << (depth - 1)
pub const fn get_yuv_range(depth: u32) -> YuvChromaRange {
    YuvChromaRange {
        bias_y: 16 << (depth - 8),
        bias_uv: 1 << (depth - 1),
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum YuvNVOrder {
    UV = 0,
    VU = 1,
}

impl YuvNVOrder {
    #[inline]
    pub const fn get_u_position(&self) -> usize {
        match self {
            YuvNVOrder::UV => 0,
            YuvNVOrder::VU => 1,
        }
    }

    #[inline]
    pub const fn get_v_position(&self) -> usize {
        match self {
            YuvNVOrder::UV => 1,
            YuvNVOrder::VU => 0,
        }
    }
}

/// Pixel layout identifiers, numbered the way OpenMAX IL hosts number them.
///
/// Conversion from `u32` is lossless: ids without a named variant are kept in [`ColorFormat::Other`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    Monochrome,
    /// Packed 16 bit, red in bits 15..11, green in 10..5, blue in 4..0
    Rgb565,
    Bgr565,
    Rgb888,
    Bgra8888,
    Argb8888,
    /// Y plane, then U plane, then V plane, chroma subsampled 2x2
    Yuv420Planar,
    /// Y plane, then interleaved chroma plane with V first
    Yuv420SemiPlanar,
    Yuv422Planar,
    YCbYCr,
    YCrYCb,
    /// Single plane, `Cb, Y0, Cr, Y1` per pixel pair
    CbYCrY,
    CrYCbY,
    /// Qualcomm semi-planar, U first
    QcomYvu420SemiPlanar,
    /// TI semi-planar handed in already positioned at the crop origin
    TiYuv420PackedSemiPlanar,
    /// Qualcomm NV12 stored in 64x32 blocks with zigzag block order
    QcomYuv420PackedSemiPlanar64x32Tile2m8ka,
    Other(u32),
}

impl From<u32> for ColorFormat {
    fn from(value: u32) -> Self {
        match value {
            1 => ColorFormat::Monochrome,
            6 => ColorFormat::Rgb565,
            7 => ColorFormat::Bgr565,
            11 => ColorFormat::Rgb888,
            15 => ColorFormat::Bgra8888,
            16 => ColorFormat::Argb8888,
            0x13 => ColorFormat::Yuv420Planar,
            0x15 => ColorFormat::Yuv420SemiPlanar,
            0x16 => ColorFormat::Yuv422Planar,
            0x19 => ColorFormat::YCbYCr,
            0x1A => ColorFormat::YCrYCb,
            0x1B => ColorFormat::CbYCrY,
            0x1C => ColorFormat::CrYCbY,
            0x7FA3_0C00 => ColorFormat::QcomYvu420SemiPlanar,
            0x7F00_0100 => ColorFormat::TiYuv420PackedSemiPlanar,
            0x7FA3_0C03 => ColorFormat::QcomYuv420PackedSemiPlanar64x32Tile2m8ka,
            v => ColorFormat::Other(v),
        }
    }
}

impl From<ColorFormat> for u32 {
    fn from(value: ColorFormat) -> Self {
        match value {
            ColorFormat::Monochrome => 1,
            ColorFormat::Rgb565 => 6,
            ColorFormat::Bgr565 => 7,
            ColorFormat::Rgb888 => 11,
            ColorFormat::Bgra8888 => 15,
            ColorFormat::Argb8888 => 16,
            ColorFormat::Yuv420Planar => 0x13,
            ColorFormat::Yuv420SemiPlanar => 0x15,
            ColorFormat::Yuv422Planar => 0x16,
            ColorFormat::YCbYCr => 0x19,
            ColorFormat::YCrYCb => 0x1A,
            ColorFormat::CbYCrY => 0x1B,
            ColorFormat::CrYCbY => 0x1C,
            ColorFormat::QcomYvu420SemiPlanar => 0x7FA3_0C00,
            ColorFormat::TiYuv420PackedSemiPlanar => 0x7F00_0100,
            ColorFormat::QcomYuv420PackedSemiPlanar64x32Tile2m8ka => 0x7FA3_0C03,
            ColorFormat::Other(v) => v,
        }
    }
}

impl ColorFormat {
    /// Maps `Other` ids that collide with a named variant back to that variant
    #[inline]
    pub fn canonical(self) -> ColorFormat {
        ColorFormat::from(u32::from(self))
    }
}

/// Source layouts that can be converted into [`ColorFormat::Rgb565`]
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SourceLayout {
    Yuv420Planar = 0,
    CbYCrY = 1,
    QcomYvu420SemiPlanar = 2,
    Yuv420SemiPlanar = 3,
    TiYuv420PackedSemiPlanar = 4,
    Nv12Tile64x32 = 5,
}

impl SourceLayout {
    pub const ALL: [SourceLayout; 6] = [
        SourceLayout::Yuv420Planar,
        SourceLayout::CbYCrY,
        SourceLayout::QcomYvu420SemiPlanar,
        SourceLayout::Yuv420SemiPlanar,
        SourceLayout::TiYuv420PackedSemiPlanar,
        SourceLayout::Nv12Tile64x32,
    ];

    pub fn from_format(format: ColorFormat) -> Option<SourceLayout> {
        match format.canonical() {
            ColorFormat::Yuv420Planar => Some(SourceLayout::Yuv420Planar),
            ColorFormat::CbYCrY => Some(SourceLayout::CbYCrY),
            ColorFormat::QcomYvu420SemiPlanar => Some(SourceLayout::QcomYvu420SemiPlanar),
            ColorFormat::Yuv420SemiPlanar => Some(SourceLayout::Yuv420SemiPlanar),
            ColorFormat::TiYuv420PackedSemiPlanar => Some(SourceLayout::TiYuv420PackedSemiPlanar),
            ColorFormat::QcomYuv420PackedSemiPlanar64x32Tile2m8ka => {
                Some(SourceLayout::Nv12Tile64x32)
            }
            _ => None,
        }
    }

    pub const fn format(&self) -> ColorFormat {
        match self {
            SourceLayout::Yuv420Planar => ColorFormat::Yuv420Planar,
            SourceLayout::CbYCrY => ColorFormat::CbYCrY,
            SourceLayout::QcomYvu420SemiPlanar => ColorFormat::QcomYvu420SemiPlanar,
            SourceLayout::Yuv420SemiPlanar => ColorFormat::Yuv420SemiPlanar,
            SourceLayout::TiYuv420PackedSemiPlanar => ColorFormat::TiYuv420PackedSemiPlanar,
            SourceLayout::Nv12Tile64x32 => {
                ColorFormat::QcomYuv420PackedSemiPlanar64x32Tile2m8ka
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_format_round_trips_host_ids() {
        for id in [1u32, 6, 7, 0x13, 0x15, 0x1B, 0x7FA3_0C00, 0x7F00_0100, 0x7FA3_0C03, 0xDEAD] {
            assert_eq!(u32::from(ColorFormat::from(id)), id);
        }
        assert_eq!(ColorFormat::from(0xDEAD), ColorFormat::Other(0xDEAD));
        assert_eq!(ColorFormat::Other(6).canonical(), ColorFormat::Rgb565);
    }

    #[test]
    fn test_source_layouts_map_to_their_formats() {
        for layout in SourceLayout::ALL {
            assert_eq!(SourceLayout::from_format(layout.format()), Some(layout));
        }
        assert_eq!(SourceLayout::from_format(ColorFormat::Yuv422Planar), None);
        assert_eq!(SourceLayout::from_format(ColorFormat::Rgb565), None);
        assert_eq!(
            SourceLayout::from_format(ColorFormat::Other(0x13)),
            Some(SourceLayout::Yuv420Planar)
        );
    }

    #[test]
    fn test_nv_order_positions() {
        assert_eq!(YuvNVOrder::UV.get_u_position(), 0);
        assert_eq!(YuvNVOrder::UV.get_v_position(), 1);
        assert_eq!(YuvNVOrder::VU.get_u_position(), 1);
        assert_eq!(YuvNVOrder::VU.get_v_position(), 0);
    }
}
