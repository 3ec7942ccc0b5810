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
use crate::images::{CropRect, Rgb565ImageMut, YuvSourceImage};
use crate::yuv_support::ColorFormat;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

/// Geometry a layout cannot convert; callers may retry with another layout.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum UnsupportedGeometry {
    /// Crop must start on an even column so chroma pairs stay aligned
    OddCropLeft(u32),
    /// Source and destination crops must have identical size, no scaling is performed
    CropSizeMismatch {
        source: (u32, u32),
        destination: (u32, u32),
    },
    InvertedCrop(CropRect),
    CropOutOfBounds {
        crop: CropRect,
        width: u32,
        height: u32,
    },
    /// Destination stride derived from the frame is not usable for a packed path
    Stride(StrideError),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StrideError {
    /// Source skip has no meaning for YUV layouts and must be zero
    SourceSkip(usize),
    DestinationTooNarrow(MismatchedSize),
    DestinationUnaligned(usize),
    AlignedWidthTooSmall(MismatchedSize),
}

#[derive(Debug)]
pub enum YuvError {
    UnsupportedFormat {
        source: ColorFormat,
        destination: ColorFormat,
    },
    UnsupportedGeometry(UnsupportedGeometry),
    ZeroBaseSize,
    PointerOverflow,
    SourceMinimumSizeMismatch(MismatchedSize),
    DestinationMinimumSizeMismatch(MismatchedSize),
    InvalidStride(StrideError),
}

impl YuvError {
    /// Returns true when the failure is a format or geometry the converter does not handle,
    /// as opposed to malformed buffers.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            YuvError::UnsupportedFormat { .. } | YuvError::UnsupportedGeometry(_)
        )
    }
}

impl Display for StrideError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StrideError::SourceSkip(skip) => f.write_fmt(format_args!(
                "Source skip must be 0 for YUV layouts, but it was {}",
                skip
            )),
            StrideError::DestinationTooNarrow(size) => f.write_fmt(format_args!(
                "Destination skip must be at least {} bytes, but it was {}",
                size.expected, size.received
            )),
            StrideError::DestinationUnaligned(skip) => f.write_fmt(format_args!(
                "Destination skip must be a multiple of 4, but it was {}",
                skip
            )),
            StrideError::AlignedWidthTooSmall(size) => f.write_fmt(format_args!(
                "Aligned width must be at least {}, but it was {}",
                size.expected, size.received
            )),
        }
    }
}

impl Display for UnsupportedGeometry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UnsupportedGeometry::OddCropLeft(left) => {
                f.write_fmt(format_args!("Crop left must be even, but it was {}", left))
            }
            UnsupportedGeometry::CropSizeMismatch {
                source,
                destination,
            } => f.write_fmt(format_args!(
                "Source crop {}x{} does not match destination crop {}x{}",
                source.0, source.1, destination.0, destination.1
            )),
            UnsupportedGeometry::InvertedCrop(crop) => f.write_fmt(format_args!(
                "Crop rectangle is inverted: left={}, top={}, right={}, bottom={}",
                crop.left, crop.top, crop.right, crop.bottom
            )),
            UnsupportedGeometry::CropOutOfBounds {
                crop,
                width,
                height,
            } => f.write_fmt(format_args!(
                "Crop rectangle ({}, {})..=({}, {}) lies outside of {}x{} image",
                crop.left, crop.top, crop.right, crop.bottom, width, height
            )),
            UnsupportedGeometry::Stride(stride) => stride.fmt(f),
        }
    }
}

impl Display for YuvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            YuvError::UnsupportedFormat {
                source,
                destination,
            } => f.write_fmt(format_args!(
                "Conversion from {:?} to {:?} is not supported",
                source, destination
            )),
            YuvError::UnsupportedGeometry(geometry) => {
                f.write_fmt(format_args!("Unsupported geometry: {}", geometry))
            }
            YuvError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            YuvError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            YuvError::SourceMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Source must have size at least {} but it is {}",
                size.expected, size.received
            )),
            YuvError::DestinationMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination must have size at least {} but it is {}",
                size.expected, size.received
            )),
            YuvError::InvalidStride(stride) => {
                f.write_fmt(format_args!("Invalid stride: {}", stride))
            }
        }
    }
}

impl Error for YuvError {}

impl From<UnsupportedGeometry> for YuvError {
    fn from(value: UnsupportedGeometry) -> Self {
        YuvError::UnsupportedGeometry(value)
    }
}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<(), YuvError> {
    let (_, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(YuvError::PointerOverflow);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_overflow_v3(v0: usize, v1: usize, v2: usize) -> Result<(), YuvError> {
    let (product0, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(YuvError::PointerOverflow);
    }
    let (_, overflow) = product0.overflowing_mul(v2);
    if overflow {
        return Err(YuvError::PointerOverflow);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_source_size(data: &[u8], expected: usize) -> Result<(), YuvError> {
    if data.len() < expected {
        return Err(YuvError::SourceMinimumSizeMismatch(MismatchedSize {
            expected,
            received: data.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_destination_size(data: &[u8], expected: usize) -> Result<(), YuvError> {
    if data.len() < expected {
        return Err(YuvError::DestinationMinimumSizeMismatch(MismatchedSize {
            expected,
            received: data.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_region(width: u32, height: u32, crop: &CropRect) -> Result<(), YuvError> {
    if width == 0 || height == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    check_overflow_v3(width as usize, height as usize, 2)?;
    if crop.right < crop.left || crop.bottom < crop.top {
        return Err(UnsupportedGeometry::InvertedCrop(*crop).into());
    }
    if crop.right >= width || crop.bottom >= height {
        return Err(UnsupportedGeometry::CropOutOfBounds {
            crop: *crop,
            width,
            height,
        }
        .into());
    }
    Ok(())
}

/// Preconditions shared by every crop-aware layout: valid regions, even crop left
/// and identical crop sizes. Runs before anything is written.
pub(crate) fn check_cropped_geometry(
    src: &YuvSourceImage,
    dst: &Rgb565ImageMut,
) -> Result<(), YuvError> {
    src.check_constraints()?;
    dst.check_constraints()?;
    if src.crop.left & 1 != 0 {
        return Err(UnsupportedGeometry::OddCropLeft(src.crop.left).into());
    }
    if src.crop.width() != dst.crop.width() || src.crop.height() != dst.crop.height() {
        return Err(UnsupportedGeometry::CropSizeMismatch {
            source: (src.crop.width(), src.crop.height()),
            destination: (dst.crop.width(), dst.crop.height()),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_rejects_inverted_and_out_of_bounds() {
        assert!(matches!(
            check_region(4, 4, &CropRect::new(2, 0, 1, 3)),
            Err(YuvError::UnsupportedGeometry(
                UnsupportedGeometry::InvertedCrop(_)
            ))
        ));
        assert!(matches!(
            check_region(4, 4, &CropRect::new(0, 0, 3, 4)),
            Err(YuvError::UnsupportedGeometry(
                UnsupportedGeometry::CropOutOfBounds { .. }
            ))
        ));
        assert!(matches!(
            check_region(0, 4, &CropRect::new(0, 0, 0, 0)),
            Err(YuvError::ZeroBaseSize)
        ));
        assert!(check_region(4, 4, &CropRect::new(0, 0, 3, 3)).is_ok());
    }

    #[test]
    fn test_unsupported_classification() {
        let err: YuvError = UnsupportedGeometry::OddCropLeft(1).into();
        assert!(err.is_unsupported());
        assert!(!YuvError::ZeroBaseSize.is_unsupported());
        let size = YuvError::SourceMinimumSizeMismatch(MismatchedSize {
            expected: 10,
            received: 4,
        });
        assert_eq!(
            size.to_string(),
            "Source must have size at least 10 but it is 4"
        );
    }
}
