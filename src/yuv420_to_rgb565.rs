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
use crate::{Rgb565ImageMut, YuvError, YuvSourceImage};

/// Convert YUV 4:2:0 planar (I420) to RGB565.
///
/// The source holds the full resolution luma plane followed by the U and V planes,
/// each `(width / 2) x (height / 2)`. Source and destination crop rectangles must have
/// the same size and the source crop must start on an even column.
///
/// # Errors
///
/// Returns [`YuvError::UnsupportedGeometry`] when crop constraints are violated and a size
/// error when either buffer is too small. Nothing is written in that case.
pub(crate) fn yuv420_to_rgb565(
    clip: &ClipTable,
    image: &YuvSourceImage,
    rgb565: &mut Rgb565ImageMut,
) -> Result<(), YuvError> {
    check_cropped_geometry(image, rgb565)?;

    let width = image.width as usize;
    let height = image.height as usize;
    let crop_width = image.crop.width() as usize;
    let crop_height = image.crop.height() as usize;
    let chroma_stride = width / 2;
    let chroma_width = crop_width.div_ceil(2);

    let y_origin = image.crop_origin();
    let u_origin = image.luma_plane_size()
        + (image.crop.top as usize / 2) * chroma_stride
        + image.crop.left as usize / 2;
    let v_origin = u_origin + chroma_stride * (height / 2);

    let y_end = y_origin + (crop_height - 1) * width + crop_width;
    let v_end = v_origin + ((crop_height - 1) / 2) * chroma_stride + chroma_width;
    check_source_size(image.data, y_end.max(v_end))?;

    let kernel = Rgb565Kernel::new(clip);

    rgb565.for_each_crop_row(|row, rgb| {
        let y_src = image.span(y_origin + row * width, crop_width);
        let u_src = image.span(u_origin + (row / 2) * chroma_stride, chroma_width);
        let v_src = image.span(v_origin + (row / 2) * chroma_stride, chroma_width);

        for (((rgb, y_src), &u), &v) in rgb
            .chunks_exact_mut(4)
            .zip(y_src.chunks_exact(2))
            .zip(u_src.iter())
            .zip(v_src.iter())
        {
            kernel.store_pair(rgb, y_src[0], y_src[1], u, v);
        }

        if crop_width & 1 != 0 {
            let rgb = rgb.chunks_exact_mut(4).into_remainder();
            let y_src = y_src.chunks_exact(2).remainder();
            kernel.store_single(rgb, y_src[0], u_src[chroma_width - 1], v_src[chroma_width - 1]);
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::pack_rgb565;
    use crate::{CropRect, UnsupportedGeometry};
    use rand::Rng;

    fn reference_pixel(y: u8, u: u8, v: u8) -> u16 {
        let clip = |x: i32| x.clamp(0, 255) as u8;
        let y = (y as i32 - 16) * 298;
        let u = u as i32 - 128;
        let v = v as i32 - 128;
        let r = (y + v * 409) / 256;
        let g = (y - v * 208 - u * 100) / 256;
        let b = (y + u * 517) / 256;
        pack_rgb565(clip(r), clip(g), clip(b))
    }

    fn read_px(data: &[u8], index: usize) -> u16 {
        u16::from_le_bytes([data[index * 2], data[index * 2 + 1]])
    }

    #[test]
    fn test_mid_gray_darkest_luma_is_black() {
        let clip = ClipTable::new();
        let src = [16u8, 16, 16, 16, 128, 128];
        let mut dst = [0xAAu8; 8];
        yuv420_to_rgb565(
            &clip,
            &YuvSourceImage::full(&src, 2, 2),
            &mut Rgb565ImageMut::full(&mut dst, 2, 2),
        )
        .unwrap();
        assert_eq!(dst, [0u8; 8]);
    }

    #[test]
    fn test_limited_white_saturates() {
        let clip = ClipTable::new();
        let (width, height) = (6usize, 4usize);
        let mut src = vec![235u8; width * height];
        src.resize(width * height + 2 * (width / 2) * (height / 2), 128);
        let mut dst = vec![0u8; width * height * 2];
        yuv420_to_rgb565(
            &clip,
            &YuvSourceImage::full(&src, width as u32, height as u32),
            &mut Rgb565ImageMut::full(&mut dst, width as u32, height as u32),
        )
        .unwrap();
        assert!(dst.iter().all(|&x| x == 0xFF));
    }

    #[test]
    fn test_random_frame_matches_per_pixel_reference() {
        let clip = ClipTable::new();
        let mut rng = rand::rng();
        let (width, height) = (10usize, 8usize);
        let chroma = (width / 2) * (height / 2);
        let src: Vec<u8> = (0..width * height + chroma * 2)
            .map(|_| rng.random())
            .collect();
        let crop = CropRect::new(2, 1, 8, 6);
        let mut dst = vec![0u8; width * height * 2];
        yuv420_to_rgb565(
            &clip,
            &YuvSourceImage::new(&src, width as u32, height as u32, crop),
            &mut Rgb565ImageMut::new(&mut dst, width as u32, height as u32, crop),
        )
        .unwrap();

        let u_plane = &src[width * height..];
        let v_plane = &src[width * height + chroma..];
        for row in 0..crop.height() as usize {
            let y = crop.top as usize + row;
            let chroma_row = crop.top as usize / 2 + row / 2;
            for col in 0..crop.width() as usize {
                let x = crop.left as usize + col;
                let chroma_col = crop.left as usize / 2 + col / 2;
                let expected = reference_pixel(
                    src[y * width + x],
                    u_plane[chroma_row * (width / 2) + chroma_col],
                    v_plane[chroma_row * (width / 2) + chroma_col],
                );
                assert_eq!(read_px(&dst, y * width + x), expected, "Pixel {}x{}", x, y);
            }
        }
        // Outside of the crop nothing is touched
        assert_eq!(read_px(&dst, 0), 0);
        assert_eq!(read_px(&dst, width * height - 1), 0);
    }

    #[test]
    fn test_geometry_rejection_leaves_destination_untouched() {
        let clip = ClipTable::new();
        let src = vec![100u8; 8 * 8 + 2 * 16];
        let cases = [
            (CropRect::new(1, 0, 4, 3), CropRect::new(1, 0, 4, 3)),
            (CropRect::new(0, 0, 3, 3), CropRect::new(0, 0, 5, 3)),
            (CropRect::new(0, 0, 3, 3), CropRect::new(0, 0, 3, 4)),
        ];
        for (src_crop, dst_crop) in cases {
            let mut dst = vec![0x5Au8; 8 * 8 * 2];
            let result = yuv420_to_rgb565(
                &clip,
                &YuvSourceImage::new(&src, 8, 8, src_crop),
                &mut Rgb565ImageMut::new(&mut dst, 8, 8, dst_crop),
            );
            assert!(matches!(
                result,
                Err(YuvError::UnsupportedGeometry(
                    UnsupportedGeometry::OddCropLeft(_)
                        | UnsupportedGeometry::CropSizeMismatch { .. }
                ))
            ));
            assert!(dst.iter().all(|&x| x == 0x5A));
        }
    }

    #[test]
    fn test_short_source_is_rejected() {
        let clip = ClipTable::new();
        let src = vec![0u8; 4 * 4 + 4 - 1];
        let mut dst = vec![0u8; 4 * 4 * 2];
        let result = yuv420_to_rgb565(
            &clip,
            &YuvSourceImage::full(&src, 4, 4),
            &mut Rgb565ImageMut::full(&mut dst, 4, 4),
        );
        assert!(matches!(result, Err(YuvError::SourceMinimumSizeMismatch(_))));
    }
}
