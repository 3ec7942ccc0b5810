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

const CB_POSITION: usize = 0;
const FIRST_Y_POSITION: usize = 1;
const CR_POSITION: usize = 2;
const SECOND_Y_POSITION: usize = 3;

/// Convert packed CbYCrY (UYVY) to RGB565.
///
/// Every 4 bytes hold `Cb, Y0, Cr, Y1` for a pixel pair. The first cropped row is located
/// using the *destination* width as row pitch while subsequent rows advance by the source
/// width.
pub(crate) fn cbycry_to_rgb565(
    clip: &ClipTable,
    image: &YuvSourceImage,
    rgb565: &mut Rgb565ImageMut,
) -> Result<(), YuvError> {
    check_cropped_geometry(image, rgb565)?;

    let crop_width = image.crop.width() as usize;
    let crop_height = image.crop.height() as usize;
    let src_stride = image.width as usize * 2;
    let pairs_bytes = crop_width.div_ceil(2) * 4;

    let origin = (image.crop.top as usize * rgb565.width as usize + image.crop.left as usize) * 2;
    check_source_size(
        image.data,
        origin + (crop_height - 1) * src_stride + pairs_bytes,
    )?;

    let kernel = Rgb565Kernel::new(clip);

    rgb565.for_each_crop_row(|row, rgb| {
        let yuy2_src = image.span(origin + row * src_stride, pairs_bytes);

        for (rgb, quad) in rgb.chunks_exact_mut(4).zip(yuy2_src.chunks_exact(4)) {
            kernel.store_pair(
                rgb,
                quad[FIRST_Y_POSITION],
                quad[SECOND_Y_POSITION],
                quad[CB_POSITION],
                quad[CR_POSITION],
            );
        }

        if crop_width & 1 != 0 {
            let rgb = rgb.chunks_exact_mut(4).into_remainder();
            let quad = &yuy2_src[pairs_bytes - 4..];
            kernel.store_single(
                rgb,
                quad[FIRST_Y_POSITION],
                quad[CB_POSITION],
                quad[CR_POSITION],
            );
        }
    });

    Ok(())
}
