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
mod support;

use crate::support::{rgb565_to_rgb8, tile_nv12, BarsFrame};
use std::time::Instant;
use yuv565::{ColorConverter, ColorFormat, CropRect, PackedStride};

fn convert(format: ColorFormat, src: &[u8], width: u32, height: u32) -> Vec<u8> {
    let converter = ColorConverter::new(format, ColorFormat::Rgb565);
    assert!(converter.is_valid(), "{:?} is not convertible", format);
    let mut rgb565 = vec![0u8; width as usize * height as usize * 2];
    let start_time = Instant::now();
    converter
        .convert(
            src,
            width,
            height,
            CropRect::full(width, height),
            &mut rgb565,
            width,
            height,
            CropRect::full(width, height),
        )
        .unwrap();
    println!("{:?} -> RGB565: {:?}", format, start_time.elapsed());
    rgb565
}

fn main() {
    let width = 640u32;
    let height = 360u32;
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "bars_rgb565.png".to_string());

    let frame = BarsFrame::new(width as usize, height as usize);

    let i420 = convert(ColorFormat::Yuv420Planar, &frame.to_i420(), width, height);
    let nv12 = frame.to_semi_planar(true);
    let qcom = convert(ColorFormat::QcomYvu420SemiPlanar, &nv12, width, height);
    let nv21 = convert(
        ColorFormat::Yuv420SemiPlanar,
        &frame.to_semi_planar(false),
        width,
        height,
    );
    let cbycry = convert(ColorFormat::CbYCrY, &frame.to_cbycry(), width, height);
    let tiled = convert(
        ColorFormat::QcomYuv420PackedSemiPlanar64x32Tile2m8ka,
        &tile_nv12(&nv12, width as usize, height as usize).unwrap(),
        width,
        height,
    );

    assert_eq!(i420, qcom);
    assert_eq!(i420, nv21);
    assert_eq!(i420, cbycry);
    assert_eq!(i420, tiled);

    // Padded destination, 64 extra pixels per row stay black
    let aligned_width = width + 64;
    let stride = PackedStride::aligned(width, aligned_width, 0, aligned_width as usize * 2).unwrap();
    let mut padded = vec![0u8; aligned_width as usize * height as usize * 2];
    let converter = ColorConverter::new(ColorFormat::Yuv420SemiPlanar, ColorFormat::Rgb565);
    let start_time = Instant::now();
    converter
        .convert_nv_aligned(&frame.to_semi_planar(false), &mut padded, &stride, height)
        .unwrap();
    println!("Aligned semi-planar -> RGB565: {:?}", start_time.elapsed());

    image::save_buffer(
        &output,
        &rgb565_to_rgb8(&i420),
        width,
        height,
        image::ColorType::Rgb8,
    )
    .unwrap();
    image::save_buffer(
        format!("aligned_{}", output),
        &rgb565_to_rgb8(&padded),
        aligned_width,
        height,
        image::ColorType::Rgb8,
    )
    .unwrap();
    println!("Saved {}", output);
}
