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
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use yuv565::{
    nv12_tile_to_rgb565, ClipTable, ColorConverter, ColorFormat, CropRect, Nv12TileLayout,
    PackedStride, SourceLayout,
};

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1920u32;
    let height = 1080u32;
    let mut rng = rand::rng();
    // Large enough for every linear layout, CbYCrY needs two bytes per pixel
    let src: Vec<u8> = (0..width as usize * height as usize * 2)
        .map(|_| rng.random())
        .collect();
    let crop = CropRect::full(width, height);
    let tile_layout = Nv12TileLayout::new(width, height).unwrap();
    let tiled: Vec<u8> = src
        .iter()
        .cycle()
        .take(tile_layout.min_source_len())
        .copied()
        .collect();

    for layout in SourceLayout::ALL {
        let converter = ColorConverter::new(layout.format(), ColorFormat::Rgb565);
        let layout_src = if layout == SourceLayout::Nv12Tile64x32 {
            &tiled
        } else {
            &src
        };
        c.bench_function(&format!("yuv565 {:?} -> RGB565", layout), |b| {
            let mut rgb565 = vec![0u8; width as usize * height as usize * 2];
            b.iter(|| {
                converter
                    .convert(
                        layout_src,
                        width,
                        height,
                        crop,
                        &mut rgb565,
                        width,
                        height,
                        crop,
                    )
                    .unwrap();
            })
        });
    }

    c.bench_function("yuv565 cropped 4:2:0 planar -> RGB565", |b| {
        let converter = ColorConverter::new(ColorFormat::Yuv420Planar, ColorFormat::Rgb565);
        let crop = CropRect::new(320, 180, 1599, 899);
        let mut rgb565 = vec![0u8; width as usize * height as usize * 2];
        b.iter(|| {
            converter
                .convert(
                    &src,
                    width,
                    height,
                    crop,
                    &mut rgb565,
                    width,
                    height,
                    crop,
                )
                .unwrap();
        })
    });

    c.bench_function("yuv565 NV12 tile padded stride -> RGB565", |b| {
        let clip = ClipTable::new();
        let dst_skip = 2048 * 2;
        let stride = PackedStride::new(width, 0, dst_skip).unwrap();
        let mut rgb565 = vec![0u8; dst_skip * height as usize];
        b.iter(|| {
            nv12_tile_to_rgb565(&clip, &tiled, &mut rgb565, &stride, height).unwrap();
        })
    });

    c.bench_function("yuv565 aligned semi-planar -> RGB565", |b| {
        let converter = ColorConverter::new(ColorFormat::Yuv420SemiPlanar, ColorFormat::Rgb565);
        let dst_skip = 2048 * 2;
        let stride = PackedStride::aligned(width, 2048, 0, dst_skip).unwrap();
        let mut rgb565 = vec![0u8; dst_skip * height as usize];
        b.iter(|| {
            converter
                .convert_nv_aligned(&src, &mut rgb565, &stride, height)
                .unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
