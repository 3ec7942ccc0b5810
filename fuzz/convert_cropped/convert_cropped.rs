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

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use yuv565::{ColorConverter, ColorFormat, CropRect, SourceLayout};

#[derive(Arbitrary, Debug)]
struct CroppedInput {
    layout: u8,
    width: u8,
    height: u8,
    crop: (u8, u8, u8, u8),
    dst_width: u8,
    dst_height: u8,
    dst_origin: (u8, u8),
    src_len: u16,
    dst_len: u16,
    fill: (u8, u8),
}

fuzz_target!(|input: CroppedInput| {
    let layout = SourceLayout::ALL[input.layout as usize % SourceLayout::ALL.len()];
    let converter = ColorConverter::new(layout.format(), ColorFormat::Rgb565);
    assert!(converter.is_valid());

    let src_crop = CropRect::new(
        input.crop.0 as u32,
        input.crop.1 as u32,
        input.crop.2 as u32,
        input.crop.3 as u32,
    );
    let dst_crop = CropRect::new(
        input.dst_origin.0 as u32,
        input.dst_origin.1 as u32,
        (input.dst_origin.0 as u32 + src_crop.width()).saturating_sub(1),
        (input.dst_origin.1 as u32 + src_crop.height()).saturating_sub(1),
    );

    let src = vec![input.fill.0; input.src_len as usize];
    let mut dst = vec![input.fill.1; input.dst_len as usize];

    let _ = converter.convert(
        &src,
        input.width as u32,
        input.height as u32,
        src_crop,
        &mut dst,
        input.dst_width as u32,
        input.dst_height as u32,
        dst_crop,
    );
});
