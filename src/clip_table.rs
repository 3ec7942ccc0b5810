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
use std::fmt::{Debug, Formatter};

/// Smallest intermediate channel value the color math can produce
pub const CLIP_MIN: i32 = -278;
/// Largest intermediate channel value the color math can produce
pub const CLIP_MAX: i32 = 535;
pub const CLIP_TABLE_SIZE: usize = (CLIP_MAX - CLIP_MIN + 1) as usize;

/// Saturating lookup from a biased intermediate in `[-278, 535]` to `[0, 255]`.
///
/// Built eagerly and never mutated afterwards, so it may be shared across threads.
#[derive(Clone)]
pub struct ClipTable {
    table: Box<[u8; CLIP_TABLE_SIZE]>,
}

impl ClipTable {
    pub fn new() -> ClipTable {
        let mut table = Box::new([0u8; CLIP_TABLE_SIZE]);
        for (i, dst) in table.iter_mut().enumerate() {
            let v = i as i32 + CLIP_MIN;
            *dst = v.clamp(0, 255) as u8;
        }
        ClipTable { table }
    }

    #[inline(always)]
    pub fn clip(&self, v: i32) -> u8 {
        debug_assert!(
            (CLIP_MIN..=CLIP_MAX).contains(&v),
            "Intermediate {} is outside of clip table range",
            v
        );
        self.table[(v - CLIP_MIN) as usize]
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        self.table.as_slice()
    }
}

impl Default for ClipTable {
    fn default() -> Self {
        ClipTable::new()
    }
}

impl Debug for ClipTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClipTable")
            .field("min", &CLIP_MIN)
            .field("max", &CLIP_MAX)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_table_saturates() {
        let table = ClipTable::new();
        assert_eq!(table.as_slice().len(), 814);
        for v in CLIP_MIN..=CLIP_MAX {
            let expected = if v < 0 {
                0
            } else if v > 255 {
                255
            } else {
                v as u8
            };
            assert_eq!(table.clip(v), expected, "Clip mismatch for {}", v);
        }
    }

    #[test]
    fn test_clip_table_edges() {
        let table = ClipTable::default();
        assert_eq!(table.clip(CLIP_MIN), 0);
        assert_eq!(table.clip(-1), 0);
        assert_eq!(table.clip(0), 0);
        assert_eq!(table.clip(255), 255);
        assert_eq!(table.clip(256), 255);
        assert_eq!(table.clip(CLIP_MAX), 255);
    }
}
