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
use crate::avx2::avx2_utils::{_mm256_deinterleave_x2_epi8, _mm256_store_interleaved_epi8};
use crate::yuv_support::PackedByteOrder;
use crate::yuv_to_packed::YuvToPackedNavigation;
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Packs 64 luma columns at a time, returns where the next row path should resume.
///
/// # Safety
///
/// `y_row` must hold `width` bytes, `u_row` and `v_row` `width / 2` bytes,
/// `packed_row` `2 * width` bytes.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn avx2_yuv422_to_packed_row<const ORDER: u8>(
    y_row: &[u8],
    u_row: &[u8],
    v_row: &[u8],
    packed_row: &mut [u8],
    width: usize,
    nav: YuvToPackedNavigation,
) -> YuvToPackedNavigation {
    let order: PackedByteOrder = ORDER.into();

    debug_assert!(y_row.len() >= width);
    debug_assert!(u_row.len() >= width / 2 && v_row.len() >= width / 2);
    debug_assert!(packed_row.len() >= width * 2);

    let mut cx = nav.cx;
    let mut uv_x = nav.uv_x;
    let mut x = nav.x;

    unsafe {
        while cx + 64 <= width {
            let y_ptr = y_row.as_ptr().add(cx);
            let (y_even, y_odd) = _mm256_deinterleave_x2_epi8(
                _mm256_loadu_si256(y_ptr as *const __m256i),
                _mm256_loadu_si256(y_ptr.add(32) as *const __m256i),
            );
            let u_values = _mm256_loadu_si256(u_row.as_ptr().add(uv_x) as *const __m256i);
            let v_values = _mm256_loadu_si256(v_row.as_ptr().add(uv_x) as *const __m256i);

            let storage = match order {
                PackedByteOrder::Yuyv => (y_even, u_values, y_odd, v_values),
                PackedByteOrder::Yvyu => (y_even, v_values, y_odd, u_values),
                PackedByteOrder::Uyvy => (u_values, y_even, v_values, y_odd),
            };

            _mm256_store_interleaved_epi8(
                packed_row.as_mut_ptr().add(x),
                storage.0,
                storage.1,
                storage.2,
                storage.3,
            );

            cx += 64;
            uv_x += 32;
            x += 128;
        }
    }

    YuvToPackedNavigation::new(cx, uv_x, x)
}
