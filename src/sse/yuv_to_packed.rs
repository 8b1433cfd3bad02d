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
use crate::sse::sse_support::{
    sse_deinterleave_epi8, sse_deinterleave_x2_epi8, sse_interleave_x4_epi8,
};
use crate::yuv_support::PackedByteOrder;
use crate::yuv_to_packed::YuvToPackedNavigation;
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[inline(always)]
fn order_planes(
    order: PackedByteOrder,
    y_even: __m128i,
    y_odd: __m128i,
    u: __m128i,
    v: __m128i,
) -> (__m128i, __m128i, __m128i, __m128i) {
    match order {
        PackedByteOrder::Yuyv => (y_even, u, y_odd, v),
        PackedByteOrder::Yvyu => (y_even, v, y_odd, u),
        PackedByteOrder::Uyvy => (u, y_even, v, y_odd),
    }
}

/// Packs 32 then 16 luma columns at a time, returns where the scalar row should resume.
///
/// # Safety
///
/// `y_row` must hold `width` bytes, `u_row` and `v_row` `width / 2` bytes from `nav.uv_x`,
/// `packed_row` `2 * width` bytes.
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn sse_yuv422_to_packed_row<const ORDER: u8>(
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
        while cx + 32 <= width {
            let y_ptr = y_row.as_ptr().add(cx);
            let (y_even, y_odd) = sse_deinterleave_x2_epi8(
                _mm_loadu_si128(y_ptr as *const __m128i),
                _mm_loadu_si128(y_ptr.add(16) as *const __m128i),
            );
            let u_values = _mm_loadu_si128(u_row.as_ptr().add(uv_x) as *const __m128i);
            let v_values = _mm_loadu_si128(v_row.as_ptr().add(uv_x) as *const __m128i);

            let planes = order_planes(order, y_even, y_odd, u_values, v_values);
            let (row0, row1, row2, row3) =
                sse_interleave_x4_epi8(planes.0, planes.1, planes.2, planes.3);

            let dst_ptr = packed_row.as_mut_ptr().add(x);
            _mm_storeu_si128(dst_ptr as *mut __m128i, row0);
            _mm_storeu_si128(dst_ptr.add(16) as *mut __m128i, row1);
            _mm_storeu_si128(dst_ptr.add(32) as *mut __m128i, row2);
            _mm_storeu_si128(dst_ptr.add(48) as *mut __m128i, row3);

            cx += 32;
            uv_x += 16;
            x += 64;
        }

        while cx + 16 <= width {
            let (y_even, y_odd) =
                sse_deinterleave_epi8(_mm_loadu_si128(y_row.as_ptr().add(cx) as *const __m128i));
            let u_values = _mm_loadl_epi64(u_row.as_ptr().add(uv_x) as *const __m128i);
            let v_values = _mm_loadl_epi64(v_row.as_ptr().add(uv_x) as *const __m128i);

            let planes = order_planes(order, y_even, y_odd, u_values, v_values);
            let (row0, row1, _, _) = sse_interleave_x4_epi8(planes.0, planes.1, planes.2, planes.3);

            let dst_ptr = packed_row.as_mut_ptr().add(x);
            _mm_storeu_si128(dst_ptr as *mut __m128i, row0);
            _mm_storeu_si128(dst_ptr.add(16) as *mut __m128i, row1);

            cx += 16;
            uv_x += 8;
            x += 32;
        }
    }

    YuvToPackedNavigation::new(cx, uv_x, x)
}
