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
use crate::yuv_support::PackedByteOrder;
use crate::yuv_to_packed::YuvToPackedNavigation;
use std::arch::aarch64::*;

/// Packs 32 then 16 luma columns at a time, returns where the scalar row should resume.
///
/// # Safety
///
/// `y_row` must hold `width` bytes, `u_row` and `v_row` `width / 2` bytes,
/// `packed_row` `2 * width` bytes.
pub(crate) unsafe fn neon_yuv422_to_packed_row<const ORDER: u8>(
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
            // .0 holds even columns, .1 odd columns
            let y_values = vld2q_u8(y_row.as_ptr().add(cx));
            let u_values = vld1q_u8(u_row.as_ptr().add(uv_x));
            let v_values = vld1q_u8(v_row.as_ptr().add(uv_x));

            let storage = match order {
                PackedByteOrder::Yuyv => uint8x16x4_t(y_values.0, u_values, y_values.1, v_values),
                PackedByteOrder::Yvyu => uint8x16x4_t(y_values.0, v_values, y_values.1, u_values),
                PackedByteOrder::Uyvy => uint8x16x4_t(u_values, y_values.0, v_values, y_values.1),
            };

            vst4q_u8(packed_row.as_mut_ptr().add(x), storage);

            cx += 32;
            uv_x += 16;
            x += 64;
        }

        while cx + 16 <= width {
            let y_values = vld2_u8(y_row.as_ptr().add(cx));
            let u_values = vld1_u8(u_row.as_ptr().add(uv_x));
            let v_values = vld1_u8(v_row.as_ptr().add(uv_x));

            let storage = match order {
                PackedByteOrder::Yuyv => uint8x8x4_t(y_values.0, u_values, y_values.1, v_values),
                PackedByteOrder::Yvyu => uint8x8x4_t(y_values.0, v_values, y_values.1, u_values),
                PackedByteOrder::Uyvy => uint8x8x4_t(u_values, y_values.0, v_values, y_values.1),
            };

            vst4_u8(packed_row.as_mut_ptr().add(x), storage);

            cx += 16;
            uv_x += 8;
            x += 32;
        }
    }

    YuvToPackedNavigation::new(cx, uv_x, x)
}
