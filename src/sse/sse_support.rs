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
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Splits 32 bytes into their even and odd indexed bytes, 16 each.
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn sse_deinterleave_x2_epi8(a: __m128i, b: __m128i) -> (__m128i, __m128i) {
    #[rustfmt::skip]
    let sh = _mm_setr_epi8(0, 2, 4, 6, 8, 10, 12, 14,
                           1, 3, 5, 7, 9, 11, 13, 15);
    let p0 = _mm_shuffle_epi8(a, sh);
    let p1 = _mm_shuffle_epi8(b, sh);
    (_mm_unpacklo_epi64(p0, p1), _mm_unpackhi_epi64(p0, p1))
}

/// Splits 16 bytes into even bytes (low half) and odd bytes (low half).
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn sse_deinterleave_epi8(a: __m128i) -> (__m128i, __m128i) {
    #[rustfmt::skip]
    let sh = _mm_setr_epi8(0, 2, 4, 6, 8, 10, 12, 14,
                           1, 3, 5, 7, 9, 11, 13, 15);
    let p0 = _mm_shuffle_epi8(a, sh);
    (p0, _mm_unpackhi_epi64(p0, p0))
}

/// Interleaves four planes byte by byte: `a0 b0 c0 d0 a1 b1 c1 d1 ...`.
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn sse_interleave_x4_epi8(
    a: __m128i,
    b: __m128i,
    c: __m128i,
    d: __m128i,
) -> (__m128i, __m128i, __m128i, __m128i) {
    let ab_lo = _mm_unpacklo_epi8(a, b);
    let ab_hi = _mm_unpackhi_epi8(a, b);
    let cd_lo = _mm_unpacklo_epi8(c, d);
    let cd_hi = _mm_unpackhi_epi8(c, d);

    let abcd_0_lo = _mm_unpacklo_epi16(ab_lo, cd_lo);
    let abcd_0_hi = _mm_unpackhi_epi16(ab_lo, cd_lo);
    let abcd_1_lo = _mm_unpacklo_epi16(ab_hi, cd_hi);
    let abcd_1_hi = _mm_unpackhi_epi16(ab_hi, cd_hi);
    (abcd_0_lo, abcd_0_hi, abcd_1_lo, abcd_1_hi)
}
