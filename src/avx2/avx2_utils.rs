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

/// Splits 64 bytes into their even and odd indexed bytes, 32 each, in order.
#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn _mm256_deinterleave_x2_epi8(a: __m256i, b: __m256i) -> (__m256i, __m256i) {
    #[rustfmt::skip]
    let sh = _mm256_setr_epi8(
        0, 2, 4, 6, 8, 10, 12, 14, 1, 3, 5, 7, 9, 11, 13, 15,
        0, 2, 4, 6, 8, 10, 12, 14, 1, 3, 5, 7, 9, 11, 13, 15,
    );
    let p0 = _mm256_shuffle_epi8(a, sh);
    let p1 = _mm256_shuffle_epi8(b, sh);
    let pl = _mm256_permute2x128_si256::<32>(p0, p1);
    let ph = _mm256_permute2x128_si256::<49>(p0, p1);
    let a0 = _mm256_unpacklo_epi64(pl, ph);
    let b0 = _mm256_unpackhi_epi64(pl, ph);
    (a0, b0)
}

/// Stores four 32 byte planes interleaved byte by byte, 128 bytes in total.
#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn _mm256_store_interleaved_epi8(
    ptr: *mut u8,
    a: __m256i,
    b: __m256i,
    c: __m256i,
    d: __m256i,
) {
    let ab0 = _mm256_unpacklo_epi8(a, b);
    let ab1 = _mm256_unpackhi_epi8(a, b);
    let cd0 = _mm256_unpacklo_epi8(c, d);
    let cd1 = _mm256_unpackhi_epi8(c, d);

    let abcd0_ = _mm256_unpacklo_epi16(ab0, cd0);
    let abcd1_ = _mm256_unpackhi_epi16(ab0, cd0);
    let abcd2_ = _mm256_unpacklo_epi16(ab1, cd1);
    let abcd3_ = _mm256_unpackhi_epi16(ab1, cd1);

    let abcd0 = _mm256_permute2x128_si256::<32>(abcd0_, abcd1_);
    let abcd2 = _mm256_permute2x128_si256::<49>(abcd0_, abcd1_);
    let abcd1 = _mm256_permute2x128_si256::<32>(abcd2_, abcd3_);
    let abcd3 = _mm256_permute2x128_si256::<49>(abcd2_, abcd3_);

    _mm256_storeu_si256(ptr as *mut __m256i, abcd0);
    _mm256_storeu_si256(ptr.add(32) as *mut __m256i, abcd1);
    _mm256_storeu_si256(ptr.add(64) as *mut __m256i, abcd2);
    _mm256_storeu_si256(ptr.add(96) as *mut __m256i, abcd3);
}
