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
use crate::yuv_to_packed::pack_planar_rows;
use crate::yuv_support::PackedLayout;
use crate::{YuvError, YuvPackedImageMut, YuvPlanarImage};

/// Emits `Y[4k], U[2k], Y[4k + 2], V[2k]` for every 4 source columns.
///
/// Odd luma columns and odd chroma columns are dropped. A trailing pair of columns,
/// when `width % 4 == 2`, yields only its `Y, U` half.
fn yuv422_to_y211_row(y_row: &[u8], u_row: &[u8], v_row: &[u8], packed_row: &mut [u8]) {
    let width = y_row.len();
    let blocks = width / 8;

    for (((dst, y_src), u_src), v_src) in packed_row
        .chunks_exact_mut(8)
        .zip(y_row.chunks_exact(8))
        .zip(u_row.chunks_exact(4))
        .zip(v_row.chunks_exact(4))
    {
        dst[0] = y_src[0];
        dst[1] = u_src[0];
        dst[2] = y_src[2];
        dst[3] = v_src[0];
        dst[4] = y_src[4];
        dst[5] = u_src[2];
        dst[6] = y_src[6];
        dst[7] = v_src[2];
    }

    let mut cx = blocks * 8;
    let mut uv_x = blocks * 4;
    let mut x = blocks * 8;

    if cx + 4 <= width {
        packed_row[x] = y_row[cx];
        packed_row[x + 1] = u_row[uv_x];
        packed_row[x + 2] = y_row[cx + 2];
        packed_row[x + 3] = v_row[uv_x];
        cx += 4;
        uv_x += 2;
        x += 4;
    }

    if cx + 2 <= width {
        packed_row[x] = y_row[cx];
        packed_row[x + 1] = u_row[uv_x];
    }
}

/// Converts planar YUV 4:2:2 to bottom-up packed Y211 (`Y211`).
///
/// Y211 halves the horizontal resolution, so each destination row carries `width` bytes:
/// even luma samples interleaved with every other chroma pair, `Y0 U Y2 V`.
/// The first source row is stored in the last destination row.
///
/// Returns an error, without writing anything, when the geometry or buffers do not fit.
pub fn yuv422_to_y211(
    planar_image: &YuvPlanarImage<u8>,
    packed_image: &mut YuvPackedImageMut<u8>,
) -> Result<(), YuvError> {
    pack_planar_rows(
        planar_image,
        packed_image,
        PackedLayout::Y211,
        yuv422_to_y211_row,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BufferStoreMut, YuvPlanarImageMut};
    use rand::Rng;

    fn random_planar(width: u32, height: u32) -> YuvPlanarImageMut<'static, u8> {
        let mut rng = rand::rng();
        let mut planar = YuvPlanarImageMut::<u8>::alloc(width, height);
        for plane in [
            &mut planar.y_plane,
            &mut planar.u_plane,
            &mut planar.v_plane,
        ] {
            for value in plane.borrow_mut().iter_mut() {
                *value = rng.random::<u8>();
            }
        }
        planar
    }

    #[test]
    fn test_y211_byte_order() {
        let mut planar = YuvPlanarImageMut::<u8>::alloc(8, 2);
        for (i, value) in planar.y_plane.borrow_mut().iter_mut().enumerate() {
            *value = i as u8;
        }
        for (i, value) in planar.u_plane.borrow_mut().iter_mut().enumerate() {
            *value = 100 + i as u8;
        }
        for (i, value) in planar.v_plane.borrow_mut().iter_mut().enumerate() {
            *value = 200 + i as u8;
        }
        let mut packed = YuvPackedImageMut::<u8>::alloc(8, 2, PackedLayout::Y211);
        yuv422_to_y211(&planar.to_fixed(), &mut packed).unwrap();
        // Bottom-up: first source row is the last destination row.
        assert_eq!(
            packed.row(1, PackedLayout::Y211),
            &[0, 100, 2, 200, 4, 102, 6, 202]
        );
        assert_eq!(
            packed.row(0, PackedLayout::Y211),
            &[8, 104, 10, 204, 12, 106, 14, 206]
        );
    }

    #[test]
    fn test_y211_round_trip_even_columns() {
        let mut rng = rand::rng();
        for &width in &[2u32, 4, 6, 8, 10, 12, 14, 34, 66, 128] {
            let height = rng.random_range(1..6u32) * 2;
            let planar = random_planar(width, height);
            let mut packed = YuvPackedImageMut::<u8>::alloc(width, height, PackedLayout::Y211);
            yuv422_to_y211(&planar.to_fixed(), &mut packed).unwrap();

            let width = width as usize;
            let height = height as usize;
            let y_plane = planar.y_plane.borrow();
            let u_plane = planar.u_plane.borrow();
            let v_plane = planar.v_plane.borrow();
            for y in 0..height {
                let row = packed.row(height - 1 - y, PackedLayout::Y211);
                assert_eq!(row.len(), width);
                for (k, unit) in row.chunks(4).enumerate() {
                    assert_eq!(unit[0], y_plane[y * width + 4 * k], "{}x{}", width, height);
                    assert_eq!(unit[1], u_plane[y * width / 2 + 2 * k]);
                    if unit.len() == 4 {
                        assert_eq!(unit[2], y_plane[y * width + 4 * k + 2]);
                        assert_eq!(unit[3], v_plane[y * width / 2 + 2 * k]);
                    }
                }
            }
        }
    }

    #[test]
    fn test_y211_keeps_stride_padding() {
        let planar = random_planar(12, 4);
        let stride = 12 + 4;
        let mut store = vec![0xEEu8; stride * 4];
        let mut packed = YuvPackedImageMut {
            packed: BufferStoreMut::Borrowed(&mut store),
            packed_stride: stride as u32,
            width: 12,
            height: 4,
        };
        yuv422_to_y211(&planar.to_fixed(), &mut packed).unwrap();
        for row in packed.packed.borrow().chunks_exact(stride) {
            assert!(row[12..].iter().all(|&x| x == 0xEE));
        }
    }

    #[test]
    fn test_y211_rejects_full_size_stride_mismatch() {
        let planar = random_planar(12, 4);
        let mut packed = YuvPackedImageMut::<u8>::alloc(12, 4, PackedLayout::Y211);
        packed.packed_stride = 11;
        assert!(matches!(
            yuv422_to_y211(&planar.to_fixed(), &mut packed),
            Err(YuvError::PackedStrideTooSmall(_))
        ));
    }
}
