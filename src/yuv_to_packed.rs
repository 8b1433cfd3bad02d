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
use crate::yuv_error::check_packed_geometry;
use crate::yuv_support::{PackedByteOrder, PackedLayout};
use crate::{YuvError, YuvPackedImageMut, YuvPlanarImage};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

/// Position reached by a vectorized row, the scalar row continues from there.
#[derive(Debug, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq)]
pub(crate) struct YuvToPackedNavigation {
    /// Luma column.
    pub(crate) cx: usize,
    /// Chroma column.
    pub(crate) uv_x: usize,
    /// Byte offset in the packed row.
    pub(crate) x: usize,
}

impl YuvToPackedNavigation {
    #[allow(dead_code)]
    pub(crate) const fn new(cx: usize, uv_x: usize, x: usize) -> YuvToPackedNavigation {
        YuvToPackedNavigation { cx, uv_x, x }
    }
}

/// Packs one row: `(y_row, u_row, v_row, packed_row, width)`.
///
/// Rows are sliced to exactly `width` luma, `width / 2` chroma and `2 * width` packed bytes.
pub(crate) type PackRowExecutor = unsafe fn(&[u8], &[u8], &[u8], &mut [u8], usize);

#[inline(always)]
fn write_packed_unit(dst: &mut [u8], order: PackedByteOrder, y0: u8, y1: u8, u: u8, v: u8) {
    dst[order.get_first_y_position()] = y0;
    dst[order.get_u_position()] = u;
    dst[order.get_second_y_position()] = y1;
    dst[order.get_v_position()] = v;
}

/// Reference row: 8 column macro-blocks, then 2 column units for the rest.
pub(crate) fn pack_row_scalar<const ORDER: u8>(
    y_row: &[u8],
    u_row: &[u8],
    v_row: &[u8],
    packed_row: &mut [u8],
    width: usize,
    nav: YuvToPackedNavigation,
) {
    let order: PackedByteOrder = ORDER.into();

    let y_row = &y_row[nav.cx..width];
    let u_row = &u_row[nav.uv_x..width / 2];
    let v_row = &v_row[nav.uv_x..width / 2];
    let packed_row = &mut packed_row[nav.x..width * 2];

    let blocks = y_row.len() / 8;

    for (((dst, y_src), u_src), v_src) in packed_row
        .chunks_exact_mut(16)
        .zip(y_row.chunks_exact(8))
        .zip(u_row.chunks_exact(4))
        .zip(v_row.chunks_exact(4))
    {
        for i in 0..4 {
            write_packed_unit(
                &mut dst[i * 4..i * 4 + 4],
                order,
                y_src[i * 2],
                y_src[i * 2 + 1],
                u_src[i],
                v_src[i],
            );
        }
    }

    for (((dst, y_src), &u_value), &v_value) in packed_row[blocks * 16..]
        .chunks_exact_mut(4)
        .zip(y_row[blocks * 8..].chunks_exact(2))
        .zip(u_row[blocks * 4..].iter())
        .zip(v_row[blocks * 4..].iter())
    {
        write_packed_unit(dst, order, y_src[0], y_src[1], u_value, v_value);
    }
}

fn default_executor<const ORDER: u8>(
    y_row: &[u8],
    u_row: &[u8],
    v_row: &[u8],
    packed_row: &mut [u8],
    width: usize,
) {
    pack_row_scalar::<ORDER>(
        y_row,
        u_row,
        v_row,
        packed_row,
        width,
        YuvToPackedNavigation::default(),
    );
}

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
fn default_executor_neon<const ORDER: u8>(
    y_row: &[u8],
    u_row: &[u8],
    v_row: &[u8],
    packed_row: &mut [u8],
    width: usize,
) {
    use crate::neon::neon_yuv422_to_packed_row;
    let nav = unsafe {
        neon_yuv422_to_packed_row::<ORDER>(
            y_row,
            u_row,
            v_row,
            packed_row,
            width,
            YuvToPackedNavigation::default(),
        )
    };
    pack_row_scalar::<ORDER>(y_row, u_row, v_row, packed_row, width, nav);
}

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
#[target_feature(enable = "avx2")]
unsafe fn default_executor_avx2<const ORDER: u8>(
    y_row: &[u8],
    u_row: &[u8],
    v_row: &[u8],
    packed_row: &mut [u8],
    width: usize,
) {
    use crate::avx2::avx2_yuv422_to_packed_row;
    let nav = avx2_yuv422_to_packed_row::<ORDER>(
        y_row,
        u_row,
        v_row,
        packed_row,
        width,
        YuvToPackedNavigation::default(),
    );
    #[cfg(feature = "sse")]
    let nav = crate::sse::sse_yuv422_to_packed_row::<ORDER>(
        y_row, u_row, v_row, packed_row, width, nav,
    );
    pack_row_scalar::<ORDER>(y_row, u_row, v_row, packed_row, width, nav);
}

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
#[target_feature(enable = "sse4.1")]
unsafe fn default_executor_sse<const ORDER: u8>(
    y_row: &[u8],
    u_row: &[u8],
    v_row: &[u8],
    packed_row: &mut [u8],
    width: usize,
) {
    use crate::sse::sse_yuv422_to_packed_row;
    let nav = sse_yuv422_to_packed_row::<ORDER>(
        y_row,
        u_row,
        v_row,
        packed_row,
        width,
        YuvToPackedNavigation::default(),
    );
    pack_row_scalar::<ORDER>(y_row, u_row, v_row, packed_row, width, nav);
}

fn make_executor<const ORDER: u8>() -> PackRowExecutor {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(feature = "avx")]
        if std::arch::is_x86_feature_detected!("avx2") {
            log::trace!("packing rows with avx2");
            return default_executor_avx2::<ORDER>;
        }
        #[cfg(feature = "sse")]
        if std::arch::is_x86_feature_detected!("sse4.1") {
            log::trace!("packing rows with sse4.1");
            return default_executor_sse::<ORDER>;
        }
    }
    #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
    {
        log::trace!("packing rows with neon");
        default_executor_neon::<ORDER>
    }
    #[cfg(not(all(target_arch = "aarch64", target_feature = "neon")))]
    {
        log::trace!("packing rows with scalar path");
        default_executor::<ORDER>
    }
}

/// Walks the frame row by row in `layout`'s scan direction.
///
/// Every check runs before the first byte is written. `row_packer` receives the source rows
/// trimmed to the frame width and the destination row trimmed to the layout's row bytes, so
/// stride padding is never touched.
pub(crate) fn pack_planar_rows<F>(
    planar_image: &YuvPlanarImage<u8>,
    packed_image: &mut YuvPackedImageMut<u8>,
    layout: PackedLayout,
    row_packer: F,
) -> Result<(), YuvError>
where
    F: Fn(&[u8], &[u8], &[u8], &mut [u8]) + Send + Sync,
{
    if planar_image.width != packed_image.width || planar_image.height != packed_image.height {
        return Err(YuvError::GeometryMismatch {
            expected: (planar_image.width, planar_image.height),
            received: (packed_image.width, packed_image.height),
        });
    }
    check_packed_geometry(planar_image.width, planar_image.height)?;
    planar_image.check_constraints()?;
    packed_image.check_constraints(layout)?;

    let width = planar_image.width as usize;
    let height = planar_image.height as usize;
    let chroma_width = width / 2;
    let row_bytes = layout.row_bytes(width);
    let direction = layout.scan_direction();

    let y_stride = planar_image.y_stride as usize;
    let u_stride = planar_image.u_stride as usize;
    let v_stride = planar_image.v_stride as usize;
    let y_plane = planar_image.y_plane;
    let u_plane = planar_image.u_plane;
    let v_plane = planar_image.v_plane;

    let packed_stride = packed_image.packed_stride as usize;
    let packed_store = &mut packed_image.packed.borrow_mut()[..packed_stride * height];

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = packed_store.par_chunks_exact_mut(packed_stride);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = packed_store.chunks_exact_mut(packed_stride);
    }

    iter.enumerate().for_each(|(dst_y, packed_row)| {
        let y = direction.source_row(dst_y, height);
        let y_offset = y * y_stride;
        let u_offset = y * u_stride;
        let v_offset = y * v_stride;
        row_packer(
            &y_plane[y_offset..y_offset + width],
            &u_plane[u_offset..u_offset + chroma_width],
            &v_plane[v_offset..v_offset + chroma_width],
            &mut packed_row[..row_bytes],
        );
    });

    Ok(())
}

pub(crate) fn yuv422_to_packed_launch<const ORDER: u8>(
    planar_image: &YuvPlanarImage<u8>,
    packed_image: &mut YuvPackedImageMut<u8>,
    layout: PackedLayout,
    executor: PackRowExecutor,
) -> Result<(), YuvError> {
    debug_assert_eq!(layout.byte_order(), Some(PackedByteOrder::from(ORDER)));
    let width = planar_image.width as usize;
    pack_planar_rows(
        planar_image,
        packed_image,
        layout,
        |y_row, u_row, v_row, packed_row| unsafe {
            executor(y_row, u_row, v_row, packed_row, width);
        },
    )
}

/// Runs the layout's kernel with the fastest row path available on this CPU.
pub(crate) fn yuv422_to_packed_layout(
    planar_image: &YuvPlanarImage<u8>,
    packed_image: &mut YuvPackedImageMut<u8>,
    layout: PackedLayout,
) -> Result<(), YuvError> {
    match layout {
        PackedLayout::Yuyv => yuv422_to_yuyv422(planar_image, packed_image),
        PackedLayout::Yvyu => yuv422_to_yvyu422(planar_image, packed_image),
        PackedLayout::Uyvy => yuv422_to_uyvy422(planar_image, packed_image),
        PackedLayout::Iuyv => yuv422_to_iuyv422(planar_image, packed_image),
        PackedLayout::Cyuv => yuv422_to_cyuv422(planar_image, packed_image),
        PackedLayout::Y211 => crate::yuv_to_y211::yuv422_to_y211(planar_image, packed_image),
    }
}

macro_rules! d_pack {
    ($method: ident, $order: expr, $layout: expr, $to_fmt: expr, $to_fourcc: expr) => {
        #[doc = concat!("Converts planar YUV 4:2:2 to ", $to_fmt, " (`", $to_fourcc, "`).")]
        ///
        /// Width and height must be even, the destination must hold `height` rows of
        /// `packed_stride` bytes with at least `2 * width` bytes of pixels each.
        /// Bytes between the end of the pixels and the stride are left untouched.
        ///
        /// Returns an error, without writing anything, when the geometry or buffers do not fit.
        pub fn $method(
            planar_image: &YuvPlanarImage<u8>,
            packed_image: &mut YuvPackedImageMut<u8>,
        ) -> Result<(), YuvError> {
            yuv422_to_packed_launch::<{ $order as u8 }>(
                planar_image,
                packed_image,
                $layout,
                make_executor::<{ $order as u8 }>(),
            )
        }
    };
}

d_pack!(
    yuv422_to_yuyv422,
    PackedByteOrder::Yuyv,
    PackedLayout::Yuyv,
    "packed YUYV",
    "YUY2"
);
d_pack!(
    yuv422_to_yvyu422,
    PackedByteOrder::Yvyu,
    PackedLayout::Yvyu,
    "packed YVYU",
    "YVYU"
);
d_pack!(
    yuv422_to_uyvy422,
    PackedByteOrder::Uyvy,
    PackedLayout::Uyvy,
    "packed UYVY",
    "UYVY"
);
d_pack!(
    yuv422_to_cyuv422,
    PackedByteOrder::Uyvy,
    PackedLayout::Cyuv,
    "bottom-up packed UYVY",
    "cyuv"
);

/// Converts planar YUV 4:2:2 to interleaved IUYV.
///
/// No kernel exists for this layout yet. Always returns [`YuvError::NotImplemented`]
/// and never touches the destination.
pub fn yuv422_to_iuyv422(
    _planar_image: &YuvPlanarImage<u8>,
    _packed_image: &mut YuvPackedImageMut<u8>,
) -> Result<(), YuvError> {
    log::error!("I422 to IUYV conversion is not implemented");
    Err(YuvError::NotImplemented(PackedLayout::Iuyv))
}
