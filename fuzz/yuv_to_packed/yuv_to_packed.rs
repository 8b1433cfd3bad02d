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

use libfuzzer_sys::fuzz_target;
use yuv422pack::{
    yuv422_to_cyuv422, yuv422_to_uyvy422, yuv422_to_y211, yuv422_to_yuyv422, yuv422_to_yvyu422,
    BufferStoreMut, PackedLayout, YuvError, YuvPackedImageMut, YuvPlanarImage,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8)| {
    for layout in [
        PackedLayout::Yuyv,
        PackedLayout::Yvyu,
        PackedLayout::Uyvy,
        PackedLayout::Cyuv,
        PackedLayout::Y211,
    ] {
        fuzz_yuv_422(data.0, data.1, data.2, data.3, data.4, layout);
    }
});

fn fuzz_yuv_422(
    i_width: u8,
    i_height: u8,
    y_value: u8,
    uv_value: u8,
    padding: u8,
    layout: PackedLayout,
) {
    let width = i_width as usize;
    let height = i_height as usize;
    let chroma_width = width.div_ceil(2);

    let y_plane = vec![y_value; height * width];
    let u_plane = vec![uv_value; chroma_width * height];
    let v_plane = vec![uv_value; chroma_width * height];

    let planar_image = YuvPlanarImage {
        y_plane: &y_plane,
        y_stride: width as u32,
        u_plane: &u_plane,
        u_stride: chroma_width as u32,
        v_plane: &v_plane,
        v_stride: chroma_width as u32,
        width: width as u32,
        height: height as u32,
    };

    let padding = (padding % 16) as usize;
    let packed_stride = layout.row_bytes(width) + padding;
    let mut packed_plane = vec![0xA5u8; packed_stride * height];

    let mut packed_image = YuvPackedImageMut {
        packed: BufferStoreMut::Borrowed(&mut packed_plane),
        packed_stride: packed_stride as u32,
        width: width as u32,
        height: height as u32,
    };

    let result = match layout {
        PackedLayout::Yuyv => yuv422_to_yuyv422(&planar_image, &mut packed_image),
        PackedLayout::Yvyu => yuv422_to_yvyu422(&planar_image, &mut packed_image),
        PackedLayout::Uyvy => yuv422_to_uyvy422(&planar_image, &mut packed_image),
        PackedLayout::Cyuv => yuv422_to_cyuv422(&planar_image, &mut packed_image),
        PackedLayout::Y211 => yuv422_to_y211(&planar_image, &mut packed_image),
        PackedLayout::Iuyv => unreachable!(),
    };
    drop(packed_image);

    if width % 2 != 0 || height % 2 != 0 {
        assert_eq!(
            result,
            Err(YuvError::UnsupportedGeometry {
                width: width as u32,
                height: height as u32
            })
        );
        assert!(packed_plane.iter().all(|&x| x == 0xA5));
        return;
    }
    if width == 0 || height == 0 {
        assert_eq!(result, Err(YuvError::ZeroBaseSize));
        return;
    }
    result.unwrap();

    let row_bytes = layout.row_bytes(width);
    for row in packed_plane.chunks_exact(packed_stride) {
        assert!(row[row_bytes..].iter().all(|&x| x == 0xA5));
        for unit in row[..row_bytes].chunks_exact(2) {
            assert!(unit.contains(&y_value));
        }
    }
}
