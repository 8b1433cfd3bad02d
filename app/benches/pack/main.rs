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
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use yuv422pack::{
    yuv422_to_cyuv422, yuv422_to_uyvy422, yuv422_to_y211, yuv422_to_yuyv422, yuv422_to_yvyu422,
    PackedLayout, YuvPackedImageMut, YuvPlanarImageMut,
};

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1920u32;
    let height = 1080u32;

    let mut rng = rand::rng();
    let mut planar_image = YuvPlanarImageMut::<u8>::alloc(width, height);
    for plane in [
        &mut planar_image.y_plane,
        &mut planar_image.u_plane,
        &mut planar_image.v_plane,
    ] {
        for value in plane.borrow_mut().iter_mut() {
            *value = rng.random::<u8>();
        }
    }
    let fixed_planar = planar_image.to_fixed();

    c.bench_function("yuv422pack YUV 4:2:2 -> YUYV", |b| {
        let mut packed_image = YuvPackedImageMut::<u8>::alloc(width, height, PackedLayout::Yuyv);
        b.iter(|| {
            yuv422_to_yuyv422(&fixed_planar, &mut packed_image).unwrap();
        })
    });

    c.bench_function("yuv422pack YUV 4:2:2 -> YVYU", |b| {
        let mut packed_image = YuvPackedImageMut::<u8>::alloc(width, height, PackedLayout::Yvyu);
        b.iter(|| {
            yuv422_to_yvyu422(&fixed_planar, &mut packed_image).unwrap();
        })
    });

    c.bench_function("yuv422pack YUV 4:2:2 -> UYVY", |b| {
        let mut packed_image = YuvPackedImageMut::<u8>::alloc(width, height, PackedLayout::Uyvy);
        b.iter(|| {
            yuv422_to_uyvy422(&fixed_planar, &mut packed_image).unwrap();
        })
    });

    c.bench_function("yuv422pack YUV 4:2:2 -> cyuv", |b| {
        let mut packed_image = YuvPackedImageMut::<u8>::alloc(width, height, PackedLayout::Cyuv);
        b.iter(|| {
            yuv422_to_cyuv422(&fixed_planar, &mut packed_image).unwrap();
        })
    });

    c.bench_function("yuv422pack YUV 4:2:2 -> Y211", |b| {
        let mut packed_image = YuvPackedImageMut::<u8>::alloc(width, height, PackedLayout::Y211);
        b.iter(|| {
            yuv422_to_y211(&fixed_planar, &mut packed_image).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
