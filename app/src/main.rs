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
use rand::Rng;
use std::time::Instant;
use yuv422pack::{
    select, supported_destinations, FourCC, YuvPackedImageMut, YuvPlanarImageMut,
};

fn random_frame(width: u32, height: u32) -> YuvPlanarImageMut<'static, u8> {
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
    planar_image
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let width = args
        .next()
        .and_then(|x| x.parse::<u32>().ok())
        .unwrap_or(1920);
    let height = args
        .next()
        .and_then(|x| x.parse::<u32>().ok())
        .unwrap_or(1080);
    let requested: Option<FourCC> = args.next().and_then(|x| x.parse().ok());

    let planar_image = random_frame(width, height);
    let fixed_planar = planar_image.to_fixed();

    let destinations: Vec<FourCC> = match requested {
        Some(fourcc) => vec![fourcc],
        None => supported_destinations().collect(),
    };

    for destination in destinations {
        let kernel = match select(FourCC::I422, destination, width, height) {
            Ok(kernel) => kernel,
            Err(err) => {
                println!("{} -> {}: {}", FourCC::I422, destination, err);
                continue;
            }
        };

        let mut packed_image: YuvPackedImageMut<u8> = kernel.alloc_destination();

        let start = Instant::now();
        kernel.convert(&fixed_planar, &mut packed_image).unwrap();
        println!(
            "{} -> {} {}x{} ({:?}) time: {:?}",
            FourCC::I422,
            destination,
            width,
            height,
            kernel.scan_direction(),
            start.elapsed()
        );
        let head = &packed_image.row(0, kernel.layout())[..16.min(kernel.row_bytes())];
        println!("first row: {:?}", head);
    }
}
