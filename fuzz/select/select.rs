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
use yuv422pack::{select, supported_destinations, FourCC, YuvError, YuvPlanarImageMut};

fuzz_target!(|data: ([u8; 4], [u8; 4], u8, u8)| {
    let source = FourCC::from_bytes(data.0);
    let destination = FourCC::from_bytes(data.1);
    let width = data.2 as u32;
    let height = data.3 as u32;

    match select(source, destination, width, height) {
        Ok(kernel) => {
            assert_eq!(source, FourCC::I422);
            assert!(supported_destinations().any(|x| x == destination));
            let planar_image = YuvPlanarImageMut::<u8>::alloc(width, height);
            let mut packed_image = kernel.alloc_destination();
            kernel
                .convert(&planar_image.to_fixed(), &mut packed_image)
                .unwrap();
        }
        Err(YuvError::UnsupportedGeometry { .. }) => {
            assert!(width % 2 != 0 || height % 2 != 0);
        }
        Err(YuvError::ZeroBaseSize) => {
            assert!(width == 0 || height == 0);
        }
        Err(YuvError::NotImplemented(_)) => {
            assert_eq!(destination, FourCC::IUYV);
        }
        Err(YuvError::UnsupportedFormatPair { .. }) => {
            assert!(source != FourCC::I422 || !supported_destinations().any(|x| x == destination));
        }
        Err(err) => panic!("unexpected negotiation error {}", err),
    }
});
