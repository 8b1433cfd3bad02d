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
use crate::fourcc::FourCC;
use crate::yuv_support::{PackedLayout, ScanDirection};
use crate::yuv_to_packed::yuv422_to_packed_layout;
use crate::{YuvError, YuvPackedImageMut, YuvPlanarImage};

/// Conversion resolved for one destination layout and frame geometry.
///
/// Holds no buffers and no mutable state, so one kernel may be cached at negotiation time
/// and shared between threads converting different frames.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PackingKernel {
    layout: PackedLayout,
    width: u32,
    height: u32,
}

impl PackingKernel {
    /// Binds `layout` to a geometry without negotiation.
    ///
    /// Unlike [`select`](crate::select), this accepts layouts without a kernel; converting with
    /// such a kernel returns [`YuvError::NotImplemented`].
    pub const fn for_layout(layout: PackedLayout, width: u32, height: u32) -> PackingKernel {
        PackingKernel {
            layout,
            width,
            height,
        }
    }

    pub const fn layout(&self) -> PackedLayout {
        self.layout
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn destination_fourcc(&self) -> FourCC {
        self.layout.fourcc()
    }

    pub const fn scan_direction(&self) -> ScanDirection {
        self.layout.scan_direction()
    }

    /// Pixel bytes in each destination row, the minimal destination stride.
    pub const fn row_bytes(&self) -> usize {
        self.layout.row_bytes(self.width as usize)
    }

    /// Allocates a destination frame with tight stride for this kernel.
    pub fn alloc_destination(&self) -> YuvPackedImageMut<'static, u8> {
        YuvPackedImageMut::alloc(self.width, self.height, self.layout)
    }

    /// Converts one frame.
    ///
    /// Both images must match the negotiated geometry. On error nothing is written.
    pub fn convert(
        &self,
        planar_image: &YuvPlanarImage<u8>,
        packed_image: &mut YuvPackedImageMut<u8>,
    ) -> Result<(), YuvError> {
        if self.layout.is_implemented() {
            let received = (planar_image.width, planar_image.height);
            if received != (self.width, self.height) {
                return Err(YuvError::GeometryMismatch {
                    expected: (self.width, self.height),
                    received,
                });
            }
        }
        yuv422_to_packed_layout(planar_image, packed_image, self.layout)
    }
}
