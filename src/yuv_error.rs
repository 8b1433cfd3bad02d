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
use crate::yuv_support::PackedLayout;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum YuvError {
    /// Width or height is odd.
    UnsupportedGeometry { width: u32, height: u32 },
    /// Source is not planar 4:2:2, or the destination fourcc is unknown.
    UnsupportedFormatPair { source: FourCC, destination: FourCC },
    /// Layout is recognized but has no kernel.
    NotImplemented(PackedLayout),
    /// Frame does not match the geometry the kernel was negotiated for.
    GeometryMismatch {
        expected: (u32, u32),
        received: (u32, u32),
    },
    ZeroBaseSize,
    PointerOverflow,
    LumaStrideTooSmall(MismatchedSize),
    LumaPlaneSizeMismatch(MismatchedSize),
    ChromaStrideTooSmall(MismatchedSize),
    ChromaPlaneSizeMismatch(MismatchedSize),
    PackedStrideTooSmall(MismatchedSize),
    DestinationSizeMismatch(MismatchedSize),
}

impl Display for YuvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            YuvError::UnsupportedGeometry { width, height } => f.write_fmt(format_args!(
                "Packed 4:2:2 requires even dimensions, but image is {}x{}",
                width, height
            )),
            YuvError::UnsupportedFormatPair {
                source,
                destination,
            } => f.write_fmt(format_args!(
                "Conversion from {} to {} is not supported",
                source, destination
            )),
            YuvError::NotImplemented(layout) => f.write_fmt(format_args!(
                "Conversion to {} is not implemented",
                layout
            )),
            YuvError::GeometryMismatch { expected, received } => f.write_fmt(format_args!(
                "Kernel was negotiated for {}x{}, but image is {}x{}",
                expected.0, expected.1, received.0, received.1
            )),
            YuvError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            YuvError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            YuvError::LumaStrideTooSmall(size) => f.write_fmt(format_args!(
                "Luma stride must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::LumaPlaneSizeMismatch(size) => f.write_fmt(format_args!(
                "Luma plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::ChromaStrideTooSmall(size) => f.write_fmt(format_args!(
                "Chroma stride must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::ChromaPlaneSizeMismatch(size) => f.write_fmt(format_args!(
                "Chroma plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::PackedStrideTooSmall(size) => f.write_fmt(format_args!(
                "Packed stride must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::DestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination must have size at least {} but it is {}",
                size.expected, size.received
            )),
        }
    }
}

impl Error for YuvError {}

/// Packed 4:2:2 macro-pixels need even width, bottom-up layouts pair rows.
#[inline]
pub(crate) fn check_packed_geometry(width: u32, height: u32) -> Result<(), YuvError> {
    if width & 1 != 0 || height & 1 != 0 {
        return Err(YuvError::UnsupportedGeometry { width, height });
    }
    if width == 0 || height == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<usize, YuvError> {
    v0.checked_mul(v1).ok_or(YuvError::PointerOverflow)
}

/// Minimal length of a plane holding `height` rows of `row_width` elements `stride` apart.
///
/// The last row does not need to be padded up to the stride.
#[inline]
fn minimal_plane_size(stride: usize, row_width: usize, height: usize) -> Result<usize, YuvError> {
    if height == 0 {
        return Ok(0);
    }
    let body = check_overflow_v2(stride, height - 1)?;
    body.checked_add(row_width).ok_or(YuvError::PointerOverflow)
}

#[inline]
pub(crate) fn check_y8_channel<V>(
    data: &[V],
    stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    if (stride as usize) < width as usize {
        return Err(YuvError::LumaStrideTooSmall(MismatchedSize {
            expected: width as usize,
            received: stride as usize,
        }));
    }
    let expected = minimal_plane_size(stride as usize, width as usize, height as usize)?;
    if data.len() < expected {
        return Err(YuvError::LumaPlaneSizeMismatch(MismatchedSize {
            expected,
            received: data.len(),
        }));
    }
    Ok(())
}

/// Checks a horizontally halved, vertically full chroma plane.
#[inline]
pub(crate) fn check_chroma422_channel<V>(
    data: &[V],
    stride: u32,
    image_width: u32,
    image_height: u32,
) -> Result<(), YuvError> {
    let chroma_width = (image_width as usize).div_ceil(2);
    if (stride as usize) < chroma_width {
        return Err(YuvError::ChromaStrideTooSmall(MismatchedSize {
            expected: chroma_width,
            received: stride as usize,
        }));
    }
    let expected = minimal_plane_size(stride as usize, chroma_width, image_height as usize)?;
    if data.len() < expected {
        return Err(YuvError::ChromaPlaneSizeMismatch(MismatchedSize {
            expected,
            received: data.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_packed_destination<V>(
    arr: &[V],
    packed_stride: u32,
    width: u32,
    height: u32,
    layout: PackedLayout,
) -> Result<(), YuvError> {
    let row_bytes = layout.row_bytes(width as usize);
    if (packed_stride as usize) < row_bytes {
        return Err(YuvError::PackedStrideTooSmall(MismatchedSize {
            expected: row_bytes,
            received: packed_stride as usize,
        }));
    }
    let expected = check_overflow_v2(packed_stride as usize, height as usize)?;
    if arr.len() < expected {
        return Err(YuvError::DestinationSizeMismatch(MismatchedSize {
            expected,
            received: arr.len(),
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_checks() {
        let data = vec![0u8; 10 * 3 + 8];
        assert!(check_y8_channel(&data, 10, 8, 4).is_ok());
        assert_eq!(
            check_y8_channel(&data, 6, 8, 4),
            Err(YuvError::LumaStrideTooSmall(MismatchedSize {
                expected: 8,
                received: 6
            }))
        );
        assert_eq!(
            check_y8_channel(&data[..37], 10, 8, 4),
            Err(YuvError::LumaPlaneSizeMismatch(MismatchedSize {
                expected: 38,
                received: 37
            }))
        );
    }

    #[test]
    fn test_chroma_checks() {
        let data = vec![0u8; 4 * 2];
        assert!(check_chroma422_channel(&data, 4, 8, 2).is_ok());
        assert!(matches!(
            check_chroma422_channel(&data, 3, 8, 2),
            Err(YuvError::ChromaStrideTooSmall(_))
        ));
        assert!(matches!(
            check_chroma422_channel(&data, 4, 8, 3),
            Err(YuvError::ChromaPlaneSizeMismatch(_))
        ));
    }

    #[test]
    fn test_packed_destination_checks() {
        let data = vec![0u8; 16 * 2];
        assert!(check_packed_destination(&data, 16, 8, 2, PackedLayout::Yuyv).is_ok());
        assert!(check_packed_destination(&data, 16, 16, 2, PackedLayout::Y211).is_ok());
        assert!(matches!(
            check_packed_destination(&data, 16, 10, 2, PackedLayout::Uyvy),
            Err(YuvError::PackedStrideTooSmall(_))
        ));
        assert!(matches!(
            check_packed_destination(&data, 16, 8, 3, PackedLayout::Yuyv),
            Err(YuvError::DestinationSizeMismatch(_))
        ));
    }

    #[test]
    fn test_geometry_checks() {
        assert!(check_packed_geometry(640, 480).is_ok());
        assert_eq!(
            check_packed_geometry(641, 480),
            Err(YuvError::UnsupportedGeometry {
                width: 641,
                height: 480
            })
        );
        assert_eq!(
            check_packed_geometry(640, 479),
            Err(YuvError::UnsupportedGeometry {
                width: 640,
                height: 479
            })
        );
        assert_eq!(check_packed_geometry(0, 480), Err(YuvError::ZeroBaseSize));
        assert_eq!(check_packed_geometry(640, 0), Err(YuvError::ZeroBaseSize));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(
            check_overflow_v2(usize::MAX, 2),
            Err(YuvError::PointerOverflow)
        );
    }
}
