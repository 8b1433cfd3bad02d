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
use crate::kernel::PackingKernel;
use crate::yuv_error::check_packed_geometry;
use crate::yuv_support::PackedLayout;
use crate::YuvError;

/// Negotiates a conversion from `source` to `destination` for a `width` x `height` frame.
///
/// The only source format is planar 4:2:2 (`I422`). Destination fourccs are matched exactly,
/// aliases such as `YUY2`/`YUNV` or `UYVY`/`UYNV`/`Y422` resolve to the same kernel.
/// Dimensions must be even and non-zero. `IUYV` is recognized but rejected with
/// [`YuvError::NotImplemented`] until a kernel exists for it.
///
/// Call once when formats are negotiated and cache the kernel, not once per frame.
pub fn select(
    source: FourCC,
    destination: FourCC,
    width: u32,
    height: u32,
) -> Result<PackingKernel, YuvError> {
    if let Err(err) = check_packed_geometry(width, height) {
        log::warn!(
            "rejecting {} to {} for {}x{}: {}",
            source,
            destination,
            width,
            height,
            err
        );
        return Err(err);
    }

    let unsupported = YuvError::UnsupportedFormatPair {
        source,
        destination,
    };

    if source != FourCC::I422 {
        log::warn!("{}", unsupported);
        return Err(unsupported);
    }

    let Some(layout) = PackedLayout::from_fourcc(destination) else {
        log::warn!("{}", unsupported);
        return Err(unsupported);
    };

    if !layout.is_implemented() {
        log::error!("{} to {} conversion is not implemented", source, destination);
        return Err(YuvError::NotImplemented(layout));
    }

    log::debug!(
        "{} to {} resolved to {:?} kernel for {}x{}",
        source,
        destination,
        layout,
        width,
        height
    );
    Ok(PackingKernel::for_layout(layout, width, height))
}

/// Destination fourccs `select` accepts from `I422`, aliases included.
pub fn supported_destinations() -> impl Iterator<Item = FourCC> {
    PackedLayout::ALL
        .into_iter()
        .filter(|layout| layout.is_implemented())
        .flat_map(|layout| layout.aliases().iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{YuvPackedImageMut, YuvPlanarImageMut};
    use rand::Rng;

    const ALL_TAGS: [FourCC; 9] = [
        FourCC::YUY2,
        FourCC::YUNV,
        FourCC::YVYU,
        FourCC::UYVY,
        FourCC::UYNV,
        FourCC::Y422,
        FourCC::IUYV,
        FourCC::CYUV,
        FourCC::Y211,
    ];

    #[test]
    fn test_aliases_share_kernel() {
        let yuy2 = select(FourCC::I422, FourCC::YUY2, 640, 480).unwrap();
        let yunv = select(FourCC::I422, FourCC::YUNV, 640, 480).unwrap();
        assert_eq!(yuy2, yunv);
        assert_eq!(yuy2.layout(), PackedLayout::Yuyv);

        let uyvy = select(FourCC::I422, FourCC::UYVY, 640, 480).unwrap();
        let uynv = select(FourCC::I422, FourCC::UYNV, 640, 480).unwrap();
        let y422 = select(FourCC::I422, FourCC::Y422, 640, 480).unwrap();
        assert_eq!(uyvy, uynv);
        assert_eq!(uyvy, y422);
        assert_eq!(uyvy.layout(), PackedLayout::Uyvy);

        assert_eq!(
            select(FourCC::I422, FourCC::CYUV, 640, 480).unwrap().layout(),
            PackedLayout::Cyuv
        );
        assert_eq!(
            select(FourCC::I422, FourCC::Y211, 640, 480).unwrap().layout(),
            PackedLayout::Y211
        );
        assert_eq!(
            select(FourCC::I422, FourCC::YVYU, 640, 480).unwrap().layout(),
            PackedLayout::Yvyu
        );
    }

    #[test]
    fn test_odd_geometry_rejected_for_every_pair() {
        let mut rng = rand::rng();
        for _ in 0..64 {
            let even = rng.random_range(1..2048u32) * 2;
            let odd = rng.random_range(0..2048u32) * 2 + 1;
            for (width, height) in [(odd, even), (even, odd), (odd, odd)] {
                for source in [FourCC::I422, FourCC::YUY2] {
                    for destination in ALL_TAGS {
                        assert_eq!(
                            select(source, destination, width, height),
                            Err(YuvError::UnsupportedGeometry { width, height })
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_geometry_rejected() {
        assert_eq!(
            select(FourCC::I422, FourCC::YUY2, 0, 480),
            Err(YuvError::ZeroBaseSize)
        );
    }

    #[test]
    fn test_unsupported_pairs() {
        assert_eq!(
            select(FourCC::YUY2, FourCC::UYVY, 640, 480),
            Err(YuvError::UnsupportedFormatPair {
                source: FourCC::YUY2,
                destination: FourCC::UYVY
            })
        );
        let unknown = FourCC::new(b'N', b'V', b'1', b'2');
        assert_eq!(
            select(FourCC::I422, unknown, 640, 480),
            Err(YuvError::UnsupportedFormatPair {
                source: FourCC::I422,
                destination: unknown
            })
        );
        let upper_cyuv = FourCC::new(b'C', b'Y', b'U', b'V');
        assert!(matches!(
            select(FourCC::I422, upper_cyuv, 640, 480),
            Err(YuvError::UnsupportedFormatPair { .. })
        ));
    }

    #[test]
    fn test_iuyv_rejected_at_negotiation() {
        assert_eq!(
            select(FourCC::I422, FourCC::IUYV, 640, 480),
            Err(YuvError::NotImplemented(PackedLayout::Iuyv))
        );
    }

    #[test]
    fn test_supported_destinations() {
        let supported: Vec<FourCC> = supported_destinations().collect();
        assert_eq!(supported.len(), 8);
        assert!(!supported.contains(&FourCC::IUYV));
        for fourcc in supported {
            assert!(select(FourCC::I422, fourcc, 64, 64).is_ok(), "{}", fourcc);
        }
    }

    #[test]
    fn test_row_mapping_for_every_kernel() {
        let width = 24u32;
        let height = 6u32;
        let mut planar = YuvPlanarImageMut::<u8>::alloc(width, height);
        // Every source row carries its own index so rows are identifiable in any layout.
        for (plane, row_width) in [
            (&mut planar.y_plane, width as usize),
            (&mut planar.u_plane, width as usize / 2),
            (&mut planar.v_plane, width as usize / 2),
        ] {
            for (y, row) in plane.borrow_mut().chunks_exact_mut(row_width).enumerate() {
                row.fill(y as u8);
            }
        }

        for fourcc in supported_destinations() {
            let kernel = select(FourCC::I422, fourcc, width, height).unwrap();
            let mut packed: YuvPackedImageMut<u8> = kernel.alloc_destination();
            kernel.convert(&planar.to_fixed(), &mut packed).unwrap();
            for dst_y in 0..height as usize {
                let row = packed.row(dst_y, kernel.layout());
                assert_eq!(row.len(), kernel.row_bytes());
                let expected = kernel.scan_direction().source_row(dst_y, height as usize);
                assert!(
                    row.iter().all(|&x| x as usize == expected),
                    "{} destination row {} must hold source row {}",
                    fourcc,
                    dst_y,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_kernel_shared_between_threads() {
        let kernel = select(FourCC::I422, FourCC::YUY2, 64, 8).unwrap();
        let mut planar = YuvPlanarImageMut::<u8>::alloc(64, 8);
        planar.y_plane.borrow_mut().fill(16);
        planar.u_plane.borrow_mut().fill(128);
        planar.v_plane.borrow_mut().fill(240);
        let fixed = planar.to_fixed();

        let mut outputs: Vec<YuvPackedImageMut<u8>> =
            (0..4).map(|_| kernel.alloc_destination()).collect();
        std::thread::scope(|scope| {
            for packed in outputs.iter_mut() {
                let fixed = &fixed;
                scope.spawn(move || kernel.convert(fixed, packed).unwrap());
            }
        });
        for packed in outputs.iter() {
            for unit in packed.packed.borrow().chunks_exact(4) {
                assert_eq!(unit, &[16, 128, 16, 240]);
            }
        }
    }
}
