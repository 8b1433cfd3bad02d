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
use std::fmt::{Display, Formatter};

/// Destination packed layouts reachable from planar 4:2:2.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum PackedLayout {
    /// Y0 U Y1 V, top-down.
    Yuyv = 0,
    /// Y0 V Y1 U, top-down.
    Yvyu = 1,
    /// U Y0 V Y1, top-down.
    Uyvy = 2,
    /// Interleaved IUYV. Recognized, but no kernel exists for it yet.
    Iuyv = 3,
    /// U Y0 V Y1 stored bottom-up.
    Cyuv = 4,
    /// Y0 U Y2 V, 4:1:1 horizontally decimated, stored bottom-up.
    Y211 = 5,
}

impl PackedLayout {
    pub const ALL: [PackedLayout; 6] = [
        PackedLayout::Yuyv,
        PackedLayout::Yvyu,
        PackedLayout::Uyvy,
        PackedLayout::Iuyv,
        PackedLayout::Cyuv,
        PackedLayout::Y211,
    ];

    /// Resolves a destination fourcc, aliases included.
    pub const fn from_fourcc(fourcc: FourCC) -> Option<PackedLayout> {
        match fourcc.as_bytes() {
            b"YUY2" | b"YUNV" => Some(PackedLayout::Yuyv),
            b"YVYU" => Some(PackedLayout::Yvyu),
            b"UYVY" | b"UYNV" | b"Y422" => Some(PackedLayout::Uyvy),
            b"IUYV" => Some(PackedLayout::Iuyv),
            b"cyuv" => Some(PackedLayout::Cyuv),
            b"Y211" => Some(PackedLayout::Y211),
            _ => None,
        }
    }

    /// Canonical fourcc of the layout.
    pub const fn fourcc(self) -> FourCC {
        match self {
            PackedLayout::Yuyv => FourCC::YUY2,
            PackedLayout::Yvyu => FourCC::YVYU,
            PackedLayout::Uyvy => FourCC::UYVY,
            PackedLayout::Iuyv => FourCC::IUYV,
            PackedLayout::Cyuv => FourCC::CYUV,
            PackedLayout::Y211 => FourCC::Y211,
        }
    }

    /// Every fourcc spelling accepted for this layout, canonical first.
    pub const fn aliases(self) -> &'static [FourCC] {
        match self {
            PackedLayout::Yuyv => &[FourCC::YUY2, FourCC::YUNV],
            PackedLayout::Yvyu => &[FourCC::YVYU],
            PackedLayout::Uyvy => &[FourCC::UYVY, FourCC::UYNV, FourCC::Y422],
            PackedLayout::Iuyv => &[FourCC::IUYV],
            PackedLayout::Cyuv => &[FourCC::CYUV],
            PackedLayout::Y211 => &[FourCC::Y211],
        }
    }

    pub const fn scan_direction(self) -> ScanDirection {
        match self {
            PackedLayout::Cyuv | PackedLayout::Y211 => ScanDirection::BottomUp,
            PackedLayout::Yuyv
            | PackedLayout::Yvyu
            | PackedLayout::Uyvy
            | PackedLayout::Iuyv => ScanDirection::TopDown,
        }
    }

    /// Interleave order of the 4-byte unit, `None` when the layout has no kernel.
    pub(crate) const fn byte_order(self) -> Option<PackedByteOrder> {
        match self {
            PackedLayout::Yuyv => Some(PackedByteOrder::Yuyv),
            PackedLayout::Yvyu => Some(PackedByteOrder::Yvyu),
            PackedLayout::Uyvy | PackedLayout::Cyuv => Some(PackedByteOrder::Uyvy),
            PackedLayout::Y211 => Some(PackedByteOrder::Yuyv),
            PackedLayout::Iuyv => None,
        }
    }

    /// Source columns consumed by one macro-block.
    pub const fn macro_block_width(self) -> usize {
        8
    }

    /// Bytes written into each destination row for a frame `width` pixels wide.
    pub const fn row_bytes(self, width: usize) -> usize {
        match self {
            PackedLayout::Y211 => width,
            _ => width * 2,
        }
    }

    pub const fn is_implemented(self) -> bool {
        !matches!(self, PackedLayout::Iuyv)
    }
}

impl Display for PackedLayout {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.fourcc()))
    }
}

impl From<u8> for PackedLayout {
    fn from(value: u8) -> Self {
        match value {
            0 => PackedLayout::Yuyv,
            1 => PackedLayout::Yvyu,
            2 => PackedLayout::Uyvy,
            3 => PackedLayout::Iuyv,
            4 => PackedLayout::Cyuv,
            5 => PackedLayout::Y211,
            _ => {
                unimplemented!("Not supported value {}", value)
            }
        }
    }
}

/// Order in which the row goes into the destination buffer.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum ScanDirection {
    TopDown,
    /// First source row lands in the last destination row.
    BottomUp,
}

impl ScanDirection {
    /// Destination row that receives source row `source_row`.
    #[inline]
    pub const fn destination_row(self, source_row: usize, height: usize) -> usize {
        let (start, step) = self.start_and_step(height);
        (start as isize + step * source_row as isize) as usize
    }

    /// Source row stored in destination row `destination_row`.
    ///
    /// The mapping is an involution, so this is the same walk read backwards.
    #[inline]
    pub const fn source_row(self, destination_row: usize, height: usize) -> usize {
        self.destination_row(destination_row, height)
    }

    /// Row the destination walk starts from and the signed row step.
    pub const fn start_and_step(self, height: usize) -> (usize, isize) {
        match self {
            ScanDirection::TopDown => (0, 1),
            ScanDirection::BottomUp => (height.saturating_sub(1), -1),
        }
    }
}

/// Byte interleave of a two-pixel packed unit.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub(crate) enum PackedByteOrder {
    Yuyv = 0,
    Yvyu = 1,
    Uyvy = 2,
}

impl From<u8> for PackedByteOrder {
    fn from(value: u8) -> Self {
        match value {
            0 => PackedByteOrder::Yuyv,
            1 => PackedByteOrder::Yvyu,
            2 => PackedByteOrder::Uyvy,
            _ => {
                unimplemented!("Not supported value {}", value)
            }
        }
    }
}

impl PackedByteOrder {
    #[inline]
    pub(crate) const fn get_u_position(&self) -> usize {
        match self {
            PackedByteOrder::Yuyv => 1,
            PackedByteOrder::Yvyu => 3,
            PackedByteOrder::Uyvy => 0,
        }
    }

    #[inline]
    pub(crate) const fn get_v_position(&self) -> usize {
        match self {
            PackedByteOrder::Yuyv => 3,
            PackedByteOrder::Yvyu => 1,
            PackedByteOrder::Uyvy => 2,
        }
    }

    #[inline(always)]
    pub(crate) const fn get_first_y_position(&self) -> usize {
        match self {
            PackedByteOrder::Yuyv | PackedByteOrder::Yvyu => 0,
            PackedByteOrder::Uyvy => 1,
        }
    }

    #[inline]
    pub(crate) const fn get_second_y_position(&self) -> usize {
        match self {
            PackedByteOrder::Yuyv | PackedByteOrder::Yvyu => 2,
            PackedByteOrder::Uyvy => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_resolve_to_their_layout() {
        for layout in PackedLayout::ALL {
            assert_eq!(layout.aliases()[0], layout.fourcc());
            for &alias in layout.aliases() {
                assert_eq!(PackedLayout::from_fourcc(alias), Some(layout));
            }
        }
        assert_eq!(PackedLayout::from_fourcc(FourCC::I422), None);
        assert_eq!(PackedLayout::from_fourcc(FourCC::new(b'C', b'Y', b'U', b'V')), None);
    }

    #[test]
    fn test_layout_u8_round_trip() {
        for layout in PackedLayout::ALL {
            assert_eq!(PackedLayout::from(layout as u8), layout);
        }
    }

    #[test]
    fn test_byte_order_positions_are_a_permutation() {
        for order in [
            PackedByteOrder::Yuyv,
            PackedByteOrder::Yvyu,
            PackedByteOrder::Uyvy,
        ] {
            let mut seen = [false; 4];
            seen[order.get_first_y_position()] = true;
            seen[order.get_u_position()] = true;
            seen[order.get_second_y_position()] = true;
            seen[order.get_v_position()] = true;
            assert!(seen.iter().all(|&x| x), "{:?}", order);
        }
    }

    #[test]
    fn test_scan_direction_rows() {
        assert_eq!(ScanDirection::TopDown.destination_row(3, 10), 3);
        assert_eq!(ScanDirection::BottomUp.destination_row(0, 10), 9);
        assert_eq!(ScanDirection::BottomUp.destination_row(9, 10), 0);
        assert_eq!(ScanDirection::BottomUp.source_row(9, 10), 0);
        assert_eq!(ScanDirection::BottomUp.start_and_step(10), (9, -1));
        assert_eq!(ScanDirection::TopDown.start_and_step(10), (0, 1));
    }

    #[test]
    fn test_row_bytes() {
        assert_eq!(PackedLayout::Yuyv.row_bytes(640), 1280);
        assert_eq!(PackedLayout::Cyuv.row_bytes(640), 1280);
        assert_eq!(PackedLayout::Y211.row_bytes(640), 640);
    }
}
