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
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Four character code identifying a pixel format.
///
/// Codes are compared byte for byte, so `cyuv` and `CYUV` are different formats.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct FourCC([u8; 4]);

impl FourCC {
    /// Planar YUV 4:2:2, the only accepted source format.
    pub const I422: FourCC = FourCC::new(b'I', b'4', b'2', b'2');
    pub const YUY2: FourCC = FourCC::new(b'Y', b'U', b'Y', b'2');
    pub const YUNV: FourCC = FourCC::new(b'Y', b'U', b'N', b'V');
    pub const YVYU: FourCC = FourCC::new(b'Y', b'V', b'Y', b'U');
    pub const UYVY: FourCC = FourCC::new(b'U', b'Y', b'V', b'Y');
    pub const UYNV: FourCC = FourCC::new(b'U', b'Y', b'N', b'V');
    pub const Y422: FourCC = FourCC::new(b'Y', b'4', b'2', b'2');
    pub const IUYV: FourCC = FourCC::new(b'I', b'U', b'Y', b'V');
    pub const CYUV: FourCC = FourCC::new(b'c', b'y', b'u', b'v');
    pub const Y211: FourCC = FourCC::new(b'Y', b'2', b'1', b'1');

    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> FourCC {
        FourCC([a, b, c, d])
    }

    pub const fn from_bytes(bytes: [u8; 4]) -> FourCC {
        FourCC(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Code packed as `a | b << 8 | c << 16 | d << 24`, the usual little-endian fourcc integer.
    pub const fn to_u32(self) -> u32 {
        u32::from_le_bytes(self.0)
    }

    pub const fn from_u32(value: u32) -> FourCC {
        FourCC(value.to_le_bytes())
    }
}

impl Display for FourCC {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for &byte in self.0.iter() {
            if byte.is_ascii_graphic() || byte == b' ' {
                f.write_fmt(format_args!("{}", byte as char))?;
            } else {
                f.write_fmt(format_args!("\\x{:02x}", byte))?;
            }
        }
        Ok(())
    }
}

impl Debug for FourCC {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("FourCC({})", self))
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FourCCParseError {
    InvalidLength(usize),
    NonAscii,
}

impl Display for FourCCParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FourCCParseError::InvalidLength(len) => f.write_fmt(format_args!(
                "FourCC must be exactly 4 bytes long, but it was {}",
                len
            )),
            FourCCParseError::NonAscii => f.write_str("FourCC must consist of ASCII characters"),
        }
    }
}

impl Error for FourCCParseError {}

impl FromStr for FourCC {
    type Err = FourCCParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() {
            return Err(FourCCParseError::NonAscii);
        }
        let bytes: [u8; 4] = s
            .as_bytes()
            .try_into()
            .map_err(|_| FourCCParseError::InvalidLength(s.len()))?;
        Ok(FourCC(bytes))
    }
}

impl From<[u8; 4]> for FourCC {
    fn from(value: [u8; 4]) -> Self {
        FourCC(value)
    }
}
