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
use crate::yuv_error::{check_chroma422_channel, check_packed_destination, check_y8_channel};
use crate::yuv_support::PackedLayout;
use crate::YuvError;
use std::fmt::Debug;

#[derive(Debug)]
pub enum BufferStoreMut<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStoreMut<'_, T> {
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub fn borrow_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

#[derive(Debug, Clone)]
/// Non-mutable representation of planar YUV 4:2:2 image
pub struct YuvPlanarImage<'a, T>
where
    T: Copy + Debug,
{
    pub y_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub y_stride: u32,
    pub u_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub u_stride: u32,
    pub v_plane: &'a [T],
    /// Stride here always means Elements per row.
    pub v_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<T> YuvPlanarImage<'_, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_y8_channel(self.y_plane, self.y_stride, self.width, self.height)?;
        check_chroma422_channel(self.u_plane, self.u_stride, self.width, self.height)?;
        check_chroma422_channel(self.v_plane, self.v_stride, self.width, self.height)?;
        Ok(())
    }
}

#[derive(Debug)]
/// Mutable representation of planar YUV 4:2:2 image
pub struct YuvPlanarImageMut<'a, T>
where
    T: Copy + Debug,
{
    pub y_plane: BufferStoreMut<'a, T>,
    /// Stride here always means Elements per row.
    pub y_stride: u32,
    pub u_plane: BufferStoreMut<'a, T>,
    /// Stride here always means Elements per row.
    pub u_stride: u32,
    pub v_plane: BufferStoreMut<'a, T>,
    /// Stride here always means Elements per row.
    pub v_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<T> YuvPlanarImageMut<'_, T>
where
    T: Default + Clone + Copy + Debug,
{
    /// Allocates planar 4:2:2 image with tight strides
    pub fn alloc(width: u32, height: u32) -> Self {
        let chroma_width = (width as usize).div_ceil(2);
        let y_target = vec![T::default(); width as usize * height as usize];
        let u_target = vec![T::default(); chroma_width * height as usize];
        let v_target = vec![T::default(); chroma_width * height as usize];
        Self {
            y_plane: BufferStoreMut::Owned(y_target),
            y_stride: width,
            u_plane: BufferStoreMut::Owned(u_target),
            u_stride: chroma_width as u32,
            v_plane: BufferStoreMut::Owned(v_target),
            v_stride: chroma_width as u32,
            width,
            height,
        }
    }

    pub fn to_fixed(&self) -> YuvPlanarImage<'_, T> {
        YuvPlanarImage {
            y_plane: self.y_plane.borrow(),
            y_stride: self.y_stride,
            u_plane: self.u_plane.borrow(),
            u_stride: self.u_stride,
            v_plane: self.v_plane.borrow(),
            v_stride: self.v_stride,
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Debug)]
/// Mutable representation of packed YUV image
pub struct YuvPackedImageMut<'a, T>
where
    T: Copy + Debug,
{
    pub packed: BufferStoreMut<'a, T>,
    /// Stride here always means Elements per row.
    pub packed_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<T> YuvPackedImageMut<'_, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self, layout: PackedLayout) -> Result<(), YuvError> {
        check_packed_destination(
            self.packed.borrow(),
            self.packed_stride,
            self.width,
            self.height,
            layout,
        )
    }

    /// One destination row, without stride padding.
    pub fn row(&self, y: usize, layout: PackedLayout) -> &[T] {
        let start = y * self.packed_stride as usize;
        &self.packed.borrow()[start..start + layout.row_bytes(self.width as usize)]
    }
}

impl<T> YuvPackedImageMut<'_, T>
where
    T: Default + Clone + Copy + Debug,
{
    /// Allocates packed image with tight stride for `layout`
    pub fn alloc(width: u32, height: u32, layout: PackedLayout) -> Self {
        let stride = layout.row_bytes(width as usize);
        Self {
            packed: BufferStoreMut::Owned(vec![T::default(); stride * height as usize]),
            packed_stride: stride as u32,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_planar_constraints() {
        let planar = YuvPlanarImageMut::<u8>::alloc(16, 4);
        assert_eq!(planar.u_stride, 8);
        assert_eq!(planar.v_plane.borrow().len(), 32);
        assert!(planar.to_fixed().check_constraints().is_ok());
    }

    #[test]
    fn test_alloc_packed_constraints() {
        for layout in PackedLayout::ALL {
            let packed = YuvPackedImageMut::<u8>::alloc(16, 4, layout);
            assert_eq!(packed.packed_stride as usize, layout.row_bytes(16));
            assert!(packed.check_constraints(layout).is_ok());
        }
        let packed = YuvPackedImageMut::<u8>::alloc(16, 4, PackedLayout::Y211);
        assert!(packed.check_constraints(PackedLayout::Yuyv).is_err());
    }

    #[test]
    fn test_borrowed_store() {
        let mut storage = vec![7u8; 32];
        {
            let mut packed = YuvPackedImageMut {
                packed: BufferStoreMut::Borrowed(&mut storage),
                packed_stride: 16,
                width: 8,
                height: 2,
            };
            packed.packed.borrow_mut()[16] = 1;
            assert_eq!(packed.row(1, PackedLayout::Yuyv)[0], 1);
        }
        assert_eq!(storage[16], 1);
    }
}
