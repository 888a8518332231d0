use thiserror::Error;

#[cfg(test)]
use super::color::Rgba8;
use crate::constants::MAX_DIMENSION;

pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("invalid icon size {size}: expected 1..={max}", max = MAX_DIMENSION)]
    InvalidSize { size: u32 },
}

/// A square RGBA8 pixel buffer, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    size: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Allocates a zeroed `size`x`size` canvas.
    ///
    /// The size is validated before anything is allocated.
    pub fn new(size: u32) -> Result<Self, CanvasError> {
        let len = Self::byte_len(size)?;
        Ok(Self {
            size,
            data: vec![0; len],
        })
    }

    /// Byte length of a canvas with the given edge, or `InvalidSize`.
    pub fn byte_len(size: u32) -> Result<usize, CanvasError> {
        if size == 0 || size > MAX_DIMENSION {
            return Err(CanvasError::InvalidSize { size });
        }
        (size as usize)
            .checked_mul(size as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(CanvasError::InvalidSize { size })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Byte offset of pixel `(x, y)`, or `None` when it lies outside the canvas.
    pub(crate) fn offset(&self, x: i64, y: i64) -> Option<usize> {
        let size = self.size as i64;
        if x < 0 || y < 0 || x >= size || y >= size {
            return None;
        }
        Some((y as usize * self.size as usize + x as usize) * BYTES_PER_PIXEL)
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Overwrites a pixel without blending.
    #[cfg(test)]
    pub(crate) fn put(&mut self, x: u32, y: u32, color: Rgba8) {
        let index = (y as usize * self.size as usize + x as usize) * BYTES_PER_PIXEL;
        self.data[index..index + BYTES_PER_PIXEL].copy_from_slice(&<[u8; 4]>::from(color));
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        let index = (y as usize * self.size as usize + x as usize) * BYTES_PER_PIXEL;
        let p = &self.data[index..index + BYTES_PER_PIXEL];
        Rgba8::new(p[0], p[1], p[2], p[3])
    }
}
