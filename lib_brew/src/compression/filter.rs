use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid pixel data length: expected {expected} bytes, got {actual}")]
    InvalidPixelDataLength { expected: usize, actual: usize },
}

/// PNG scanline filter types. Only `None` is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FilterType {
    None = 0,
}

/// Prefixes every row of an RGBA8 image with the filter type byte.
///
/// # Parameters
/// - `rgba`: `width * height * 4` bytes, rows top to bottom.
///
/// # Returns
/// `(width * 4 + 1) * height` bytes, ready for deflate.
///
/// # Errors
/// - Returns `FilterError::InvalidPixelDataLength` if `rgba` does not hold
///   exactly `width * height` pixels
pub fn filter_scanlines(rgba: &[u8], width: u32, height: u32) -> Result<Vec<u8>, FilterError> {
    let stride = width as usize * 4;
    let expected = stride * height as usize;
    if rgba.len() != expected {
        return Err(FilterError::InvalidPixelDataLength {
            expected,
            actual: rgba.len(),
        });
    }

    let mut filtered = Vec::with_capacity((stride + 1) * height as usize);
    for row in rgba.chunks_exact(stride.max(1)) {
        filtered.push(FilterType::None as u8);
        filtered.extend_from_slice(row);
    }

    Ok(filtered)
}
