use log::{debug, error, info};
use thiserror::Error;

use super::format::{ChunkTag, ImageHeader, IDAT, IEND, IHDR, MAX_CHUNK_LEN, PNG_SIGNATURE};
use crate::checksum::Crc32;
use crate::compression::{compress, CompressionError};
use crate::constants::MAX_DIMENSION;

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("Invalid image size {0}")]
    InvalidSize(u32),
    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },
    #[error("Chunk {tag} payload of {len} bytes exceeds the PNG chunk limit")]
    ChunkTooLarge { tag: String, len: usize },
    #[error("Failed to compress image data")]
    CompressionFailed(#[from] CompressionError),
}

/// Encodes a square RGBA8 image as a PNG byte stream.
///
/// The stream is the signature followed by exactly three chunks: IHDR, a
/// single IDAT and IEND.
pub fn encode(size: u32, rgba_data: &[u8]) -> Result<Vec<u8>, EncodingError> {
    info!("Starting encoding");

    if size == 0 || size > MAX_DIMENSION {
        error!("Refusing to encode a {}px image", size);
        return Err(EncodingError::InvalidSize(size));
    }
    let expected = (size as usize)
        .checked_mul(size as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(EncodingError::InvalidSize(size))?;
    if rgba_data.len() != expected {
        error!(
            "Pixel buffer length {} does not match {}x{} RGBA",
            rgba_data.len(),
            size,
            size
        );
        return Err(EncodingError::BufferSizeMismatch {
            expected,
            actual: rgba_data.len(),
        });
    }

    let mut encoded_data: Vec<u8> = Vec::new();

    // Step 1: Signature and header
    encoded_data.extend_from_slice(&PNG_SIGNATURE);
    let header = ImageHeader::rgba8(size, size);
    write_chunk(&mut encoded_data, IHDR, &header.to_bytes())?;
    debug!("Header written: {}x{} RGBA8", header.width, header.height);

    // Step 2: Filter and compress the pixel data
    let compressed = compress(rgba_data, size, size)?;
    write_chunk(&mut encoded_data, IDAT, &compressed)?;
    debug!("Pixel data written: {} bytes", compressed.len());

    // Step 3: Trailer
    write_chunk(&mut encoded_data, IEND, &[])?;

    info!(
        "Encoding process completed successfully: {} bytes",
        encoded_data.len()
    );
    Ok(encoded_data)
}

/// Appends `length | tag | payload | crc(tag ++ payload)` to `out`.
pub fn write_chunk(out: &mut Vec<u8>, tag: ChunkTag, payload: &[u8]) -> Result<(), EncodingError> {
    let len = u32::try_from(payload.len())
        .ok()
        .filter(|&len| len <= MAX_CHUNK_LEN)
        .ok_or_else(|| EncodingError::ChunkTooLarge {
            tag: String::from_utf8_lossy(&tag).into_owned(),
            len: payload.len(),
        })?;

    let mut crc = Crc32::new();
    crc.update(&tag);
    crc.update(payload);

    out.reserve(payload.len() + ImageHeader::CHUNK_OVERHEAD);
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(&tag);
    out.extend_from_slice(payload);
    out.extend_from_slice(&crc.finish().to_be_bytes());

    Ok(())
}
