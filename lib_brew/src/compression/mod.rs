pub mod deflate;
pub mod filter;

use std::io;

use filter::FilterError;
use log::{debug, info};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompressionError {
    #[error("Scanline filtering failed")]
    FilterFailed(#[from] FilterError),
    #[error("Deflate compression failed")]
    DeflateFailed(#[from] io::Error),
}

/// Turns RGBA8 pixels into an IDAT payload: filtered scanlines, zlib-wrapped.
pub fn compress(rgba: &[u8], width: u32, height: u32) -> Result<Vec<u8>, CompressionError> {
    info!("Starting compression");
    debug!("Input data length: {}", rgba.len());

    // Step 1: Scanline filtering
    let filtered = filter::filter_scanlines(rgba, width, height)?;
    debug!("Scanlines filtered: {} rows, {} bytes", height, filtered.len());

    // Step 2: Deflate
    let compressed = deflate::zlib_compress(&filtered, deflate::level())?;
    debug!("Deflate compression: {} bytes", compressed.len());

    info!(
        "Compression completed successfully: {:.1}%",
        ((filtered.len() as f32 - compressed.len() as f32) / filtered.len() as f32) * 100.0
    );

    Ok(compressed)
}
