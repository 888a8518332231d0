use std::io::{self, Write};

use flate2::write::ZlibEncoder;
use flate2::Compression;

/// Compression effort used for pixel data.
pub fn level() -> Compression {
    Compression::best()
}

/// Wraps `data` in a zlib stream (RFC 1950), as PNG requires for IDAT.
pub fn zlib_compress(data: &[u8], level: Compression) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), level);
    encoder.write_all(data)?;
    encoder.finish()
}
