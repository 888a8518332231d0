#![allow(dead_code)]

use std::io::Read;

use flate2::read::ZlibDecoder;

pub const SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Sizes the generator ships, plus a couple of odd ones.
pub const SIZES: [u32; 7] = [1, 3, 16, 32, 180, 192, 512];

#[derive(Debug)]
pub struct RawChunk {
    pub tag: [u8; 4],
    pub payload: Vec<u8>,
    pub crc: u32,
}

/// Splits a PNG stream into its chunks, panicking on malformed framing.
pub fn read_chunks(png: &[u8]) -> Vec<RawChunk> {
    assert_eq!(&png[..8], &SIGNATURE, "missing PNG signature");

    let mut chunks = Vec::new();
    let mut cursor = 8;
    while cursor < png.len() {
        let len = u32::from_be_bytes(png[cursor..cursor + 4].try_into().unwrap()) as usize;
        let tag: [u8; 4] = png[cursor + 4..cursor + 8].try_into().unwrap();
        let payload = png[cursor + 8..cursor + 8 + len].to_vec();
        let crc_at = cursor + 8 + len;
        let crc = u32::from_be_bytes(png[crc_at..crc_at + 4].try_into().unwrap());
        chunks.push(RawChunk { tag, payload, crc });
        cursor = crc_at + 4;
    }
    assert_eq!(cursor, png.len(), "trailing bytes after last chunk");
    chunks
}

/// CRC-32 of `tag ++ payload` computed by flate2, independent of the crate.
pub fn reference_crc(chunk: &RawChunk) -> u32 {
    let mut crc = flate2::Crc::new();
    crc.update(&chunk.tag);
    crc.update(&chunk.payload);
    crc.sum()
}

/// Inflates an IDAT payload and strips the per-row filter bytes.
pub fn unfilter_idat(payload: &[u8], size: u32) -> Vec<u8> {
    let mut raw = Vec::new();
    ZlibDecoder::new(payload).read_to_end(&mut raw).unwrap();

    let stride = size as usize * 4 + 1;
    assert_eq!(raw.len(), stride * size as usize);

    let mut pixels = Vec::with_capacity(size as usize * size as usize * 4);
    for row in raw.chunks(stride) {
        assert_eq!(row[0], 0, "unexpected filter type");
        pixels.extend_from_slice(&row[1..]);
    }
    pixels
}
