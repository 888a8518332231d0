pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Chunk payloads are limited to 2^31 - 1 bytes.
pub const MAX_CHUNK_LEN: u32 = (1 << 31) - 1;

pub type ChunkTag = [u8; 4];

pub const IHDR: ChunkTag = *b"IHDR";
pub const IDAT: ChunkTag = *b"IDAT";
pub const IEND: ChunkTag = *b"IEND";

pub const BIT_DEPTH: u8 = 8;
/// Truecolor with alpha.
pub const COLOR_TYPE_RGBA: u8 = 6;

/// Payload of the IHDR chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
    pub compression_method: u8,
    pub filter_method: u8,
    pub interlace_method: u8,
}

impl ImageHeader {
    pub const SIZE: usize = 13;
    /// Length, tag and CRC around a chunk payload.
    pub const CHUNK_OVERHEAD: usize = 12;

    /// Header for an 8-bit RGBA image, non-interlaced.
    pub fn rgba8(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bit_depth: BIT_DEPTH,
            color_type: COLOR_TYPE_RGBA,
            compression_method: 0,
            filter_method: 0,
            interlace_method: 0,
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.width.to_be_bytes());
        bytes[4..8].copy_from_slice(&self.height.to_be_bytes());
        bytes[8] = self.bit_depth;
        bytes[9] = self.color_type;
        bytes[10] = self.compression_method;
        bytes[11] = self.filter_method;
        bytes[12] = self.interlace_method;
        bytes
    }
}
