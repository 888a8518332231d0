//! CRC-32 (ISO-HDLC), the checksum PNG uses for every chunk.

/// Reflected form of the generator polynomial 0x04C11DB7.
pub const CRC32_POLYNOMIAL: u32 = 0xEDB8_8320;

/// Running CRC-32 over one or more byte slices.
///
/// Bit-serial: one byte at a time, eight shift/xor steps per byte.
#[derive(Debug, Clone, Copy)]
pub struct Crc32 {
    state: u32,
}

impl Crc32 {
    pub fn new() -> Self {
        Self { state: 0xFFFF_FFFF }
    }

    pub fn update(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state ^= byte as u32;
            for _ in 0..8 {
                let mask = (self.state & 1).wrapping_neg();
                self.state = (self.state >> 1) ^ (CRC32_POLYNOMIAL & mask);
            }
        }
    }

    pub fn finish(&self) -> u32 {
        self.state ^ 0xFFFF_FFFF
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

pub fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = Crc32::new();
    crc.update(bytes);
    crc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc32_check_value() {
        assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn test_crc32_empty() {
        assert_eq!(crc32(b""), 0);
    }

    #[test]
    fn test_crc32_iend_chunk() {
        // Every PNG ends with this CRC.
        assert_eq!(crc32(b"IEND"), 0xAE42_6082);
    }

    #[test]
    fn test_crc32_known_strings() {
        assert_eq!(crc32(b"a"), 0xE8B7_BE43);
        assert_eq!(
            crc32(b"The quick brown fox jumps over the lazy dog"),
            0x414F_A339
        );
    }

    #[test]
    fn test_crc32_incremental_matches_one_shot() {
        let mut crc = Crc32::new();
        crc.update(b"IHDR");
        crc.update(&[0, 0, 0, 16, 0, 0, 0, 16, 8, 6, 0, 0, 0]);

        let mut joined = b"IHDR".to_vec();
        joined.extend_from_slice(&[0, 0, 0, 16, 0, 0, 0, 16, 8, 6, 0, 0, 0]);
        assert_eq!(crc.finish(), crc32(&joined));
    }

    #[test]
    fn test_crc32_matches_flate2() {
        let data: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        let mut reference = flate2::Crc::new();
        reference.update(&data);
        assert_eq!(crc32(&data), reference.sum());
    }
}
