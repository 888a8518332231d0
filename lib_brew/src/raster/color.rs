use serde::{Deserialize, Serialize};

/// An 8-bit RGBA color. Serialized as a `[r, g, b, a]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Linear interpolation of the RGB channels; `t` is clamped to `[0, 1]`.
    /// Returns unrounded channel values so callers can apply further
    /// scaling before quantizing.
    pub fn lerp_rgb(&self, other: &Rgba8, t: f64) -> [f64; 3] {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| a as f64 + (b as f64 - a as f64) * t;
        [
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        ]
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Rgba8> for [u8; 4] {
    fn from(c: Rgba8) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

/// Quantizes a channel value with half-away-from-zero rounding.
pub(crate) fn quantize(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
