use super::canvas::Canvas;
use super::color::{quantize, Rgba8};

/// Source-over blends `color` onto the pixel at `(x, y)`.
///
/// Coordinates outside the canvas are ignored, as are fully transparent
/// colors. The destination alpha is always left at 255: renders are opaque.
/// Channels are quantized with half-away-from-zero rounding.
pub fn blend(canvas: &mut Canvas, x: i64, y: i64, color: Rgba8) {
    if color.is_transparent() {
        return;
    }
    let Some(index) = canvas.offset(x, y) else {
        return;
    };

    let src_a = color.a as f64 / 255.0;
    let inv_a = 1.0 - src_a;
    let px = &mut canvas.data_mut()[index..index + 4];

    px[0] = quantize(color.r as f64 * src_a + px[0] as f64 * inv_a);
    px[1] = quantize(color.g as f64 * src_a + px[1] as f64 * inv_a);
    px[2] = quantize(color.b as f64 * src_a + px[2] as f64 * inv_a);
    px[3] = 255;
}
