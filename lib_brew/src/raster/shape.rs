use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::canvas::Canvas;
use super::color::Rgba8;
use super::composite::blend;

/// Parameters of the S-shaped seam drawn across the bean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeamCurve {
    /// Vertical reach as a fraction of the bean's vertical radius.
    pub extent: f64,
    /// Multiplier on `t * PI` inside the sine.
    pub frequency: f64,
    /// Horizontal swing as a fraction of the bean's horizontal radius.
    pub amplitude: f64,
    /// Vertical radius of each stamp relative to the stroke thickness.
    pub aspect: f64,
}

impl Default for SeamCurve {
    fn default() -> Self {
        Self {
            extent: 0.9,
            frequency: 0.85,
            amplitude: 0.17,
            aspect: 0.9,
        }
    }
}

/// A fillable primitive, scan-converted by testing pixel centers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    RoundedRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: f64,
    },
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
    },
    /// A stroke following a sine curve down the vertical axis of an
    /// ellipse, built from one small filled ellipse per pixel row.
    Seam {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        thickness: f64,
        curve: SeamCurve,
    },
}

/// Integer pixel bounds, `x1`/`y1` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl PixelBounds {
    const EMPTY: PixelBounds = PixelBounds {
        x0: 0,
        y0: 0,
        x1: 0,
        y1: 0,
    };

    fn clip(self, size: u32) -> PixelBounds {
        let size = size as i64;
        PixelBounds {
            x0: self.x0.max(0),
            y0: self.y0.max(0),
            x1: self.x1.min(size),
            y1: self.y1.min(size),
        }
    }
}

impl Shape {
    /// Tests whether the point `(px, py)` lies inside the shape. A seam
    /// contains a point when any of its row stamps does.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        match *self {
            Shape::RoundedRect {
                x,
                y,
                width,
                height,
                radius,
            } => rounded_rect_contains(px, py, x, y, width, height, radius),
            Shape::Ellipse { cx, cy, rx, ry } => ellipse_contains(px, py, cx, cy, rx, ry),
            Shape::Seam { .. } => self.seam_stamps().is_some_and(|seam| {
                seam.rows_within(py, py)
                    .any(|row| seam.stamp(row).contains(px, py))
            }),
        }
    }

    /// Pixels whose centers may be covered by the shape.
    pub fn bounds(&self) -> PixelBounds {
        match *self {
            Shape::RoundedRect {
                x,
                y,
                width,
                height,
                ..
            } => PixelBounds {
                x0: x.floor() as i64,
                y0: y.floor() as i64,
                x1: (x + width).ceil() as i64,
                y1: (y + height).ceil() as i64,
            },
            Shape::Ellipse { cx, cy, rx, ry } => ellipse_bounds(cx, cy, rx, ry),
            Shape::Seam { .. } => self
                .seam_stamps()
                .map_or(PixelBounds::EMPTY, |seam| seam.bounds()),
        }
    }

    /// Blends `color` onto every pixel whose center the shape contains.
    ///
    /// A seam blends its row stamps one after another, so pixels where
    /// stamps overlap are blended once per stamp.
    pub fn fill(&self, canvas: &mut Canvas, color: Rgba8) {
        if let Some(seam) = self.seam_stamps() {
            let reach = seam.stamp_ry() + 1.0;
            for row in seam.rows_within(-reach, canvas.size() as f64 + reach) {
                seam.stamp(row).fill(canvas, color);
            }
            return;
        }

        let b = self.bounds().clip(canvas.size());
        for py in b.y0..b.y1 {
            for px in b.x0..b.x1 {
                if self.contains(px as f64 + 0.5, py as f64 + 0.5) {
                    blend(canvas, px, py, color);
                }
            }
        }
    }

    fn seam_stamps(&self) -> Option<SeamStamps> {
        match *self {
            Shape::Seam {
                cx,
                cy,
                rx,
                ry,
                thickness,
                curve,
            } if ry > 0.0 && thickness > 0.0 => Some(SeamStamps {
                cx,
                cy,
                rx,
                ry,
                thickness,
                curve,
                first: (cy - ry * curve.extent).floor() as i64,
                last: (cy + ry * curve.extent).ceil() as i64,
            }),
            _ => None,
        }
    }
}

/// One small ellipse per integer row in `first..=last`, centered on the
/// sine curve.
struct SeamStamps {
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    thickness: f64,
    curve: SeamCurve,
    first: i64,
    last: i64,
}

impl SeamStamps {
    fn stamp_ry(&self) -> f64 {
        self.thickness * self.curve.aspect
    }

    fn stamp(&self, row: i64) -> Shape {
        let row = row as f64;
        let t = (row - self.cy) / self.ry;
        let x = self.cx + (t * PI * self.curve.frequency).sin() * self.rx * self.curve.amplitude;
        Shape::Ellipse {
            cx: x,
            cy: row,
            rx: self.thickness,
            ry: self.stamp_ry(),
        }
    }

    /// Stamp rows whose ellipse can reach a point with `y` in `[lo, hi]`.
    fn rows_within(&self, lo: f64, hi: f64) -> std::ops::RangeInclusive<i64> {
        let reach = self.stamp_ry();
        let from = ((lo - reach).ceil() as i64).max(self.first);
        let to = ((hi + reach).floor() as i64).min(self.last);
        from..=to
    }

    /// Union of every stamp's bounds; `|sin| <= 1` bounds the swing.
    fn bounds(&self) -> PixelBounds {
        let swing = (self.rx * self.curve.amplitude).abs() + self.thickness;
        let reach = self.stamp_ry();
        PixelBounds {
            x0: (self.cx - swing).floor() as i64,
            y0: (self.first as f64 - reach).floor() as i64,
            x1: (self.cx + swing).ceil() as i64,
            y1: (self.last as f64 + reach).ceil() as i64,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn rounded_rect_contains(px: f64, py: f64, x: f64, y: f64, w: f64, h: f64, r: f64) -> bool {
    if px < x || py < y || px >= x + w || py >= y + h {
        return false;
    }

    // Nearest point of the inner rectangle; a band that collapses (radius at
    // least half the side) shrinks to the center line so no holes appear.
    let (left, right) = inner_span(x, w, r);
    let (top, bottom) = inner_span(y, h, r);

    let dx = px - px.clamp(left, right);
    let dy = py - py.clamp(top, bottom);

    dx * dx + dy * dy <= r * r
}

fn inner_span(start: f64, len: f64, r: f64) -> (f64, f64) {
    let (lo, hi) = (start + r, start + len - r);
    if lo <= hi {
        (lo, hi)
    } else {
        let mid = start + len / 2.0;
        (mid, mid)
    }
}

fn ellipse_contains(px: f64, py: f64, cx: f64, cy: f64, rx: f64, ry: f64) -> bool {
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let dx = (px - cx) / rx;
    let dy = (py - cy) / ry;
    dx * dx + dy * dy <= 1.0
}

fn ellipse_bounds(cx: f64, cy: f64, rx: f64, ry: f64) -> PixelBounds {
    PixelBounds {
        x0: (cx - rx).floor() as i64,
        y0: (cy - ry).floor() as i64,
        x1: (cx + rx).ceil() as i64,
        y1: (cy + ry).ceil() as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_filled(canvas: &Canvas) -> usize {
        canvas.as_bytes().chunks(4).filter(|p| p[3] == 255).count()
    }

    #[test]
    fn test_ellipse_containment() {
        let ellipse = Shape::Ellipse {
            cx: 50.0,
            cy: 50.0,
            rx: 10.0,
            ry: 10.0,
        };
        assert!(ellipse.contains(50.0, 50.0));
        assert!(ellipse.contains(60.0, 50.0));
        assert!(!ellipse.contains(61.0, 50.0));
    }

    #[test]
    fn test_degenerate_ellipse_is_empty() {
        let ellipse = Shape::Ellipse {
            cx: 5.0,
            cy: 5.0,
            rx: 0.0,
            ry: 3.0,
        };
        assert!(!ellipse.contains(5.0, 5.0));
    }

    #[test]
    fn test_rounded_rect_corner_zone() {
        let rect = Shape::RoundedRect {
            x: 0.0,
            y: 0.0,
            width: 20.0,
            height: 20.0,
            radius: 5.0,
        };
        // Inside the horizontal band.
        assert!(rect.contains(10.0, 2.0));
        // Inside the vertical band.
        assert!(rect.contains(2.0, 10.0));
        // Corner zone, outside the corner circle around (5, 5).
        assert!(!rect.contains(1.0, 1.0));
        assert!(!rect.contains(0.5, 0.5));
        assert!(!rect.contains(19.0, 19.0));
        // Corner zone, inside the corner circle.
        assert!(rect.contains(2.0, 2.0));
        // Outside the rectangle entirely.
        assert!(!rect.contains(20.0, 10.0));
        assert!(!rect.contains(-0.1, 10.0));
    }

    #[test]
    fn test_rounded_rect_collapsed_bands_have_no_holes() {
        // Radius larger than half of both sides.
        let rect = Shape::RoundedRect {
            x: 0.0,
            y: 0.0,
            width: 4.0,
            height: 4.0,
            radius: 10.0,
        };
        for py in 0..4 {
            for px in 0..4 {
                assert!(rect.contains(px as f64 + 0.5, py as f64 + 0.5));
            }
        }
    }

    #[test]
    fn test_fill_covers_pixel_centers_only() {
        let mut canvas = Canvas::new(8).unwrap();
        let rect = Shape::RoundedRect {
            x: 1.0,
            y: 1.0,
            width: 3.0,
            height: 2.0,
            radius: 0.0,
        };
        rect.fill(&mut canvas, Rgba8::opaque(255, 0, 0));
        assert_eq!(count_filled(&canvas), 6);
        assert_eq!(canvas.pixel(1, 1), Rgba8::opaque(255, 0, 0));
        assert_eq!(canvas.pixel(4, 1).a, 0);
    }

    #[test]
    fn test_fill_clips_to_canvas() {
        let mut canvas = Canvas::new(4).unwrap();
        let ellipse = Shape::Ellipse {
            cx: 0.0,
            cy: 0.0,
            rx: 100.0,
            ry: 100.0,
        };
        ellipse.fill(&mut canvas, Rgba8::opaque(1, 2, 3));
        assert_eq!(count_filled(&canvas), 16);
    }

    #[test]
    fn test_seam_stroke_follows_curve() {
        let seam = Shape::Seam {
            cx: 50.0,
            cy: 50.0,
            rx: 20.0,
            ry: 30.0,
            thickness: 1.5,
            curve: SeamCurve::default(),
        };
        // Centered at the middle row, where the sine offset is zero.
        assert!(seam.contains(50.0, 50.0));
        // Offset to the right below center, to the left above it.
        let swing = (20.0_f64 / 30.0 * PI * 0.85).sin() * 20.0 * 0.17;
        assert!(seam.contains(50.0 + swing, 70.0));
        assert!(seam.contains(50.0 - swing, 30.0));
        // Beyond the vertical extent.
        assert!(!seam.contains(50.0, 50.0 + 30.0 * 0.9 + 3.0));
        // Far from the stroke horizontally.
        assert!(!seam.contains(60.0, 50.0));

        let b = seam.bounds();
        assert!(b.y0 <= 22 && b.y1 >= 78);
        assert!(b.x0 < 50 && b.x1 > 50);
    }

    #[test]
    fn test_seam_without_thickness_is_empty() {
        let seam = Shape::Seam {
            cx: 5.0,
            cy: 5.0,
            rx: 3.0,
            ry: 3.0,
            thickness: 0.0,
            curve: SeamCurve::default(),
        };
        assert_eq!(seam.bounds(), PixelBounds::EMPTY);
        assert!(!seam.contains(5.0, 5.0));
    }

    #[test]
    fn test_translucent_seam_blends_each_stamp() {
        let mut canvas = Canvas::new(20).unwrap();
        for y in 0..20 {
            for x in 0..20 {
                canvas.put(x, y, Rgba8::opaque(0, 0, 0));
            }
        }
        let seam = Shape::Seam {
            cx: 10.0,
            cy: 10.0,
            rx: 5.0,
            ry: 8.0,
            thickness: 2.0,
            curve: SeamCurve::default(),
        };
        seam.fill(&mut canvas, Rgba8::new(255, 0, 0, 128));

        // Rows 10 and 11 both stamp over (10, 10): two blends, not one.
        let p = canvas.pixel(10, 10);
        assert!(p.r >= 191, "expected overlapping stamps, got {}", p.r);
        assert_eq!(p.a, 255);

        // A single blend everywhere the stroke is thin.
        let mut single = Canvas::new(1).unwrap();
        single.put(0, 0, Rgba8::opaque(0, 0, 0));
        blend(&mut single, 0, 0, Rgba8::new(255, 0, 0, 128));
        assert_eq!(single.pixel(0, 0).r, 128);
    }

    #[test]
    fn test_opaque_seam_fill_matches_union() {
        let seam = Shape::Seam {
            cx: 16.0,
            cy: 16.0,
            rx: 6.0,
            ry: 10.0,
            thickness: 1.2,
            curve: SeamCurve::default(),
        };
        let mut canvas = Canvas::new(32).unwrap();
        seam.fill(&mut canvas, Rgba8::opaque(9, 9, 9));

        for y in 0..32u32 {
            for x in 0..32u32 {
                let covered = seam.contains(x as f64 + 0.5, y as f64 + 0.5);
                assert_eq!(canvas.pixel(x, y).a == 255, covered, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_seam_with_huge_radius_stays_on_canvas() {
        let seam = Shape::Seam {
            cx: 8.0,
            cy: 8.0,
            rx: 1e300,
            ry: 1e300,
            thickness: 1.0,
            curve: SeamCurve::default(),
        };
        let mut canvas = Canvas::new(16).unwrap();
        seam.fill(&mut canvas, Rgba8::opaque(1, 2, 3));
        assert!(seam.contains(8.5, 8.5));
        assert!(!seam.contains(12.5, 8.5));
    }
}
