pub mod config;

pub use config::{
    Background, ConfigError, EllipseFraction, Layout, Palette, PanelFraction, RectFraction,
    SceneConfig,
};

use log::debug;

use crate::raster::canvas::BYTES_PER_PIXEL;
use crate::raster::color::quantize;
use crate::raster::{Canvas, Rgba8, Shape};

/// Smallest extent any shape may have, in device pixels.
const MIN_EXTENT: f64 = 1.0;

/// Paints the full icon onto `canvas`, overwriting every pixel.
pub fn compose(canvas: &mut Canvas, config: &SceneConfig) {
    debug!("Composing scene at {}px", canvas.size());

    draw_background(canvas, &config.palette, &config.background);

    let shapes = scene_shapes(canvas.size(), config);
    for (shape, color) in &shapes {
        shape.fill(canvas, *color);
    }
    debug!("Scene composed: background + {} shapes", shapes.len());
}

/// The shapes of the icon in painting order, later entries on top:
/// drop shadow, bag, highlight panel, body panel, bean, seam.
pub fn scene_shapes(size: u32, config: &SceneConfig) -> Vec<(Shape, Rgba8)> {
    let s = size as f64;
    let l = &config.layout;
    let p = &config.palette;
    let extent = |fraction: f64| (fraction * s).max(MIN_EXTENT);

    let bag_x = l.bag.x * s;
    let bag_y = l.bag.y * s;
    let bag_w = extent(l.bag.width);
    let bag_h = extent(l.bag.height);
    let bag_r = extent(l.bag.radius);

    let shadow = Shape::RoundedRect {
        x: bag_x + l.shadow_offset[0] * s,
        y: bag_y + l.shadow_offset[1] * s,
        width: bag_w,
        height: bag_h,
        radius: bag_r,
    };
    let bag = Shape::RoundedRect {
        x: bag_x,
        y: bag_y,
        width: bag_w,
        height: bag_h,
        radius: bag_r,
    };
    let panel = |panel: &PanelFraction| Shape::RoundedRect {
        x: bag_x + panel.inset_x * s,
        y: bag_y + panel.offset_y * s,
        width: (bag_w - 2.0 * panel.inset_x * s).max(MIN_EXTENT),
        height: extent(panel.height),
        radius: extent(panel.radius),
    };

    let bean_cx = l.bean.cx * s;
    let bean_cy = l.bean.cy * s;
    let bean_rx = extent(l.bean.rx);
    let bean_ry = extent(l.bean.ry);

    vec![
        (shadow, p.shadow),
        (bag, p.bag),
        (panel(&l.highlight), p.bag_highlight),
        (panel(&l.body), p.bag_body),
        (
            Shape::Ellipse {
                cx: bean_cx,
                cy: bean_cy,
                rx: bean_rx,
                ry: bean_ry,
            },
            p.bean,
        ),
        (
            Shape::Seam {
                cx: bean_cx,
                cy: bean_cy,
                rx: bean_rx,
                ry: bean_ry,
                thickness: extent(l.seam_thickness),
                curve: l.seam,
            },
            p.seam,
        ),
    ]
}

/// Fills the canvas with the vertical gradient, darkened towards the
/// corners. Every pixel is written opaque.
fn draw_background(canvas: &mut Canvas, palette: &Palette, background: &Background) {
    let size = canvas.size() as usize;
    let half = size as f64 / 2.0;
    let max_dist = (half * half * 2.0).sqrt();
    let last_row = size.saturating_sub(1).max(1) as f64;

    let rows = canvas.data_mut().chunks_exact_mut(size * BYTES_PER_PIXEL);
    for (y, row) in rows.enumerate() {
        let [r, g, b] = palette
            .background_top
            .lerp_rgb(&palette.background_bottom, y as f64 / last_row);
        let dy = y as f64 - half;

        for (x, px) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let dx = x as f64 - half;
            let dist = (dx * dx + dy * dy).sqrt() / max_dist;
            let vignette = (1.0 - dist * background.vignette_strength)
                .max(background.vignette_min)
                .min(background.vignette_max);

            px.copy_from_slice(&[
                quantize(r * vignette),
                quantize(g * vignette),
                quantize(b * vignette),
                255,
            ]);
        }
    }
}
