use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::raster::shape::SeamCurve;
use crate::raster::Rgba8;

/// Largest layout fraction accepted: twice the icon's edge.
const MAX_FRACTION: f64 = 2.0;
const MAX_SEAM_THICKNESS: f64 = 0.5;
const MAX_SEAM_FREQUENCY: f64 = 16.0;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read scene config")]
    Io(#[from] io::Error),
    #[error("failed to parse scene config")]
    Parse(#[from] serde_json::Error),
    #[error("invalid scene config: {0}")]
    Invalid(String),
}

/// Everything the scene composer needs besides the canvas: colors, layout
/// fractions and background shading. `Default` is the stock coffee-bag icon.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub palette: Palette,
    pub layout: Layout,
    pub background: Background,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background_top: Rgba8,
    pub background_bottom: Rgba8,
    pub bag: Rgba8,
    pub bag_highlight: Rgba8,
    pub bag_body: Rgba8,
    pub bean: Rgba8,
    pub seam: Rgba8,
    pub shadow: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background_top: Rgba8::opaque(61, 40, 32),
            background_bottom: Rgba8::opaque(44, 24, 16),
            bag: Rgba8::opaque(212, 165, 116),
            bag_highlight: Rgba8::opaque(244, 216, 183),
            bag_body: Rgba8::opaque(143, 93, 55),
            bean: Rgba8::opaque(44, 24, 16),
            seam: Rgba8::opaque(212, 165, 116),
            shadow: Rgba8::new(25, 13, 9, 90),
        }
    }
}

/// Vertical gradient darkened by a radial vignette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Background {
    /// Darkening per unit of distance from the center, normalized by the
    /// half-diagonal.
    pub vignette_strength: f64,
    pub vignette_min: f64,
    pub vignette_max: f64,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            vignette_strength: 0.18,
            vignette_min: 0.82,
            vignette_max: 1.0,
        }
    }
}

/// A rectangle in fractions of the icon size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectFraction {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
}

/// A panel inside the bag, positioned relative to the bag's top-left corner
/// and inset equally from both sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelFraction {
    pub inset_x: f64,
    pub offset_y: f64,
    pub height: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipseFraction {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
}

/// Geometry of the icon, every value a fraction of the edge length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub bag: RectFraction,
    /// Drop shadow displacement from the bag, `[dx, dy]`.
    pub shadow_offset: [f64; 2],
    pub highlight: PanelFraction,
    pub body: PanelFraction,
    pub bean: EllipseFraction,
    pub seam_thickness: f64,
    pub seam: SeamCurve,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            bag: RectFraction {
                x: 0.245,
                y: 0.175,
                width: 0.51,
                height: 0.655,
                radius: 0.115,
            },
            shadow_offset: [0.01, 0.018],
            highlight: PanelFraction {
                inset_x: 0.035,
                offset_y: 0.07,
                height: 0.19,
                radius: 0.05,
            },
            body: PanelFraction {
                inset_x: 0.035,
                offset_y: 0.255,
                height: 0.345,
                radius: 0.055,
            },
            bean: EllipseFraction {
                cx: 0.5,
                cy: 0.56,
                rx: 0.092,
                ry: 0.132,
            },
            seam_thickness: 0.008,
            seam: SeamCurve::default(),
        }
    }
}

impl SceneConfig {
    /// Parses a JSON config; missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let bg = &self.background;
        if bg.vignette_min.is_nan() || bg.vignette_max.is_nan() || bg.vignette_min > bg.vignette_max
        {
            return Err(ConfigError::Invalid(format!(
                "vignette_min {} exceeds vignette_max {}",
                bg.vignette_min, bg.vignette_max
            )));
        }

        for (name, value) in [
            ("background.vignette_strength", bg.vignette_strength),
            ("background.vignette_min", bg.vignette_min),
            ("background.vignette_max", bg.vignette_max),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be finite")));
            }
        }

        let l = &self.layout;
        let extents = [
            ("bag.x", l.bag.x, MAX_FRACTION),
            ("bag.y", l.bag.y, MAX_FRACTION),
            ("bag.width", l.bag.width, MAX_FRACTION),
            ("bag.height", l.bag.height, MAX_FRACTION),
            ("bag.radius", l.bag.radius, MAX_FRACTION),
            ("highlight.inset_x", l.highlight.inset_x, MAX_FRACTION),
            ("highlight.offset_y", l.highlight.offset_y, MAX_FRACTION),
            ("highlight.height", l.highlight.height, MAX_FRACTION),
            ("highlight.radius", l.highlight.radius, MAX_FRACTION),
            ("body.inset_x", l.body.inset_x, MAX_FRACTION),
            ("body.offset_y", l.body.offset_y, MAX_FRACTION),
            ("body.height", l.body.height, MAX_FRACTION),
            ("body.radius", l.body.radius, MAX_FRACTION),
            ("bean.cx", l.bean.cx, MAX_FRACTION),
            ("bean.cy", l.bean.cy, MAX_FRACTION),
            ("bean.rx", l.bean.rx, MAX_FRACTION),
            ("bean.ry", l.bean.ry, MAX_FRACTION),
            ("seam_thickness", l.seam_thickness, MAX_SEAM_THICKNESS),
            ("seam.extent", l.seam.extent, MAX_FRACTION),
            ("seam.aspect", l.seam.aspect, MAX_FRACTION),
        ];
        for (name, value, max) in extents {
            if !(0.0..=max).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be within 0..={max}, got {value}"
                )));
            }
        }

        let signed = [
            ("shadow_offset[0]", l.shadow_offset[0], MAX_FRACTION),
            ("shadow_offset[1]", l.shadow_offset[1], MAX_FRACTION),
            ("seam.amplitude", l.seam.amplitude, MAX_FRACTION),
            ("seam.frequency", l.seam.frequency, MAX_SEAM_FREQUENCY),
        ];
        for (name, value, max) in signed {
            if !(-max..=max).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be within -{max}..={max}, got {value}"
                )));
            }
        }

        Ok(())
    }
}
