use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, error, info};
use thiserror::Error;

use crate::constants::{FILE_EXT, STANDARD_ICONS, SVG_FALLBACK, SVG_FALLBACK_NAME};
use crate::image::{encode, EncodingError};
use crate::raster::{Canvas, CanvasError};
use crate::scene::{compose, SceneConfig};

#[derive(Error, Debug)]
pub enum IconError {
    #[error(transparent)]
    Canvas(#[from] CanvasError),
    #[error("Failed to encode icon")]
    Encoding(#[from] EncodingError),
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl IconError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// One icon to produce: an edge length and the file it is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTarget {
    pub size: u32,
    pub file_name: String,
}

impl IconTarget {
    pub fn new(size: u32, file_name: impl Into<String>) -> Self {
        Self {
            size,
            file_name: file_name.into(),
        }
    }

    /// `icon-<size>.png`
    pub fn sized(size: u32) -> Self {
        Self::new(size, format!("icon-{size}.{FILE_EXT}"))
    }

    /// Favicons, the touch icon and the manifest icons.
    pub fn standard_set() -> Vec<IconTarget> {
        STANDARD_ICONS
            .iter()
            .map(|&(size, name)| IconTarget::new(size, name))
            .collect()
    }
}

/// Renders the icon at `size` and returns the PNG bytes.
pub fn render_icon(size: u32, config: &SceneConfig) -> Result<Vec<u8>, IconError> {
    let mut canvas = Canvas::new(size)?;
    compose(&mut canvas, config);
    Ok(encode(size, canvas.as_bytes())?)
}

/// Renders one target and writes it into `dir`, returning the file path.
pub fn write_icon(
    dir: &Path,
    target: &IconTarget,
    config: &SceneConfig,
) -> Result<PathBuf, IconError> {
    let png = render_icon(target.size, config)?;
    let path = dir.join(&target.file_name);
    fs::write(&path, &png).map_err(|e| IconError::io(&path, e))?;
    info!("Wrote {} ({}px, {} bytes)", path.display(), target.size, png.len());
    Ok(path)
}

/// Writes the SVG placeholder unless the file already exists.
///
/// Returns the path when a file was written.
pub fn write_svg_fallback(dir: &Path) -> Result<Option<PathBuf>, IconError> {
    let path = dir.join(SVG_FALLBACK_NAME);
    if path.exists() {
        debug!("Keeping existing {}", path.display());
        return Ok(None);
    }
    fs::write(&path, SVG_FALLBACK).map_err(|e| IconError::io(&path, e))?;
    info!("Wrote {}", path.display());
    Ok(Some(path))
}

/// Creates `dir` if needed and writes every target in order.
///
/// The first failure aborts the batch; icons written before it are kept.
pub fn generate_icons(
    dir: &Path,
    targets: &[IconTarget],
    config: &SceneConfig,
) -> Result<Vec<PathBuf>, IconError> {
    fs::create_dir_all(dir).map_err(|e| IconError::io(dir, e))?;

    let mut written = Vec::with_capacity(targets.len());
    for target in targets {
        match write_icon(dir, target, config) {
            Ok(path) => written.push(path),
            Err(e) => {
                error!("Failed to generate {}: {}", target.file_name, e);
                return Err(e);
            }
        }
    }

    Ok(written)
}
