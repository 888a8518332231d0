pub mod checksum;
pub mod compression;
pub mod constants;
pub mod icons;
pub mod image;
pub mod raster;
pub mod scene;

use log::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

pub use crate::icons::{generate_icons, render_icon, IconError, IconTarget};
pub use crate::image::encode;
pub use crate::raster::{Canvas, Rgba8};
pub use crate::scene::{compose, SceneConfig};

/// Installs the global logger for the library and the `icon_brew` binary.
///
/// Records go to `log_file` when given, otherwise to stderr. Must be called
/// at most once per process.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> io::Result<()> {
    let target = match log_file {
        Some(path) => env_logger::Target::Pipe(Box::new(File::create(path)?)),
        None => env_logger::Target::Stderr,
    };

    env_logger::Builder::new()
        .target(target)
        .filter(Some("lib_brew"), level)
        .filter(Some("icon_brew"), level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();

    Ok(())
}
