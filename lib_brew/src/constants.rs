pub const FILE_EXT: &str = "png";

/// Largest edge length a PNG header can carry (2^31 - 1).
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

pub const DEFAULT_OUTPUT_DIR: &str = "icons";

/// Favicons, touch icon and web manifest icons, as `(size, file name)`.
pub const STANDARD_ICONS: [(u32, &str); 5] = [
    (16, "favicon-16x16.png"),
    (32, "favicon-32x32.png"),
    (180, "apple-touch-icon.png"),
    (192, "icon-192.png"),
    (512, "icon-512.png"),
];

pub const SVG_FALLBACK_NAME: &str = "app-icon.svg";
pub const SVG_FALLBACK: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1024 1024"><rect width="1024" height="1024" fill="#2C1810"/></svg>"##;
