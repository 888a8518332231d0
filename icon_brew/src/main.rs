use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use lib_brew::constants::DEFAULT_OUTPUT_DIR;
use lib_brew::icons::write_svg_fallback;
use lib_brew::{generate_icons, IconTarget, SceneConfig};
use log::{info, LevelFilter};

/// Render the coffee-bag app icons as PNG files.
#[derive(Parser, Debug)]
#[command(name = "icon-brew", version)]
struct Cli {
    /// Directory the icons are written to; created if missing.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    out_dir: PathBuf,

    /// Edge length in pixels. Repeatable; replaces the standard icon set
    /// with `icon-<N>.png` files.
    #[arg(long = "size", value_parser = clap::value_parser!(u32).range(1..))]
    sizes: Vec<u32>,

    /// JSON scene config overriding colors and layout.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip writing the SVG placeholder.
    #[arg(long)]
    no_svg: bool,

    /// Write log records to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log every pipeline step.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    lib_brew::init_logging(level, cli.log_file.as_deref()).context("open log file")?;

    let config = match &cli.config {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("load scene config '{}'", path.display()))?,
        None => SceneConfig::default(),
    };

    let targets = if cli.sizes.is_empty() {
        IconTarget::standard_set()
    } else {
        cli.sizes.iter().copied().map(IconTarget::sized).collect()
    };

    let written = generate_icons(&cli.out_dir, &targets, &config)
        .with_context(|| format!("generate icons in '{}'", cli.out_dir.display()))?;
    info!("{} icons written", written.len());

    if !cli.no_svg {
        write_svg_fallback(&cli.out_dir).context("write SVG fallback")?;
    }

    println!("Generated icons in {}", cli.out_dir.display());
    Ok(())
}
