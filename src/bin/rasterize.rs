//! rasterize: run a drawing script and write the result as a PNG.
//!
//! Run: `rasterize shapes.txt -o shapes.png`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use raster_kernel::config::Config;
use raster_kernel::engine::GraphicsEngine;
use raster_kernel::output::PngEncoder;
use raster_kernel::script;

/// Rasterize lines, circles and curves from a command script into a PNG.
#[derive(Parser, Debug)]
#[command(name = "rasterize")]
#[command(version)]
#[command(about = "Rasterize a drawing script into a PNG image", long_about = None)]
struct Cli {
    /// Command script to run
    script: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = "out.png")]
    output: PathBuf,

    /// Canvas width in pixels (overrides config)
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels (overrides config)
    #[arg(long)]
    height: Option<u32>,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }

    let mut engine = GraphicsEngine::from_config(&config).context("creating canvas")?;
    info!(
        "canvas {}x{}, running {}",
        config.canvas.width,
        config.canvas.height,
        cli.script.display()
    );

    let count = script::run_file(&cli.script, &mut engine)
        .with_context(|| format!("running script {}", cli.script.display()))?;

    PngEncoder::write_to_file(engine.grid(), &cli.output, config.background())
        .with_context(|| format!("writing {}", cli.output.display()))?;
    info!("{count} commands, wrote {}", cli.output.display());

    Ok(())
}
