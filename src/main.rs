use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use name_mosaic::layout::{compute_layout, LayoutConfig};
use name_mosaic::names::NamePool;
use name_mosaic::render::colors::Color;
use name_mosaic::render::svg::{self, DEFAULT_PIXEL_SCALE};
use name_mosaic::source;

/// Rebuild the dark regions of a grayscale image out of a list of names.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Grayscale PNG whose dark areas are filled with names
    image: PathBuf,

    /// Text file with one name per line
    names: PathBuf,

    /// Output SVG file
    #[arg(short, long, default_value = "mosaic.svg")]
    output: PathBuf,

    /// Pixel rows per scan block
    #[arg(long, default_value_t = 2)]
    block_height: usize,

    /// Pixels one character occupies on average
    #[arg(long, default_value_t = 1.47)]
    chars_per_pixel: f32,

    /// Rows with text shorter than width * (1 - factor) keep their natural width
    #[arg(long, default_value_t = 0.8)]
    stretch_factor: f32,

    /// Seed for shuffling names of equal length (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Also draw every filled block
    #[arg(long)]
    show_blocks: bool,

    /// Fill every block-row instead of every other one
    #[arg(long)]
    keep_even_rows: bool,

    /// Text color
    #[arg(long, default_value = "#000000")]
    text_color: Color,

    /// Output size multiplier
    #[arg(long, default_value_t = DEFAULT_PIXEL_SCALE)]
    pixel_scale: f32,
}

impl Args {
    fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            block_height: self.block_height,
            ideal_chars_per_pixel: self.chars_per_pixel,
            stretch_factor: self.stretch_factor,
            skip_even_rows: !self.keep_even_rows,
            text_color: self.text_color,
            show_blocks: self.show_blocks,
            ..LayoutConfig::default()
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("name_mosaic=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = args.layout_config();
    config.validate()?;

    let grid = source::load_grid(&args.image)?;
    let names = source::read_names(&args.names)?;

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!("Shuffling names with seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pool = NamePool::new(names, &mut rng);

    let layout = compute_layout(&grid, &mut pool, &config)?;
    svg::save(&args.output, &layout.drawing, args.pixel_scale)?;

    // Names that found no place in the image.
    for (len, count) in pool.buckets() {
        tracing::info!("{} unused names of length {}", count, len);
    }
    if pool.is_empty() {
        tracing::info!("All names placed");
    }

    Ok(())
}
