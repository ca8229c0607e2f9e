/// Diagnostic tool to inspect image → fill area detection without rendering
use std::path::PathBuf;

use clap::Parser;
use name_mosaic::fill::detect_fill_areas;
use name_mosaic::source;

#[derive(Debug, Parser)]
struct Args {
    /// Grayscale PNG to scan
    image: PathBuf,

    /// Pixel rows per scan block
    #[arg(long, default_value_t = 2)]
    block_height: usize,

    /// How many areas to list per size
    #[arg(long, default_value_t = 3)]
    samples: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("name_mosaic=debug".parse()?),
        )
        .init();

    let args = Args::parse();

    println!("=== DIAGNOSTIC: Image → Fill Areas ===");
    println!("Image: {}", args.image.display());

    let grid = source::load_grid(&args.image)?;
    println!("\n[1] Decoded: {}x{} pixels", grid.width(), grid.height());

    let dark = (0..grid.height())
        .flat_map(|r| grid.row(r).iter())
        .filter(|&&v| v <= 127)
        .count();
    let total = (grid.width() * grid.height()).max(1);
    println!(
        "    Dark pixels: {} ({:.1}%)",
        dark,
        dark as f64 / total as f64 * 100.0
    );

    let index = detect_fill_areas(&grid, args.block_height)?;
    let blocks = grid.height().div_ceil(args.block_height);
    println!(
        "\n[2] {} fill areas in {} blocks of {} rows",
        index.len(),
        blocks,
        args.block_height
    );

    println!("\n[3] Areas by size:");
    for (size, areas) in index.iter() {
        println!("    size {:>4}: {} areas", size, areas.len());
        for area in areas.iter().take(args.samples) {
            println!(
                "        block {:>4}  columns {:>4}..={:<4}",
                area.row, area.start, area.end
            );
        }
    }

    let covered: usize = index.areas().map(|a| a.size() + 1).sum();
    println!("\n[4] Columns covered across all blocks: {}", covered);

    Ok(())
}
