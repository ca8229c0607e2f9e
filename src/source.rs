use std::path::Path;

use anyhow::{Context, Result};
use compact_str::CompactString;

use crate::fill::grid::PixelGrid;

/// Decode an image file into 8-bit luma. Color input is converted here so
/// the detector only ever sees one channel.
pub fn load_grid(path: &Path) -> Result<PixelGrid> {
    let image = image::open(path)
        .with_context(|| format!("decoding image {}", path.display()))?
        .to_luma8();
    let (width, height) = image.dimensions();
    tracing::info!("Loaded {}x{} image from {}", width, height, path.display());
    let grid = PixelGrid::from_raw(width as usize, height as usize, image.into_raw())?;
    Ok(grid)
}

/// One name per line; blank lines and trailing `\r` are dropped.
pub fn parse_names(text: &str) -> Vec<CompactString> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(CompactString::from)
        .collect()
}

/// Read a newline-delimited name list.
pub fn read_names(path: &Path) -> Result<Vec<CompactString>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading names from {}", path.display()))?;
    let names = parse_names(&text);
    if names.is_empty() {
        tracing::warn!("{} contains no names", path.display());
    } else {
        tracing::info!("Read {} names from {}", names.len(), path.display());
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_skips_blank_lines_and_carriage_returns() {
        let names = parse_names("Ada Lovelace\r\n\nAlan Turing\n  \nGrace Hopper");
        assert_eq!(names, vec!["Ada Lovelace", "Alan Turing", "Grace Hopper"]);
    }

    #[test]
    fn read_names_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ann").unwrap();
        writeln!(file, "bob").unwrap();
        let names = read_names(file.path()).unwrap();
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn missing_names_file_reports_path() {
        let err = read_names(Path::new("/nonexistent/names.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/names.txt"));
    }

    #[test]
    fn grayscale_png_round_trips_into_grid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        let img = image::GrayImage::from_raw(3, 2, vec![0, 128, 255, 10, 20, 30]).unwrap();
        img.save(&path).unwrap();

        let grid = load_grid(&path).unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.row(0), &[0, 128, 255]);
        assert_eq!(grid.get(1, 2), 30);
    }
}
