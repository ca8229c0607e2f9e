use compact_str::CompactString;

use crate::error::MosaicError;
use crate::fill::detect_fill_areas;
use crate::fill::grid::PixelGrid;
use crate::names::{char_len, join_names, max_chars_for_width, NamePool};
use crate::render::colors::Color;
use crate::render::{Drawable, Drawing};

/// Configuration for turning fill areas into text.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Raw pixel rows per scan block
    pub block_height: usize,
    /// Pixels one character occupies on average
    pub ideal_chars_per_pixel: f32,
    /// Text shorter than `width * (1 - stretch_factor)` is not stretched to
    /// the full area width
    pub stretch_factor: f32,
    /// Leave every even block-row empty so lines don't touch
    pub skip_even_rows: bool,
    pub font_size: f32,
    pub font_family: CompactString,
    pub text_color: Color,
    /// Also draw the rectangle of each visited area
    pub show_blocks: bool,
    pub block_color: Color,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            block_height: 2,
            ideal_chars_per_pixel: 1.47,
            stretch_factor: 0.8,
            skip_even_rows: true,
            font_size: 3.0,
            font_family: CompactString::new("Open Sans"),
            text_color: Color::BLACK,
            show_blocks: false,
            block_color: Color::BLOCK_HIGHLIGHT,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), MosaicError> {
        if self.block_height == 0 {
            return Err(MosaicError::ZeroBlockHeight);
        }
        if !(self.ideal_chars_per_pixel.is_finite() && self.ideal_chars_per_pixel > 0.0) {
            return Err(MosaicError::InvalidCharsPerPixel(self.ideal_chars_per_pixel));
        }
        if !(0.0..1.0).contains(&self.stretch_factor) {
            return Err(MosaicError::InvalidStretchFactor(self.stretch_factor));
        }
        Ok(())
    }
}

/// Counters gathered while laying out one image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutStats {
    pub areas: usize,
    pub skipped_rows: usize,
    pub filled_areas: usize,
    pub names_placed: usize,
}

#[derive(Debug)]
pub struct Layout {
    pub drawing: Drawing,
    pub stats: LayoutStats,
}

/// Width the text is rendered at. Short text keeps roughly its natural
/// width instead of being spread over the whole area.
pub fn display_width(text_chars: usize, area_width: usize, config: &LayoutConfig) -> f32 {
    let area_width = area_width as f32;
    if (text_chars as f32) < area_width * (1.0 - config.stretch_factor) {
        text_chars as f32 * config.ideal_chars_per_pixel
    } else {
        area_width
    }
}

/// Detect the fill areas of `grid` and fill them with names from `pool`,
/// smallest areas first.
pub fn compute_layout(
    grid: &PixelGrid,
    pool: &mut NamePool,
    config: &LayoutConfig,
) -> Result<Layout, MosaicError> {
    config.validate()?;
    let index = detect_fill_areas(grid, config.block_height)?;

    let mut drawing = Drawing::new(grid.width(), grid.height());
    let mut stats = LayoutStats {
        areas: index.len(),
        ..Default::default()
    };
    let block_h = config.block_height as f32;

    for (size, areas) in index.iter() {
        for area in areas {
            if config.skip_even_rows && area.row % 2 == 0 {
                stats.skipped_rows += 1;
                continue;
            }

            let x = area.start as f32;
            let y = area.row as f32 * block_h;

            if config.show_blocks {
                drawing.push(Drawable::Rect {
                    x,
                    y,
                    width: size as f32,
                    height: block_h,
                    fill: config.block_color,
                });
            }

            let budget = max_chars_for_width(size, config.ideal_chars_per_pixel);
            let names = pool.fill_row(budget);
            if names.is_empty() {
                tracing::debug!(
                    "No names fit area at block {} ({} px, {} chars)",
                    area.row,
                    size,
                    budget
                );
                continue;
            }

            stats.filled_areas += 1;
            stats.names_placed += names.len();
            let content = join_names(&names);
            let text_length = display_width(char_len(&content), size, config);

            drawing.push(Drawable::Text {
                content,
                x,
                y: y + block_h,
                fill: config.text_color,
                font_size: config.font_size,
                font_family: config.font_family.clone(),
                text_length,
            });
        }
    }

    tracing::info!(
        "Layout: {} areas, {} skipped, {} filled with {} names, {} names left",
        stats.areas,
        stats.skipped_rows,
        stats.filled_areas,
        stats.names_placed,
        pool.len()
    );

    Ok(Layout { drawing, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const D: u8 = 0;
    const L: u8 = 255;

    fn pool(names: &[&str]) -> NamePool {
        let mut rng = StdRng::seed_from_u64(42);
        NamePool::new(names.iter().copied(), &mut rng)
    }

    fn config() -> LayoutConfig {
        LayoutConfig {
            block_height: 1,
            ideal_chars_per_pixel: 1.0,
            skip_even_rows: false,
            ..Default::default()
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let bad = LayoutConfig {
            ideal_chars_per_pixel: 0.0,
            ..Default::default()
        };
        assert_eq!(bad.validate(), Err(MosaicError::InvalidCharsPerPixel(0.0)));

        let bad = LayoutConfig {
            stretch_factor: 1.0,
            ..Default::default()
        };
        assert_eq!(bad.validate(), Err(MosaicError::InvalidStretchFactor(1.0)));

        let bad = LayoutConfig {
            block_height: 0,
            ..Default::default()
        };
        assert_eq!(bad.validate(), Err(MosaicError::ZeroBlockHeight));
    }

    #[test]
    fn short_text_is_not_stretched() {
        let cfg = LayoutConfig::default();
        // 100 px area, threshold 100 * 0.2 = 20 chars.
        assert_eq!(display_width(10, 100, &cfg), 10.0 * 1.47);
        assert_eq!(display_width(20, 100, &cfg), 100.0);
    }

    #[test]
    fn smaller_areas_are_filled_first() {
        // Row 0: area of size 5 (cols 1..=6); row 1: area of size 2 (cols 1..=3).
        let grid = PixelGrid::from_rows(&[
            [L, D, D, D, D, D, D, L],
            [L, D, D, D, L, L, L, L],
        ])
        .unwrap();
        let mut names = pool(&["aa", "bbbbb"]);
        let layout = compute_layout(&grid, &mut names, &config()).unwrap();
        let texts: Vec<&str> = layout.drawing.texts().collect();
        // Size 2 first takes "aa" (exact fit); size 5 then takes "bbbbb".
        assert_eq!(texts, vec!["aa", "bbbbb"]);
        assert_eq!(layout.stats.names_placed, 2);
        assert!(names.is_empty());
    }

    #[test]
    fn even_block_rows_are_skipped() {
        let grid = PixelGrid::from_rows(&[[L, D, D, D, L], [L, D, D, D, L]]).unwrap();
        let mut names = pool(&["ab", "cd"]);
        let cfg = LayoutConfig {
            skip_even_rows: true,
            ..config()
        };
        let layout = compute_layout(&grid, &mut names, &cfg).unwrap();
        assert_eq!(layout.stats.skipped_rows, 1);
        assert_eq!(layout.stats.filled_areas, 1);
        match &layout.drawing.elements[..] {
            [Drawable::Text { y, x, .. }] => {
                assert_eq!(*x, 1.0);
                // block 1 starts at y = 1, baseline at its bottom
                assert_eq!(*y, 2.0);
            }
            other => panic!("unexpected elements {other:?}"),
        }
    }

    #[test]
    fn show_blocks_adds_rectangles() {
        let grid = PixelGrid::from_rows(&[[L, D, D, L]]).unwrap();
        let mut names = pool(&[]);
        let cfg = LayoutConfig {
            show_blocks: true,
            ..config()
        };
        let layout = compute_layout(&grid, &mut names, &cfg).unwrap();
        assert_eq!(
            layout.drawing.elements,
            vec![Drawable::Rect {
                x: 1.0,
                y: 0.0,
                width: 1.0,
                height: 1.0,
                fill: Color::BLOCK_HIGHLIGHT,
            }]
        );
        assert_eq!(layout.stats.filled_areas, 0);
    }
}
