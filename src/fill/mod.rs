pub mod grid;

use std::collections::BTreeMap;

use self::grid::PixelGrid;
use crate::error::MosaicError;

/// A horizontal run of dark columns inside one block-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillArea {
    /// Block index (not the raw pixel row)
    pub row: usize,
    /// First dark column
    pub start: usize,
    /// Last dark column (inclusive)
    pub end: usize,
}

impl FillArea {
    /// `end - start`, so a single dark column has size 0.
    pub fn size(&self) -> usize {
        self.end - self.start
    }
}

/// Fill areas grouped by size. Iterates sizes ascending; within a size the
/// areas keep detection order (block by block, left to right).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillAreaIndex {
    by_size: BTreeMap<usize, Vec<FillArea>>,
}

impl FillAreaIndex {
    fn insert(&mut self, area: FillArea) {
        self.by_size.entry(area.size()).or_default().push(area);
    }

    /// Areas of exactly `size`, empty when there are none.
    pub fn get(&self, size: usize) -> &[FillArea] {
        self.by_size.get(&size).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `(size, areas)` pairs, smallest size first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[FillArea])> + '_ {
        self.by_size.iter().map(|(&size, areas)| (size, areas.as_slice()))
    }

    /// Every area, in the same order as `iter`.
    pub fn areas(&self) -> impl Iterator<Item = &FillArea> + '_ {
        self.by_size.values().flatten()
    }

    /// Total number of areas across all sizes.
    pub fn len(&self) -> usize {
        self.by_size.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_size.is_empty()
    }
}

/// A column is dark when the mean of its samples is at most 127.5.
/// Compared as `2 * sum <= 255 * n` to stay in integers.
pub fn is_filled<I: IntoIterator<Item = u8>>(samples: I) -> bool {
    let (sum, count) = samples
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), v| (sum + v as u64, count + 1));
    count > 0 && 2 * sum <= 255 * count
}

/// Scan the grid in blocks of `block_height` rows and collect the dark runs.
///
/// The last block may be shorter than `block_height`; it averages only the
/// rows that exist. A run that is still open when the row ends is dropped.
pub fn detect_fill_areas(
    grid: &PixelGrid,
    block_height: usize,
) -> Result<FillAreaIndex, MosaicError> {
    if grid.height() == 0 {
        return Err(MosaicError::EmptyGrid);
    }
    if block_height == 0 {
        return Err(MosaicError::ZeroBlockHeight);
    }

    let blocks = grid.height().div_ceil(block_height);
    let mut index = FillAreaIndex::default();

    for block in 0..blocks {
        let first_row = block * block_height;
        let mut run_start: Option<usize> = None;

        for col in 0..grid.width() {
            let filled = is_filled(grid.column_samples(first_row, block_height, col));
            match (run_start, filled) {
                (None, true) => run_start = Some(col),
                (Some(start), false) => {
                    let area = FillArea {
                        row: block,
                        start,
                        end: col - 1,
                    };
                    tracing::debug!(
                        "Fill area in block {}: columns {}..={} (size {})",
                        block,
                        area.start,
                        area.end,
                        area.size()
                    );
                    index.insert(area);
                    run_start = None;
                }
                _ => {}
            }
        }

        // Runs touching the right edge are not recorded.
        if let Some(start) = run_start {
            tracing::debug!(
                "Dropping open run in block {} starting at column {}",
                block,
                start
            );
        }
    }

    tracing::info!(
        "Detected {} fill areas in {} blocks of {} rows ({}x{} image)",
        index.len(),
        blocks,
        block_height,
        grid.width(),
        grid.height()
    );

    Ok(index)
}
