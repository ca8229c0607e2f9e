use crate::error::MosaicError;

/// Single-channel 8-bit image stored row-major in one contiguous buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    /// `height * width` intensities, 0 = black, 255 = white
    pixels: Vec<u8>,
}

impl PixelGrid {
    /// Wrap an already decoded luma buffer.
    pub fn from_raw(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self, MosaicError> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(MosaicError::RawSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid from nested rows. All rows must have the same length.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, MosaicError> {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut pixels = Vec::with_capacity(width * rows.len());
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(MosaicError::RaggedRows {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            pixels.extend_from_slice(values);
        }
        Ok(Self {
            width,
            height: rows.len(),
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Intensity at (row, col). Panics when out of bounds, like slice indexing.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.pixels[row * self.width + col]
    }

    /// One raw row of the image.
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Intensities of column `col` over rows `first_row .. first_row + count`,
    /// clipped to the grid height.
    pub fn column_samples(
        &self,
        first_row: usize,
        count: usize,
        col: usize,
    ) -> impl Iterator<Item = u8> + '_ {
        let last = (first_row + count).min(self.height);
        (first_row..last).map(move |row| self.get(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_keeps_row_major_order() {
        let grid = PixelGrid::from_rows(&[[1u8, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(1, 0), 4);
        assert_eq!(grid.row(0), &[1, 2, 3]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows: Vec<Vec<u8>> = vec![vec![0, 0], vec![0]];
        let err = PixelGrid::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            MosaicError::RaggedRows {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn raw_buffer_length_is_checked() {
        assert!(PixelGrid::from_raw(2, 2, vec![0; 3]).is_err());
        assert!(PixelGrid::from_raw(2, 2, vec![0; 4]).is_ok());
    }

    #[test]
    fn column_samples_clip_at_bottom() {
        let grid = PixelGrid::from_rows(&[[10u8], [20], [30]]).unwrap();
        let samples: Vec<u8> = grid.column_samples(2, 2, 0).collect();
        assert_eq!(samples, vec![30]);
    }
}
