use thiserror::Error;

/// Invalid input handed to the core (grid, block size or layout tuning).
#[derive(Debug, Error, PartialEq)]
pub enum MosaicError {
    #[error("image has no rows")]
    EmptyGrid,

    #[error("block height must be at least 1")]
    ZeroBlockHeight,

    #[error("ideal chars per pixel must be a positive number, got {0}")]
    InvalidCharsPerPixel(f32),

    #[error("stretch factor must be in [0, 1), got {0}")]
    InvalidStretchFactor(f32),

    #[error("raw pixel buffer has {actual} bytes, expected {expected}")]
    RawSizeMismatch { expected: usize, actual: usize },

    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
