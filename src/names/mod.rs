pub mod pool;

use compact_str::CompactString;

pub use self::pool::{char_len, NamePool};

/// Glyph placed between the names of one row.
pub const SEPARATOR: &str = " · ";

impl NamePool {
    /// Fill a row of `width` characters and join the names with [`SEPARATOR`].
    /// Empty when nothing fits.
    pub fn text_for_row(&mut self, width: usize) -> String {
        join_names(&self.fill_row(width))
    }
}

/// Names of one row joined with [`SEPARATOR`].
pub fn join_names(names: &[CompactString]) -> String {
    let mut text = String::new();
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            text.push_str(SEPARATOR);
        }
        text.push_str(name);
    }
    text
}

/// Character budget for an area `pixel_width` pixels wide.
pub fn max_chars_for_width(pixel_width: usize, ideal_chars_per_pixel: f32) -> usize {
    (pixel_width as f32 / ideal_chars_per_pixel).floor() as usize
}
