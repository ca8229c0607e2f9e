pub mod colors;
pub mod svg;

use compact_str::CompactString;

use self::colors::Color;

/// One element of the output drawing, in image pixel coordinates
/// (origin top-left, y grows downward).
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Color,
    },
    Text {
        content: String,
        /// Left edge of the text
        x: f32,
        /// Baseline
        y: f32,
        fill: Color,
        font_size: f32,
        font_family: CompactString,
        /// Width the renderer should stretch or squeeze the text to
        text_length: f32,
    },
}

/// Ordered list of drawables on a canvas the size of the source image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Drawing {
    pub width: usize,
    pub height: usize,
    pub elements: Vec<Drawable>,
}

impl Drawing {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: Drawable) {
        self.elements.push(element);
    }

    /// Text elements only, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.elements.iter().filter_map(|e| match e {
            Drawable::Text { content, .. } => Some(content.as_str()),
            Drawable::Rect { .. } => None,
        })
    }
}
