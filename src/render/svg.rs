use std::path::Path;

use anyhow::{Context, Result};
use ::svg::node::element::{Rectangle, Text};
use ::svg::Document;

use super::{Drawable, Drawing};

/// Default factor between image pixels and SVG output size.
pub const DEFAULT_PIXEL_SCALE: f32 = 5.0;

/// Build an SVG document whose view box is the image and whose displayed
/// size is the image scaled by `pixel_scale`.
pub fn to_document(drawing: &Drawing, pixel_scale: f32) -> Document {
    let mut document = Document::new()
        .set("viewBox", format!("0 0 {} {}", drawing.width, drawing.height))
        .set("width", drawing.width as f32 * pixel_scale)
        .set("height", drawing.height as f32 * pixel_scale);

    for element in &drawing.elements {
        document = match element {
            Drawable::Rect {
                x,
                y,
                width,
                height,
                fill,
            } => document.add(
                Rectangle::new()
                    .set("x", *x)
                    .set("y", *y)
                    .set("width", *width)
                    .set("height", *height)
                    .set("fill", fill.to_string()),
            ),
            Drawable::Text {
                content,
                x,
                y,
                fill,
                font_size,
                font_family,
                text_length,
            } => document.add(
                Text::new(content.as_str())
                    .set("x", *x)
                    .set("y", *y)
                    .set("fill", fill.to_string())
                    .set("font-size", *font_size)
                    .set("font-family", font_family.as_str())
                    .set("textLength", *text_length)
                    .set("lengthAdjust", "spacingAndGlyphs"),
            ),
        };
    }

    document
}

/// Serialize the drawing to `path`.
pub fn save(path: &Path, drawing: &Drawing, pixel_scale: f32) -> Result<()> {
    let document = to_document(drawing, pixel_scale);
    ::svg::save(path, &document).with_context(|| format!("writing SVG to {}", path.display()))?;
    tracing::info!(
        "Wrote {} elements to {}",
        drawing.elements.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::colors::Color;

    fn sample() -> Drawing {
        let mut drawing = Drawing::new(20, 10);
        drawing.push(Drawable::Rect {
            x: 1.0,
            y: 2.0,
            width: 5.0,
            height: 2.0,
            fill: Color::BLOCK_HIGHLIGHT,
        });
        drawing.push(Drawable::Text {
            content: "ada · bo".to_string(),
            x: 1.0,
            y: 4.0,
            fill: Color::BLACK,
            font_size: 3.0,
            font_family: "Open Sans".into(),
            text_length: 5.0,
        });
        drawing
    }

    #[test]
    fn document_contains_every_element() {
        let out = to_document(&sample(), DEFAULT_PIXEL_SCALE).to_string();
        assert!(out.contains("viewBox=\"0 0 20 10\""));
        assert!(out.contains("width=\"100\""));
        assert!(out.contains("<rect"));
        assert!(out.contains("#1248ff11"));
        assert!(out.contains("ada · bo"));
        assert!(out.contains("textLength=\"5\""));
        assert_eq!(out.matches("<text").count(), 1);
    }

    #[test]
    fn save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        save(&path, &sample(), 1.0).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<svg"));
        assert!(written.contains("<text"));
    }
}
