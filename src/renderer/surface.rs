//! Drawing surface capability
//!
//! The draw pass talks to this trait only, so the simulation renders the same
//! way onto a browser canvas, a recording buffer in tests, or nothing at all
//! in headless runs.

/// Horizontal text alignment relative to the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Canvas textAlign keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Minimal 2D drawing surface: clear, flat-color rectangles and text
pub trait Surface {
    /// Clear the given region (the draw pass clears the full viewport)
    fn clear(&mut self, width: f32, height: f32);

    /// Fill an axis-aligned rectangle with a CSS color
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);

    /// Draw a single line of text anchored at (x, y)
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, align: TextAlign, color: &str);
}

/// Surface that ignores every call, for headless simulation runs
#[derive(Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _width: f32, _height: f32) {}

    fn fill_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32, _color: &str) {}

    fn fill_text(
        &mut self,
        _text: &str,
        _x: f32,
        _y: f32,
        _font: &str,
        _align: TextAlign,
        _color: &str,
    ) {
    }
}

/// One recorded draw call
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear {
        width: f32,
        height: f32,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: String,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: String,
        align: TextAlign,
        color: String,
    },
}

/// Surface that records calls in order, for draw-pass tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.calls.push(DrawCall::Clear { width, height });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.calls.push(DrawCall::Rect {
            x,
            y,
            width,
            height,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, align: TextAlign, color: &str) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
            align,
            color: color.to_string(),
        });
    }
}
