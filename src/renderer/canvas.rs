//! Line-drawing canvas abstraction
//!
//! Everything the game draws reduces to line segments plus a clear.

use glam::Vec2;

use super::glyphs;

/// RGBA, 0-1 per channel
pub type Color = [f32; 4];

/// Rendering collaborator for one frame at a time
pub trait Canvas {
    fn begin_frame(&mut self) {}

    fn clear_background(&mut self, color: Color);

    fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color);

    /// Draw `text` with its top-left corner at `pos`, glyphs `size` pixels tall
    ///
    /// Defaults to stroking the built-in vector font through `draw_line`.
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        glyphs::stroke_text(self, text, pos, size, color);
    }

    /// Present the finished frame
    fn end_frame(&mut self) {}
}

/// Canvas that records calls (tests)
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub clears: Vec<Color>,
    pub lines: Vec<(Vec2, Vec2, f32, Color)>,
    pub frames_begun: usize,
    pub frames_ended: usize,
}

#[cfg(test)]
impl Canvas for RecordingCanvas {
    fn begin_frame(&mut self) {
        self.frames_begun += 1;
    }

    fn clear_background(&mut self, color: Color) {
        self.clears.push(color);
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color) {
        self.lines.push((from, to, thickness, color));
    }

    fn end_frame(&mut self) {
        self.frames_ended += 1;
    }
}
