//! CPU-side line batch
//!
//! Collects one frame of line segments as triangle vertices in playfield
//! pixels, ready for upload by `RenderState`.

use glam::Vec2;

use super::canvas::{Canvas, Color};
use super::shapes::thick_line;
use super::vertex::{Vertex, colors};

#[derive(Debug, Clone)]
pub struct LineBatch {
    vertices: Vec<Vertex>,
    clear_color: Color,
    segments: usize,
}

impl Default for LineBatch {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            clear_color: colors::BACKGROUND,
            segments: 0,
        }
    }
}

impl LineBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Segments drawn since the last clear
    pub fn segment_count(&self) -> usize {
        self.segments
    }
}

impl Canvas for LineBatch {
    fn begin_frame(&mut self) {
        self.vertices.clear();
        self.segments = 0;
    }

    fn clear_background(&mut self, color: Color) {
        self.vertices.clear();
        self.segments = 0;
        self.clear_color = color;
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color) {
        self.vertices.extend_from_slice(&thick_line(from, to, thickness, color));
        self.segments += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_vertices_per_segment() {
        let mut batch = LineBatch::new();
        batch.begin_frame();
        batch.clear_background(colors::BLACK);
        batch.draw_line(Vec2::ZERO, Vec2::X, 1.0, colors::WHITE);
        batch.draw_line(Vec2::X, Vec2::ONE, 1.0, colors::WHITE);
        assert_eq!(batch.segment_count(), 2);
        assert_eq!(batch.vertices().len(), 12);
        assert_eq!(batch.clear_color(), colors::BLACK);
    }

    #[test]
    fn test_clear_discards_previous_frame() {
        let mut batch = LineBatch::new();
        batch.draw_line(Vec2::ZERO, Vec2::X, 1.0, colors::WHITE);
        batch.begin_frame();
        assert!(batch.vertices().is_empty());
        batch.draw_text("42", Vec2::ZERO, 20.0, colors::WHITE);
        // "4" has 4 strokes, "2" has 5
        assert_eq!(batch.segment_count(), 9);
    }
}
