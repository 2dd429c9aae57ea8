//! Seven-segment stroke font for the score overlay
//!
//! Glyph cells are 1 unit wide and 2 units tall (y down). Only digits have
//! strokes; any other character just advances the pen.

use glam::Vec2;

use super::canvas::{Canvas, Color};
use crate::geometry::{segments, transform};

/// Segment endpoints in cell space, in `abcdefg` order
static SEGMENTS: [[Vec2; 2]; 7] = [
    [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)], // a: top
    [Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)], // b: upper right
    [Vec2::new(1.0, 1.0), Vec2::new(1.0, 2.0)], // c: lower right
    [Vec2::new(0.0, 2.0), Vec2::new(1.0, 2.0)], // d: bottom
    [Vec2::new(0.0, 1.0), Vec2::new(0.0, 2.0)], // e: lower left
    [Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0)], // f: upper left
    [Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0)], // g: middle
];

/// Lit segments per digit, bit 0 = a .. bit 6 = g
const DIGITS: [u8; 10] = [
    0b011_1111, // 0
    0b000_0110, // 1
    0b101_1011, // 2
    0b100_1111, // 3
    0b110_0110, // 4
    0b110_1101, // 5
    0b111_1101, // 6
    0b000_0111, // 7
    0b111_1111, // 8
    0b110_1111, // 9
];

/// Horizontal pen advance per character, in cell units
const ADVANCE: f32 = 1.5;

/// Cell-space strokes for one character (empty for non-digits)
pub fn glyph_strokes(ch: char) -> impl Iterator<Item = &'static [Vec2; 2]> {
    let mask = ch.to_digit(10).map_or(0, |d| DIGITS[d as usize]);
    SEGMENTS
        .iter()
        .enumerate()
        .filter(move |(i, _)| mask & (1u8 << *i) != 0)
        .map(|(_, seg)| seg)
}

/// Stroke `text` onto any canvas
pub fn stroke_text<C: Canvas + ?Sized>(canvas: &mut C, text: &str, pos: Vec2, size: f32, color: Color) {
    let scale = size / 2.0;
    let thickness = (size / 14.0).max(1.0);
    let mut pen = pos;

    for ch in text.chars() {
        for stroke in glyph_strokes(ch) {
            let world = transform(stroke, scale, 0.0, pen);
            for (from, to) in segments(&world) {
                canvas.draw_line(from, to, thickness, color);
            }
        }
        pen.x += ADVANCE * scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::canvas::RecordingCanvas;

    #[test]
    fn test_segment_counts_per_digit() {
        let counts: Vec<usize> = "0123456789".chars().map(|c| glyph_strokes(c).count()).collect();
        assert_eq!(counts, vec![6, 2, 5, 5, 4, 5, 6, 3, 7, 6]);
    }

    #[test]
    fn test_non_digits_draw_nothing() {
        assert_eq!(glyph_strokes(' ').count(), 0);
        assert_eq!(glyph_strokes('x').count(), 0);
    }

    #[test]
    fn test_stroke_text_places_glyphs() {
        let mut canvas = RecordingCanvas::default();
        stroke_text(&mut canvas, "1 1", Vec2::new(10.0, 20.0), 20.0, [1.0; 4]);
        // Two "1" glyphs of two strokes each; the space only advances
        assert_eq!(canvas.lines.len(), 4);
        let first = canvas.lines[0];
        assert_eq!(first.0, Vec2::new(20.0, 20.0));
        assert_eq!(first.1, Vec2::new(20.0, 30.0));
        // Second "1" starts two advances (2 * 1.5 * 10px) to the right
        let third = canvas.lines[2];
        assert_eq!(third.0, Vec2::new(50.0, 20.0));
    }
}
