//! Per-entity draw routines
//!
//! Each entity kind pushes its outline through the geometry transform and
//! hands the resulting segments to a `Canvas`. Nothing here mutates the world.

use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

use super::canvas::{Canvas, Color};
use super::shapes;
use super::vertex::colors;
use crate::consts::*;
use crate::geometry::{segments, transform};
use crate::settings::Settings;
use crate::sim::{Asteroid, Bullet, Ship, World};

/// Colors used for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub ship: Color,
    pub bullet: Color,
    pub asteroid: Color,
    pub score: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: colors::BACKGROUND,
            ship: colors::SHIP,
            bullet: colors::BULLET,
            asteroid: colors::ASTEROID,
            score: colors::SCORE,
        }
    }
}

impl Palette {
    pub fn high_contrast() -> Self {
        Self {
            background: colors::BLACK,
            ship: colors::WHITE,
            bullet: colors::WHITE,
            asteroid: colors::WHITE,
            score: colors::WHITE,
        }
    }
}

/// Presentation parameters shared by all draw routines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub line_thickness: f32,
    /// Uniform scale for ship and asteroid outlines
    pub scale: f32,
    pub palette: Palette,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            line_thickness: LINE_THICKNESS,
            scale: RENDER_SCALE,
            palette: Palette::default(),
        }
    }
}

impl RenderStyle {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            line_thickness: settings.line_thickness,
            scale: settings.render_scale,
            palette: if settings.high_contrast {
                Palette::high_contrast()
            } else {
                Palette::default()
            },
        }
    }
}

fn draw_polyline<C: Canvas + ?Sized>(canvas: &mut C, world_points: &[Vec2], thickness: f32, color: Color) {
    for (from, to) in segments(world_points) {
        canvas.draw_line(from, to, thickness, color);
    }
}

pub fn draw_ship<C: Canvas + ?Sized>(canvas: &mut C, ship: &Ship, style: &RenderStyle) {
    // Outline is authored nose-up; a quarter turn lines "up" with heading 0
    let points = transform(&shapes::SHIP, style.scale, ship.rot + FRAC_PI_2, ship.pos);
    draw_polyline(canvas, &points, style.line_thickness, style.palette.ship);
}

pub fn draw_bullet<C: Canvas + ?Sized>(canvas: &mut C, bullet: &Bullet, style: &RenderStyle) {
    let points = transform(
        &shapes::bullet_streak(bullet.vel),
        BULLET_STREAK_SCALE,
        0.0,
        bullet.pos,
    );
    draw_polyline(canvas, &points, style.line_thickness, style.palette.bullet);
}

pub fn draw_asteroid<C: Canvas + ?Sized>(canvas: &mut C, asteroid: &Asteroid, style: &RenderStyle) {
    let points = transform(&shapes::ASTEROID, style.scale, asteroid.rot, asteroid.pos);
    draw_polyline(canvas, &points, style.line_thickness, style.palette.asteroid);
}

/// Zero-padded score in the top-left corner
pub fn draw_score<C: Canvas + ?Sized>(canvas: &mut C, score: u8, style: &RenderStyle) {
    canvas.draw_text(
        &format!("{:03}", score),
        Vec2::new(20.0, 20.0),
        SCORE_FONT_SIZE,
        style.palette.score,
    );
}

/// Clear and draw the whole world
pub fn draw_world<C: Canvas + ?Sized>(canvas: &mut C, world: &World, style: &RenderStyle) {
    canvas.clear_background(style.palette.background);

    draw_ship(canvas, &world.ship, style);
    for bullet in &world.bullets {
        draw_bullet(canvas, bullet, style);
    }
    for asteroid in &world.asteroids {
        draw_asteroid(canvas, asteroid, style);
    }
    draw_score(canvas, world.score, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::canvas::RecordingCanvas;

    /// "000" in the seven-segment font
    const SCORE_SEGMENTS: usize = 18;

    #[test]
    fn test_empty_world_draws_ship_and_score() {
        let world = World::new(1, 0);
        let style = RenderStyle::default();
        let mut canvas = RecordingCanvas::default();

        draw_world(&mut canvas, &world, &style);

        assert_eq!(canvas.clears, vec![style.palette.background]);
        assert_eq!(canvas.lines.len(), shapes::SHIP.len() - 1 + SCORE_SEGMENTS);
    }

    #[test]
    fn test_entity_segment_counts() {
        let mut world = World::new(1, 0);
        world.bullets.push(Bullet {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::new(10.0, 0.0),
        });
        world.asteroids.push(Asteroid {
            pos: Vec2::new(300.0, 300.0),
            vel: Vec2::ZERO,
            rot: 0.3,
            spin: 0.0,
        });
        let mut canvas = RecordingCanvas::default();
        draw_world(&mut canvas, &world, &RenderStyle::default());

        let expected = (shapes::SHIP.len() - 1) + 1 + (shapes::ASTEROID.len() - 1) + SCORE_SEGMENTS;
        assert_eq!(canvas.lines.len(), expected);
    }

    #[test]
    fn test_ship_nose_points_along_heading() {
        let mut ship = Ship::default();
        ship.rot = 0.0;
        let mut canvas = RecordingCanvas::default();
        let style = RenderStyle::default();
        draw_ship(&mut canvas, &ship, &style);

        // First segment starts at the nose: 2 units ahead along +x
        let nose = canvas.lines[0].0;
        let expected = ship.pos + Vec2::new(2.0 * style.scale, 0.0);
        assert!((nose - expected).length() < 1e-3);
    }

    #[test]
    fn test_bullet_streak_follows_velocity() {
        let bullet = Bullet {
            pos: Vec2::new(50.0, 60.0),
            vel: Vec2::new(0.0, -10.0),
        };
        let mut canvas = RecordingCanvas::default();
        draw_bullet(&mut canvas, &bullet, &RenderStyle::default());
        let (from, to, _, _) = canvas.lines[0];
        assert_eq!(from, bullet.pos);
        assert!((to - (bullet.pos + bullet.vel * BULLET_STREAK_SCALE)).length() < 1e-4);
    }

    #[test]
    fn test_score_is_zero_padded() {
        let mut world = World::new(1, 0);
        world.score = 7;
        let mut canvas = RecordingCanvas::default();
        draw_score(&mut canvas, world.score, &RenderStyle::default());
        // "007" = 6 + 6 + 3 strokes
        assert_eq!(canvas.lines.len(), 15);
    }

    #[test]
    fn test_high_contrast_palette() {
        let settings = Settings {
            high_contrast: true,
            ..Settings::default()
        };
        let style = RenderStyle::from_settings(&settings);
        assert_eq!(style.palette, Palette::high_contrast());
        assert_eq!(style.scale, settings.render_scale);
    }
}
