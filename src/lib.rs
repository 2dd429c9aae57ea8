//! Vectoroids - A vector-line arcade shooter
//!
//! Core modules:
//! - `geometry`: Local-to-world shape transform and segment iteration
//! - `sim`: Frame-stepped simulation (ship, bullets, asteroids)
//! - `renderer`: Line canvas abstraction, shapes, WebGPU pipeline
//! - `platform`: Time/input/close-request abstraction
//! - `game`: Frame loop tying platform, simulation and renderer together
//! - `settings`: Player-tunable configuration

pub mod error;
pub mod game;
pub mod geometry;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use game::Game;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 1280.0;
    pub const PLAYFIELD_HEIGHT: f32 = 960.0;

    /// Target frame rate cap enforced by the platform
    pub const TARGET_FPS: u32 = 60;

    /// Ship forward/backward speed (pixels per frame)
    pub const SHIP_MOVE_SPEED: f32 = 4.0;
    /// Ship heading change per frame while a turn key is held (radians)
    pub const SHIP_TURN_SPEED: f32 = 0.08;

    /// Bullet speed (pixels per frame)
    pub const BULLET_SPEED: f32 = 10.0;
    /// Distance ahead of the ship where bullets appear
    pub const BULLET_STANDOFF: f32 = 24.0;
    /// Minimum seconds between two shots
    pub const FIRE_COOLDOWN: f32 = 0.3;
    /// Bullet streak length as a fraction of one frame of travel
    pub const BULLET_STREAK_SCALE: f32 = 0.8;

    /// Uniform scale applied to ship and asteroid outlines
    pub const RENDER_SCALE: f32 = 10.0;
    /// Line thickness (pixels)
    pub const LINE_THICKNESS: f32 = 2.0;
    /// Score overlay glyph height (pixels)
    pub const SCORE_FONT_SIZE: f32 = 28.0;

    /// Asteroids kept alive at once
    pub const ASTEROID_TARGET_POPULATION: usize = 6;
    /// How far outside the playfield asteroids spawn and survive (pixels)
    pub const ASTEROID_MARGIN: f32 = 60.0;
    /// Asteroid drift speed range (pixels per frame)
    pub const ASTEROID_MIN_SPEED: f32 = 0.5;
    pub const ASTEROID_MAX_SPEED: f32 = 2.0;
    /// Asteroid tumble range (radians per frame)
    pub const ASTEROID_MAX_SPIN: f32 = 0.03;
}

/// Unit vector along a heading angle
#[inline]
pub fn heading(rot: f32) -> Vec2 {
    Vec2::new(rot.cos(), rot.sin())
}

/// Normalized angle to [-π, π)
///
/// Simulation headings accumulate unbounded; use this only for display.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    (angle + PI).rem_euclid(TAU) - PI
}

/// True if `pos` lies inside the playfield rectangle (edges inclusive)
#[inline]
pub fn in_playfield(pos: Vec2) -> bool {
    use consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
    (0.0..=PLAYFIELD_WIDTH).contains(&pos.x) && (0.0..=PLAYFIELD_HEIGHT).contains(&pos.y)
}
