//! World state and entity types
//!
//! Entities are plain data. All mutation happens in `tick`; rendering only
//! reads.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// The player's ship
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub pos: Vec2,
    /// Signed forward speed along the heading (pixels per frame)
    pub vel: f32,
    /// Heading (radians, unbounded)
    pub rot: f32,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0),
            vel: 0.0,
            rot: -std::f32::consts::FRAC_PI_2, // Nose up the screen
        }
    }
}

/// A fired projectile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    /// Fixed at spawn; also the streak drawn by the renderer
    pub vel: Vec2,
}

/// A drifting obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Render-only tumble angle
    pub rot: f32,
    pub spin: f32,
}

/// Complete world state, owned by the frame loop
#[derive(Debug, Clone)]
pub struct World {
    /// Seed the placement RNG was created from
    pub seed: u64,
    pub ship: Ship,
    /// Live bullets in spawn order
    pub bullets: Vec<Bullet>,
    /// Live asteroids in spawn order
    pub asteroids: Vec<Asteroid>,
    /// Sum of every frame delta so far (seconds); f64 so long sessions
    /// keep resolving 1/60 s steps
    pub now: f64,
    /// Most recent frame delta (seconds)
    pub delta: f32,
    /// `now` at the most recent successful shot
    pub last_bullet: Option<f64>,
    pub score: u8,
    /// Population the asteroid spawner maintains
    pub asteroid_target: usize,
    /// Asteroid placement RNG
    pub rng: Pcg32,
}

impl World {
    /// Create a fresh world with the ship centred and nothing else alive
    pub fn new(seed: u64, asteroid_target: usize) -> Self {
        Self {
            seed,
            ship: Ship::default(),
            bullets: Vec::new(),
            asteroids: Vec::new(),
            now: 0.0,
            delta: 0.0,
            last_bullet: None,
            score: 0,
            asteroid_target,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Whether the fire cooldown has elapsed at the current `now`
    pub fn can_fire(&self) -> bool {
        match self.last_bullet {
            Some(last) => self.now - last > f64::from(FIRE_COOLDOWN),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_is_empty_and_centred() {
        let world = World::new(7, 3);
        assert!(world.bullets.is_empty());
        assert!(world.asteroids.is_empty());
        assert_eq!(world.ship.pos, Vec2::new(640.0, 480.0));
        assert_eq!(world.now, 0.0);
        assert_eq!(world.score, 0);
        assert!(world.can_fire());
    }

    #[test]
    fn test_cooldown_is_strict() {
        let mut world = World::new(7, 0);
        world.last_bullet = Some(1.0);
        world.now = 1.0 + f64::from(FIRE_COOLDOWN);
        assert!(!world.can_fire());
        world.now = 1.5;
        assert!(world.can_fire());
    }

    #[test]
    fn test_seed_is_recorded_and_reproducible() {
        use rand::Rng;
        let mut a = World::new(42, 0);
        let mut b = World::new(42, 0);
        assert_eq!(a.seed, 42);
        assert_eq!(a.rng.random::<u64>(), b.rng.random::<u64>());
    }
}
