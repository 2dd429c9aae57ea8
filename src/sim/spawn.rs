//! Asteroid population maintenance
//!
//! Asteroids enter from just outside a random playfield edge, drift toward
//! the interior, and are dropped once they are more than `ASTEROID_MARGIN`
//! beyond the edge. While the live count is under the world's target, one
//! replacement is spawned per frame.

use glam::Vec2;
use rand::Rng;

use super::state::{Asteroid, World};
use crate::consts::*;
use crate::error::{SimError, SimResult};

/// Advance, cull, and top up the asteroid population
pub fn maintain_asteroids(world: &mut World) -> SimResult<()> {
    for asteroid in &mut world.asteroids {
        asteroid.pos += asteroid.vel;
        asteroid.rot += asteroid.spin;
    }

    let before = world.asteroids.len();
    world.asteroids.retain(|a| within_margin(a.pos));
    let culled = before - world.asteroids.len();
    if culled > 0 {
        log::trace!("culled {} asteroid(s) at t={:.3}", culled, world.now);
    }

    if world.asteroids.len() < world.asteroid_target {
        let asteroid = spawn_asteroid(&mut world.rng);
        world
            .asteroids
            .try_reserve(1)
            .map_err(SimError::allocation("asteroid"))?;
        world.asteroids.push(asteroid);
        log::debug!(
            "asteroid spawned at ({:.0}, {:.0}), {} alive",
            asteroid.pos.x,
            asteroid.pos.y,
            world.asteroids.len()
        );
    }

    Ok(())
}

/// True while a position is inside the playfield grown by the spawn margin
fn within_margin(pos: Vec2) -> bool {
    (-ASTEROID_MARGIN..=PLAYFIELD_WIDTH + ASTEROID_MARGIN).contains(&pos.x)
        && (-ASTEROID_MARGIN..=PLAYFIELD_HEIGHT + ASTEROID_MARGIN).contains(&pos.y)
}

/// Roll a new asteroid on a random edge, aimed into the inner playfield
fn spawn_asteroid(rng: &mut impl Rng) -> Asteroid {
    let offset = ASTEROID_MARGIN / 2.0;
    let pos = match rng.random_range(0..4u8) {
        0 => Vec2::new(rng.random_range(0.0..PLAYFIELD_WIDTH), -offset),
        1 => Vec2::new(PLAYFIELD_WIDTH + offset, rng.random_range(0.0..PLAYFIELD_HEIGHT)),
        2 => Vec2::new(rng.random_range(0.0..PLAYFIELD_WIDTH), PLAYFIELD_HEIGHT + offset),
        _ => Vec2::new(-offset, rng.random_range(0.0..PLAYFIELD_HEIGHT)),
    };

    // Aim somewhere in the middle half so every asteroid crosses the screen
    let target = Vec2::new(
        rng.random_range(PLAYFIELD_WIDTH * 0.25..PLAYFIELD_WIDTH * 0.75),
        rng.random_range(PLAYFIELD_HEIGHT * 0.25..PLAYFIELD_HEIGHT * 0.75),
    );
    let speed = rng.random_range(ASTEROID_MIN_SPEED..=ASTEROID_MAX_SPEED);

    Asteroid {
        pos,
        vel: (target - pos).normalize_or_zero() * speed,
        rot: rng.random_range(0.0..std::f32::consts::TAU),
        spin: rng.random_range(-ASTEROID_MAX_SPIN..=ASTEROID_MAX_SPIN),
    }
}
