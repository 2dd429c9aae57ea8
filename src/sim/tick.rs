//! Per-frame simulation step
//!
//! Ship speed and heading are driven directly by held input each frame
//! (no inertia). Bullets fly at constant velocity and are culled once they
//! leave the playfield.

use super::spawn::maintain_asteroids;
use super::state::{Bullet, World};
use crate::consts::*;
use crate::error::{SimError, SimResult};
use crate::platform::{Key, MouseButton, Platform};
use crate::{heading, in_playfield};

/// Level-triggered input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub forward: bool,
    pub back: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub fire: bool,
}

impl TickInput {
    /// Sample the held keys and buttons of a platform through the default bindings
    pub fn poll<P: Platform + ?Sized>(platform: &P) -> Self {
        let any = |keys: &[Key]| keys.iter().any(|&k| platform.is_key_down(k));
        Self {
            forward: any(&[Key::W, Key::Up]),
            back: any(&[Key::S, Key::Down]),
            turn_left: any(&[Key::A, Key::Left]),
            turn_right: any(&[Key::D, Key::Right]),
            fire: any(&[Key::Space]) || platform.is_mouse_button_down(MouseButton::Left),
        }
    }
}

/// Advance the world by one frame
///
/// `dt` only feeds the clock; movement is per frame.
pub fn tick(world: &mut World, input: &TickInput, dt: f32) -> SimResult<()> {
    let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
    world.delta = dt;
    world.now += f64::from(dt);

    update_ship(world, input);

    if input.fire && world.can_fire() {
        fire_bullet(world)?;
    }

    for bullet in &mut world.bullets {
        bullet.pos += bullet.vel;
    }
    let before = world.bullets.len();
    world.bullets.retain(|b| in_playfield(b.pos));
    let culled = before - world.bullets.len();
    if culled > 0 {
        log::trace!("culled {} bullet(s) at t={:.3}", culled, world.now);
    }

    maintain_asteroids(world)
}

/// Set speed and heading from held input, then move
///
/// Forward wins when forward and back are held together.
fn update_ship(world: &mut World, input: &TickInput) {
    let ship = &mut world.ship;

    ship.vel = if input.forward {
        SHIP_MOVE_SPEED
    } else if input.back {
        -SHIP_MOVE_SPEED
    } else {
        0.0
    };

    if input.turn_left {
        ship.rot -= SHIP_TURN_SPEED;
    }
    if input.turn_right {
        ship.rot += SHIP_TURN_SPEED;
    }

    if ship.vel != 0.0 {
        ship.pos += heading(ship.rot) * ship.vel;
        ship.pos.x = ship.pos.x.rem_euclid(PLAYFIELD_WIDTH);
        ship.pos.y = ship.pos.y.rem_euclid(PLAYFIELD_HEIGHT);
    }
}

fn fire_bullet(world: &mut World) -> SimResult<()> {
    let dir = heading(world.ship.rot);
    let bullet = Bullet {
        pos: world.ship.pos + dir * BULLET_STANDOFF,
        vel: dir * BULLET_SPEED,
    };
    world
        .bullets
        .try_reserve(1)
        .map_err(SimError::allocation("bullet"))?;
    world.bullets.push(bullet);
    world.last_bullet = Some(world.now);
    log::debug!("bullet fired at t={:.3}, {} in flight", world.now, world.bullets.len());
    Ok(())
}
