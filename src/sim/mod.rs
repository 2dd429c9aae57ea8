//! Frame-stepped simulation module
//!
//! All gameplay logic lives here:
//! - One `tick` per display frame
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies beyond input sampling

pub mod spawn;
pub mod state;
pub mod tick;

pub use spawn::maintain_asteroids;
pub use state::{Asteroid, Bullet, Ship, World};
pub use tick::{TickInput, tick};
